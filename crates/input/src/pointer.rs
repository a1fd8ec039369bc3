//! Mouse mapping. Only the left button selects; any motion updates hover.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: u16, y: u16 },
    Moved { x: u16, y: u16 },
}

impl PointerEvent {
    pub fn position(self) -> (u16, u16) {
        match self {
            PointerEvent::Down { x, y } | PointerEvent::Moved { x, y } => (x, y),
        }
    }
}

pub fn map_mouse_event(event: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Moved { x, y }),
        _ => None,
    }
}
