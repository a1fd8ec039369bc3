//! Card module - one grid cell's identity plus its animation state.

use crate::easing::{ease_toward, step_toward};
use crate::types::{FLIP_SPEED, HOVER_DAMPING, HOVER_SCALE};

/// Axis-aligned rectangle in adapter units (pixels or terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the point lies inside (right and bottom edges exclusive).
    pub fn contains(&self, px: u16, py: u16) -> bool {
        let right = self.x as u32 + self.w as u32;
        let bottom = self.y as u32 + self.h as u32;
        px >= self.x && (px as u32) < right && py >= self.y && (py as u32) < bottom
    }
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub(crate) row: u8,
    pub(crate) col: u8,
    pub(crate) rect: Rect,
    pair_id: u8,
    is_flipped: bool,
    is_matched: bool,
    pub(crate) is_hovered: bool,
    flip_progress: f32,
    hover_scale: f32,
}

impl Card {
    /// Create a face-down card at the given grid position
    pub fn new(row: u8, col: u8, pair_id: u8) -> Self {
        Self {
            row,
            col,
            rect: Rect::default(),
            pair_id,
            is_flipped: false,
            is_matched: false,
            is_hovered: false,
            flip_progress: 0.0,
            hover_scale: 1.0,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pair_id(&self) -> u8 {
        self.pair_id
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn flip_progress(&self) -> f32 {
        self.flip_progress
    }

    pub fn hover_scale(&self) -> f32 {
        self.hover_scale
    }

    /// Turn the card over and restart the flip animation.
    ///
    /// Matched cards never turn back; the call is ignored for them.
    pub fn toggle_flip(&mut self) {
        if self.is_matched {
            return;
        }
        self.is_flipped = !self.is_flipped;
        self.flip_progress = 0.0;
    }

    /// Lock the card face-up for the rest of the game.
    pub(crate) fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
        self.is_hovered = false;
    }

    /// A card can be selected only while it is face-down and unmatched.
    pub fn is_eligible_for_flip(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Pair id when the card is face-up, `None` while hidden.
    pub fn face(&self) -> Option<u8> {
        if self.is_flipped || self.is_matched {
            Some(self.pair_id)
        } else {
            None
        }
    }

    /// Whether a renderer should draw the front right now.
    ///
    /// The first half of every flip shows the back shrinking away.
    pub fn is_face_visible(&self) -> bool {
        self.face().is_some() && self.flip_progress >= 0.5
    }

    pub fn is_animating(&self) -> bool {
        self.flip_progress < 1.0 || (self.hover_scale - self.hover_target()).abs() > 1e-3
    }

    fn hover_target(&self) -> f32 {
        if self.is_hovered && self.is_eligible_for_flip() {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Advance flip and hover animations by one tick.
    pub fn advance_animation(&mut self) {
        self.flip_progress = step_toward(self.flip_progress, FLIP_SPEED, 1.0);
        self.hover_scale = ease_toward(self.hover_scale, self.hover_target(), HOVER_DAMPING);
    }
}
