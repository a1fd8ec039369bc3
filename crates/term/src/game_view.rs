//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! row 0        title
//! row 1        score / attempts / time / matches
//! row 2        progress bar + percentage
//! row 3        feedback message (fades out)
//! rows 5..h-2  card grid, centered in the remaining band
//! row h-2      "Click cards to flip them"
//! row h-1      restart / quit hint
//! ```

use crate::core::{CardSnapshot, GameSnapshot, Layout};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{pair_color, Feedback, FEEDBACK_TICKS};

/// Rows reserved above the grid.
pub const HEADER_ROWS: u16 = 5;
/// Rows reserved below the grid.
pub const FOOTER_ROWS: u16 = 2;

const BG: Rgb = Rgb::new(18, 22, 30);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(130, 135, 145);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const DARK_GRAY: Rgb = Rgb::new(97, 97, 97);
const CARD_BACK: Rgb = Rgb::new(58, 66, 84);
const BAR_EMPTY: Rgb = Rgb::new(60, 60, 60);
const BAR_FILL: Rgb = Rgb::new(74, 144, 226);
const BAR_DONE: Rgb = Rgb::new(129, 199, 132);
const SUCCESS: Rgb = Rgb::new(129, 199, 132);
const FAILURE: Rgb = Rgb::new(255, 87, 87);
const GOLD: Rgb = Rgb::new(255, 206, 84);

/// One glyph per pair so faces stay distinguishable without color.
const FACE_GLYPHS: [char; 8] = ['●', '■', '▲', '◆', '★', '♥', '♣', '♠'];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Card footprint in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGeometry {
    pub card_w: u16,
    pub card_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl CardGeometry {
    pub const fn new(card_w: u16, card_h: u16, gap_x: u16, gap_y: u16) -> Self {
        Self {
            card_w,
            card_h,
            gap_x,
            gap_y,
        }
    }
}

/// Candidate card sizes, largest first. Cells are roughly 1:2, so cards are
/// about twice as wide as they are tall.
const GEOMETRIES: [CardGeometry; 5] = [
    CardGeometry::new(12, 5, 2, 1),
    CardGeometry::new(10, 4, 2, 1),
    CardGeometry::new(8, 3, 2, 1),
    CardGeometry::new(6, 3, 1, 0),
    CardGeometry::new(4, 2, 1, 0),
];

/// A lightweight terminal renderer for the memory game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    /// Fixed card geometry; `None` picks the largest that fits.
    geometry: Option<CardGeometry>,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(mut self, geometry: CardGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Board layout in terminal cells for an `n x n` grid.
    ///
    /// Mouse coordinates arrive in the same units, so the session can hit
    /// test against this layout directly.
    pub fn layout_for(&self, grid_size: u8, viewport: Viewport) -> Layout {
        let band_h = viewport.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let geometry = self.geometry.unwrap_or_else(|| {
            GEOMETRIES
                .iter()
                .copied()
                .find(|g| {
                    let (w, h) = to_layout(*g, viewport, band_h).grid_extent(grid_size);
                    w <= viewport.width && h <= band_h
                })
                .unwrap_or(GEOMETRIES[GEOMETRIES.len() - 1])
        });
        to_layout(geometry, viewport, band_h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only resized when
    /// the terminal size changes. Card rects in the snapshot must come from
    /// [`GameView::layout_for`].
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BG).into_cell(' '));

        let w = viewport.width;
        let title = CellStyle::new(WHITE, BG).bold();
        fb.put_str_centered(0, w, 0, "Memory Puzzle", title);

        self.draw_hud(fb, snap, w);
        self.draw_progress(fb, snap, w);
        self.draw_feedback(fb, snap, w);

        for card in &snap.cards {
            self.draw_card(fb, card);
        }

        let hint = CellStyle::new(MUTED, BG);
        let h = viewport.height;
        if !snap.won {
            fb.put_str_centered(0, w, h.saturating_sub(2), "Click cards to flip them", hint);
        }
        fb.put_str_centered(0, w, h.saturating_sub(1), "Press R to restart · Esc to quit", hint);

        if snap.won {
            self.draw_win_overlay(fb, snap, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, width: u16) {
        let label = CellStyle::new(MUTED, BG);
        let value = CellStyle::new(WHITE, BG).bold();

        // "Score: 0  Attempts: 0  Time: 0s  Matches: 0/8"
        let digits = |n: u64| n.max(1).ilog10() as u16 + 1;
        let line_w = 7
            + digits(snap.score as u64)
            + 12
            + digits(snap.attempts as u64)
            + 8
            + digits(snap.elapsed_secs)
            + 1
            + 11
            + digits(snap.matches_found as u64)
            + 1
            + digits(snap.total_pairs as u64);

        let mut x = width.saturating_sub(line_w) / 2;
        x = fb.put_str(x, 1, "Score: ", label);
        x = fb.put_u32(x, 1, snap.score, value);
        x = fb.put_str(x, 1, "  Attempts: ", label);
        x = fb.put_u32(x, 1, snap.attempts, value);
        x = fb.put_str(x, 1, "  Time: ", label);
        x = fb.put_u32(x, 1, clamp_u32(snap.elapsed_secs), value);
        x = fb.put_str(x, 1, "s", value);
        x = fb.put_str(x, 1, "  Matches: ", label);
        x = fb.put_u32(x, 1, clamp_u32(snap.matches_found as u64), value);
        x = fb.put_str(x, 1, "/", value);
        fb.put_u32(x, 1, clamp_u32(snap.total_pairs as u64), value);
    }

    fn draw_progress(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, width: u16) {
        // "[" bar "] " + up to "100%"
        let bar_w = width.saturating_sub(4 + 8).min(48);
        if bar_w == 0 {
            return;
        }
        let start = width.saturating_sub(bar_w + 7) / 2;
        let frame = CellStyle::new(DARK_GRAY, BG);
        let done = snap.total_pairs > 0 && snap.matches_found == snap.total_pairs;
        let fill = CellStyle::new(if done { BAR_DONE } else { BAR_FILL }, BG);
        let empty = CellStyle::new(BAR_EMPTY, BG);

        let filled = (bar_w as u32 * snap.progress_pct.min(100) / 100) as u16;
        fb.put_char(start, 2, '[', frame);
        fb.fill_rect(start + 1, 2, filled, 1, '█', fill);
        fb.fill_rect(start + 1 + filled, 2, bar_w - filled, 1, '░', empty);
        let mut x = fb.put_str(start + 1 + bar_w, 2, "] ", frame);
        x = fb.put_u32(x, 2, snap.progress_pct, CellStyle::new(TEXT, BG));
        fb.put_char(x, 2, '%', CellStyle::new(TEXT, BG));
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, width: u16) {
        let Some(feedback) = snap.active_feedback() else {
            return;
        };
        let (text, color) = match feedback {
            Feedback::Success => ("* MATCH! *", SUCCESS),
            Feedback::Failure => ("x Try Again", FAILURE),
        };
        let alpha = snap.feedback_ticks as f32 / FEEDBACK_TICKS as f32;
        let style = CellStyle {
            fg: BG.mix(color, alpha),
            bg: BG,
            bold: alpha > 0.5,
            dim: false,
        };
        fb.put_str_centered(0, width, 3, text, style);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &CardSnapshot) {
        let rect = card.rect;
        if rect.w == 0 || rect.h == 0 {
            return;
        }

        // Flip squish: shrink to nothing at the midpoint, then grow back.
        let squish = (1.0 - 2.0 * card.flip_progress.clamp(0.0, 1.0)).abs();
        let draw_w = ((rect.w as f32 * squish).round() as u16).clamp(1, rect.w);
        let x = rect.x + (rect.w - draw_w) / 2;

        let face = card.face.filter(|_| card.face_visible);
        let fill_color = match face {
            Some(id) => Rgb::from(pair_color(id)),
            None if card.hovered => CARD_BACK.mix(WHITE, 0.15),
            None => CARD_BACK,
        };
        let fill = CellStyle::new(fill_color, fill_color);
        fb.fill_rect(x, rect.y, draw_w, rect.h, ' ', fill);

        if draw_w >= 3 && rect.h >= 2 {
            let border_fg = if card.matched || (card.hovered && card.hover_scale > 1.01) {
                WHITE
            } else {
                DARK_GRAY
            };
            let border = CellStyle {
                fg: border_fg,
                bg: fill_color,
                bold: card.matched,
                dim: false,
            };
            fb.draw_border(x, rect.y, draw_w, rect.h, border);
        }

        let mid_y = rect.y + rect.h / 2;
        let mid_x = x + draw_w / 2;
        match face {
            Some(id) => {
                let glyph = FACE_GLYPHS[id as usize % FACE_GLYPHS.len()];
                let style = CellStyle::new(WHITE, fill_color).bold();
                fb.put_char(mid_x, mid_y, glyph, style);
            }
            None if draw_w >= 3 => {
                fb.put_char(mid_x, mid_y, '?', CellStyle::new(MUTED, fill_color));
            }
            None => {}
        }
    }

    fn draw_win_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let panel_w = 32.min(viewport.width);
        let panel_h = 11.min(viewport.height);
        let px = viewport.width.saturating_sub(panel_w) / 2;
        let py = viewport.height.saturating_sub(panel_h) / 2;

        let panel_bg = Rgb::new(250, 250, 250);
        let body = CellStyle::new(Rgb::new(20, 20, 20), panel_bg);
        let heading = CellStyle::new(Rgb::new(200, 140, 0), panel_bg).bold();
        fb.fill_rect(px, py, panel_w, panel_h, ' ', body);
        fb.draw_border(px, py, panel_w, panel_h, CellStyle::new(GOLD, panel_bg).bold());

        let inner_x = px + 1;
        let inner_w = panel_w.saturating_sub(2);
        fb.put_str_centered(inner_x, inner_w, py + 1, "Congratulations!", heading);

        let rows: [(&str, u32, &str); 4] = [
            ("Final Score: ", snap.score, ""),
            ("Time: ", clamp_u32(snap.elapsed_secs), "s"),
            ("Attempts: ", snap.attempts, ""),
            ("Efficiency: ", snap.efficiency_pct, "%"),
        ];
        for (i, (label, value, suffix)) in rows.iter().enumerate() {
            let y = py + 3 + i as u16;
            let x = fb.put_str(inner_x + 3, y, label, body);
            let x = fb.put_u32(x, y, *value, body.bold());
            fb.put_str(x, y, suffix, body);
        }

        if let Some(bonus) = snap.win_bonus {
            let y = py + 7;
            let x = fb.put_str(inner_x + 3, y, "Bonus: +", body);
            fb.put_u32(x, y, bonus.total, body.bold());
        }

        fb.put_str_centered(
            inner_x,
            inner_w,
            py + panel_h.saturating_sub(2),
            "Press R to play again",
            CellStyle::new(Rgb::new(74, 144, 226), panel_bg).bold(),
        );
    }
}

fn to_layout(g: CardGeometry, viewport: Viewport, band_h: u16) -> Layout {
    Layout {
        card_w: g.card_w,
        card_h: g.card_h,
        gap_x: g.gap_x,
        gap_y: g.gap_y,
        viewport_w: viewport.width,
        viewport_h: band_h,
        offset_y: HEADER_ROWS,
    }
}

fn clamp_u32(v: u64) -> u32 {
    v.min(u32::MAX as u64) as u32
}
