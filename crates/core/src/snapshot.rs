use crate::card::{Card, Rect};
use crate::scoring::WinBonus;
use crate::types::{Feedback, Phase};

/// Read-only view of one card for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSnapshot {
    pub row: u8,
    pub col: u8,
    pub rect: Rect,
    /// Pair id when face-up, `None` while hidden.
    pub face: Option<u8>,
    /// Whether the front should be drawn at this point of the flip.
    pub face_visible: bool,
    pub flip_progress: f32,
    pub hover_scale: f32,
    pub hovered: bool,
    pub matched: bool,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            row: card.row(),
            col: card.col(),
            rect: card.rect(),
            face: card.face(),
            face_visible: card.is_face_visible(),
            flip_progress: card.flip_progress(),
            hover_scale: card.hover_scale(),
            hovered: card.is_hovered(),
            matched: card.is_matched(),
        }
    }
}

/// Read-only view of a whole session for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid_size: u8,
    pub cards: Vec<CardSnapshot>,
    pub phase: Phase,
    pub episode_id: u32,
    pub score: u32,
    pub attempts: u32,
    pub matches_found: usize,
    pub total_pairs: usize,
    pub elapsed_secs: u64,
    pub won: bool,
    pub feedback: Option<Feedback>,
    pub feedback_ticks: u32,
    pub progress_pct: u32,
    pub efficiency_pct: u32,
    pub win_bonus: Option<WinBonus>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid_size = 0;
        self.cards.clear();
        self.phase = Phase::Idle;
        self.episode_id = 0;
        self.score = 0;
        self.attempts = 0;
        self.matches_found = 0;
        self.total_pairs = 0;
        self.elapsed_secs = 0;
        self.won = false;
        self.feedback = None;
        self.feedback_ticks = 0;
        self.progress_pct = 0;
        self.efficiency_pct = 0;
        self.win_bonus = None;
    }

    /// Whether selections are currently accepted.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Feedback message is visible only while its timer runs.
    pub fn active_feedback(&self) -> Option<Feedback> {
        if self.feedback_ticks > 0 {
            self.feedback
        } else {
            None
        }
    }

    /// FNV-1a hash of everything a renderer draws.
    ///
    /// Animation floats are quantized to percent so sub-visible drift does not
    /// count as a change.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        h.write_u64(self.grid_size as u64);
        h.write_u64(self.episode_id as u64);
        h.write_u64(self.score as u64);
        h.write_u64(self.attempts as u64);
        h.write_u64(self.matches_found as u64);
        h.write_u64(self.elapsed_secs);
        h.write_u64(self.won as u64);
        h.write_u64(self.feedback_ticks as u64);
        h.write_u64(match self.feedback {
            None => 0,
            Some(Feedback::Success) => 1,
            Some(Feedback::Failure) => 2,
        });
        for card in &self.cards {
            h.write_u64(card.face.map(|id| id as u64 + 1).unwrap_or(0));
            h.write_u64(card.matched as u64);
            h.write_u64(card.hovered as u64);
            h.write_u64((card.flip_progress * 100.0) as u64);
            h.write_u64((card.hover_scale * 100.0) as u64);
            h.write_u64(((card.rect.x as u64) << 16) | card.rect.y as u64);
        }
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_size: 0,
            cards: Vec::new(),
            phase: Phase::Idle,
            episode_id: 0,
            score: 0,
            attempts: 0,
            matches_found: 0,
            total_pairs: 0,
            elapsed_secs: 0,
            won: false,
            feedback: None,
            feedback_ticks: 0,
            progress_pct: 0,
            efficiency_pct: 0,
            win_bonus: None,
        }
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }

    fn write_u64(&mut self, v: u64) {
        for b in v.to_le_bytes() {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(0x00000100000001B3);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
