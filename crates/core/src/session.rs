//! Game session module - the match-resolution state machine
//!
//! A session owns the board, the selection, every countdown and the score.
//! The host loop drives it with three kinds of calls:
//!
//! - pointer events ([`GameSession::on_pointer_down`], [`GameSession::on_pointer_move`])
//! - key-level actions ([`GameSession::apply_action`])
//! - exactly one [`GameSession::tick`] per frame
//!
//! Countdowns are tick counts, so the session is fully deterministic for a
//! given seed and input sequence. Only the elapsed-time bonus reads the clock.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::board::{Board, Layout};
use crate::clock::{Clock, SystemClock};
use crate::error::ConfigurationError;
use crate::rng::SimpleRng;
use crate::scoring::{self, WinBonus};
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::sound::{NullSound, SoundSink};
use crate::types::{
    Feedback, GameAction, LoopControl, Phase, SoundCue, CARD_COLORS, FEEDBACK_TICKS,
    RESOLVE_DELAY_TICKS,
};

pub struct GameSession {
    board: Board,
    palette_size: usize,
    rng: SimpleRng,
    sound: Box<dyn SoundSink>,
    clock: Box<dyn Clock>,
    /// Face-up cards awaiting resolution, in selection order.
    selection: ArrayVec<usize, 2>,
    pending_resolve_ticks: u32,
    feedback_ticks: u32,
    feedback: Option<Feedback>,
    matches_found: usize,
    attempts: u32,
    score: u32,
    start_ms: u64,
    /// Clock reading when the last pair was found; freezes elapsed time.
    finished_ms: Option<u64>,
    won: bool,
    win_bonus: Option<WinBonus>,
    pointer: Option<(u16, u16)>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameSession {
    /// Create a session with a freshly dealt `grid_size x grid_size` board.
    ///
    /// Uses the full card palette, the nominal layout, no sound and the
    /// system clock.
    pub fn new(grid_size: u8, seed: u32) -> Result<Self, ConfigurationError> {
        Self::with_palette(grid_size, CARD_COLORS.len(), seed)
    }

    pub fn with_palette(
        grid_size: u8,
        palette_size: usize,
        seed: u32,
    ) -> Result<Self, ConfigurationError> {
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(grid_size, palette_size, Layout::nominal(), &mut rng)?;
        Ok(Self::assemble(board, palette_size, rng))
    }

    /// Start from an explicit board. Restarts deal new boards from `seed`.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let palette_size = board.total_pairs().max(CARD_COLORS.len());
        Self::assemble(board, palette_size, SimpleRng::new(seed))
    }

    fn assemble(board: Board, palette_size: usize, rng: SimpleRng) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock::new());
        let start_ms = clock.now_ms();
        Self {
            board,
            palette_size,
            rng,
            sound: Box::new(NullSound),
            clock,
            selection: ArrayVec::new(),
            pending_resolve_ticks: 0,
            feedback_ticks: 0,
            feedback: None,
            matches_found: 0,
            attempts: 0,
            score: 0,
            start_ms,
            finished_ms: None,
            won: false,
            win_bonus: None,
            pointer: None,
            episode_id: 0,
        }
    }

    pub fn with_sound(mut self, sound: Box<dyn SoundSink>) -> Self {
        self.sound = sound;
        self
    }

    /// Replace the clock. The game timer restarts from the new clock's "now".
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.start_ms = clock.now_ms();
        self.finished_ms = None;
        self.clock = clock;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.board.relayout(layout);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn pending_resolve_ticks(&self) -> u32 {
        self.pending_resolve_ticks
    }

    pub fn feedback_ticks(&self) -> u32 {
        self.feedback_ticks
    }

    /// Outcome of the last resolution, kept after its message fades.
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn last_match_succeeded(&self) -> bool {
        self.feedback == Some(Feedback::Success)
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn win_bonus(&self) -> Option<WinBonus> {
        self.win_bonus
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.pending_resolve_ticks > 0 {
            Phase::Resolving
        } else {
            Phase::Idle
        }
    }

    /// Whole seconds since the game started, frozen once the board is cleared.
    pub fn elapsed_secs(&self) -> u64 {
        let now = self.finished_ms.unwrap_or_else(|| self.clock.now_ms());
        now.saturating_sub(self.start_ms) / 1000
    }

    pub fn progress_pct(&self) -> u32 {
        scoring::progress_pct(self.matches_found, self.total_pairs())
    }

    pub fn efficiency_pct(&self) -> u32 {
        scoring::efficiency_pct(self.total_pairs(), self.attempts)
    }

    /// Whether the next tick can change what is on screen.
    pub fn is_animating(&self) -> bool {
        self.pending_resolve_ticks > 0
            || self.feedback_ticks > 0
            || self.board.cards().iter().any(|c| c.is_animating())
    }

    /// Select the card at `index`.
    ///
    /// Returns `false` (and changes nothing) when the selection is not
    /// accepted: out-of-range index, card already face-up or matched, two
    /// cards already pending, or the game is resolving or won.
    pub fn select(&mut self, index: usize) -> bool {
        if self.phase() != Phase::Idle || self.selection.is_full() {
            return false;
        }
        let Some(card) = self.board.card_mut(index) else {
            return false;
        };
        if !card.is_eligible_for_flip() {
            return false;
        }

        card.toggle_flip();
        self.selection.push(index);
        self.play(SoundCue::Flip);

        if self.selection.len() == 2 {
            self.attempts += 1;
            self.pending_resolve_ticks = RESOLVE_DELAY_TICKS;
            debug!(
                first = self.selection[0],
                second = self.selection[1],
                attempts = self.attempts,
                "pair selected, resolving"
            );
        }

        true
    }

    /// Pointer press at a position in layout units.
    pub fn on_pointer_down(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        match self.board.card_at(x, y) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Pointer motion; hover is recomputed on the next tick.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        self.pointer = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn apply_action(&mut self, action: GameAction) -> LoopControl {
        match action {
            GameAction::Restart => {
                self.restart();
                LoopControl::Continue
            }
            GameAction::Quit => LoopControl::Quit,
        }
    }

    /// Re-center the board in a new viewport.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        let layout = self.board.layout();
        if layout.viewport_w != width || layout.viewport_h != height {
            self.board.relayout(layout.with_viewport(width, height));
        }
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.board.layout() != layout {
            self.board.relayout(layout);
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.pending_resolve_ticks > 0 {
            self.pending_resolve_ticks -= 1;
            if self.pending_resolve_ticks == 0 {
                self.resolve();
            }
        }

        if self.feedback_ticks > 0 {
            self.feedback_ticks -= 1;
        }

        let pointer = self.pointer;
        for card in self.board.cards_mut() {
            card.is_hovered = card.is_eligible_for_flip()
                && pointer.is_some_and(|(x, y)| card.rect.contains(x, y));
            card.advance_animation();
        }
    }

    /// Deal a new board and zero every counter. Valid in any state.
    pub fn restart(&mut self) {
        let board = match Board::generate(
            self.board.grid_size(),
            self.palette_size,
            self.board.layout(),
            &mut self.rng,
        ) {
            Ok(board) => board,
            Err(err) => {
                // The same dimensions were dealt once already.
                warn!(%err, "restart could not deal a new board");
                return;
            }
        };

        self.board = board;
        self.selection.clear();
        self.pending_resolve_ticks = 0;
        self.feedback_ticks = 0;
        self.feedback = None;
        self.matches_found = 0;
        self.attempts = 0;
        self.score = 0;
        self.start_ms = self.clock.now_ms();
        self.finished_ms = None;
        self.won = false;
        self.win_bonus = None;
        self.episode_id = self.episode_id.wrapping_add(1);

        info!(episode = self.episode_id, "game restarted");
    }

    fn resolve(&mut self) {
        let picked: ArrayVec<usize, 2> = self.selection.drain(..).collect();
        let [first, second] = match picked.as_slice() {
            &[a, b] => [a, b],
            _ => return,
        };

        let pair_of = |i: usize| self.board.card(i).map(|c| c.pair_id());
        let is_match = pair_of(first).is_some() && pair_of(first) == pair_of(second);

        if is_match {
            for i in [first, second] {
                if let Some(card) = self.board.card_mut(i) {
                    card.mark_matched();
                }
            }
            self.matches_found += 1;
            self.score += scoring::match_reward();
            self.set_feedback(Feedback::Success);
            self.play(SoundCue::Match);
            debug!(
                first,
                second,
                matches = self.matches_found,
                score = self.score,
                "pair matched"
            );

            if self.matches_found == self.total_pairs() {
                self.finish();
            }
        } else {
            for i in [first, second] {
                if let Some(card) = self.board.card_mut(i) {
                    card.toggle_flip();
                }
            }
            self.set_feedback(Feedback::Failure);
            self.play(SoundCue::NoMatch);
            debug!(first, second, "no match");
        }
    }

    fn finish(&mut self) {
        self.finished_ms = Some(self.clock.now_ms());
        let elapsed = self.elapsed_secs();
        let bonus = scoring::win_bonus(elapsed, self.total_pairs(), self.attempts);
        self.score += bonus.total;
        self.win_bonus = Some(bonus);
        self.won = true;
        self.play(SoundCue::Win);
        info!(
            score = self.score,
            attempts = self.attempts,
            elapsed_secs = elapsed,
            time_bonus = bonus.time,
            efficiency_bonus = bonus.efficiency,
            "board cleared"
        );
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
        self.feedback_ticks = FEEDBACK_TICKS;
    }

    fn play(&mut self, cue: SoundCue) {
        if let Err(err) = self.sound.play(cue) {
            debug!(cue = cue.as_str(), %err, "sound cue dropped");
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_size = self.board.grid_size();
        out.cards.clear();
        out.cards
            .extend(self.board.cards().iter().map(CardSnapshot::from));
        out.phase = self.phase();
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.attempts = self.attempts;
        out.matches_found = self.matches_found;
        out.total_pairs = self.total_pairs();
        out.elapsed_secs = self.elapsed_secs();
        out.won = self.won;
        out.feedback = self.feedback;
        out.feedback_ticks = self.feedback_ticks;
        out.progress_pct = self.progress_pct();
        out.efficiency_pct = self.efficiency_pct();
        out.win_bonus = self.win_bonus;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase())
            .field("grid_size", &self.board.grid_size())
            .field("selection", &self.selection)
            .field("pending_resolve_ticks", &self.pending_resolve_ticks)
            .field("feedback_ticks", &self.feedback_ticks)
            .field("matches_found", &self.matches_found)
            .field("attempts", &self.attempts)
            .field("score", &self.score)
            .field("episode_id", &self.episode_id)
            .finish_non_exhaustive()
    }
}
