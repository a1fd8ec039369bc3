//! Sound cue delivery.
//!
//! The session calls [`SoundSink::play`] unconditionally for every cue. Sinks
//! may fail; the session logs the failure and carries on.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::types::SoundCue;

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("audio backend unavailable")]
    Unavailable,

    #[error("audio I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can turn a cue into sound.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError>;
}

/// Sink used when no audio backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _cue: SoundCue) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Records every cue into a shared log. Cloned handles see the same log.
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    cues: Rc<RefCell<Vec<SoundCue>>>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, oldest first.
    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.borrow().clone()
    }

    pub fn take(&self) -> Vec<SoundCue> {
        std::mem::take(&mut *self.cues.borrow_mut())
    }
}

impl SoundSink for CueLog {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        self.cues.borrow_mut().push(cue);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sound_accepts_everything() {
        let mut sink = NullSound;
        for cue in [SoundCue::Flip, SoundCue::Match, SoundCue::NoMatch, SoundCue::Win] {
            assert!(sink.play(cue).is_ok());
        }
    }

    #[test]
    fn cue_log_shares_entries_between_clones() {
        let log = CueLog::new();
        let mut sink = log.clone();
        sink.play(SoundCue::Flip).unwrap();
        sink.play(SoundCue::Match).unwrap();
        assert_eq!(log.cues(), vec![SoundCue::Flip, SoundCue::Match]);
        assert_eq!(log.take().len(), 2);
        assert!(log.cues().is_empty());
    }
}
