//! Terminal bell as a sound backend.
//!
//! Only the rewarding cues ring; a BEL per flip would be noise.

use std::io::{self, Write};

use crate::core::sound::{SoundError, SoundSink};
use crate::types::SoundCue;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on [`SoundCue::Match`] and [`SoundCue::Win`].
#[derive(Debug)]
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::Match | SoundCue::Win)
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        if !Self::rings_for(cue) {
            return Ok(());
        }
        self.out.write_all(BEL)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_on_match_and_win_only() {
        let mut bell = TerminalBell::new(Vec::new());
        for cue in [SoundCue::Flip, SoundCue::NoMatch, SoundCue::Match, SoundCue::Win] {
            bell.play(cue).unwrap();
        }
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let mut bell = TerminalBell::new(Closed);
        assert!(bell.play(SoundCue::Flip).is_ok());
        assert!(matches!(bell.play(SoundCue::Match), Err(SoundError::Io(_))));
    }
}
