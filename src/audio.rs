//! Audio cues.
//!
//! A terminal has no mixer, so cues ring the bell. Pages decide when a cue
//! plays; the app checks `sound.enabled` on every cue, so a config reload
//! can turn sound on or off mid-session.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark placed or a disk moved.
    Click,
    /// Input rejected.
    Alert,
    /// Round won or puzzle solved.
    Fanfare,
}

pub trait Speaker: Send {
    fn play(&mut self, cue: Cue);
}

/// Writes BEL to stdout for every cue.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Speaker for TerminalBell {
    fn play(&mut self, cue: Cue) {
        tracing::trace!(?cue, "bell");
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Cues collected in memory, for asserting what a page asked to play.
///
/// Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct Recorded {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl Recorded {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().clone()
    }
}

impl Speaker for Recorded {
    fn play(&mut self, cue: Cue) {
        self.cues.lock().push(cue);
    }
}
