use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum HanoiIntent {
    /// Move the peg cursor left (-1) or right (+1), wrapping.
    MoveCursor { delta: i8 },
    /// Pick up from, or drop onto, the peg under the cursor.
    Activate { now: Instant },
    /// Pick up from, or drop onto, a peg chosen directly.
    Select { peg: usize, now: Instant },
    /// Put a held disk back without moving it.
    CancelHold,
    SetDisks { disks: u8 },
    Reset,
    /// Update the timer and expire toasts.
    Tick { now: Instant },
}

impl Intent for HanoiIntent {}
