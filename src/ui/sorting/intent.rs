use std::time::Instant;

use crate::sorting::Algorithm;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SortingIntent {
    /// Replace the bars with freshly sampled values. The length of
    /// `values` becomes the new array length.
    Regenerate { values: Vec<u32> },
    /// Change the frame delay by `delta_ms`, clamped to the allowed range.
    AdjustDelay { delta_ms: i64 },
    SelectPrevious,
    SelectNext,
    /// Run the algorithm under the menu cursor.
    StartSelected { now: Instant },
    Start { algorithm: Algorithm, now: Instant },
    /// Advance playback and expire toasts.
    Tick { now: Instant },
}

impl Intent for SortingIntent {}
