//! Instrumented in-place sorting algorithms.
//!
//! Each algorithm is the textbook variant with [`SortProbe`] calls placed
//! where an animation would pause or redraw. Running one through a
//! [`TraceRecorder`] yields the frames the sorting page plays back.
//!
//! ```text
//! values ──→ Algorithm::run(probe) ──→ TraceRecorder ──→ SortTrace { frames }
//! ```

mod divide;
mod heap;
mod probe;
mod sampler;
mod simple;
mod trace;

pub use probe::{ComparisonCounter, MergeGroup, NullProbe, SortProbe};
pub use sampler::{ArraySampler, MAX_VALUE, MIN_VALUE};
pub use trace::{Frame, SortTrace, TraceRecorder};

use serde::Serialize;
use std::fmt;

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 18;
pub const DEFAULT_LENGTH: usize = 8;

pub const MIN_DELAY_MS: u64 = 50;
pub const MAX_DELAY_MS: u64 = 2000;
pub const DELAY_STEP_MS: u64 = 50;
pub const DEFAULT_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
}

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
        }
    }

    /// Sort `values` ascending, reporting every step to `probe`.
    pub fn run<T, P>(self, values: &mut [T], probe: &mut P)
    where
        T: Ord + Copy,
        P: SortProbe<T>,
    {
        match self {
            Algorithm::Bubble => simple::bubble(values, probe),
            Algorithm::Selection => simple::selection(values, probe),
            Algorithm::Insertion => simple::insertion(values, probe),
            Algorithm::Merge => divide::merge(values, probe),
            Algorithm::Quick => divide::quick(values, probe),
            Algorithm::Heap => heap::heap(values, probe),
            Algorithm::Shell => simple::shell(values, probe),
        }
    }

    pub fn sort<T: Ord + Copy>(self, values: &mut [T]) {
        self.run(values, &mut NullProbe);
    }

    /// Sort a copy of `input` and record every animation frame.
    pub fn trace<T: Ord + Copy>(self, input: &[T]) -> SortTrace<T> {
        let mut values = input.to_vec();
        let mut recorder = TraceRecorder::new(input);
        self.run(&mut values, &mut recorder);
        recorder.finish(self, input.to_vec(), &values)
    }

    pub fn comparisons<T: Ord + Copy>(self, input: &[T]) -> usize {
        let mut values = input.to_vec();
        let mut counter = ComparisonCounter::default();
        self.run(&mut values, &mut counter);
        counter.comparisons
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

pub fn clamp_delay_ms(delay_ms: u64) -> u64 {
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}
