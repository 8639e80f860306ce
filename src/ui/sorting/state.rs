use std::time::{Duration, Instant};

use crate::sorting::{Algorithm, Frame, MergeGroup, DEFAULT_DELAY_MS, DEFAULT_LENGTH};
use crate::ui::mvi::UiState;
use crate::ui::toast::{Toast, ToastTimings};

/// A run in progress: the recorded frames and where playback is.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub algorithm: Algorithm,
    pub frames: Vec<Frame<u32>>,
    /// Index of the next frame to show.
    pub cursor: usize,
    pub comparisons: usize,
    /// Delay fixed when the run started.
    pub delay: Duration,
    pub next_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortingState {
    pub values: Vec<u32>,
    pub delay_ms: u64,
    /// Menu cursor over [`Algorithm::ALL`].
    pub selected: usize,
    /// Last algorithm started, shown as "Algorithm: <name>".
    pub algorithm: Option<Algorithm>,
    pub comparing: Vec<usize>,
    pub current_min: Option<usize>,
    pub merging: Vec<MergeGroup>,
    pub playback: Option<Playback>,
    pub toast: Option<Toast>,
    pub timings: ToastTimings,
}

impl Default for SortingState {
    fn default() -> Self {
        Self {
            values: vec![1; DEFAULT_LENGTH],
            delay_ms: DEFAULT_DELAY_MS,
            selected: 0,
            algorithm: None,
            comparing: Vec::new(),
            current_min: None,
            merging: Vec::new(),
            playback: None,
            toast: None,
            timings: ToastTimings::default(),
        }
    }
}

impl UiState for SortingState {}

impl SortingState {
    pub fn new(values: Vec<u32>, delay_ms: u64, timings: ToastTimings) -> Self {
        Self {
            values,
            delay_ms,
            timings,
            ..Self::default()
        }
    }

    /// Controls are disabled while a run plays.
    pub fn is_sorting(&self) -> bool {
        self.playback.is_some()
    }

    pub fn length(&self) -> usize {
        self.values.len()
    }

    pub fn selected_algorithm(&self) -> Algorithm {
        Algorithm::ALL[self.selected % Algorithm::ALL.len()]
    }

    pub fn is_comparing(&self, index: usize) -> bool {
        self.comparing.contains(&index)
    }

    pub fn is_merging(&self, index: usize) -> bool {
        self.merging.iter().any(|group| group.contains(index))
    }

    pub(crate) fn show(&mut self, frame: Frame<u32>) {
        self.values = frame.values;
        self.comparing = frame.comparing;
        self.current_min = frame.current_min;
        self.merging = frame.merging;
    }
}
