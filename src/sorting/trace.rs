use serde::Serialize;

use super::probe::{MergeGroup, SortProbe};
use super::Algorithm;

/// What the sorting view shows during one animation pause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame<T> {
    pub values: Vec<T>,
    pub comparing: Vec<usize>,
    pub current_min: Option<usize>,
    pub merging: Vec<MergeGroup>,
}

/// Recorded run of one algorithm over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortTrace<T> {
    pub algorithm: Algorithm,
    pub input: Vec<T>,
    pub output: Vec<T>,
    pub comparisons: usize,
    pub writes: usize,
    pub frames: Vec<Frame<T>>,
}

impl<T> SortTrace<T> {
    pub fn last_frame(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }
}

/// Probe that keeps the current display state and snapshots it on every
/// pause.
#[derive(Debug, Clone)]
pub struct TraceRecorder<T> {
    current: Frame<T>,
    frames: Vec<Frame<T>>,
    comparisons: usize,
    writes: usize,
}

impl<T: Copy> TraceRecorder<T> {
    pub fn new(values: &[T]) -> Self {
        Self {
            current: Frame {
                values: values.to_vec(),
                comparing: Vec::new(),
                current_min: None,
                merging: Vec::new(),
            },
            frames: Vec::new(),
            comparisons: 0,
            writes: 0,
        }
    }

    /// Close the run with a frame that shows `output` and no highlights.
    pub fn finish(mut self, algorithm: Algorithm, input: Vec<T>, output: &[T]) -> SortTrace<T> {
        self.frames.push(Frame {
            values: output.to_vec(),
            comparing: Vec::new(),
            current_min: None,
            merging: Vec::new(),
        });
        SortTrace {
            algorithm,
            input,
            output: output.to_vec(),
            comparisons: self.comparisons,
            writes: self.writes,
            frames: self.frames,
        }
    }
}

impl<T: Copy> SortProbe<T> for TraceRecorder<T> {
    fn compare(&mut self, _a: usize, _b: usize) {
        self.comparisons += 1;
    }

    fn highlight(&mut self, indices: &[usize]) {
        self.current.comparing.clear();
        self.current.comparing.extend_from_slice(indices);
    }

    fn publish(&mut self, values: &[T]) {
        self.writes += 1;
        self.current.values.clear();
        self.current.values.extend_from_slice(values);
    }

    fn mark_min(&mut self, index: Option<usize>) {
        self.current.current_min = index;
    }

    fn merge_groups(&mut self, groups: &[MergeGroup]) {
        self.current.merging.clear();
        self.current.merging.extend_from_slice(groups);
    }

    fn pause(&mut self) {
        self.frames.push(self.current.clone());
    }
}
