use serde::Serialize;

/// Inclusive index range of one half taking part in a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeGroup {
    pub start: usize,
    pub end: usize,
}

impl MergeGroup {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Observer the sorting algorithms report their progress to.
///
/// Every method defaults to a no-op, so a probe only implements what it
/// cares about. `pause` marks the points where an animation holds the
/// current picture on screen for one delay.
pub trait SortProbe<T> {
    /// One key comparison between the elements at `a` and `b`.
    fn compare(&mut self, _a: usize, _b: usize) {}

    /// Indices currently shown as being compared.
    fn highlight(&mut self, _indices: &[usize]) {}

    /// The array as it should be displayed from now on.
    fn publish(&mut self, _values: &[T]) {}

    /// Anchor of the current selection-sort pass.
    fn mark_min(&mut self, _index: Option<usize>) {}

    /// Halves of the merge in progress.
    fn merge_groups(&mut self, _groups: &[MergeGroup]) {}

    fn pause(&mut self) {}
}

/// Probe that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl<T> SortProbe<T> for NullProbe {}

/// Probe that only counts comparisons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCounter {
    pub comparisons: usize,
}

impl<T> SortProbe<T> for ComparisonCounter {
    fn compare(&mut self, _a: usize, _b: usize) {
        self.comparisons += 1;
    }
}
