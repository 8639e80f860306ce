//! Divide-and-conquer sorts: top-down merge sort and Lomuto quick sort.

use super::probe::{MergeGroup, SortProbe};

pub fn merge<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    if values.len() > 1 {
        let end = values.len() - 1;
        merge_range(values, 0, end, probe);
    }
}

fn merge_range<T: Ord + Copy, P: SortProbe<T>>(
    values: &mut [T],
    start: usize,
    end: usize,
    probe: &mut P,
) {
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    merge_range(values, start, mid, probe);
    merge_range(values, mid + 1, end, probe);
    merge_halves(values, start, mid, end, probe);
}

fn merge_halves<T: Ord + Copy, P: SortProbe<T>>(
    values: &mut [T],
    start: usize,
    mid: usize,
    end: usize,
    probe: &mut P,
) {
    let left = values[start..=mid].to_vec();
    let right = values[mid + 1..=end].to_vec();

    probe.merge_groups(&[MergeGroup::new(start, mid), MergeGroup::new(mid + 1, end)]);
    probe.pause();

    let (mut i, mut j, mut k) = (0, 0, start);
    while i < left.len() && j < right.len() {
        probe.highlight(&[start + i, mid + 1 + j]);
        probe.pause();

        probe.compare(start + i, mid + 1 + j);
        if left[i] <= right[j] {
            values[k] = left[i];
            i += 1;
        } else {
            values[k] = right[j];
            j += 1;
        }
        probe.publish(values);
        k += 1;
    }

    for &rest in left[i..].iter().chain(&right[j..]) {
        values[k] = rest;
        probe.publish(values);
        k += 1;
        probe.pause();
    }
}

pub fn quick<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    if values.len() > 1 {
        let high = values.len() - 1;
        quick_range(values, 0, high, probe);
    }
}

fn quick_range<T: Ord + Copy, P: SortProbe<T>>(
    values: &mut [T],
    low: usize,
    high: usize,
    probe: &mut P,
) {
    if low >= high {
        return;
    }
    let pivot = partition(values, low, high, probe);
    if pivot > low {
        quick_range(values, low, pivot - 1, probe);
    }
    quick_range(values, pivot + 1, high, probe);
}

/// Partition around the last element; returns the pivot's final index.
fn partition<T: Ord + Copy, P: SortProbe<T>>(
    values: &mut [T],
    low: usize,
    high: usize,
    probe: &mut P,
) -> usize {
    let pivot = values[high];
    let mut store = low;

    for j in low..high {
        probe.highlight(&[store, j]);
        probe.pause();

        probe.compare(j, high);
        if values[j] < pivot {
            values.swap(store, j);
            store += 1;
            probe.publish(values);
        }
    }

    values.swap(store, high);
    probe.publish(values);
    store
}
