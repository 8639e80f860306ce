//! Quadratic sorts plus shell sort.

use super::probe::SortProbe;

pub fn bubble<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            probe.highlight(&[j, j + 1]);
            probe.pause();

            probe.compare(j, j + 1);
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                probe.publish(values);
            }
        }
    }
}

pub fn selection<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        probe.mark_min(Some(i));

        for j in i + 1..n {
            probe.highlight(&[min, j]);
            probe.pause();

            probe.compare(j, min);
            if values[j] < values[min] {
                min = j;
            }
        }

        if min != i {
            values.swap(i, min);
            probe.publish(values);
            probe.pause();
        }
        probe.mark_min(None);
    }
}

/// Insertion by adjacent swaps, so every published picture is a
/// permutation of the input.
pub fn insertion<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 {
            probe.compare(j - 1, j);
            if values[j - 1] <= values[j] {
                break;
            }
            probe.highlight(&[j - 1, j]);
            probe.pause();

            values.swap(j - 1, j);
            probe.publish(values);
            j -= 1;
        }
        probe.publish(values);
        probe.pause();
    }
}

/// Gapped insertion sort with the halving sequence n/2, n/4, .., 1.
pub fn shell<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    let n = values.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap {
                probe.highlight(&[j - gap, j]);
                probe.pause();

                probe.compare(j - gap, j);
                if values[j - gap] <= values[j] {
                    break;
                }
                values.swap(j - gap, j);
                probe.publish(values);
                j -= gap;
            }
        }
        gap /= 2;
    }
}
