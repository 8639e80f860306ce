use super::probe::SortProbe;

/// Max-heap sort: build the heap bottom-up, then repeatedly move the root
/// behind the shrinking heap.
pub fn heap<T: Ord + Copy, P: SortProbe<T>>(values: &mut [T], probe: &mut P) {
    let n = values.len();
    for i in (0..n / 2).rev() {
        sift_down(values, n, i, probe);
    }
    for end in (1..n).rev() {
        values.swap(0, end);
        probe.publish(values);
        sift_down(values, end, 0, probe);
    }
}

fn sift_down<T: Ord + Copy, P: SortProbe<T>>(
    values: &mut [T],
    len: usize,
    root: usize,
    probe: &mut P,
) {
    let mut root = root;
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < len {
                probe.highlight(&[largest, child]);
                probe.pause();

                probe.compare(child, largest);
                if values[child] > values[largest] {
                    largest = child;
                }
            }
        }
        if largest == root {
            return;
        }
        values.swap(root, largest);
        probe.publish(values);
        root = largest;
    }
}
