use std::cmp::Ordering;

/// Builds a binary min-heap from `data`, out-of-place.
///
/// The returned sequence satisfies the heap-order invariant, the element at
/// index `i` is less than or equal to the elements at `2 * i + 1` and
/// `2 * i + 2`. It is NOT guaranteed to be fully sorted: this strategy
/// heapifies and stops, it does not repeatedly extract the minimum. Callers
/// that need a totally ordered result should pick one of the other
/// strategies.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    heapify(data, &mut |a, b| a.lt(b))
}

/// Builds a binary min-heap from `data` with a comparator function.
///
/// Same heap-order-only contract as [`sort`]. The comparator must define a
/// total ordering for the elements in the slice.
pub fn sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    heapify(data, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn heapify<T, F>(data: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut heap = data.to_vec();

    // Sift down every non-leaf node, last parent first. Nodes at and past
    // len / 2 are leaves and already trivial heaps.
    for node in (0..heap.len() / 2).rev() {
        sift_down(&mut heap, node, is_less);
    }

    heap
}

fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }

        // Pick the smaller child to swap towards the root.
        let right = left + 1;
        let child = if right < len && is_less(&v[right], &v[left]) {
            right
        } else {
            left
        };

        if !is_less(&v[child], &v[node]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
