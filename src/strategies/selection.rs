use std::cmp::Ordering;

/// Sorts `data` out-of-place by repeated minimum selection.
///
/// Each round scans the remaining elements for the minimum, appends it to the
/// result and removes the first occurrence of it from the remainder. *O*(*n*²)
/// comparisons and moves.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    selection_sort(data, &mut |a, b| a.lt(b))
}

/// Sorts `data` out-of-place with a comparator function.
///
/// The comparator must define a total ordering for the elements in the slice,
/// otherwise the resulting order is unspecified. This is the entry point for
/// element types that are only `PartialOrd`, e.g.
/// `sort_by(v, |a, b| a.partial_cmp(b).unwrap())` for a NaN-free `f64` slice.
pub fn sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(data, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn selection_sort<T, F>(data: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut rest = data.to_vec();
    let mut result = Vec::with_capacity(rest.len());

    while !rest.is_empty() {
        // Strict less keeps the scan at the first occurrence among equal
        // minima, so removal is stable with respect to value.
        let mut min_pos = 0;
        for i in 1..rest.len() {
            if is_less(&rest[i], &rest[min_pos]) {
                min_pos = i;
            }
        }

        result.push(rest.remove(min_pos));
    }

    result
}
