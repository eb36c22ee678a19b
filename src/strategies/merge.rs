use std::cmp::Ordering;

/// Sorts `data` out-of-place with a top-down merge sort.
///
/// Splits at `len / 2`, recursively sorts both halves and merges them.
/// *O*(*n* \* log(*n*)) comparisons, allocates per merge level.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    merge_sort(data, &mut |a, b| a.lt(b))
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
    merge_sort(data, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<T, F>(data: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return data.to_vec();
    }

    let middle = data.len() / 2;
    let left = merge_sort(&data[..middle], is_less);
    let right = merge_sort(&data[middle..], is_less);

    merge(&left, &right, is_less)
}

fn merge<T, F>(left: &[T], right: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut index_left = 0;
    let mut index_right = 0;

    // Strict less, equal heads come from the right half.
    while index_left < left.len() && index_right < right.len() {
        if is_less(&left[index_left], &right[index_right]) {
            result.push(left[index_left].clone());
            index_left += 1;
        } else {
            result.push(right[index_right].clone());
            index_right += 1;
        }
    }

    result.extend_from_slice(&left[index_left..]);
    result.extend_from_slice(&right[index_right..]);

    result
}
