use std::cmp::Ordering;

/// Sorts `data` out-of-place with a three-way partitioning quicksort.
///
/// The pivot is the element at `len / 2`. Elements equal to the pivot are
/// collected into the middle group and never recursed into, which keeps
/// inputs with many duplicates from degrading.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    quicksort(data, &mut |a, b| a.lt(b))
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
    quicksort(data, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn quicksort<T, F>(data: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return data.to_vec();
    }

    let pivot = data[data.len() / 2].clone();

    let mut lesser = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for elem in data {
        if is_less(elem, &pivot) {
            lesser.push(elem.clone());
        } else if is_less(&pivot, elem) {
            greater.push(elem.clone());
        } else {
            equal.push(elem.clone());
        }
    }

    let mut result = quicksort(&lesser, is_less);
    result.append(&mut equal);
    result.append(&mut quicksort(&greater, is_less));

    result
}
