//! Shared assertions and the per-strategy test instantiation macro.
//!
//! Integration tests call [`instantiate_strategy_tests!`] once per totally
//! sorting strategy, the macro stamps out the full property suite against
//! that strategy module. The heap strategy is checked separately against the
//! heap-order invariant since it does not promise full sortedness.

use std::fmt::Debug;

/// Asserts every adjacent pair of `v` is in non-decreasing order.
pub fn check_is_sorted<T: Ord + Debug>(v: &[T]) {
    assert!(
        v.windows(2).all(|w| w[0] <= w[1]),
        "not sorted: {:?}",
        v
    );
}

/// Asserts `result` holds exactly the same multiset of values as `original`.
pub fn check_permutation_of<T: Ord + Clone + Debug>(original: &[T], result: &[T]) {
    let mut a = original.to_vec();
    let mut b = result.to_vec();
    a.sort();
    b.sort();
    assert_eq!(a, b, "result is not a permutation of the input");
}

/// Asserts `v` satisfies the binary min-heap invariant, the element at index
/// `i` is `<=` the elements at `2 * i + 1` and `2 * i + 2`.
pub fn check_heap_order<T: Ord + Debug>(v: &[T]) {
    for (i, parent) in v.iter().enumerate() {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < v.len() {
                assert!(
                    *parent <= v[child],
                    "heap order violated at parent {} child {}: {:?}",
                    i,
                    child,
                    v
                );
            }
        }
    }
}

/// Instantiates the property test suite for one totally sorting strategy
/// module, e.g. `instantiate_strategy_tests!(selection);`.
#[macro_export]
macro_rules! instantiate_strategy_tests {
    ($strategy:ident) => {
        $crate::paste::paste! {
            mod [<$strategy _strategy>] {
                use $crate::patterns;
                use $crate::strategies::$strategy;
                use $crate::tests::{check_is_sorted, check_permutation_of};

                #[test]
                fn empty() {
                    let v: Vec<i32> = vec![];
                    assert_eq!($strategy::sort(&v), Vec::<i32>::new());
                }

                #[test]
                fn single_element() {
                    assert_eq!($strategy::sort(&[7]), vec![7]);
                }

                #[test]
                fn mixed_sample() {
                    let v = [2, 5, 1, 3, 1, -2, 4];
                    assert_eq!($strategy::sort(&v), vec![-2, 1, 1, 2, 3, 4, 5]);
                    // Input is untouched, the result is a fresh sequence.
                    assert_eq!(v, [2, 5, 1, 3, 1, -2, 4]);
                }

                #[test]
                fn already_sorted() {
                    let v = patterns::ascending(128);
                    assert_eq!($strategy::sort(&v), v);
                }

                #[test]
                fn fully_reversed() {
                    let v = patterns::descending(128);
                    assert_eq!($strategy::sort(&v), patterns::ascending(128));
                }

                #[test]
                fn all_equal() {
                    let v = patterns::all_equal(64);
                    assert_eq!($strategy::sort(&v), v);
                }

                #[test]
                fn idempotent() {
                    let v = patterns::random(300);
                    let once = $strategy::sort(&v);
                    let twice = $strategy::sort(&once);
                    assert_eq!(once, twice);
                }

                #[test]
                fn random_full_range() {
                    for len in [0, 1, 2, 3, 8, 50, 500, 1_000] {
                        let v = patterns::random(len);
                        let result = $strategy::sort(&v);
                        check_is_sorted(&result);
                        check_permutation_of(&v, &result);
                    }
                }

                #[test]
                fn random_with_duplicates() {
                    let v = patterns::random_uniform(1_000, -20..20);
                    let result = $strategy::sort(&v);
                    check_is_sorted(&result);
                    check_permutation_of(&v, &result);
                }

                #[test]
                fn random_zipf_skew() {
                    let v = patterns::random_zipf(1_000, 1.0);
                    let result = $strategy::sort(&v);
                    check_is_sorted(&result);
                    check_permutation_of(&v, &result);
                }

                #[test]
                fn floats_by_partial_cmp() {
                    let v = [5.0f64, -1.5, 3.25, 0.0, 3.25, -10.0];
                    let result =
                        $strategy::sort_by(&v, |a, b| a.partial_cmp(b).unwrap());
                    assert_eq!(result, vec![-10.0, -1.5, 0.0, 3.25, 3.25, 5.0]);
                }

                #[test]
                fn strings_sort_too() {
                    let v = ["pear", "apple", "fig", "apple", "plum"];
                    let result = $strategy::sort(&v);
                    assert_eq!(result, vec!["apple", "apple", "fig", "pear", "plum"]);
                }
            }
        }
    };
}
