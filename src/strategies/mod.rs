//! The sorting strategies and the runtime selector for them.
//!
//! Each algorithm lives in its own module and exposes the same surface:
//! `sort` for `Ord` element types and `sort_by` for a caller-supplied
//! comparison, e.g. `partial_cmp`-based comparators for float slices. Both
//! are out-of-place, the input slice is left untouched and a freshly
//! allocated `Vec` is returned.

use std::cmp::Ordering;

pub mod heap;
pub mod merge;
pub mod quick;
pub mod selection;

/// Selects which sorting algorithm a [`Sorter`](crate::Sorter) delegates to.
///
/// All variants are stateless, swapping the variant between calls is always
/// valid. `Heap` is the odd one out: it only establishes heap order, not full
/// sortedness, see [`heap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Selection,
    Heap,
    Quick,
    Merge,
}

impl Strategy {
    /// Diagnostic label for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Selection => "selection_sort",
            Strategy::Heap => "heap_sort",
            Strategy::Quick => "quick_sort",
            Strategy::Merge => "merge_sort",
        }
    }

    /// Runs the selected algorithm on `data`.
    pub fn apply<T: Ord + Clone>(&self, data: &[T]) -> Vec<T> {
        match self {
            Strategy::Selection => selection::sort(data),
            Strategy::Heap => heap::sort(data),
            Strategy::Quick => quick::sort(data),
            Strategy::Merge => merge::sort(data),
        }
    }

    /// Runs the selected algorithm on `data` with a comparator function.
    pub fn apply_by<T, F>(&self, data: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Strategy::Selection => selection::sort_by(data, compare),
            Strategy::Heap => heap::sort_by(data, compare),
            Strategy::Quick => quick::sort_by(data, compare),
            Strategy::Merge => merge::sort_by(data, compare),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
