//! Runtime-selectable sorting strategies.
//!
//! Four algorithms (selection, heap, quick, merge) behind a common
//! out-of-place interface, plus a [`Sorter`] context that holds the currently
//! selected [`Strategy`] together with the last sorted buffer and delegates
//! sorting to it. The strategy can be swapped between calls without touching
//! the buffer.
//!
//! Note that the heap strategy only builds a binary min-heap, see
//! [`strategies::heap`] for the exact contract.

pub mod patterns;
pub mod sorter;
pub mod strategies;
pub mod tests;

pub use sorter::{Sorter, SorterError};
pub use strategies::Strategy;

// Used by the test instantiation macro.
#[doc(hidden)]
pub use paste;
