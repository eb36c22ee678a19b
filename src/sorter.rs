//! The context object that owns the currently selected strategy.

use std::fmt;

use crate::strategies::Strategy;

/// Errors produced by [`Sorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SorterError {
    /// `sort` was called before any data was supplied, either at construction
    /// or through a previous non-empty `sort_with` call.
    #[error("no data to sort, supply a sequence or construct the sorter with one")]
    NoData,
}

/// Holds the active [`Strategy`] and the most recent data buffer, and
/// delegates sorting to the strategy.
///
/// The strategy can be replaced at any time between sort calls without
/// affecting the stored buffer. After every successful sort the buffer holds
/// the sorted permutation of that call's input, so repeated argument-less
/// [`sort`](Sorter::sort) calls return the same already-sorted sequence.
#[derive(Debug, Clone)]
pub struct Sorter<T> {
    strategy: Strategy,
    data: Option<Vec<T>>,
}

impl<T> Default for Sorter<T> {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            data: None,
        }
    }
}

impl<T: Ord + Clone> Sorter<T> {
    /// Creates a sorter with the given strategy and no data buffer.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            data: None,
        }
    }

    /// Creates a sorter with the given strategy and an initial data buffer.
    pub fn with_data(strategy: Strategy, data: Vec<T>) -> Self {
        Self {
            strategy,
            data: Some(data),
        }
    }

    /// The currently active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Replaces the active strategy. Only affects subsequent sort calls, the
    /// stored buffer is left as-is.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// The stored buffer, if any. Sorted if the last sort call succeeded.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Sorts the stored buffer with the active strategy.
    ///
    /// The result replaces the stored buffer and a copy of it is returned.
    /// Errors with [`SorterError::NoData`] when no buffer was ever supplied.
    pub fn sort(&mut self) -> Result<Vec<T>, SorterError> {
        let input = self.data.take().ok_or(SorterError::NoData)?;
        let result = self.strategy.apply(&input);
        self.data = Some(result.clone());
        Ok(result)
    }

    /// Sorts `data` with the active strategy, storing it as the new buffer.
    ///
    /// An empty `data` does not replace the stored buffer, the call falls
    /// through to [`sort`](Sorter::sort) on whatever is already stored and
    /// errors with [`SorterError::NoData`] when there is nothing.
    pub fn sort_with(&mut self, data: &[T]) -> Result<Vec<T>, SorterError> {
        if !data.is_empty() {
            self.data = Some(data.to_vec());
        }
        self.sort()
    }
}

impl<T: fmt::Debug> fmt::Display for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "Sorter -> strategy: {} data: {:?}", self.strategy, data),
            None => write!(f, "Sorter -> strategy: {} data: unset", self.strategy),
        }
    }
}
