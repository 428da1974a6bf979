//! Error types for collection operations.
//!
//! Only contract violations by the caller are reported here. Queries that
//! can legitimately find nothing (`find`, `maximum`, `minimum`) answer with
//! `None` instead, and failures raised by caller-supplied callbacks travel
//! through the `try_` operations untouched.

/// Represents an invalid use of a collection operation.
///
/// # Examples
///
/// ```rust
/// use herd::error::OperationError;
///
/// let error = OperationError::InvalidPartitionSize { size: 0 };
/// assert_eq!(
///     format!("{}", error),
///     "partition: size must be greater than 0, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// `partition` was asked for chunks of size zero.
    InvalidPartitionSize {
        /// The rejected chunk size.
        size: usize,
    },
    /// A typed numeric extremum (`imax`, `imin`, `fmax`, `fmin`) was asked of
    /// a container with no elements.
    EmptyContainer {
        /// The name of the operation that was called.
        operation: &'static str,
    },
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPartitionSize { size } => write!(
                formatter,
                "partition: size must be greater than 0, got {size}"
            ),
            Self::EmptyContainer { operation } => write!(
                formatter,
                "{operation}: container is empty, no extremum exists"
            ),
        }
    }
}

impl std::error::Error for OperationError {}

static_assertions::assert_impl_all!(OperationError: std::error::Error, Send, Sync, Copy);
