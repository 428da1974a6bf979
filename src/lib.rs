//! # herd
//!
//! Non-mutating, Clojure-style higher-order operations over sequences and sets.
//!
//! ## Overview
//!
//! The standard library already offers iterator adapters, but most of them
//! either consume the container or require the caller to collect results by
//! hand. This crate layers a small set of ready-made operations on top of the
//! standard containers. None of them mutate the receiver; every call returns a
//! freshly materialized container or a scalar.
//!
//! - **Contracts**: [`OrderingContract`](contract::OrderingContract) and the
//!   callback traits (`Predicate`, `Transform`, `Combiner`, `KeyFn`)
//! - **Shared operations**: [`Foldable`](container::Foldable) (reduce, any,
//!   every, find, extrema) for both container kinds
//! - **Sequences**: [`SequenceOps`](sequence::SequenceOps) on `[T]`, `Vec<T>`
//!   and arrays (filter, map, sort, reverse, distinct, partition, group).
//!   Arrays have an inherent `map`, so slice them (`array[..]`) to get the
//!   sequence `map`
//! - **Sets**: [`SetOps`](set::SetOps) on `HashSet<T, S>` (filter, map)
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence operations (default)
//! - `set`: Set operations (default)
//! - `fxhash`: Use `rustc-hash` for maps built by the library
//! - `ahash`: Use `ahash` for maps built by the library
//! - `full`: Enable all container kinds
//!
//! ## Example
//!
//! ```rust
//! use herd::prelude::*;
//!
//! let numbers = vec![1, -1, -3, 4];
//! assert_eq!(numbers.filter(|n| *n > 0), vec![1, 4]);
//! assert_eq!(numbers.reduce(0, |sum, n| sum + n), 1);
//!
//! // The receiver is never touched
//! assert_eq!(numbers, vec![1, -1, -3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every trait and type needed to call the operations.
///
/// # Usage
///
/// ```rust
/// use herd::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::contract::*;
    pub use crate::error::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;
}

pub mod container;
pub mod contract;
pub mod error;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "set")]
pub mod set;
