//! Contracts that collection operations are parameterized over.
//!
//! - [`OrderingContract`]: How two elements compare (used by sorting and extrema)
//! - [`Predicate`]: A boolean test over one element
//! - [`Transform`]: Zero-or-one output per input element
//! - [`Combiner`]: One step of a left fold
//! - [`KeyFn`]: Derives the key used for partitioning and grouping
//!
//! The equality contract is Rust's own `Eq + Hash` pair, so it needs no trait
//! of its own here.
//!
//! # Examples
//!
//! ```rust
//! use herd::contract::{ByKey, Natural, OrderingContract};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Natural.reverse().compare(&1, &2), Ordering::Greater);
//!
//! let by_length = ByKey(|word: &&str| word.len());
//! assert_eq!(by_length.compare(&"bob", &"cat"), Ordering::Equal);
//! ```

mod function;
mod ordering;

pub use function::{Combiner, KeyFn, Predicate, Transform};
pub use ordering::{ByKey, Natural, OrderingContract, Reversed};
