//! Container adapters and the operations shared by every container kind.
//!
//! - [`Container`]: Adapts a standard container so operations can walk its elements
//! - [`Foldable`]: Reduce, membership tests and extrema, for any [`Container`]
//! - [`Integral`], [`Floating`]: Element types accepted by the typed numeric extrema
//!
//! # Examples
//!
//! ```rust
//! use herd::container::Foldable;
//! use std::collections::HashSet;
//!
//! let sequence = vec![1, -1, 2, 4];
//! let set: HashSet<i32> = sequence.iter().copied().collect();
//!
//! // The same surface works on both container kinds
//! assert!(sequence.any(|n| *n < 0));
//! assert!(set.any(|n| *n < 0));
//! assert_eq!(sequence.maximum(), Some(&4));
//! assert_eq!(set.maximum(), Some(&4));
//! ```

// =============================================================================
// Build Hasher Type Alias
// =============================================================================

/// Hasher used for maps and sets the library builds on its own behalf.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`.
/// Otherwise, when the `ahash` feature is enabled, this is
/// `ahash::RandomState`. With neither feature, it is the standard library's
/// `RandomState`.
///
/// Sets passed in by the caller keep their own hasher.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Hasher used for maps and sets the library builds on its own behalf.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hasher used for maps and sets the library builds on its own behalf.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

mod adapter;
mod foldable;
mod numeric;
pub(crate) mod pipeline;

pub use adapter::Container;
pub use foldable::Foldable;
pub use numeric::{Floating, Integral};

// =============================================================================
// Tests
// =============================================================================
