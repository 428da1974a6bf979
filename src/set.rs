//! Set operations - non-mutating operations on `HashSet<T, S>`.
//!
//! This module provides the [`SetOps`] trait. Together with
//! [`Foldable`](crate::container::Foldable) (reduce, any, every, find,
//! extrema) it mirrors the sequence surface, minus everything that needs a
//! stable order or duplicate multiplicity (sorting, reversing, distinct,
//! partitioning, grouping).
//!
//! # Set Semantics
//!
//! The output of [`SetOps::map`] is itself a set. When the transform sends
//! two distinct inputs to equal outputs, they collapse into one element, so
//! the result can be smaller than the number of present transform outputs.
//!
//! Results keep the receiver's hasher type `S`.
//!
//! # Examples
//!
//! ```rust
//! use herd::prelude::*;
//! use std::collections::HashSet;
//!
//! let numbers: HashSet<i32> = [-2, -1, 1, 2, 3].into_iter().collect();
//!
//! let magnitudes = numbers.map(|n| Some(n.abs()));
//! assert_eq!(magnitudes, HashSet::from([1, 2, 3]));
//!
//! let positive = numbers.filter(|n| *n > 0);
//! assert_eq!(positive, HashSet::from([1, 2, 3]));
//!
//! assert_eq!(numbers.len(), 5);
//! ```

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::container::{Container, pipeline};

/// Operations on a set of `T` hashed with `S`.
///
/// # Examples
///
/// ```rust
/// use herd::set::SetOps;
/// use std::collections::HashSet;
///
/// let words: HashSet<&str> = ["bob", "sing", "cat"].into_iter().collect();
/// let lengths = words.map(|word| Some(word.len()));
/// assert_eq!(lengths, HashSet::from([3, 4]));
/// ```
pub trait SetOps<T, S>: Container<Element = T> {
    /// Returns the elements for which `predicate` is true.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::set::SetOps;
    /// use std::collections::HashSet;
    ///
    /// let set = HashSet::from([1, -1, -3, 4]);
    /// assert_eq!(set.filter(|n| *n > 0), HashSet::from([1, 4]));
    /// ```
    fn filter<P>(&self, predicate: P) -> HashSet<T, S>
    where
        T: Clone + Eq + Hash,
        S: BuildHasher + Default,
        P: FnMut(&T) -> bool;

    /// Like [`filter`](SetOps::filter), but the predicate may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`; no partial result is
    /// returned.
    fn try_filter<E, P>(&self, predicate: P) -> Result<HashSet<T, S>, E>
    where
        T: Clone + Eq + Hash,
        S: BuildHasher + Default,
        P: FnMut(&T) -> Result<bool, E>;

    /// Applies `transform` to each element and collects the present outputs
    /// into a new set.
    ///
    /// Equal outputs collapse into a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::set::SetOps;
    /// use std::collections::HashSet;
    ///
    /// let set = HashSet::from([1, 2, 3, 4]);
    /// let parity = set.map(|n| Some(n % 2 == 0));
    /// assert_eq!(parity.len(), 2);
    /// ```
    fn map<U, F>(&self, transform: F) -> HashSet<U, S>
    where
        U: Eq + Hash,
        S: BuildHasher + Default,
        F: FnMut(&T) -> Option<U>;

    /// Like [`map`](SetOps::map), but the transform may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`; no partial result is
    /// returned.
    fn try_map<U, E, F>(&self, transform: F) -> Result<HashSet<U, S>, E>
    where
        U: Eq + Hash,
        S: BuildHasher + Default,
        F: FnMut(&T) -> Result<Option<U>, E>;
}

impl<T, S> SetOps<T, S> for HashSet<T, S> {
    fn filter<P>(&self, predicate: P) -> HashSet<T, S>
    where
        T: Clone + Eq + Hash,
        S: BuildHasher + Default,
        P: FnMut(&T) -> bool,
    {
        pipeline::select(self.iter(), predicate)
    }

    fn try_filter<E, P>(&self, predicate: P) -> Result<HashSet<T, S>, E>
    where
        T: Clone + Eq + Hash,
        S: BuildHasher + Default,
        P: FnMut(&T) -> Result<bool, E>,
    {
        pipeline::try_select(self.iter(), predicate)
    }

    fn map<U, F>(&self, transform: F) -> HashSet<U, S>
    where
        U: Eq + Hash,
        S: BuildHasher + Default,
        F: FnMut(&T) -> Option<U>,
    {
        pipeline::transform(self.iter(), transform)
    }

    fn try_map<U, E, F>(&self, transform: F) -> Result<HashSet<U, S>, E>
    where
        U: Eq + Hash,
        S: BuildHasher + Default,
        F: FnMut(&T) -> Result<Option<U>, E>,
    {
        pipeline::try_transform(self.iter(), transform)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{DefaultBuildHasher, Foldable};
    use rstest::rstest;

    fn set_of(values: &[i32]) -> HashSet<i32> {
        values.iter().copied().collect()
    }

    // =========================================================================
    // filter
    // =========================================================================

    #[rstest]
    fn filter_keeps_matching_members() {
        assert_eq!(set_of(&[1, -1, -3, 4]).filter(|n| *n > 0), set_of(&[1, 4]));
    }

    #[rstest]
    fn filter_empty_is_empty() {
        assert!(HashSet::<i32>::new().filter(|_| true).is_empty());
    }

    #[rstest]
    fn filter_does_not_touch_receiver() {
        let set = set_of(&[1, 2, 3]);
        let _ = set.filter(|n| *n > 1);
        assert_eq!(set, set_of(&[1, 2, 3]));
    }

    #[rstest]
    fn filter_keeps_custom_hasher() {
        let set: HashSet<i32, DefaultBuildHasher> = [1, 2, 3].into_iter().collect();
        let odd: HashSet<i32, DefaultBuildHasher> = set.filter(|n| n % 2 == 1);
        assert_eq!(odd.len(), 2);
        assert!(odd.contains(&1) && odd.contains(&3));
    }

    #[rstest]
    fn try_filter_returns_error_unchanged() {
        let result = set_of(&[1, 2, 3]).try_filter(|n| if *n == 2 { Err(*n) } else { Ok(true) });
        assert_eq!(result, Err(2));
    }

    // =========================================================================
    // map
    // =========================================================================

    #[rstest]
    fn map_transforms_every_member() {
        assert_eq!(set_of(&[1, -1]).map(|n| Some(n + 1)), set_of(&[2, 0]));
    }

    #[rstest]
    fn map_omits_absent_results() {
        let halves = set_of(&[1, 2, 3, 4]).map(|n| (n % 2 == 0).then_some(n / 2));
        assert_eq!(halves, set_of(&[1, 2]));
    }

    #[rstest]
    fn map_collapses_equal_outputs() {
        let set = set_of(&[-2, -1, 1, 2]);
        let magnitude = |n: &i32| Some(n.abs());
        let present_outputs = set.iter().filter_map(magnitude).count();
        let magnitudes = set.map(magnitude);
        assert_eq!(present_outputs, 4);
        assert_eq!(magnitudes, set_of(&[1, 2]));
        assert!(magnitudes.len() < present_outputs);
    }

    #[rstest]
    fn try_map_passes_absent_results_through() {
        let result: Result<HashSet<i32>, String> =
            set_of(&[1, 2, 3]).try_map(|n| Ok((*n != 2).then_some(n * 10)));
        assert_eq!(result, Ok(set_of(&[10, 30])));
    }

    #[rstest]
    fn try_map_returns_error_unchanged() {
        let result: Result<HashSet<i32>, &str> =
            set_of(&[1, 2, 3]).try_map(|_| Err("unavailable"));
        assert_eq!(result, Err("unavailable"));
    }

    // =========================================================================
    // Shared surface on sets
    // =========================================================================

    #[rstest]
    fn reduce_any_every_on_sets() {
        let set = set_of(&[1, -1, 2, 4]);
        assert_eq!(set.reduce(0, |sum, n| sum + n), 6);
        assert!(set.any(|n| *n < 0));
        assert!(!set.every(|n| *n < 0));
    }

    #[rstest]
    fn empty_set_queries() {
        let empty: HashSet<i32> = HashSet::new();
        assert_eq!(empty.reduce(7, |sum, n| sum + n), 7);
        assert!(!empty.any(|_| true));
        assert!(empty.every(|_| false));
        assert_eq!(empty.find(|_| true), None);
        assert_eq!(empty.maximum(), None);
        assert_eq!(empty.minimum(), None);
    }

    #[rstest]
    fn find_reports_some_qualifying_member() {
        let set = set_of(&[1, 5, 7, 9]);
        let found = set.find(|n| *n > 4).copied();
        assert!(matches!(found, Some(5 | 7 | 9)));
    }

    #[rstest]
    fn extrema_on_sets() {
        let set = set_of(&[3, 9, 4]);
        assert_eq!(set.maximum(), Some(&9));
        assert_eq!(set.minimum(), Some(&3));
    }
}
