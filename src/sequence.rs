//! Sequence operations - non-mutating, order-aware operations on `[T]`.
//!
//! This module provides the [`SequenceOps`] trait, implemented for slices and
//! therefore available on `Vec<T>` and arrays through auto-deref. Every
//! operation borrows the sequence and returns a new `Vec`; the receiver is
//! never reordered or shortened.
//!
//! Method lookup tries the array itself before the slice, and `[T; N]` has an
//! inherent `map` that keeps every slot. Call [`SequenceOps::map`] on an
//! array through a slice (`array[..]` or `array.as_slice()`).
//!
//! Together with [`Foldable`](crate::container::Foldable) (reduce, any, every,
//! find, extrema) this is the complete sequence surface.
//!
//! # Ordering Guarantees
//!
//! - `filter`, `map`, `distinct`: surviving elements keep their input order
//! - `sorted`, `sorted_by`: stable, equal elements keep their input order
//! - `partition`, `partition_by`: chunks are consecutive runs of the input
//! - `group_by`: each bucket keeps input order; buckets themselves are unordered
//!
//! # Examples
//!
//! ```rust
//! use herd::prelude::*;
//!
//! let words = vec!["bob", "cat", "mat", "sing", "song"];
//!
//! let runs = words.partition_by(|word| word.len());
//! assert_eq!(runs, vec![vec!["bob", "cat", "mat"], vec!["sing", "song"]]);
//!
//! let groups = words.group_by(|word| word.len());
//! assert_eq!(groups[&3], vec!["bob", "cat", "mat"]);
//! assert_eq!(groups[&4], vec!["sing", "song"]);
//!
//! assert_eq!(words.len(), 5);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::container::{Container, DefaultBuildHasher, pipeline};
use crate::contract::{KeyFn, Natural, OrderingContract};
use crate::error::OperationError;

/// Order-aware operations on a sequence of `T`.
///
/// # Examples
///
/// ```rust
/// use herd::sequence::SequenceOps;
///
/// let numbers = vec![3, 1, 2, 1];
/// assert_eq!(numbers.sorted(), vec![1, 1, 2, 3]);
/// assert_eq!(numbers.reversed(), vec![1, 2, 1, 3]);
/// assert_eq!(numbers.distinct(), vec![3, 1, 2]);
/// assert_eq!(numbers, vec![3, 1, 2, 1]);
/// ```
pub trait SequenceOps<T>: Container<Element = T> {
    /// Returns the elements for which `predicate` is true, in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::sequence::SequenceOps;
    ///
    /// assert_eq!(vec![1, -1, -3, 4].filter(|n| *n > 0), vec![1, 4]);
    /// ```
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Like [`filter`](SequenceOps::filter), but the predicate may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`; no partial result is
    /// returned.
    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// Applies `transform` to each element in order, omitting elements for
    /// which it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::sequence::SequenceOps;
    ///
    /// assert_eq!(vec![1, -1].map(|n| Some(n + 1)), vec![2, 0]);
    ///
    /// let positive_roots = vec![4.0_f64, -1.0, 9.0].map(|n| (*n >= 0.0).then(|| n.sqrt()));
    /// assert_eq!(positive_roots, vec![2.0, 3.0]);
    ///
    /// // Arrays must be sliced, `[T; N]::map` would keep the `None` slots
    /// let values = [1, -1, 2];
    /// assert_eq!(values[..].map(|n| (*n > 0).then_some(*n)), vec![1, 2]);
    /// ```
    fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>;

    /// Like [`map`](SequenceOps::map), but the transform may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`; no partial result is
    /// returned.
    fn try_map<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<Option<U>, E>;

    /// Returns a copy sorted by the element type's [`Ord`].
    ///
    /// The sort is stable.
    fn sorted(&self) -> Vec<T>
    where
        T: Clone + Ord;

    /// Returns a copy sorted by `contract`.
    ///
    /// The sort is stable: elements the contract considers equal keep their
    /// input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::sequence::SequenceOps;
    /// use herd::contract::ByKey;
    ///
    /// let words = vec!["sing", "bob", "song", "cat"];
    /// assert_eq!(
    ///     words.sorted_by(ByKey(|word: &&str| word.len())),
    ///     vec!["bob", "cat", "sing", "song"]
    /// );
    /// ```
    fn sorted_by<C>(&self, contract: C) -> Vec<T>
    where
        T: Clone,
        C: OrderingContract<T>;

    /// Returns a copy with the index order reversed.
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns the first occurrence of every distinct element, in input
    /// order.
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Returns the first element for every distinct key, in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::sequence::SequenceOps;
    ///
    /// let words = vec!["bob", "cat", "sing", "mat", "song"];
    /// assert_eq!(words.distinct_by(|word| word.len()), vec!["bob", "sing"]);
    /// ```
    fn distinct_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Splits the sequence into consecutive chunks of `size` elements.
    ///
    /// The last chunk holds the remainder and is shorter than `size` unless
    /// the length divides evenly.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidPartitionSize`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::sequence::SequenceOps;
    ///
    /// let chunks = vec![1, 2, 3, 4, 5].partition(2).unwrap();
    /// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// assert!(vec![1].partition(0).is_err());
    /// ```
    fn partition(&self, size: usize) -> Result<Vec<Vec<T>>, OperationError>
    where
        T: Clone;

    /// Splits the sequence into maximal runs of consecutive elements with
    /// equal keys.
    ///
    /// `key_fn` is called exactly once per element.
    fn partition_by<K, F>(&self, key_fn: F) -> Vec<Vec<T>>
    where
        T: Clone,
        K: PartialEq,
        F: FnMut(&T) -> K;

    /// Buckets the elements by key.
    ///
    /// Within each bucket, elements keep their input order.
    fn group_by<K, F>(&self, key_fn: F) -> HashMap<K, Vec<T>, DefaultBuildHasher>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;
}

impl<T> SequenceOps<T> for [T] {
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        pipeline::select(self.iter(), predicate)
    }

    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        pipeline::try_select(self.iter(), predicate)
    }

    fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        pipeline::transform(self.iter(), transform)
    }

    fn try_map<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<Option<U>, E>,
    {
        pipeline::try_transform(self.iter(), transform)
    }

    fn sorted(&self) -> Vec<T>
    where
        T: Clone + Ord,
    {
        self.sorted_by(Natural)
    }

    fn sorted_by<C>(&self, contract: C) -> Vec<T>
    where
        T: Clone,
        C: OrderingContract<T>,
    {
        let mut result = self.to_vec();
        result.sort_by(|left, right| contract.compare(left, right));
        result
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        let mut seen: HashSet<&T, DefaultBuildHasher> =
            HashSet::with_capacity_and_hasher(self.len(), DefaultBuildHasher::default());
        self.iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    fn distinct_by<K, F>(&self, mut key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen: HashSet<K, DefaultBuildHasher> =
            HashSet::with_hasher(DefaultBuildHasher::default());
        self.iter()
            .filter(|element| seen.insert(key_fn.key_of(*element)))
            .cloned()
            .collect()
    }

    fn partition(&self, size: usize) -> Result<Vec<Vec<T>>, OperationError>
    where
        T: Clone,
    {
        if size == 0 {
            tracing::debug!(size, length = self.len(), "rejected partition size");
            return Err(OperationError::InvalidPartitionSize { size });
        }
        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn partition_by<K, F>(&self, mut key_fn: F) -> Vec<Vec<T>>
    where
        T: Clone,
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let mut runs: Vec<Vec<T>> = Vec::new();
        let mut previous_key: Option<K> = None;

        for element in self {
            let key = key_fn.key_of(element);
            if previous_key.as_ref() != Some(&key) {
                runs.push(Vec::new());
            }
            if let Some(run) = runs.last_mut() {
                run.push(element.clone());
            }
            previous_key = Some(key);
        }

        runs
    }

    fn group_by<K, F>(&self, mut key_fn: F) -> HashMap<K, Vec<T>, DefaultBuildHasher>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>, DefaultBuildHasher> =
            HashMap::with_hasher(DefaultBuildHasher::default());
        for element in self {
            groups
                .entry(key_fn.key_of(element))
                .or_default()
                .push(element.clone());
        }
        tracing::trace!(
            elements = self.len(),
            groups = groups.len(),
            "grouped sequence"
        );
        groups
    }
}

// =============================================================================
// Tests
// =============================================================================
