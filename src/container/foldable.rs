//! Foldable operations - the surface shared by sequences and sets.
//!
//! This module provides the `Foldable` trait, which gives every
//! [`Container`] the operations that do not depend on element order:
//! folding to a summary value, membership tests, searching and extrema.
//!
//! # Laws
//!
//! For any container `c` and predicate `p`:
//!
//! ## Empty containers
//!
//! ```text
//! empty.reduce(seed, f) == seed
//! empty.any(p) == false
//! empty.every(p) == true
//! empty.find(p) == None
//! ```
//!
//! ## Duality of `any` and `every`
//!
//! ```text
//! c.every(p) == !c.any(|x| !p(x))
//! ```
//!
//! # Ordering of Ties
//!
//! On sequences, [`Foldable::maximum`] and [`Foldable::minimum`] report the
//! first extremal element in index order. On sets the iteration order is
//! unspecified, so the reported element among equals is unspecified as well.
//!
//! # Examples
//!
//! ```rust
//! use herd::container::Foldable;
//!
//! let numbers = vec![1, -1, -2, 4];
//! assert_eq!(numbers.reduce(0, |sum, n| sum + n), 2);
//! assert!(numbers.any(|n| *n < 0));
//! assert!(!numbers.every(|n| *n < 0));
//! assert_eq!(numbers.find(|n| *n < 0), Some(&-1));
//! ```

use std::cmp::Ordering;

use super::adapter::Container;
use super::numeric::{Floating, Integral};
use crate::contract::{Combiner, Natural, OrderingContract};
use crate::error::OperationError;

/// Operations available on every [`Container`].
///
/// `Foldable` has no required methods; it is implemented for every type that
/// implements [`Container`]. None of its methods mutate the receiver.
///
/// # Provided Methods
///
/// - `reduce`, `try_reduce`: Left fold seeded by an initial value
/// - `any`, `every`: Short-circuiting membership tests
/// - `find`: First element satisfying a predicate
/// - `count_where`: Number of elements satisfying a predicate
/// - `maximum`, `minimum`, `maximum_by`, `minimum_by`: Extrema as references
/// - `imax`, `imin`, `fmax`, `fmin`: Extrema as raw numbers
///
/// # Examples
///
/// ```rust
/// use herd::container::Foldable;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [3, 9, 4].into_iter().collect();
/// assert_eq!(set.reduce(0, |sum, n| sum + n), 16);
/// assert_eq!(set.imax(), Ok(9));
/// ```
pub trait Foldable: Container {
    /// Folds the elements from left to right, starting with `seed`.
    ///
    /// Computes `combiner(combiner(combiner(seed, e0), e1), e2)...` in
    /// iteration order. Returns `seed` unchanged when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let text = values.reduce(String::new(), |mut text, value| {
    ///     text.push_str(&value.to_string());
    ///     text
    /// });
    /// assert_eq!(text, "123");
    /// ```
    fn reduce<A, F>(&self, seed: A, mut combiner: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        self.elements()
            .fold(seed, |accumulator, element| combiner.combine(accumulator, element))
    }

    /// Like [`reduce`](Foldable::reduce), but the combiner may fail.
    ///
    /// The first error aborts the fold and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combiner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// let values: Vec<u8> = vec![100, 100, 100];
    /// let sum = values.try_reduce(0_u8, |sum, value| sum.checked_add(*value).ok_or("overflow"));
    /// assert_eq!(sum, Err("overflow"));
    /// ```
    fn try_reduce<A, E, F>(&self, seed: A, mut combiner: F) -> Result<A, E>
    where
        F: FnMut(A, &Self::Element) -> Result<A, E>,
    {
        let mut accumulator = seed;
        for element in self.elements() {
            accumulator = combiner(accumulator, element)?;
        }
        Ok(accumulator)
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Stops at the first match. Returns `false` when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert!(vec![1, -1, 2, 4].any(|n| *n < 0));
    /// assert!(!Vec::<i32>::new().any(|_| true));
    /// ```
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().any(|element| predicate(element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first failure. Returns `true` when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert!(!vec![1, -1, 2, 4].every(|n| *n < 0));
    /// assert!(Vec::<i32>::new().every(|_| false));
    /// ```
    fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().all(|element| predicate(element))
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// "First" is iteration order: index order on sequences, unspecified on
    /// sets. The predicate is not called again after a match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.find(|n| *n > 3), Some(&4));
    /// assert_eq!(values.find(|n| *n > 10), None);
    /// ```
    fn find<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().find(|element| predicate(*element))
    }

    /// Returns how many elements satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert_eq!(vec![1, -1, -3, 4].count_where(|n| *n > 0), 2);
    /// ```
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().filter(|element| predicate(*element)).count()
    }

    /// Returns the greatest element under the element type's [`Ord`], or
    /// `None` when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert_eq!(vec![3, 9, 4].maximum(), Some(&9));
    /// assert_eq!(Vec::<i32>::new().maximum(), None);
    /// ```
    fn maximum(&self) -> Option<&Self::Element>
    where
        Self::Element: Ord,
    {
        self.maximum_by(Natural)
    }

    /// Returns the least element under the element type's [`Ord`], or `None`
    /// when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert_eq!(vec!["cat", "bob", "mat"].minimum(), Some(&"bob"));
    /// ```
    fn minimum(&self) -> Option<&Self::Element>
    where
        Self::Element: Ord,
    {
        self.minimum_by(Natural)
    }

    /// Returns the greatest element under `contract`, or `None` when there
    /// are no elements. Among equal elements the first one visited wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    /// use herd::contract::ByKey;
    ///
    /// let words = vec!["bob", "sing", "song"];
    /// assert_eq!(words.maximum_by(ByKey(|word: &&str| word.len())), Some(&"sing"));
    /// ```
    fn maximum_by<C>(&self, contract: C) -> Option<&Self::Element>
    where
        C: OrderingContract<Self::Element>,
    {
        extremum(self.elements(), |candidate, current| {
            contract.compare(candidate, current) == Ordering::Greater
        })
    }

    /// Returns the least element under `contract`, or `None` when there are
    /// no elements. Among equal elements the first one visited wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    /// use herd::contract::ByKey;
    ///
    /// let words = vec!["sing", "bob", "cat"];
    /// assert_eq!(words.minimum_by(ByKey(|word: &&str| word.len())), Some(&"bob"));
    /// ```
    fn minimum_by<C>(&self, contract: C) -> Option<&Self::Element>
    where
        C: OrderingContract<Self::Element>,
    {
        extremum(self.elements(), |candidate, current| {
            contract.compare(candidate, current) == Ordering::Less
        })
    }

    /// Returns the greatest element as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyContainer`] when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    /// use herd::error::OperationError;
    ///
    /// assert_eq!(vec![3_u8, 250, 7].imax(), Ok(250));
    /// assert_eq!(
    ///     Vec::<i32>::new().imax(),
    ///     Err(OperationError::EmptyContainer { operation: "imax" })
    /// );
    /// ```
    fn imax(&self) -> Result<i64, OperationError>
    where
        Self::Element: Integral,
    {
        self.elements()
            .map(Integral::to_i64)
            .max()
            .ok_or_else(|| empty_container("imax"))
    }

    /// Returns the least element as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyContainer`] when there are no elements.
    fn imin(&self) -> Result<i64, OperationError>
    where
        Self::Element: Integral,
    {
        self.elements()
            .map(Integral::to_i64)
            .min()
            .ok_or_else(|| empty_container("imin"))
    }

    /// Returns the greatest element as an `f64`.
    ///
    /// NaN elements are ignored unless every element is NaN, in which case
    /// the result is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyContainer`] when there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::container::Foldable;
    ///
    /// assert_eq!(vec![1.5, f64::NAN, -2.0].fmax(), Ok(1.5));
    /// ```
    fn fmax(&self) -> Result<f64, OperationError>
    where
        Self::Element: Floating,
    {
        let mut values = self.elements().map(Floating::to_f64);
        let first = values
            .next()
            .ok_or_else(|| empty_container("fmax"))?;
        Ok(values.fold(first, f64::max))
    }

    /// Returns the least element as an `f64`.
    ///
    /// NaN elements are ignored unless every element is NaN, in which case
    /// the result is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyContainer`] when there are no elements.
    fn fmin(&self) -> Result<f64, OperationError>
    where
        Self::Element: Floating,
    {
        let mut values = self.elements().map(Floating::to_f64);
        let first = values
            .next()
            .ok_or_else(|| empty_container("fmin"))?;
        Ok(values.fold(first, f64::min))
    }
}

impl<C: Container + ?Sized> Foldable for C {}

/// Keeps the first element and replaces it only when `replaces` says a later
/// candidate strictly beats it.
fn extremum<'a, T: 'a>(
    elements: impl Iterator<Item = &'a T>,
    mut replaces: impl FnMut(&T, &T) -> bool,
) -> Option<&'a T> {
    elements.fold(None, |best, candidate| match best {
        Some(current) if !replaces(candidate, current) => Some(current),
        _ => Some(candidate),
    })
}

fn empty_container(operation: &'static str) -> OperationError {
    tracing::debug!(operation, "typed extremum requested on an empty container");
    OperationError::EmptyContainer { operation }
}

// =============================================================================
// Tests
// =============================================================================
