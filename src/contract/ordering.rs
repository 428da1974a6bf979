//! Ordering contracts used by sorting and extrema.
//!
//! An ordering contract is a total comparison between two elements. The
//! operations that consume one never inspect elements beyond calling
//! [`OrderingContract::compare`], so any rule that is consistent (transitive,
//! antisymmetric) can be plugged in.
//!
//! # Examples
//!
//! ```rust
//! use herd::contract::{Natural, OrderingContract};
//! use std::cmp::Ordering;
//!
//! // Closures over two references are contracts as well
//! let by_magnitude = |left: &i32, right: &i32| left.abs().cmp(&right.abs());
//! assert_eq!(by_magnitude.compare(&-5, &3), Ordering::Greater);
//!
//! assert_eq!(Natural.compare(&-5, &3), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// A comparison rule between two elements of type `T`.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ```text
/// compare(a, b) == compare(b, a).reverse()
/// compare(a, b) == Less && compare(b, c) == Less  =>  compare(a, c) == Less
/// ```
///
/// # Examples
///
/// ```rust
/// use herd::contract::{OrderingContract, Reversed, Natural};
/// use std::cmp::Ordering;
///
/// let descending = Reversed(Natural);
/// assert_eq!(descending.compare(&"a", &"b"), Ordering::Greater);
/// ```
pub trait OrderingContract<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns a contract that orders elements the opposite way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herd::contract::{Natural, OrderingContract};
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Natural.reverse().compare(&2, &1), Ordering::Less);
    /// ```
    fn reverse(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

/// The ordering given by the element type's own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl Natural {
    /// Returns the descending natural ordering.
    ///
    /// Unlike [`OrderingContract::reverse`], this needs no element type
    /// annotation.
    #[must_use]
    pub const fn reverse(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: Ord + ?Sized> OrderingContract<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts another ordering contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Undoes the reversal, returning the wrapped contract.
    #[must_use]
    pub fn reverse(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: OrderingContract<T>> OrderingContract<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Orders elements by a key derived from each of them.
///
/// The key function is called twice per comparison, so it should be cheap.
///
/// # Examples
///
/// ```rust
/// use herd::contract::{ByKey, OrderingContract};
/// use std::cmp::Ordering;
///
/// let by_length = ByKey(|word: &String| word.len());
/// assert_eq!(
///     by_length.compare(&"sing".to_string(), &"bob".to_string()),
///     Ordering::Greater
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> OrderingContract<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

impl<T: ?Sized, F> OrderingContract<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn natural_follows_ord(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(Natural.compare(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn reversed_inverts_natural(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: Ordering,
    ) {
        assert_eq!(Reversed(Natural).compare(&left, &right), expected);
    }

    #[rstest]
    fn reverse_twice_restores_order() {
        let contract = Natural.reverse().reverse();
        assert_eq!(contract.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn by_key_compares_derived_keys() {
        let by_length = ByKey(|word: &&str| word.len());
        assert_eq!(by_length.compare(&"song", &"bob"), Ordering::Greater);
        assert_eq!(by_length.compare(&"bob", &"mat"), Ordering::Equal);
    }

    #[rstest]
    fn closure_is_a_contract() {
        let by_magnitude = |left: &i32, right: &i32| left.abs().cmp(&right.abs());
        assert_eq!(by_magnitude.compare(&-7, &3), Ordering::Greater);
        assert_eq!(by_magnitude.reverse().compare(&-7, &3), Ordering::Less);
    }

    #[rstest]
    fn natural_works_on_unsized_elements() {
        assert_eq!(
            OrderingContract::<str>::compare(&Natural, "apple", "banana"),
            Ordering::Less
        );
    }
}
