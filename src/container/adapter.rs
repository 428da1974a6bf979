//! Adapting standard containers to the operation surface.
//!
//! Rust cannot add methods to `Vec` or `HashSet` directly, so every operation
//! is an extension trait method. [`Container`] is the single seam those traits
//! rely on: it says what the element type is and how to walk the elements
//! without taking them out of the container.
//!
//! # Example
//!
//! ```rust
//! use herd::container::Container;
//!
//! fn total<C: Container<Element = i32> + ?Sized>(container: &C) -> i32 {
//!     container.elements().sum()
//! }
//!
//! assert_eq!(total(&[1, 2, 3][..]), 6);
//! ```

use std::collections::HashSet;

/// A container whose elements can be visited by shared reference.
///
/// # Laws
///
/// For any container `c`:
///
/// 1. **Size consistency**: `c.elements().count() == c.size()`
/// 2. **Non-mutation**: walking the elements leaves `c` unchanged
///
/// # Example
///
/// ```rust
/// use herd::container::Container;
/// use std::collections::HashSet;
///
/// let set: HashSet<char> = "herd".chars().collect();
/// assert_eq!(set.elements().count(), set.size());
/// ```
pub trait Container {
    /// The type of the elements held by the container.
    type Element;

    /// Returns an iterator over the elements.
    ///
    /// Sequences yield elements in index order. Sets yield them in the
    /// unspecified order of the underlying implementation.
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<T> Container for [T] {
    type Element = T;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Container for HashSet<T, S> {
    type Element = T;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn slice_element_type_is_correct() {
        fn assert_element<C: Container<Element = i32> + ?Sized>() {}
        assert_element::<[i32]>();
    }

    #[test]
    fn hash_set_element_type_is_correct() {
        fn assert_element<C: Container<Element = String>>() {}
        assert_element::<HashSet<String>>();
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![3, 1, 3, 2])]
    fn slice_elements_follow_index_order(#[case] values: Vec<i32>) {
        let visited: Vec<i32> = values.elements().copied().collect();
        assert_eq!(visited, values);
        assert_eq!(values.size(), values.len());
    }

    #[rstest]
    fn hash_set_elements_visit_every_member_once() {
        let set: HashSet<i32> = [5, 6, 7].into_iter().collect();
        let mut visited: Vec<i32> = set.elements().copied().collect();
        visited.sort_unstable();
        assert_eq!(visited, vec![5, 6, 7]);
        assert_eq!(set.size(), 3);
    }

    #[rstest]
    fn array_is_a_container_through_unsizing() {
        let values = [1, 2, 3];
        assert_eq!(values[..].size(), 3);
    }
}
