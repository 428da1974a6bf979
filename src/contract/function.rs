//! Callback contracts accepted by the collection operations.
//!
//! Each trait has a blanket implementation for the matching closure shape, so
//! callers simply pass closures. The named traits exist so that generic code
//! can talk about "a predicate over `T`" without spelling out the `FnMut`
//! signature every time.
//!
//! All callbacks receive elements by reference; the container they came from
//! is never handed out mutably.

/// A boolean test over one element.
///
/// # Examples
///
/// ```rust
/// use herd::contract::Predicate;
///
/// fn count_matching<P: Predicate<i32>>(values: &[i32], mut predicate: P) -> usize {
///     values.iter().filter(|value| predicate.test(value)).count()
/// }
///
/// assert_eq!(count_matching(&[1, -1, 2], |value: &i32| *value > 0), 2);
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns `true` when `element` passes the test.
    fn test(&mut self, element: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, element: &T) -> bool {
        self(element)
    }
}

/// Produces zero or one output per input element.
///
/// Returning `None` drops the element from the result.
///
/// # Examples
///
/// ```rust
/// use herd::contract::Transform;
///
/// let mut halve_even = |value: &i32| (value % 2 == 0).then_some(value / 2);
/// assert_eq!(halve_even.apply(&4), Some(2));
/// assert_eq!(halve_even.apply(&3), None);
/// ```
pub trait Transform<T: ?Sized, U> {
    /// Transforms `element`, or returns `None` to omit it.
    fn apply(&mut self, element: &T) -> Option<U>;
}

impl<T: ?Sized, U, F> Transform<T, U> for F
where
    F: FnMut(&T) -> Option<U>,
{
    #[inline]
    fn apply(&mut self, element: &T) -> Option<U> {
        self(element)
    }
}

/// One step of a left fold: merges the accumulator with the next element.
///
/// When `A` and `T` coincide this is the classical `(T, T) -> T` combiner.
///
/// # Examples
///
/// ```rust
/// use herd::contract::Combiner;
///
/// let mut add = |sum: i32, value: &i32| sum + value;
/// assert_eq!(add.combine(10, &5), 15);
/// ```
pub trait Combiner<A, T: ?Sized> {
    /// Merges `accumulator` with `element`.
    fn combine(&mut self, accumulator: A, element: &T) -> A;
}

impl<A, T: ?Sized, F> Combiner<A, T> for F
where
    F: FnMut(A, &T) -> A,
{
    #[inline]
    fn combine(&mut self, accumulator: A, element: &T) -> A {
        self(accumulator, element)
    }
}

/// Derives a partitioning or grouping key from an element.
///
/// # Examples
///
/// ```rust
/// use herd::contract::KeyFn;
///
/// let mut length = |word: &&str| word.len();
/// assert_eq!(length.key_of(&"sing"), 4);
/// ```
pub trait KeyFn<T: ?Sized, K> {
    /// Returns the key of `element`.
    fn key_of(&mut self, element: &T) -> K;
}

impl<T: ?Sized, K, F> KeyFn<T, K> for F
where
    F: FnMut(&T) -> K,
{
    #[inline]
    fn key_of(&mut self, element: &T) -> K {
        self(element)
    }
}
