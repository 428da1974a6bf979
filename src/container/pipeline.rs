//! Element pipelines shared by the sequence and set operations.
//!
//! Both container kinds filter and transform the same way; they only differ
//! in the container they collect into. These helpers take the element walk
//! and the callback, and let the caller pick the output type.

use crate::contract::{Predicate, Transform};

/// Clones every element accepted by `predicate` into `C`.
pub(crate) fn select<'a, T, P, C>(elements: impl Iterator<Item = &'a T>, mut predicate: P) -> C
where
    T: Clone + 'a,
    P: Predicate<T>,
    C: FromIterator<T>,
{
    elements
        .filter(|element| predicate.test(*element))
        .cloned()
        .collect()
}

/// Like [`select`], but stops at the first error raised by `predicate`.
pub(crate) fn try_select<'a, T, E, P, C>(
    elements: impl Iterator<Item = &'a T>,
    mut predicate: P,
) -> Result<C, E>
where
    T: Clone + 'a,
    P: FnMut(&T) -> Result<bool, E>,
    C: FromIterator<T>,
{
    elements
        .filter_map(|element| match predicate(element) {
            Ok(true) => Some(Ok(element.clone())),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        })
        .collect()
}

/// Collects every present output of `transform` into `C`.
pub(crate) fn transform<'a, T, U, F, C>(elements: impl Iterator<Item = &'a T>, mut transform: F) -> C
where
    T: 'a,
    F: Transform<T, U>,
    C: FromIterator<U>,
{
    elements.filter_map(|element| transform.apply(element)).collect()
}

/// Like [`transform`], but stops at the first error raised by `transform`.
pub(crate) fn try_transform<'a, T, U, E, F, C>(
    elements: impl Iterator<Item = &'a T>,
    mut transform: F,
) -> Result<C, E>
where
    T: 'a,
    F: FnMut(&T) -> Result<Option<U>, E>,
    C: FromIterator<U>,
{
    elements
        .filter_map(|element| transform(element).transpose())
        .collect()
}
