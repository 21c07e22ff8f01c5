use std::iter::FusedIterator;

use super::HashSet;
use crate::collections::hash::map::{IntoKeys, Keys};

impl<T, H> IntoIterator for HashSet<T, H> {
    type Item = T;

    type IntoIter = IntoIter<T, H>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(IntoKeys(self.inner.into_iter()))
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T, H>(pub(crate) IntoKeys<T, (), H>);

impl<T, H> Iterator for IntoIter<T, H> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, H> ExactSizeIterator for IntoIter<T, H> {}

impl<T, H> FusedIterator for IntoIter<T, H> {}

impl<'a, T, H> IntoIterator for &'a HashSet<T, H> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, H>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(Keys((&self.inner).into_iter()))
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T, H>(pub(crate) Keys<'a, T, (), H>);

impl<'a, T, H> Iterator for Iter<'a, T, H> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, H> ExactSizeIterator for Iter<'_, T, H> {}

impl<T, H> FusedIterator for Iter<'_, T, H> {}

impl<T, H> Clone for Iter<'_, T, H> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}
