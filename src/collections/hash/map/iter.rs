use std::collections::hash_map::{IntoValues as TableIntoValues, Values as TableValues};
use std::collections::hash_map::ValuesMut as TableValuesMut;
use std::iter::FusedIterator;

use super::HashMap;

impl<K, V, H> IntoIterator for HashMap<K, V, H> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, H>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.table.into_values())
    }
}

/// A type for owned iteration over the entries of a [`HashMap`]. Produces values of type `(K, V)`.
pub struct IntoIter<K, V, H>(pub(crate) TableIntoValues<H, (K, V)>);

impl<K, V, H> Iterator for IntoIter<K, V, H> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for IntoIter<K, V, H> {}

impl<K, V, H> FusedIterator for IntoIter<K, V, H> {}

impl<'a, K, V, H> IntoIterator for &'a HashMap<K, V, H> {
    type Item = &'a (K, V);

    type IntoIter = Iter<'a, K, V, H>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.table.values())
    }
}

/// A type for borrowed iteration over the entries of a [`HashMap`]. Produces values of type
/// `&(K, V)`.
pub struct Iter<'a, K, V, H>(pub(crate) TableValues<'a, H, (K, V)>);

impl<'a, K, V, H> Iterator for Iter<'a, K, V, H> {
    type Item = &'a (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for Iter<'_, K, V, H> {}

impl<K, V, H> FusedIterator for Iter<'_, K, V, H> {}

// Not derived, because that would require K, V and H to be Clone.
impl<K, V, H> Clone for Iter<'_, K, V, H> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

pub struct IntoKeys<K, V, H>(pub(crate) IntoIter<K, V, H>);

impl<K, V, H> Iterator for IntoKeys<K, V, H> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for IntoKeys<K, V, H> {}

impl<K, V, H> FusedIterator for IntoKeys<K, V, H> {}

pub struct Keys<'a, K, V, H>(pub(crate) Iter<'a, K, V, H>);

impl<'a, K, V, H> Iterator for Keys<'a, K, V, H> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for Keys<'_, K, V, H> {}

impl<K, V, H> FusedIterator for Keys<'_, K, V, H> {}

impl<K, V, H> Clone for Keys<'_, K, V, H> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}

pub struct IntoValues<K, V, H>(pub(crate) IntoIter<K, V, H>);

impl<K, V, H> Iterator for IntoValues<K, V, H> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for IntoValues<K, V, H> {}

impl<K, V, H> FusedIterator for IntoValues<K, V, H> {}

pub struct ValuesMut<'a, K, V, H>(pub(crate) TableValuesMut<'a, H, (K, V)>);

impl<'a, K, V, H> Iterator for ValuesMut<'a, K, V, H> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &mut e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for ValuesMut<'_, K, V, H> {}

impl<K, V, H> FusedIterator for ValuesMut<'_, K, V, H> {}

pub struct Values<'a, K, V, H>(pub(crate) Iter<'a, K, V, H>);

impl<'a, K, V, H> Iterator for Values<'a, K, V, H> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, H> ExactSizeIterator for Values<'_, K, V, H> {}

impl<K, V, H> FusedIterator for Values<'_, K, V, H> {}
