use std::collections::HashSet as Table;
use std::collections::hash_set::{IntoIter as TableIntoIter, Iter as TableIter};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::collections::traits::Set;
use crate::util::fmt::{set_literal, DebugRaw};

/// A set of values which are told apart by their own [`Eq`] and [`Hash`] implementations.
///
/// This is a thin wrapper around [`std::collections::HashSet`] that takes part in the same
/// [`Set`] algebra as [`HashSet`](crate::collections::hash::HashSet).
#[derive(Clone)]
pub struct SimpleSet<T> {
    pub(crate) inner: Table<T>,
}

impl<T: Hash + Eq> SimpleSet<T> {
    pub fn new() -> SimpleSet<T> {
        SimpleSet {
            inner: Table::new(),
        }
    }

    pub fn with_cap(cap: usize) -> SimpleSet<T> {
        SimpleSet {
            inner: Table::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. An equal item that is
    /// already present isn't replaced.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Removes `item` from the set, returning true if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.inner.remove(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.iter())
    }

    /// Returns a snapshot of the set's contents, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Hash + Eq> Set<T> for SimpleSet<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        SimpleSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        SimpleSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        SimpleSet::iter(self)
    }
}

impl<T: Hash + Eq> Default for SimpleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for SimpleSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for SimpleSet<T> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for SimpleSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for SimpleSet<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq> FromIterator<T> for SimpleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        SimpleSet {
            inner: value.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for SimpleSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> IntoIterator for SimpleSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// A type for owned iteration over a [`SimpleSet`]. Produces values of type `T`.
pub struct IntoIter<T>(pub(crate) TableIntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SimpleSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

/// A type for borrowed iteration over a [`SimpleSet`]. Produces values of type `&T`.
pub struct Iter<'a, T>(pub(crate) TableIter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Hash + Eq + Clone> BitOr for &SimpleSet<T> {
    type Output = SimpleSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd for &SimpleSet<T> {
    type Output = SimpleSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor for &SimpleSet<T> {
    type Output = SimpleSet<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub for &SimpleSet<T> {
    type Output = SimpleSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Debug> Debug for SimpleSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleSet")
            .field("contents", &DebugRaw(set_literal(self.inner.iter().map(|i| format!("{i:?}")))))
            .field("len", &self.inner.len())
            .finish()
    }
}

impl<T: Display> Display for SimpleSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", set_literal(self.inner.iter().map(|i| format!("{i}"))))
    }
}
