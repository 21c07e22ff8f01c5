//! The [`Set`] trait and the lazy iterators it produces.

use std::iter::{Chain, FusedIterator};

/// Set algebra shared by every set in this crate.
///
/// Implementors only provide membership, length and borrowed iteration. Everything else is built
/// on top of those: lazy views over two sets (`iter_*`) and owned results (`union`, `intersect`,
/// `difference` and `symmetric_difference`), which are collected through [`FromIterator`] into a
/// new, independently owned set. Neither operand is ever modified.
///
/// When two sets hold different values which the set considers equal (as [`HashSet`] does for
/// values with the same code), the owned results keep:
/// - for `union`: the value from `other` when both sets hold one, and the value from whichever set
///   holds it otherwise.
/// - for `intersect` and `difference`: the value from `self`.
///
/// [`HashSet`]: crate::collections::hash::HashSet
pub trait Set<T>: FromIterator<T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains an element equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns and iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn iter_difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn iter_symmetric_difference<'a>(
        &'a self,
        other: &'a Self,
    ) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`, yielding
    /// the items from `self`. (`self ∩ other`)
    fn iter_intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. Items in
    /// both are yielded once, from `other`. (`self ∪ other`)
    fn iter_union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            inner: other.iter().chain(self.iter_difference(other)),
        }
    }

    /// Returns a new set containing every item in either `self` or `other`.
    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter_union(other).cloned().collect()
    }

    /// Returns a new set containing the items of `self` which are also in `other`.
    fn intersect(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter_intersection(other).cloned().collect()
    }

    /// Returns a new set containing the items of `self` which aren't in `other`.
    fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter_difference(other).cloned().collect()
    }

    /// Returns a new set containing the items that are in exactly one of `self` and `other`.
    fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter_symmetric_difference(other).cloned().collect()
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        self.len() >= other.len() && other.iter().all(|item| self.contains(item))
    }

    /// Returns true if `self` and `other` have no elements in common.
    fn is_disjoint(&self, other: &Self) -> bool {
        self.iter_intersection(other).next().is_none()
    }

    /// Returns true if `self` and `other` contain the same elements.
    fn is_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{}

pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T> where S::Iter<'a>: FusedIterator {}
