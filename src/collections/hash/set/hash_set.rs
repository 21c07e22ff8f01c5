use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::collections::hash::{HashCode, HashMap, Hashable};
use crate::collections::traits::Set;
use crate::util::fmt::{set_literal, DebugRaw};

/// A set of values which are told apart by their [`Hashable`] code of type `H`.
///
/// Values are never compared with [`Eq`]. Adding a value with the same code as a stored one
/// replaces the stored value. See [`HashMap`] for the details of the collision behaviour, which
/// HashSet shares.
///
/// Set algebra is provided through the [`Set`] trait and the `|`, `&`, `-` and `^` operators.
///
/// # Example
/// ```
/// use keyed_collections::collections::hash::{Hashable, IntHashSet};
/// use keyed_collections::collections::traits::Set;
///
/// #[derive(Clone)]
/// struct Ticket(i64);
///
/// impl Hashable<i64> for Ticket {
///     fn hash_code(&self) -> i64 {
///         self.0
///     }
/// }
///
/// let open = IntHashSet::from([Ticket(1), Ticket(2), Ticket(3)]);
/// let assigned = IntHashSet::from([Ticket(2), Ticket(4)]);
///
/// assert_eq!(open.union(&assigned).len(), 4);
/// assert_eq!(open.intersect(&assigned).len(), 1);
/// assert_eq!(open.difference(&assigned).len(), 2);
/// ```
#[derive(Clone)]
pub struct HashSet<T, H = i64> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), H>,
}

/// A [`HashSet`] over values that produce integer codes.
pub type IntHashSet<T> = HashSet<T, i64>;

/// A [`HashSet`] over values that produce string codes.
pub type StringHashSet<T> = HashSet<T, String>;

impl<T: Hashable<H>, H: HashCode> HashSet<T, H> {
    pub fn new() -> HashSet<T, H> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    pub fn with_cap(cap: usize) -> HashSet<T, H> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `item` to the set, returning true if no value with the same code was present. The
    /// stored value is replaced either way.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Adds `item` to the set, returning the value it replaced, if any.
    pub fn replace(&mut self, item: T) -> Option<T> {
        self.inner.insert_entry(item, ()).map(|e| e.0)
    }

    /// Returns the stored value with the same code as `item`.
    pub fn get(&self, item: &T) -> Option<&T> {
        self.inner.get_entry(item).map(|e| e.0)
    }

    /// Removes the value with the same code as `item`, returning it if it was present.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Retains only the values for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.inner.retain(|item, _| f(item))
    }

    pub fn iter(&self) -> Iter<'_, T, H> {
        self.into_iter()
    }

    /// Returns a snapshot of the set's contents, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hashable<H>, H: HashCode> Set<T> for HashSet<T, H> {
    type Iter<'a> = Iter<'a, T, H> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hashable<H>, H: HashCode> Default for HashSet<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable<H>, H: HashCode> PartialEq for HashSet<T, H> {
    /// Two sets are equal if they hold the same codes.
    fn eq(&self, other: &Self) -> bool {
        self.inner.same_keys(&other.inner)
    }
}

impl<T: Hashable<H>, H: HashCode> Eq for HashSet<T, H> {}

impl<T: Hashable<H>, H: HashCode, const N: usize> From<[T; N]> for HashSet<T, H> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hashable<H>, H: HashCode> From<Vec<T>> for HashSet<T, H> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hashable<H>, H: HashCode> FromIterator<T> for HashSet<T, H> {
    /// Collects the values into a new HashSet. Later values overwrite earlier ones with the same
    /// code.
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);

        set.extend(iter);

        set
    }
}

impl<T: Hashable<H>, H: HashCode> Extend<T> for HashSet<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hashable<H> + Clone, H: HashCode> BitOr for &HashSet<T, H> {
    type Output = HashSet<T, H>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hashable<H>, H: HashCode> BitOrAssign for HashSet<T, H> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Hashable<H> + Clone, H: HashCode> BitAnd for &HashSet<T, H> {
    type Output = HashSet<T, H>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T: Hashable<H>, H: HashCode> BitAndAssign for HashSet<T, H> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item));
    }
}

impl<T: Hashable<H> + Clone, H: HashCode> BitXor for &HashSet<T, H> {
    type Output = HashSet<T, H>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hashable<H>, H: HashCode> BitXorAssign for HashSet<T, H> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hashable<H> + Clone, H: HashCode> Sub for &HashSet<T, H> {
    type Output = HashSet<T, H>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hashable<H>, H: HashCode> SubAssign for HashSet<T, H> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Debug, H> Debug for HashSet<T, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(set_literal(self.into_iter().map(|i| format!("{i:?}")))))
            .field("len", &self.inner.table.len())
            .field("cap", &self.inner.table.capacity())
            .finish()
    }
}

impl<T: Display, H> Display for HashSet<T, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", set_literal(self.into_iter().map(|i| format!("{i}"))))
    }
}
