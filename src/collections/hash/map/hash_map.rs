use std::collections::HashMap as Table;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::{IntoKeys, IntoValues, Iter, Keys, MissingKey, Values, ValuesMut};
use crate::collections::hash::{HashCode, Hashable};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A map of keys to values which identifies keys by their [`Hashable`] code of type `H`.
///
/// Keys are never compared with [`Eq`]. Two keys producing the same code refer to the same entry,
/// so inserting either one replaces both the stored key and the stored value. This also means that
/// collisions between keys that are meant to be distinct aren't resolved: the last write wins.
///
/// Entries are stored in a single [`std::collections::HashMap`] indexed by code, with the key and
/// value kept together in one slot.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their code.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// Because the code type can't be inferred from a key that implements [`Hashable`] for more than
/// one code, prefer the [`IntHashMap`] and [`StringHashMap`] aliases when constructing a map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `c`: The cost of deriving a code from a key.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `reserve` | `O(n)`, `O(1)` |
///
/// \* If the backing table doesn't have enough capacity for the new entry, `insert` will take
/// `O(n)`.
#[derive(Clone)]
pub struct HashMap<K, V, H = i64> {
    pub(crate) table: Table<H, (K, V)>,
}

/// A [`HashMap`] over keys that produce integer codes.
pub type IntHashMap<K, V> = HashMap<K, V, i64>;

/// A [`HashMap`] over keys that produce string codes.
pub type StringHashMap<K, V> = HashMap<K, V, String>;

impl<K: Hashable<H>, V, H: HashCode> HashMap<K, V, H> {
    /// Creates a new, empty HashMap. Memory will be allocated when the first entry is inserted.
    pub fn new() -> HashMap<K, V, H> {
        HashMap {
            table: Table::new(),
        }
    }

    /// Creates a new HashMap with at least the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize) -> HashMap<K, V, H> {
        HashMap {
            table: Table::with_capacity(cap),
        }
    }

    /// Returns the length of the HashMap.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the HashMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of entries the HashMap can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.table.capacity()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap. If an entry with the same code
    /// already existed, the previous value is returned.
    ///
    /// Unlike the standard library, the stored key is replaced as well, even if the two keys differ
    /// in everything but their code.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_entry(key, value).map(|(_, v)| v)
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, returning the whole entry that it
    /// replaced, if any.
    pub fn insert_entry(&mut self, key: K, value: V) -> Option<(K, V)> {
        let code = key.hash_code();
        self.table.insert(code, (key, value))
    }

    /// Returns the entry stored under the code of `key` as a key-value pair or None if there is no
    /// entry. The returned key is the stored one, which may differ from `key`.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.table.get(&key.hash_code()).map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(&key.hash_code()).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(&key.hash_code()).map(|(_, v)| v)
    }

    /// Returns a reference to the value associated with the provided `key`.
    ///
    /// # Errors
    /// Returns [`MissingKey`] if the map contains no value for `key`.
    pub fn try_get(&self, key: &K) -> Result<&V, MissingKey> {
        self.get(key).ok_or(MissingKey)
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    ///
    /// # Errors
    /// Returns [`MissingKey`] if the map contains no value for `key`.
    pub fn try_get_mut(&mut self, key: &K) -> Result<&mut V, MissingKey> {
        self.get_mut(key).ok_or(MissingKey)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.table.remove(&key.hash_code())
    }

    /// Removes the entry associated with `key`, returning the value if it exists. Removing a key
    /// that isn't present does nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.table.contains_key(&key.hash_code())
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.table.reserve(extra)
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Retains only the entries for which `f` returns true.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) {
        self.table.retain(|_, (k, v)| f(k, v))
    }

    /// Returns true if `self` and `other` hold entries for exactly the same codes, regardless of
    /// their values.
    pub fn same_keys<W>(&self, other: &HashMap<K, W, H>) -> bool {
        self.len() == other.len()
            && self.table.keys().all(|code| other.table.contains_key(code))
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V, H> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V, H> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V, H> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V, H> {
        IntoValues(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, H> {
        ValuesMut(self.table.values_mut())
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V, H> {
        Values(self.iter())
    }
}

impl<K: Hashable<H>, V, H: HashCode> Default for HashMap<K, V, H> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hashable<H>, V, H: HashCode> Index<&K> for HashMap<K, V, H> {
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics with [`MissingKey`] if the map contains no value for `key`.
    fn index(&self, key: &K) -> &V {
        self.try_get(key).throw()
    }
}

impl<K: Hashable<H>, V: PartialEq, H: HashCode> PartialEq for HashMap<K, V, H> {
    /// Two maps are equal if they hold the same codes, each with an equal value. Keys are only
    /// compared through their codes.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.table.iter().all(|(code, (_, v))| {
                other.table.get(code).is_some_and(|(_, w)| v == w)
            })
    }
}

impl<K: Hashable<H>, V: Eq, H: HashCode> Eq for HashMap<K, V, H> {}

impl<K: Hashable<H>, V, H: HashCode> FromIterator<(K, V)> for HashMap<K, V, H> {
    /// Collects the entries into a new HashMap. Later entries overwrite earlier ones with the same
    /// code.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut map = HashMap::with_cap(iter.size_hint().0);

        map.extend(iter);

        map
    }
}

impl<K: Hashable<H>, V, H: HashCode> Extend<(K, V)> for HashMap<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hashable<H>, V, H: HashCode, const N: usize> From<[(K, V); N]> for HashMap<K, V, H> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field(
                "entries",
                &self.table.iter()
                    .map(|(code, (k, v))| DebugRaw(format!("{code:?} => ({k:?}: {v:?})")))
                    .collect::<Vec<DebugRaw>>(),
            )
            .field("len", &self.table.len())
            .field("cap", &self.table.capacity())
            .finish()
    }
}

impl<K: Debug, V: Debug, H> Display for HashMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.table.values().map(|(k, v)| (k, v))).finish()
    }
}
