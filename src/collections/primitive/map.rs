use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a snapshot of the keys in `map`, in no particular order.
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns true if `a` and `b` contain the same keys, each associated with an equal value.
pub fn is_eq<K, V, S, R>(a: &HashMap<K, V, S>, b: &HashMap<K, V, R>) -> bool
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    R: BuildHasher,
{
    a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v == w))
}

/// Returns true if `a` and `b` contain the same keys, regardless of their values.
pub fn same_keys<K, V, W, S, R>(a: &HashMap<K, V, S>, b: &HashMap<K, W, R>) -> bool
where
    K: Hash + Eq,
    S: BuildHasher,
    R: BuildHasher,
{
    a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
}
