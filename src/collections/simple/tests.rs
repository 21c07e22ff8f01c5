#![cfg(test)]

use super::*;
use crate::collections::traits::Set;

fn sorted(set: SimpleSet<i32>) -> Vec<i32> {
    let mut items = set.into_iter().collect::<Vec<_>>();
    items.sort();
    items
}

#[test]
fn test_insert_and_remove() {
    let mut set = SimpleSet::new();
    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(set.insert(3));
    assert!(!set.insert(2), "Duplicates shouldn't be added again.");
    assert_eq!(set.len(), 3);
    assert!(set.contains(&1));

    let mut items = set.to_vec();
    items.sort();
    assert_eq!(items, [1, 2, 3]);

    assert!(set.remove(&1));
    assert!(!set.remove(&1), "Removing an absent item should report that nothing was removed.");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_set_algebra() {
    let a = SimpleSet::from([2, 3, 4, 5]);
    let b = SimpleSet::from([1, 2, 3]);

    assert_eq!(a.union(&b).len(), 5);
    assert_eq!(sorted(a.intersect(&b)), [2, 3]);
    assert_eq!(sorted(a.difference(&b)), [4, 5]);
    assert_eq!(sorted(b.difference(&a)), [1]);
    assert_eq!(sorted(a.symmetric_difference(&b)), [1, 4, 5]);

    assert!(a.intersect(&SimpleSet::new()).is_empty());
    assert!(a.difference(&a).is_empty());

    assert_eq!(&a | &b, SimpleSet::from([1, 2, 3, 4, 5]));
    assert_eq!(&a & &b, SimpleSet::from([2, 3]));
    assert_eq!(&a - &b, SimpleSet::from([4, 5]));
    assert_eq!(&a ^ &b, SimpleSet::from([1, 4, 5]));
}

#[test]
fn test_lazy_views() {
    let a = SimpleSet::from([1, 2, 3]);
    let b = SimpleSet::from([3, 4]);

    let mut union = a.iter_union(&b).copied().collect::<Vec<_>>();
    union.sort();
    assert_eq!(union, [1, 2, 3, 4], "Shared items should only be yielded once.");
    assert_eq!(a.iter_intersection(&b).collect::<Vec<_>>(), [&3]);
    assert_eq!(a.iter_difference(&b).count(), 2);
    assert_eq!(a.iter_symmetric_difference(&b).count(), 3);
}

#[test]
fn test_equality() {
    let a = SimpleSet::from(vec!["x", "y"]);
    assert_eq!(a, SimpleSet::from(["y", "x"]));
    assert!(a.is_eq(&["x", "y"].into()));
    assert!(a.is_subset(&["x", "y", "z"].into()));
    assert!(!a.is_superset(&["x", "y", "z"].into()));
    assert!(a.is_disjoint(&["z"].into()));
    assert_eq!(format!("{}", SimpleSet::from(["x"])), "#{x}");
}
