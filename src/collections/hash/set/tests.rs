#![cfg(test)]

use super::*;
use crate::collections::traits::Set;
use crate::util::hash::{ManualCode, Named};

fn sorted_values<T: Ord + Clone>(set: &IntHashSet<ManualCode<T>>) -> Vec<T> {
    let mut values = set.iter().map(|i| i.value_ref().clone()).collect::<Vec<_>>();
    values.sort();
    values
}

#[test]
fn test_code_collisions() {
    let mut set = IntHashSet::new();
    assert!(set.insert(ManualCode::new(0, "zero")));
    assert!(
        !set.insert(ManualCode::new(0, "one")),
        "Inserting a value with an existing code should report that the code was present."
    );
    set.insert(ManualCode::new(2, "two"));
    set.insert(ManualCode::new(0, "three"));
    set.insert(ManualCode::new(2, "four"));
    set.insert(ManualCode::new(1, "five"));

    assert_eq!(set.len(), 3, "Values with equal codes should share a slot.");
    assert_eq!(
        sorted_values(&set),
        ["five", "four", "three"],
        "The most recently inserted value should be stored for each code."
    );

    assert_eq!(
        set.remove(&ManualCode::new(0, "zero")).map(ManualCode::value),
        Some("three"),
        "Removal should find values by code alone."
    );
    assert_eq!(
        set.replace(ManualCode::new(2, "six")).map(ManualCode::value),
        Some("four")
    );
    assert_eq!(set.get(&ManualCode::new(2, "")).map(|i| *i.value_ref()), Some("six"));
}

#[test]
fn test_remove_absent() {
    let mut set: IntHashSet<i32> = [1, 2, 3].into();
    assert_eq!(set.remove(&4), None);
    assert_eq!(set.len(), 3, "Removing an absent value shouldn't change the length.");

    set.remove(&2);
    assert!(!set.contains(&2));
}

#[test]
fn test_union() {
    let a = IntHashSet::from([
        ManualCode::new(1, "a1"),
        ManualCode::new(2, "a2"),
        ManualCode::new(3, "a3"),
    ]);
    let b = IntHashSet::from([ManualCode::new(3, "b3"), ManualCode::new(4, "b4")]);

    let union = a.union(&b);
    assert_eq!(union.len(), a.len() + b.len() - 1);
    assert_eq!(
        sorted_values(&union),
        ["a1", "a2", "b3", "b4"],
        "Shared codes should keep the value from the other set."
    );
    assert_eq!(a.len(), 3, "Operands shouldn't be modified.");
    assert_eq!(&a | &b, union);

    let disjoint = IntHashSet::from([ManualCode::new(10, "c")]);
    assert_eq!(a.union(&disjoint).len(), a.len() + disjoint.len());
}

#[test]
fn test_intersect_and_difference() {
    let a = IntHashSet::from([
        ManualCode::new(1, "a1"),
        ManualCode::new(2, "a2"),
        ManualCode::new(3, "a3"),
    ]);
    let b = IntHashSet::from([ManualCode::new(2, "b2"), ManualCode::new(3, "b3")]);
    let empty = IntHashSet::new();

    assert_eq!(
        sorted_values(&a.intersect(&b)),
        ["a2", "a3"],
        "Intersection should keep the values from self."
    );
    assert!(a.intersect(&empty).is_empty());

    assert_eq!(sorted_values(&a.difference(&b)), ["a1"]);
    assert!(a.difference(&a).is_empty());
    assert_eq!(a.difference(&empty), a);

    assert_eq!(sorted_values(&a.symmetric_difference(&b)), ["a1"]);
    assert_eq!(&a ^ &b, &a - &b);
    assert_eq!(&a & &b, b);
}

#[test]
fn test_assign_operators() {
    let mut a: IntHashSet<i32> = [1, 2, 3].into();
    a |= [3, 4].into();
    assert_eq!(a, [1, 2, 3, 4].into());

    a &= [2, 3, 4, 5].into();
    assert_eq!(a, [2, 3, 4].into());

    a -= [4].into();
    assert_eq!(a, [2, 3].into());

    a ^= [3, 6].into();
    assert_eq!(a, [2, 6].into());
}

#[test]
fn test_relations() {
    let small: StringHashSet<Named> = [Named::new("a", 1)].into();
    let large: StringHashSet<Named> = [Named::new("a", 2), Named::new("b", 1)].into();
    let other: StringHashSet<Named> = [Named::new("c", 1)].into();

    assert!(small.is_subset(&large), "Subsets should be decided by code.");
    assert!(large.is_superset(&small));
    assert!(small.is_disjoint(&other));
    assert!(!small.is_eq(&large));
    assert!(small.is_eq(&[Named::new("a", 7)].into()));
    assert_eq!(
        large.get(&Named::new("a", 0)).map(|n| n.version),
        Some(2),
        "Lookups should return the stored value, not the probe."
    );
}

#[test]
fn test_from_sequence() {
    let set = IntHashSet::from(vec![
        ManualCode::new(1, "first"),
        ManualCode::new(1, "second"),
        ManualCode::new(2, "third"),
    ]);
    assert_eq!(
        sorted_values(&set),
        ["second", "third"],
        "Later duplicates should overwrite earlier ones."
    );

    let mut snapshot = set.to_vec();
    snapshot.pop();
    assert_eq!(set.len(), 2, "Changing a snapshot shouldn't affect the set.");
}

#[test]
fn test_formatting() {
    let set: StringHashSet<String> = ["x".to_owned()].into();
    assert_eq!(format!("{set}"), "#{x}");
    assert!(format!("{set:?}").starts_with("HashSet { contents: #{\"x\"}, len: 1"));
}
