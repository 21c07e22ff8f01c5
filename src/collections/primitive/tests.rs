#![cfg(test)]

use std::collections::HashMap;

use super::{map, slice};

#[test]
fn test_slice_equality() {
    assert!(slice::is_eq(&[1, 2, 3], &[1, 2, 3]));
    assert!(slice::is_eq::<i32>(&[], &[]), "Empty slices should be equal.");
    assert!(!slice::is_eq(&[1, 2, 3], &[3, 2, 1]), "Equality should depend on order.");
    assert!(!slice::is_eq(&[1, 2, 3], &[1, 2]), "Equality should depend on length.");
}

#[test]
fn test_slice_sum() {
    assert_eq!(slice::sum(&[1, 2, 3]), 6);
    assert_eq!(slice::sum::<i64>(&[]), 0, "The sum of nothing should be zero.");
    assert_eq!(slice::sum(&[0.5, 0.25]), 0.75);
}

#[test]
fn test_map_keys() {
    let m = HashMap::from([(3, 0), (5, 0), (7, 0)]);
    let mut keys = map::keys(&m);
    keys.sort();
    assert_eq!(keys, [3, 5, 7]);
}

#[test]
fn test_map_equality() {
    let m1 = HashMap::from([(3, 0), (5, 0), (7, 0)]);
    let m2 = HashMap::from([(3, 0), (5, 0), (7, 0)]);
    let m3 = HashMap::from([(3, 0), (5, 1), (7, 0)]);
    let m4 = HashMap::from([(3, 0), (5, 0)]);
    let m5 = HashMap::from([(3, 0), (5, 0), (8, 0)]);

    assert!(map::is_eq(&m1, &m2));
    assert!(!map::is_eq(&m1, &m3), "Differing values should make maps unequal.");
    assert!(!map::is_eq(&m1, &m4), "A missing key should make maps unequal.");
    assert!(!map::is_eq(&m1, &m5));

    assert!(map::same_keys(&m1, &m3), "Values should be ignored when comparing keys.");
    assert!(map::same_keys(&m1, &HashMap::from([(3, "a"), (5, "b"), (7, "c")])));
    assert!(!map::same_keys(&m1, &m4));
    assert!(!map::same_keys(&m1, &m5));
}
