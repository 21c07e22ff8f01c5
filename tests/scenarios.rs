use keyed_collections::collections::hash::{Hashable, IntHashMap, IntHashSet, StringHashSet};
use keyed_collections::collections::simple::SimpleSet;
use keyed_collections::collections::traits::Set;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    id: i64,
    name: &'static str,
}

impl Employee {
    const fn new(id: i64, name: &'static str) -> Employee {
        Employee { id, name }
    }
}

impl Hashable<i64> for Employee {
    fn hash_code(&self) -> i64 {
        self.id
    }
}

impl Hashable<String> for Employee {
    fn hash_code(&self) -> String {
        self.name.to_lowercase()
    }
}

#[test]
fn test_salary_map() {
    let mut salaries = IntHashMap::new();
    salaries.insert(Employee::new(1, "Alice"), 1000);
    salaries.insert(Employee::new(2, "Bob"), 2000);
    salaries.insert(Employee::new(3, "Charlie"), 3000);
    assert_eq!(salaries.len(), 3);

    salaries.insert(Employee::new(2, "Bob"), 4000);
    assert_eq!(salaries.len(), 3, "Re-inserting a key shouldn't change the length.");
    assert_eq!(salaries.get(&Employee::new(2, "Bob")), Some(&4000));

    salaries.remove(&Employee::new(2, "Bob"));
    assert_eq!(salaries.len(), 2);
    assert!(!salaries.contains(&Employee::new(2, "Bob")));

    salaries.insert(Employee::new(2, "Bob"), 5000);
    assert_eq!(salaries.get(&Employee::new(2, "Bob")), Some(&5000));

    let mut names = salaries.keys().map(|e| e.name).collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, ["Alice", "Bob", "Charlie"]);

    let total: i32 = salaries.values().sum();
    assert_eq!(total, 9000);
}

#[test]
fn test_one_key_two_domains() {
    let by_id = IntHashSet::from([Employee::new(1, "Alice"), Employee::new(1, "Alicia")]);
    let by_name = StringHashSet::from([Employee::new(1, "Alice"), Employee::new(2, "ALICE")]);

    assert_eq!(by_id.len(), 1, "Codes in the integer domain should come from the id.");
    assert_eq!(by_name.len(), 1, "Codes in the string domain should come from the name.");
    assert_eq!(by_name.iter().next().map(|e| e.id), Some(2));
}

#[test]
fn test_set_union_keeps_other() {
    let current = IntHashSet::from([Employee::new(1, "Alice"), Employee::new(2, "Bob")]);
    let renamed = IntHashSet::from([Employee::new(2, "Robert"), Employee::new(4, "Dana")]);

    let merged = current.union(&renamed);
    assert_eq!(merged.len(), 3);
    assert_eq!(
        merged.get(&Employee::new(2, "")).map(|e| e.name),
        Some("Robert"),
        "The other set's copy should be kept for shared codes."
    );
    assert_eq!(merged.get(&Employee::new(1, "")).map(|e| e.name), Some("Alice"));
    assert_eq!(current.intersect(&renamed).get(&Employee::new(2, "")).map(|e| e.name), Some("Bob"));
}

#[test]
fn test_simple_set_algebra() {
    let a = SimpleSet::from([2, 3, 4, 5]);
    let b = SimpleSet::from([1, 2, 3]);

    assert_eq!(a.union(&b).len(), 5);

    let mut intersection = a.intersect(&b).to_vec();
    intersection.sort();
    assert_eq!(intersection, [2, 3]);

    let mut difference = a.difference(&b).to_vec();
    difference.sort();
    assert_eq!(difference, [4, 5]);
}
