#![cfg(all(test, feature = "hash"))]

use crate::collections::hash::Hashable;

/// A key with a manually chosen code, so that tests can produce collisions between values that
/// aren't otherwise equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualCode<T> {
    code: i64,
    value: T,
}

impl<T> ManualCode<T> {
    pub const fn new(code: i64, value: T) -> ManualCode<T> {
        ManualCode {
            code,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }

    pub const fn value_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Hashable<i64> for ManualCode<T> {
    fn hash_code(&self) -> i64 {
        self.code
    }
}

/// A key in the string domain, identified by its `name` only.
#[derive(Debug, Clone, PartialEq)]
pub struct Named {
    pub name: &'static str,
    pub version: u32,
}

impl Named {
    pub const fn new(name: &'static str, version: u32) -> Named {
        Named {
            name,
            version,
        }
    }
}

impl Hashable<String> for Named {
    fn hash_code(&self) -> String {
        self.name.to_owned()
    }
}
