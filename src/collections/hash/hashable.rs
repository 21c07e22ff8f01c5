use std::hash::Hash;

/// A type that can be used as the code of a [`Hashable`] key. This is anything that a
/// [`std::collections::HashMap`] could be keyed by.
///
/// The two codes this crate is designed around are [`i64`] (see [`IntHashable`]) and [`String`]
/// (see [`StringHashable`]), but any `Hash + Eq` type will do.
pub trait HashCode: Hash + Eq {}

impl<H: Hash + Eq> HashCode for H {}

/// A type which can derive a code of type `H` from itself. Keys of the hash-keyed collections are
/// told apart by this code alone: [`Eq`] is never consulted.
///
/// # Contract
/// `hash_code` must be pure and deterministic: it must return the same code for as long as the
/// value lives in a collection. It is a logic error to break this, for example with interior
/// mutability. The collections won't exhibit undefined behaviour if it happens, but lookups and
/// removals will stop finding the affected entries.
///
/// Keys which are meant to coexist in a collection must produce distinct codes. Two keys with the
/// same code occupy the same slot and the most recent insertion replaces the other.
///
/// # Example
/// ```
/// use keyed_collections::collections::hash::{Hashable, IntHashMap};
///
/// struct Employee {
///     id: i64,
///     name: String,
/// }
///
/// impl Hashable<i64> for Employee {
///     fn hash_code(&self) -> i64 {
///         self.id
///     }
/// }
///
/// let mut salaries = IntHashMap::new();
/// salaries.insert(Employee { id: 1, name: "Alice".into() }, 1000);
/// salaries.insert(Employee { id: 1, name: "Alicia".into() }, 1500);
///
/// assert_eq!(salaries.len(), 1);
/// assert_eq!(salaries.keys().next().map(|e| e.name.as_str()), Some("Alicia"));
/// ```
pub trait Hashable<H: HashCode> {
    /// Derives the code identifying `self`.
    fn hash_code(&self) -> H;
}

/// Shorthand for keys in the integer domain.
pub trait IntHashable: Hashable<i64> {}

impl<T: Hashable<i64> + ?Sized> IntHashable for T {}

/// Shorthand for keys in the string domain.
pub trait StringHashable: Hashable<String> {}

impl<T: Hashable<String> + ?Sized> StringHashable for T {}

impl<H: HashCode, T: Hashable<H> + ?Sized> Hashable<H> for &T {
    fn hash_code(&self) -> H {
        (**self).hash_code()
    }
}

impl<H: HashCode, T: Hashable<H> + ?Sized> Hashable<H> for Box<T> {
    fn hash_code(&self) -> H {
        (**self).hash_code()
    }
}

macro_rules! impl_int_hashable {
    ($($ty:ty),*) => {
        $(
            impl Hashable<i64> for $ty {
                fn hash_code(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

// Only the integers which convert into i64 without loss.
impl_int_hashable!(i8, i16, i32, i64, u8, u16, u32);

impl Hashable<String> for str {
    fn hash_code(&self) -> String {
        self.to_owned()
    }
}

impl Hashable<String> for String {
    fn hash_code(&self) -> String {
        self.clone()
    }
}

impl Hashable<String> for char {
    fn hash_code(&self) -> String {
        self.to_string()
    }
}
