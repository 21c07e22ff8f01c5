//! A module containing [`HashSet`] and associtated types.
//!
//! The types here provide owned and borrowed iteration over a set's elements. Iterators over the
//! result of set operations on two sets are shared with every other set, see
//! [`Set`](crate::collections::traits::Set).
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place could change their codes and cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;
