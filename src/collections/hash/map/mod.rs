//! A module containing [`HashMap`] and associtated types.
//!
//! The other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in a map, and the [`MissingKey`] error.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place could change their code and cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
