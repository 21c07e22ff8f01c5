//! Various collection types keyed by derived codes or natural equality.
//!
//! # Method
//! The hash-keyed collections don't reimplement a hash table. They index a
//! [`std::collections::HashMap`] by each key's code and keep the key (and value) together in a
//! single slot, so a map can never disagree with itself about which codes it holds.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "primitive")]
pub mod primitive;
#[cfg(feature = "simple")]
pub mod simple;
#[cfg(feature = "traits")]
pub mod traits;
