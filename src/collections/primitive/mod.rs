//! Free functions comparing and folding std slices and maps.
//!
//! These work on the standard library's own types, with natural equality, and hold no state.

pub mod map;
pub mod slice;

mod tests;
