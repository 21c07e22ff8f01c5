//! A module containing [`SimpleSet`], a set over values with natural equality, and its iterators.

mod simple_set;
mod tests;

pub use simple_set::*;
