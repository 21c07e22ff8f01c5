#![warn(missing_docs)]

pub mod fmt;
pub mod hash;
pub mod panic;
pub mod result;
