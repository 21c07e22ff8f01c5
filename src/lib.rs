//! A small library of collections that identify their keys by a derived code rather than by the
//! keys themselves.
//!
//! # Purpose
//! Sometimes the natural equality of a type isn't the equality a collection should use. A record
//! with an `id` and a `name` might only ever need to be unique by `id`, and implementing [`Eq`] and
//! [`Hash`](std::hash::Hash) for that purpose would leak a very narrow meaning of "equal" into the
//! rest of a program. The collections in [`collections::hash`] ask for a
//! [`Hashable`](collections::hash::Hashable) implementation instead: a pure function from a key
//! to a code (an integer or a string), which is the only thing used to tell keys apart.
//!
//! # Contents
//! - [`HashMap`](collections::hash::HashMap) and [`HashSet`](collections::hash::HashSet), generic
//!   over the code type, with aliases for the integer and string domains.
//! - [`SimpleSet`](collections::simple::SimpleSet), a set using natural equality.
//! - The [`Set`](collections::traits::Set) trait, which provides set algebra for both kinds of set.
//! - Free functions comparing std slices and maps in [`collections::primitive`].
//!
//! # Collisions
//! Two keys with the same code are the same key as far as these collections are concerned. There
//! is no chaining or probing between logically distinct keys: the last write wins. This is the
//! intended behaviour, not a limitation that will be lifted later.
//!
//! # Error Handling
//! Every operation is total. Absence is reported with an [`Option`] or a [`bool`], and the few
//! methods that return a [`Result`] do so with strongly typed, zero-sized errors that implement
//! [`Error`](std::error::Error).
//!
//! # Features
//! Each family of collections sits behind a Cargo feature (`hash`, `simple`, `primitive` and
//! `traits`), all of which are enabled by default through `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
