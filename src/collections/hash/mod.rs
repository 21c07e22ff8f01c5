//! Collections which identify keys by a code derived through [`Hashable`], rather than through the
//! keys' own equality.
//!
//! Both [`HashMap`] and [`HashSet`] are generic over the code type, which defaults to [`i64`].
//! The integer and string domains have aliases of their own: [`IntHashMap`], [`StringHashMap`],
//! [`IntHashSet`] and [`StringHashSet`].

pub mod hashable;
pub mod map;
pub mod set;

#[doc(inline)]
pub use hashable::{HashCode, Hashable, IntHashable, StringHashable};
#[doc(inline)]
pub use map::{HashMap, IntHashMap, StringHashMap};
#[doc(inline)]
pub use set::{HashSet, IntHashSet, StringHashSet};
