//! Comparators: pluggable total orders over keys.
//!
//! A [`Comparator`] decides both the order of keys and which keys count as *equal*
//! (those comparing [`Equal`](core::cmp::Ordering::Equal)).
//! [`SortedMap`](crate::map::SortedMap) takes one as a policy, so the same record set
//! can be collected case-sensitively or not.

mod comparator;

pub use comparator::*;
