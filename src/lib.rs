//! Small helpers for working with first-class functions and collection pipelines.
//!
//! The crate has two halves that share nothing but vocabulary:
//!
//! - [`func`]: combinators over function-valued values. [`nested()`](func::nested)
//!   turns an extractor of a *possibly missing* nested collection into a flat-mapper,
//!   [`testing()`](func::testing) builds a predicate over a derived key, and a few
//!   identity helpers pin a closure to a named function shape.
//! - [`map`]: collecting records into a lookup table with [`UniqueMap`](map::UniqueMap),
//!   which fails loudly when two records produce the same key instead of silently
//!   overwriting one of them.
//!
//! # Motivation
//!
//! Collecting into a map with [`Iterator::collect`] keeps the *last* value of a duplicated key
//! and tells nobody:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let map: HashMap<_, _> = [("a", 1), ("a", 2)].into_iter().collect();
//! assert_eq!(map["a"], 2); // Where did `1` go?
//! ```
//!
//! This crate's way:
//!
//! ```
//! use std::collections::HashMap;
//! use collect_kit::prelude::*;
//!
//! let result = [("a", 1), ("a", 2)]
//!     .into_iter()
//!     .collect_unique_map(|&(key, _)| key, |(_, value)| value, HashMap::new);
//!
//! assert_eq!(result.unwrap_err().into_key(), "a");
//! ```
//!
//! The map is produced by a factory, so the *mapping* decides what "same key" means.
//! A case-insensitive map treats `"a"` and `"A"` as duplicates:
//!
//! ```
//! use collect_kit::{prelude::*, cmp::CaseInsensitive, map::SortedMap};
//!
//! let result = ["B", "a", "A"]
//!     .into_iter()
//!     .collect_unique_map(
//!         |name| name.to_string(),
//!         |name| name.len(),
//!         || SortedMap::with_comparator(CaseInsensitive),
//!     );
//!
//! assert_eq!(result.unwrap_err().key(), "A");
//! ```
//!
//! Flattening optional nested collections is the other common chore:
//!
//! ```
//! use collect_kit::func::nested;
//!
//! struct Warehouse {
//!     widgets: Option<Vec<&'static str>>,
//! }
//!
//! impl Warehouse {
//!     fn widgets(&self) -> Option<&Vec<&'static str>> {
//!         self.widgets.as_ref()
//!     }
//! }
//!
//! let warehouses = [
//!     Warehouse { widgets: Some(vec!["a", "b"]) },
//!     Warehouse { widgets: Some(vec!["c"]) },
//!     Warehouse { widgets: None },
//! ];
//!
//! let widgets: Vec<_> = warehouses.iter().flat_map(nested(Warehouse::widgets)).collect();
//! assert_eq!(widgets, [&"a", &"b", &"c"]);
//! ```
//!
//! # Collector
//!
//! [`UniqueMap`](map::UniqueMap) is a [`Collector`](collector::Collector): the "sink half"
//! of a pipeline. It can be fed item by item, or composed with the adaptors in
//! [`collector`] before an iterator drives it through [`IteratorExt::feed_into`](iter::IteratorExt::feed_into).
//! A collector returns [`ControlFlow::Break`](core::ops::ControlFlow::Break) once it will not
//! accept more items, which is how a duplicate key stops the fold on the spot.
//!
//! # Features
//!
//! - `std` (default): implementations for [`HashMap`](std::collections::HashMap).
//! - `alloc`: [`SortedMap`](map::SortedMap), [`BTreeMap`](alloc::collections::BTreeMap)
//!   and [`Vec`] support.
//!
//! Without either, everything else works in `core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod cmp;
pub mod collector;
pub mod error;
pub mod func;
pub mod iter;
pub mod map;
pub mod prelude;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod vec;

#[cfg(all(test, feature = "std"))]
mod test_utils;
