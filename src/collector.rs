//! Module contains traits and `struct`s for collectors.
//!
//! A collector is the "sink half" of a pipeline: where an [`Iterator`] describes
//! *how to produce* items, a [`Collector`] describes *how to consume* them.
//!
//! # Unspecified behaviors
//!
//! Unless stated otherwise by the collector's implementation, after any of
//! [`Collector::collect()`], [`Collector::collect_many()`], or
//! [`CollectorBase::break_hint()`] have returned [`Break(())`] once,
//! behaviors of subsequent calls to any method other than
//! [`finish()`](CollectorBase::finish) are unspecified.
//! Callers should generally call [`finish()`](CollectorBase::finish) once a collector
//! has signaled a stop. [`UniqueMap`](crate::map::UniqueMap) is an exception: it keeps
//! returning [`Break(())`] after a duplicate key.
//!
//! # Limitations and workarounds
//!
//! In some cases, you may need to explicitly annotate the parameter types in closures,
//! especially for adaptors that take generic functions.
//! This is due to current limitations in Rust's type inference for closure parameters.
//!
//! # Example
//!
//! Suppose we are indexing words of a text and only care about how often each
//! distinct word shows up.
//!
//! ```
//! use std::{collections::BTreeMap, ops::ControlFlow};
//! use collect_kit::prelude::*;
//!
//! #[derive(Default)]
//! struct WordCount {
//!     counts: BTreeMap<String, usize>,
//! }
//!
//! impl CollectorBase for WordCount {
//!     type Output = BTreeMap<String, usize>;
//!
//!     fn finish(self) -> Self::Output {
//!         self.counts
//!     }
//! }
//!
//! impl Collector<&str> for WordCount {
//!     fn collect(&mut self, word: &str) -> ControlFlow<()> {
//!         *self.counts.entry(word.to_lowercase()).or_default() += 1;
//!
//!         // Counting never stops.
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let counts = "the noble and The singer"
//!     .split_whitespace()
//!     .feed_into(WordCount::default());
//!
//! assert_eq!(counts["the"], 2);
//! assert_eq!(counts.len(), 4);
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

mod adapters;
#[allow(clippy::module_inception)]
mod collector;
mod collector_base;
mod into_collector;

pub use adapters::*;
pub use collector::*;
pub use collector_base::*;
pub use into_collector::*;

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
