//! Extensions to [`Iterator`] for driving [`Collector`](crate::collector::Collector)s.

mod iterator_ext;

pub use iterator_ext::*;
