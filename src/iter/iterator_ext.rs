use crate::collector::{Collector, IntoCollector};
use crate::error::DuplicateKey;
use crate::map::{UniqueInsert, UniqueMap};

/// Extends [`Iterator`] with methods for working seamlessly with [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Extracts items from this iterator into the provided collector till
    /// the collector stops accumulating or the iterator is exhausted,
    /// and returns the collector's output.
    ///
    /// Pass `iter.by_ref()` to keep using the iterator afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let mut nums = [4, 2, 6, 3].into_iter();
    /// let firsts = nums.by_ref().feed_into(vec![].into_collector().take(2));
    ///
    /// assert_eq!(firsts, [4, 2]);
    /// assert_eq!(nums.next(), Some(6));
    /// ```
    #[inline]
    fn feed_into<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: IntoCollector<Self::Item>,
    {
        collector.into_collector().collect_then_finish(self)
    }

    /// Collects items into a map built by `map_factory`, keyed by `key_fn` and valued by
    /// `value_fn`, failing on the first key the map already holds.
    ///
    /// This is a shorthand for feeding a [`UniqueMap`]. On failure nothing after the
    /// colliding item is pulled from the iterator, and the partially filled map is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use collect_kit::prelude::*;
    ///
    /// let ages = [("ann", 31), ("bob", 27)]
    ///     .into_iter()
    ///     .collect_unique_map(|&(name, _)| name, |(_, age)| age, BTreeMap::new)
    ///     .unwrap();
    ///
    /// assert_eq!(ages["bob"], 27);
    ///
    /// let mut records = [("ann", 31), ("ann", 32), ("cid", 40)].into_iter();
    /// let err = records
    ///     .by_ref()
    ///     .collect_unique_map(|&(name, _)| name, |(_, age)| age, BTreeMap::new)
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.into_key(), "ann");
    /// assert_eq!(records.next(), Some(("cid", 40)));
    /// ```
    #[inline]
    fn collect_unique_map<K, V, M, FK, FV, MF>(
        self,
        key_fn: FK,
        value_fn: FV,
        map_factory: MF,
    ) -> Result<M, DuplicateKey<K>>
    where
        Self: Sized,
        M: UniqueInsert<Key = K, Value = V>,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
        MF: FnOnce() -> M,
    {
        self.feed_into(UniqueMap::new(key_fn, value_fn, map_factory))
    }
}

impl<I: Iterator> IteratorExt for I {}
