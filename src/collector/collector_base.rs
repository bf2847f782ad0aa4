use std::ops::ControlFlow;

use super::{FlatMap, Take};

/// The item-independent half of a collector.
///
/// It owns everything that does not mention the collected item type:
/// producing the final [`Output`](CollectorBase::Output), reporting whether the
/// collector has stopped, and the adaptors that do not touch items.
///
/// Every [`Collector`](super::Collector) is a `CollectorBase`.
pub trait CollectorBase {
    /// The result this collector yields, via the [`finish`](CollectorBase::finish) method.
    type Output;

    /// Consumes the collector and returns the accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let mut collector = vec![].into_collector();
    /// let _ = collector.collect(1);
    ///
    /// assert_eq!(collector.finish(), [1]);
    /// ```
    fn finish(self) -> Self::Output;

    /// Returns [`Break(())`] if the collector has stopped accumulating,
    /// without feeding it an item.
    ///
    /// Callers may check this before pulling from an iterator so that no item is
    /// lost to a collector that would refuse it anyway.
    /// The default implementation always returns [`Continue(())`].
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Creates a collector that stops accumulating after collecting the first `n` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let mut collector = vec![].into_collector().take(2);
    ///
    /// assert!(collector.collect(1).is_continue());
    /// assert!(collector.collect(2).is_break());
    ///
    /// assert_eq!(collector.finish(), [1, 2]);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_collector_base(Take::new(self, n))
    }

    /// Creates a collector that collects every element of each item, where the
    /// item is turned into an iterable by a closure first.
    ///
    /// Pairs naturally with [`nested()`](crate::func::nested), which turns an extractor
    /// of an optional collection into exactly such a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::{prelude::*, func::nested};
    ///
    /// let rows = [Some(vec![1, 2]), None, Some(vec![3])];
    /// let flat = rows
    ///     .into_iter()
    ///     .feed_into(vec![].into_collector().flat_map(nested(|row: Option<Vec<i32>>| row)));
    ///
    /// assert_eq!(flat, [1, 2, 3]);
    /// ```
    #[inline]
    fn flat_map<F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
    {
        assert_collector_base(FlatMap::new(self, f))
    }
}

#[inline(always)]
fn assert_collector_base<C>(collector: C) -> C
where
    C: CollectorBase,
{
    collector
}
