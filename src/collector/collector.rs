use std::ops::ControlFlow;

use super::{CollectorBase, Filter, Map};

use crate::collector::assert_collector;

/// Collects items of type `T` and produces a final output.
///
/// On top of [`CollectorBase`], this trait requires one core method:
///
/// - [`collect`](Collector::collect): consumes an item and returns whether the collector continues
///   accumulating further items *after* this operation.
///
/// # Implementing
///
/// For a simple collector, define the output type you want to produce, wrap it in a struct,
/// implement [`CollectorBase`] and then this trait for that struct.
/// You may also override methods like [`collect_many`](Collector::collect_many) for optimizations.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use collect_kit::prelude::*;
///
/// // Sums items until the sum would overflow.
/// #[derive(Default)]
/// struct CheckedSum(u8);
///
/// impl CollectorBase for CheckedSum {
///     type Output = u8;
///
///     fn finish(self) -> Self::Output {
///         self.0
///     }
/// }
///
/// impl Collector<u8> for CheckedSum {
///     fn collect(&mut self, item: u8) -> ControlFlow<()> {
///         match self.0.checked_add(item) {
///             Some(sum) => {
///                 self.0 = sum;
///                 ControlFlow::Continue(())
///             }
///             None => ControlFlow::Break(()),
///         }
///     }
/// }
///
/// let mut items = [100, 100, 100].into_iter();
/// assert_eq!(items.by_ref().feed_into(CheckedSum::default()), 200);
///
/// // The overflowing item was consumed, nothing after it.
/// assert_eq!(items.next(), None);
/// ```
pub trait Collector<T>: CollectorBase {
    /// Collects an item and returns a [`ControlFlow`] indicating whether the collector is "closed"
    /// and will no longer accumulate items **right after** this operation.
    ///
    /// Return [`Continue(())`] to indicate the collector can still accumulate more items,
    /// or [`Break(())`] if it will no longer accumulate from now on and further feeding is meaningless.
    ///
    /// This is analogous to [`Iterator::next`], which returns an item (instead of collecting one)
    /// and signals with [`None`] whenever it finishes.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let mut collector = vec![].into_collector().take(3); // only takes 3 items
    ///
    /// // It has not reached its 3-item quota yet.
    /// assert!(collector.collect(1).is_continue());
    /// assert!(collector.collect(2).is_continue());
    ///
    /// // After collecting `3`, it meets the quota, so it signals `Break` immediately.
    /// assert!(collector.collect(3).is_break());
    ///
    /// assert_eq!(collector.finish(), [1, 2, 3]);
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating whether the collector
    /// is "closed" and will no longer accumulate items **right after** the last possible
    /// item is collected, possibly none are collected.
    ///
    /// No item is pulled from the iterator once the collector has stopped.
    ///
    /// This method can be overridden for optimization.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let mut collector = vec![1, 2].into_collector();
    /// assert!(collector.collect_many([3, 4, 5]).is_continue());
    ///
    /// assert_eq!(collector.finish(), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        self.break_hint()?;

        // Use `try_for_each` instead of `for` loop since the iterator may not be optimal for `for` loop
        // (e.g. `skip`, `chain`, etc.)
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator, consumes the collector, and produces the accumulated result.
    ///
    /// This is equivalent to calling [`collect_many`](Collector::collect_many)
    /// followed by [`finish`](CollectorBase::finish) (which is the default implementation),
    /// but it can be overridden for optimization because the collector will be dropped anyway.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let collector = vec![1, 2].into_collector();
    ///
    /// assert_eq!(collector.collect_then_finish([3, 4, 5]), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        // Do this instead of putting `mut` in `self` since some IDEs
        // just put `mut self` in every generated code.
        let mut this = self;

        // Whether it breaks or not does not matter: either way, we finish.
        let _ = this.collect_many(items);
        this.finish()
    }

    /// Creates a collector that calls a closure on each item before collecting.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let lens = ["a", "bc", "def"]
    ///     .into_iter()
    ///     .feed_into(vec![].into_collector().map(str::len));
    ///
    /// assert_eq!(lens, [1, 2, 3]);
    /// ```
    #[inline]
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(U) -> T,
    {
        assert_collector::<_, U>(Map::new(self, f))
    }

    /// Creates a collector that uses a closure to determine whether an item should be collected.
    ///
    /// Rejected items are consumed and dropped; the collector does not stop because of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_kit::prelude::*;
    ///
    /// let evens = (1..=6).feed_into(vec![].into_collector().filter(|&num: &i32| num % 2 == 0));
    ///
    /// assert_eq!(evens, [2, 4, 6]);
    /// ```
    #[inline]
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&T) -> bool,
    {
        assert_collector::<_, T>(Filter::new(self, pred))
    }
}

impl<C, T> Collector<T> for &mut C
where
    C: Collector<T>,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        C::collect(self, item)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        C::collect_many(self, items)
    }

    // The default implementation for `collect_then_finish()` is sufficient.
}

impl<C> CollectorBase for &mut C
where
    C: CollectorBase,
{
    type Output = ();

    #[inline]
    fn finish(self) -> Self::Output {}

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        C::break_hint(self)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn by_mut_keeps_the_output_with_the_owner() {
        let mut collector = vec![].into_collector();

        let mut iter = [1, 2, 3].into_iter();
        (&mut collector).take(2).collect_then_finish(&mut iter);

        assert_eq!(iter.next(), Some(3));
        assert_eq!(collector.finish(), [1, 2]);
    }

    #[test]
    fn break_hint_prevents_pulling() {
        let mut iter = [1, 2, 3].into_iter();
        let collected = vec![]
            .into_collector()
            .take(0)
            .collect_then_finish(&mut iter);

        assert!(collected.is_empty());
        assert_eq!(iter.count(), 3);
    }
}
