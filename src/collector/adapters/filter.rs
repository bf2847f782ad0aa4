use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A [`Collector`] that uses a closure to determine whether an item should be collected.
///
/// This `struct` is created by [`Collector::filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<C, F> {
    collector: C,
    pred: F,
}

impl<C, F> Filter<C, F> {
    pub(in crate::collector) fn new(collector: C, pred: F) -> Self {
        Self { collector, pred }
    }
}

impl<C, F> CollectorBase for Filter<C, F>
where
    C: CollectorBase,
{
    type Output = C::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.collector.finish()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.collector.break_hint()
    }
}

impl<C, T, F> Collector<T> for Filter<C, F>
where
    C: Collector<T>,
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if (self.pred)(&item) {
            self.collector.collect(item)
        } else {
            // A rejected item says nothing about whether the collector stopped.
            ControlFlow::Continue(())
        }
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.collector
            .collect_many(items.into_iter().filter(&mut self.pred))
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.collector
            .collect_then_finish(items.into_iter().filter(self.pred))
    }
}

impl<C: Debug, F> Debug for Filter<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("collector", &self.collector)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::func::testing;
    use crate::prelude::*;
    use crate::test_utils::{CollectorTester, Expectation};

    proptest! {
        /// Precondition:
        /// - [`crate::collector::CollectorBase::take()`]
        /// - [`crate::vec::IntoCollector`]
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=6),
            take_count in ..=4_usize,
        ) {
            all_collect_methods_impl(nums, take_count)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        let is_even = |num: &i32| num % 2 == 0;

        CollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || {
                vec![]
                    .into_collector()
                    .take(take_count)
                    .filter(testing(|&num: &i32| num.rem_euclid(2), |rem| rem == 0))
            },
            expectation: || {
                let evens = nums.iter().filter(|num| is_even(num)).count();
                // Position right after the `take_count`-th even number.
                let consumed = if take_count == 0 {
                    0
                } else {
                    nums.iter()
                        .enumerate()
                        .filter(|(_, num)| is_even(num))
                        .nth(take_count - 1)
                        .map_or(nums.len(), |(idx, _)| idx + 1)
                };

                Expectation {
                    output: nums.iter().copied().filter(is_even).take(take_count).collect::<Vec<_>>(),
                    consumed,
                    should_break: evens >= take_count,
                }
            },
        }
        .test_collector()
    }
}
