use std::{fmt, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A [`Collector`] that expands each item into zero or more items before collecting them.
///
/// Built with [`nested()`](crate::func::nested) as the expander, an item whose nested
/// collection is absent contributes nothing and does not stop the collector.
///
/// This `struct` is created by [`CollectorBase::flat_map()`]. See its documentation for more.
#[derive(Clone)]
pub struct FlatMap<C, F> {
    collector: C,
    expand: F,
}

impl<C, F> FlatMap<C, F> {
    pub(in crate::collector) fn new(collector: C, expand: F) -> Self {
        Self { collector, expand }
    }
}

impl<C, F> CollectorBase for FlatMap<C, F>
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

impl<C, T, I, F> Collector<T> for FlatMap<C, F>
where
    C: Collector<I::Item>,
    F: FnMut(T) -> I,
    I: IntoIterator,
{
    /// Stops in the middle of the expanded items if the underlying collector does.
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let expanded = (self.expand)(item);
        self.collector.collect_many(expanded)
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let Self { collector, expand } = self;
        collector.collect_many(items.into_iter().flat_map(expand))
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self { collector, expand } = self;
        collector.collect_then_finish(items.into_iter().flat_map(expand))
    }
}

impl<C: fmt::Debug, F> fmt::Debug for FlatMap<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("collector", &self.collector)
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::option::of as propoption;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::func::nested;
    use crate::prelude::*;
    use crate::test_utils::{CollectorTester, Expectation};

    proptest! {
        /// Precondition:
        /// - [`crate::collector::CollectorBase::take()`]
        /// - [`crate::func::nested()`]
        /// - [`crate::vec::IntoCollector`]
        #[test]
        fn all_collect_methods(
            rows in propvec(propoption(propvec(any::<i32>(), ..=3)), ..=4),
            take_count in ..=10_usize,
        ) {
            all_collect_methods_impl(rows, take_count)?;
        }
    }

    fn all_collect_methods_impl(rows: Vec<Option<Vec<i32>>>, take_count: usize) -> TestCaseResult {
        let flat_len = rows.iter().flatten().flatten().count();

        CollectorTester {
            iter_factory: || rows.iter(),
            collector_factory: || {
                vec![]
                    .into_collector()
                    .take(take_count)
                    .flat_map(nested(present))
            },
            expectation: || Expectation {
                output: rows.iter().flatten().flatten().take(take_count).collect::<Vec<_>>(),
                consumed: rows_consumed(&rows, take_count),
                should_break: flat_len >= take_count,
            },
        }
        .test_collector()
    }

    fn present(row: &Option<Vec<i32>>) -> Option<&Vec<i32>> {
        row.as_ref()
    }

    /// How many rows are pulled before `take_count` nested items are seen.
    fn rows_consumed(rows: &[Option<Vec<i32>>], take_count: usize) -> usize {
        if take_count == 0 {
            return 0;
        }

        let mut seen = 0;
        for (idx, row) in rows.iter().enumerate() {
            seen += row.as_ref().map_or(0, Vec::len);
            if seen >= take_count {
                return idx + 1;
            }
        }

        rows.len()
    }
}
