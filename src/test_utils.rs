use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::collector::{Collector, CollectorBase};

/// What a collector is expected to do with one run over the input.
#[derive(Debug)]
pub struct Expectation<O> {
    /// Output of the collector after the run.
    pub output: O,
    /// How many items the collector pulls from the input.
    pub consumed: usize,
    /// Whether the collector should have stopped accumulating.
    pub should_break: bool,
}

/// Runs a collector through `collect()`, `collect_many()` and `collect_then_finish()`
/// over fresh copies of the same input and checks all three agree with the expectation.
///
/// The expectation is computed anew for every method so that outputs need not be `Clone`.
/// It is computed from the test's own data, not from the iterator under test.
pub struct CollectorTester<ItFac, ClFac, ExFac> {
    pub iter_factory: ItFac,
    pub collector_factory: ClFac,
    pub expectation: ExFac,
}

impl<ItFac, ClFac, ExFac, I, C> CollectorTester<ItFac, ClFac, ExFac>
where
    I: Iterator,
    C: Collector<I::Item, Output: PartialEq + Debug>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    ExFac: FnMut() -> Expectation<C::Output>,
{
    pub fn test_collector(&mut self) -> TestCaseResult {
        let total = (self.iter_factory)().count();

        // `collect()`
        {
            let expected = (self.expectation)();
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();

            // Simulate the fact that break_hint is used before looping,
            // which is the intended use case.
            let has_stopped = (|| {
                collector.break_hint()?;
                iter.try_for_each(|item| collector.collect(item))
            })()
            .is_break();

            prop_assert_eq!(
                has_stopped,
                expected.should_break,
                "`collect()` didn't break correctly"
            );
            prop_assert_eq!(
                collector.finish(),
                expected.output,
                "`collect()`'s result mismatched"
            );
            prop_assert_eq!(
                iter.count(),
                total - expected.consumed,
                "`collect()` consumed the input incorrectly"
            );
        }

        // `collect_many()`
        {
            let expected = (self.expectation)();
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();

            // No `break_hint()` here: `collect_many()` must check it by itself.
            let has_stopped = collector.collect_many(&mut iter).is_break();

            prop_assert_eq!(
                has_stopped,
                expected.should_break,
                "`collect_many()` didn't break correctly"
            );
            prop_assert_eq!(
                collector.finish(),
                expected.output,
                "`collect_many()`'s result mismatched"
            );
            prop_assert_eq!(
                iter.count(),
                total - expected.consumed,
                "`collect_many()` consumed the input incorrectly"
            );
        }

        // `collect_then_finish()`
        {
            let expected = (self.expectation)();
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();

            prop_assert_eq!(
                collector.collect_then_finish(&mut iter),
                expected.output,
                "`collect_then_finish()`'s result mismatched"
            );
            prop_assert_eq!(
                iter.count(),
                total - expected.consumed,
                "`collect_then_finish()` consumed the input incorrectly"
            );
        }

        Ok(())
    }
}
