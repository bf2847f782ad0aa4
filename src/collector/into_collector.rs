use super::{Collector, CollectorBase};

/// Conversion into a [`CollectorBase`].
///
/// By implementing this trait for a type, you define how it will be converted to a collector.
/// Every collector converts into itself.
///
/// # Usage in trait bounds
///
/// Prefer [`IntoCollector`], which additionally pins the item type.
pub trait IntoCollectorBase {
    /// The output of the collector.
    type Output;

    /// Which collector being produced?
    type IntoCollector: CollectorBase<Output = Self::Output>;

    /// Creates a collector from a value.
    fn into_collector(self) -> Self::IntoCollector;
}

impl<C> IntoCollectorBase for C
where
    C: CollectorBase,
{
    type Output = C::Output;

    type IntoCollector = C;

    #[inline]
    fn into_collector(self) -> Self::IntoCollector {
        self
    }
}

/// Conversion into a [`Collector`] of `T`.
///
/// Using `IntoCollector` in trait bounds allows a function to be generic over both
/// [`Collector`] and types convertible into one, such as [`Vec`].
/// Callers then do not have to make an extra call to
/// [`IntoCollectorBase::into_collector()`].
///
/// This trait is implemented automatically and cannot be implemented directly.
/// Implement [`IntoCollectorBase`] instead.
pub trait IntoCollector<T>: IntoCollectorBase<IntoCollector: Collector<T>> {}

impl<C, T> IntoCollector<T> for C where C: IntoCollectorBase<IntoCollector: Collector<T>> {}
