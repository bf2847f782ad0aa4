use std::iter::FusedIterator;

use crate::error::MissingExtractor;

/// Turns an extractor of a possibly missing nested collection into a flat-mapper.
///
/// The returned function yields a [`Nested`] iterator: empty when the extractor
/// returns [`None`], otherwise exactly the items of the nested collection, in order.
/// Nothing is copied. Extracting a borrowed collection yields references.
///
/// Use it with [`Iterator::flat_map()`] or [`CollectorBase::flat_map()`].
///
/// # Examples
///
/// ```
/// use collect_kit::func::nested;
///
/// struct Order {
///     lines: Option<Vec<u32>>,
/// }
///
/// let orders = [
///     Order { lines: Some(vec![3, 1]) },
///     Order { lines: None },
///     Order { lines: Some(vec![]) },
///     Order { lines: Some(vec![7]) },
/// ];
///
/// let lines: Vec<u32> = orders
///     .into_iter()
///     .flat_map(nested(|order: Order| order.lines))
///     .collect();
///
/// assert_eq!(lines, [3, 1, 7]);
/// ```
///
/// [`CollectorBase::flat_map()`]: crate::collector::CollectorBase::flat_map
#[inline]
pub fn nested<E, C, F>(mut extractor: F) -> impl FnMut(E) -> Nested<C::IntoIter>
where
    F: FnMut(E) -> Option<C>,
    C: IntoIterator,
{
    move |element| Nested::from(extractor(element))
}

/// Like [`nested()`], but the extractor itself may be absent.
///
/// Building the flat-mapper always succeeds. Each call fails with [`MissingExtractor`]
/// if there is no extractor, so an empty input never reports it.
///
/// # Examples
///
/// ```
/// use collect_kit::error::MissingExtractor;
/// use collect_kit::func::try_nested;
///
/// let rows = [Some(vec![1, 2]), None, Some(vec![3])];
///
/// let flat: Result<Vec<_>, _> = rows
///     .iter()
///     .map(try_nested(Some(Option::as_ref)))
///     .collect();
/// assert_eq!(flat.unwrap().into_iter().flatten().collect::<Vec<_>>(), [&1, &2, &3]);
///
/// let extractor: Option<fn(&Option<Vec<i32>>) -> Option<&Vec<i32>>> = None;
/// let mut flat_mapper = try_nested(extractor);
/// assert_eq!(flat_mapper(&rows[0]).unwrap_err(), MissingExtractor);
/// ```
pub fn try_nested<E, C, F>(
    mut extractor: Option<F>,
) -> impl FnMut(E) -> Result<Nested<C::IntoIter>, MissingExtractor>
where
    F: FnMut(E) -> Option<C>,
    C: IntoIterator,
{
    move |element| {
        let extractor = extractor.as_mut().ok_or(MissingExtractor)?;
        Ok(Nested::from(extractor(element)))
    }
}

/// An iterator over a nested collection that may be absent.
///
/// This `struct` is created by the flat-mapper of [`nested()`], or from an
/// `Option` of any [`IntoIterator`].
#[derive(Debug, Clone)]
pub struct Nested<I> {
    inner: Option<I>,
}

impl<I> Nested<I> {
    /// An iterator with nothing to yield.
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if the nested collection was absent.
    ///
    /// A present but empty collection is not absent.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<C: IntoIterator> From<Option<C>> for Nested<C::IntoIter> {
    #[inline]
    fn from(collection: Option<C>) -> Self {
        Self {
            inner: collection.map(IntoIterator::into_iter),
        }
    }
}

impl<I> Default for Nested<I> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: Iterator> Iterator for Nested<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }

    #[inline]
    fn fold<B, G>(self, init: B, f: G) -> B
    where
        G: FnMut(B, Self::Item) -> B,
    {
        match self.inner {
            Some(inner) => inner.fold(init, f),
            None => init,
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Nested<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Nested<I> {}

impl<I: FusedIterator> FusedIterator for Nested<I> {}
