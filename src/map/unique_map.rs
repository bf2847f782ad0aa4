use std::fmt::{self, Debug};
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase};
use crate::error::{DuplicateKey, MissingArgument, require};

use super::UniqueInsert;

/// A [`Collector`] that folds records into a mapping, one entry per record,
/// and stops at the first duplicate key.
///
/// Each record is split into a key (by `key_fn`, looking at the record) and a value
/// (by `value_fn`, consuming it). The mapping comes from a caller-supplied factory
/// and decides which keys are equal.
///
/// Its [`Output`] is `Result<M, DuplicateKey<K>>`: the mapping if no duplicate was seen,
/// or the rejected key otherwise. The partially filled mapping is dropped on failure.
///
/// Once a duplicate is seen, the collector stops accumulating and keeps returning
/// [`Break`] for any further item.
///
/// Most of the time [`IteratorExt::collect_unique_map()`] is more convenient.
/// Use this type directly to compose it with other [`Collector`] adaptors.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collect_kit::prelude::*;
/// use collect_kit::map::UniqueMap;
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let users = [
///     User { id: 1, name: "ann" },
///     User { id: 0, name: "anonymous" },
///     User { id: 2, name: "bob" },
/// ];
///
/// let by_id = users.into_iter().feed_into(
///     UniqueMap::new(|user: &User| user.id, |user: User| user.name, HashMap::new)
///         .filter(|user: &User| user.id != 0),
/// );
///
/// assert_eq!(by_id.unwrap(), HashMap::from([(1, "ann"), (2, "bob")]));
/// ```
///
/// [`Output`]: CollectorBase::Output
/// [`Break`]: ControlFlow::Break
/// [`IteratorExt::collect_unique_map()`]: crate::iter::IteratorExt::collect_unique_map
pub struct UniqueMap<M: UniqueInsert, FK, FV> {
    map: M,
    key_fn: FK,
    value_fn: FV,
    duplicate: Option<DuplicateKey<M::Key>>,
}

impl<M, FK, FV> UniqueMap<M, FK, FV>
where
    M: UniqueInsert,
{
    /// Creates a new instance of this collector.
    ///
    /// The factory is called right away to create the empty mapping.
    #[inline]
    pub fn new<MF>(key_fn: FK, value_fn: FV, map_factory: MF) -> Self
    where
        MF: FnOnce() -> M,
    {
        Self {
            map: map_factory(),
            key_fn,
            value_fn,
            duplicate: None,
        }
    }

    /// Creates a new instance of this collector from arguments that may be absent.
    ///
    /// Fails with a [`MissingArgument`] naming the first absent one, checked in the
    /// order `key_fn`, `value_fn`, `map_factory`. The factory is not called then.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use collect_kit::map::UniqueMap;
    ///
    /// let value_fn: Option<fn(u8) -> u8> = None;
    /// let err = UniqueMap::try_new(Some(|n: &u8| *n), value_fn, Some(HashMap::<u8, u8>::new))
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.name(), "value_fn");
    /// ```
    pub fn try_new<MF>(
        key_fn: Option<FK>,
        value_fn: Option<FV>,
        map_factory: Option<MF>,
    ) -> Result<Self, MissingArgument>
    where
        MF: FnOnce() -> M,
    {
        let key_fn = require(key_fn, "key_fn")?;
        let value_fn = require(value_fn, "value_fn")?;
        let map_factory = require(map_factory, "map_factory")?;

        Ok(Self::new(key_fn, value_fn, map_factory))
    }
}

impl<M, FK, FV> CollectorBase for UniqueMap<M, FK, FV>
where
    M: UniqueInsert,
{
    type Output = Result<M, DuplicateKey<M::Key>>;

    #[inline]
    fn finish(self) -> Self::Output {
        match self.duplicate {
            Some(err) => Err(err),
            None => Ok(self.map),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.duplicate.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, M, FK, FV> Collector<T> for UniqueMap<M, FK, FV>
where
    M: UniqueInsert,
    FK: FnMut(&T) -> M::Key,
    FV: FnMut(T) -> M::Value,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.break_hint()?;

        let key = (self.key_fn)(&item);
        match self.map.insert_unique(key, (self.value_fn)(item)) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.duplicate = Some(err);
                ControlFlow::Break(())
            }
        }
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self {
            mut map,
            mut key_fn,
            mut value_fn,
            duplicate,
        } = self;

        if let Some(err) = duplicate {
            return Err(err);
        }

        items.into_iter().try_for_each(|item| {
            let key = key_fn(&item);
            map.insert_unique(key, value_fn(item))
        })?;

        Ok(map)
    }
}

impl<M, FK, FV> Debug for UniqueMap<M, FK, FV>
where
    M: UniqueInsert + Debug,
    M::Key: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueMap")
            .field("map", &self.map)
            .field("duplicate", &self.duplicate)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::collections::HashMap;
    use std::thread;

    use crate::cmp::CaseInsensitive;
    use crate::error::DuplicateKey;
    use crate::func::{nested, testing};
    use crate::map::{SortedMap, UniqueMap, merge_unique};
    use crate::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        name: Option<String>,
        weight: u32,
    }

    impl Widget {
        fn named(name: &str, weight: u32) -> Self {
            Self {
                name: Some(name.to_owned()),
                weight,
            }
        }

        fn key(&self) -> String {
            self.name.clone().unwrap_or_default()
        }
    }

    struct Warehouse {
        widgets: Option<Vec<Widget>>,
    }

    impl Warehouse {
        fn widgets(&self) -> Option<&Vec<Widget>> {
            self.widgets.as_ref()
        }
    }

    #[test]
    fn case_insensitive_keys_are_looked_up_in_any_case() {
        let widgets = [Widget::named("a", 1), Widget::named("B", 2)];

        let map = widgets
            .iter()
            .collect_unique_map(
                |widget| widget.key(),
                |widget| widget,
                || SortedMap::with_comparator(CaseInsensitive),
            )
            .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some(&&widgets[0]));
        assert_eq!(map.get("a"), Some(&&widgets[0]));
        assert_eq!(map.get("b"), Some(&&widgets[1]));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "B"]);
    }

    #[test]
    fn case_insensitive_keys_collide() {
        let widgets = [
            Widget::named("B", 1),
            Widget::named("a", 2),
            Widget::named("A", 3),
        ];

        let err = widgets
            .into_iter()
            .collect_unique_map(
                Widget::key,
                |widget| widget.weight,
                || SortedMap::with_comparator(CaseInsensitive),
            )
            .unwrap_err();

        assert_eq!(err, DuplicateKey::new("A".to_owned()));
    }

    #[test]
    fn stops_reading_after_the_duplicate() {
        let mut seen = 0;
        let err = (0..100)
            .inspect(|_| seen += 1)
            .collect_unique_map(|num| num % 7, |num| num, HashMap::new)
            .unwrap_err();

        assert_eq!(err.into_key(), 0);
        assert_eq!(seen, 8);
    }

    #[test]
    fn stays_broken_after_the_duplicate() {
        let mut collector = UniqueMap::new(|num: &i32| num % 2, |num: i32| num, HashMap::new);

        assert!(collector.collect(1).is_continue());
        assert!(collector.collect(3).is_break());
        assert!(collector.collect(2).is_break());
        assert!(collector.break_hint().is_break());
        assert_eq!(collector.finish(), Err(DuplicateKey::new(1)));
    }

    #[test]
    fn empty_input_gives_an_empty_map() {
        let map = std::iter::empty::<(u8, u8)>()
            .collect_unique_map(|&(key, _)| key, |(_, value)| value, HashMap::new)
            .unwrap();

        assert!(map.is_empty());
    }

    #[test]
    fn flattened_warehouses_into_a_filtered_map() {
        let warehouses = [
            Warehouse {
                widgets: Some(vec![Widget::named("bolt", 3), Widget::named("nut", 1)]),
            },
            Warehouse { widgets: None },
            Warehouse {
                widgets: Some(vec![Widget::named("gear", 9)]),
            },
        ];

        let heavy = warehouses.iter().feed_into(
            UniqueMap::new(
                |widget: &&Widget| widget.key(),
                |widget: &Widget| widget.weight,
                HashMap::new,
            )
            .filter(testing(|widget: &&Widget| widget.weight, |weight| weight > 2))
            .flat_map(nested(Warehouse::widgets)),
        );

        assert_eq!(
            heavy.unwrap(),
            HashMap::from([("bolt".to_owned(), 3), ("gear".to_owned(), 9)])
        );
    }

    #[test]
    fn try_new_names_the_first_missing_argument() {
        type KeyFn = fn(&Widget) -> String;
        type ValueFn = fn(Widget) -> u32;
        type Factory = fn() -> HashMap<String, u32>;

        let err = UniqueMap::try_new(None::<KeyFn>, None::<ValueFn>, None::<Factory>).unwrap_err();
        assert_eq!(err.name(), "key_fn");

        let err = UniqueMap::try_new(
            Some(Widget::key as KeyFn),
            Some((|widget: Widget| widget.weight) as ValueFn),
            None::<Factory>,
        )
        .unwrap_err();
        assert_eq!(err.name(), "map_factory");

        let map = UniqueMap::try_new(
            Some(Widget::key as KeyFn),
            Some((|widget: Widget| widget.weight) as ValueFn),
            Some(HashMap::new as Factory),
        )
        .unwrap()
        .collect_then_finish([Widget::named("x", 4)])
        .unwrap();
        assert_eq!(map, HashMap::from([("x".to_owned(), 4)]));
    }

    #[test]
    fn parallel_partitions_merge_like_a_sequential_fold() {
        let ids: Vec<u32> = (0..64).collect();

        let partial = |chunk: &[u32]| {
            chunk
                .iter()
                .collect_unique_map(|&&id| id, |&id| id * 2, HashMap::new)
        };

        let merged = thread::scope(|scope| {
            let (left, right) = ids.split_at(ids.len() / 2);
            let left = scope.spawn(|| partial(left));
            let right = scope.spawn(|| partial(right));
            let (left, right) = (left.join().unwrap(), right.join().unwrap());
            merge_unique(left.unwrap(), right.unwrap())
        })
        .unwrap();

        assert_eq!(merged, partial(&ids).unwrap());

        let (left, right) = (partial(&ids[..40]), partial(&ids[30..]));
        let shared = merge_unique(left.unwrap(), right.unwrap())
            .unwrap_err()
            .into_key();
        assert!((30..40).contains(&shared));
    }
}
