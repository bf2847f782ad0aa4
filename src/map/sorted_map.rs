use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use alloc::vec::{self, Vec};

use crate::cmp::{Comparator, OrdComparator};
use crate::error::DuplicateKey;

use super::UniqueInsert;

/// An ordered map whose key order, and key equality, come from a [`Comparator`].
///
/// Two keys are the same key when the comparator says they are
/// [`Equal`](std::cmp::Ordering::Equal), even if they differ otherwise. With
/// [`CaseInsensitive`](crate::cmp::CaseInsensitive), `"Ann"` and `"ANN"` are one key.
/// The first spelling inserted is the one kept.
///
/// Entries live in a sorted [`Vec`], so lookups are logarithmic and insertions are linear.
///
/// # Examples
///
/// ```
/// use collect_kit::cmp::CaseInsensitive;
/// use collect_kit::map::SortedMap;
///
/// let mut map = SortedMap::with_comparator(CaseInsensitive);
/// map.insert("Bob", 2);
/// map.insert("ann", 1);
///
/// assert_eq!(map.insert("BOB", 3), Some(2));
/// assert_eq!(map.get("ANN"), Some(&1));
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"ann", &1), (&"Bob", &3)]);
/// ```
#[derive(Clone)]
pub struct SortedMap<K, V, C = OrdComparator> {
    entries: Vec<(K, V)>,
    comparator: C,
}

impl<K, V> SortedMap<K, V> {
    /// Creates an empty map ordered by [`Ord`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_comparator(OrdComparator)
    }
}

impl<K, V, C> SortedMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    #[inline]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Returns the comparator of this map.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.entries.iter())
    }

    /// Returns an iterator over the keys in order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the value of the key equal to `key` under the comparator.
    ///
    /// `key` may be any borrowed form of the key type the comparator can compare.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let idx = self.search(key).ok()?;
        Some(&self.entries[idx].1)
    }

    /// Returns `true` if a key equal to `key` under the comparator is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.search(key).is_ok()
    }

    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.entries
            .binary_search_by(|(probe, _)| self.comparator.compare(probe.borrow(), key))
    }
}

impl<K, V, C> SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Inserts an entry, replacing the value of an equal key.
    ///
    /// Returns the replaced value. The key already stored is kept, like
    /// [`BTreeMap::insert()`](alloc::collections::BTreeMap::insert).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(idx) => Some(mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (key, value));
                None
            }
        }
    }
}

impl<K, V, C> UniqueInsert for SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    type Key = K;
    type Value = V;

    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K>> {
        match self.search(&key) {
            Ok(_) => Err(DuplicateKey::new(key)),
            Err(idx) => {
                self.entries.insert(idx, (key, value));
                Ok(())
            }
        }
    }
}

impl<K, V, C: Default> Default for SortedMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Debug, V: Debug, C> Debug for SortedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Extend<(K, V)> for SortedMap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for SortedMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for SortedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a SortedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`SortedMap`], in key order.
///
/// This `struct` is created by [`SortedMap::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V>(slice::Iter<'a, (K, V)>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
