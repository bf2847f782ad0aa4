//! Building lookup tables that reject duplicate keys.
//!
//! The mapping decides what "same key" means. [`UniqueInsert`] is the seam every
//! supported mapping goes through, and [`UniqueMap`] is the [`Collector`] that folds
//! records into one of them.
//!
//! | Mapping | Key equality | Feature |
//! |---|---|---|
//! | [`HashMap`](std::collections::HashMap) | [`Hash`] + [`Eq`] | `std` |
//! | [`BTreeMap`](alloc::collections::BTreeMap) | [`Ord`] | `alloc` |
//! | [`SortedMap`] | any [`Comparator`](crate::cmp::Comparator) | `alloc` |
//!
//! [`Collector`]: crate::collector::Collector

#[cfg(feature = "alloc")]
mod sorted_map;
mod unique_map;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub use sorted_map::*;
pub use unique_map::*;

use crate::error::DuplicateKey;

/// A mapping that can insert an entry only if its key is not present yet.
///
/// Presence is judged by the mapping's own key equality, so a
/// [`SortedMap`] ordered by [`CaseInsensitive`](crate::cmp::CaseInsensitive) rejects
/// `"A"` once `"a"` is in.
///
/// A rejected insertion never touches the entry already there.
pub trait UniqueInsert {
    /// Key type.
    type Key;

    /// Value type.
    type Value;

    /// Inserts the entry, or returns the incoming key if an equal key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use collect_kit::map::UniqueInsert;
    ///
    /// let mut map = BTreeMap::new();
    ///
    /// assert!(map.insert_unique(1, "one").is_ok());
    /// assert_eq!(map.insert_unique(1, "uno").unwrap_err().into_key(), 1);
    /// assert_eq!(map[&1], "one");
    /// ```
    fn insert_unique(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<(), DuplicateKey<Self::Key>>;

    /// Inserts every entry in order, stopping at the first duplicate.
    ///
    /// Entries inserted before the duplicate stay in the mapping.
    #[inline]
    fn extend_unique<I>(&mut self, entries: I) -> Result<(), DuplicateKey<Self::Key>>
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        entries
            .into_iter()
            .try_for_each(|(key, value)| self.insert_unique(key, value))
    }
}

/// Combines two partial mappings, failing if they share a key.
///
/// This is the reduction step when records are split into partitions and each one
/// is collected separately (e.g. one [`UniqueMap`] per thread).
/// The result is the same as collecting all records into one mapping.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collect_kit::map::merge_unique;
///
/// let left = HashMap::from([("a", 1), ("b", 2)]);
/// let right = HashMap::from([("c", 3)]);
/// let merged = merge_unique(left, right).unwrap();
/// assert_eq!(merged.len(), 3);
///
/// let left = HashMap::from([("a", 1)]);
/// let right = HashMap::from([("a", 2)]);
/// assert_eq!(merge_unique(left, right).unwrap_err().into_key(), "a");
/// ```
pub fn merge_unique<M>(mut left: M, right: M) -> Result<M, DuplicateKey<M::Key>>
where
    M: UniqueInsert + IntoIterator<Item = (M::Key, M::Value)>,
{
    left.extend_unique(right)?;
    Ok(left)
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V, S> UniqueInsert for std::collections::HashMap<K, V, S>
where
    K: Eq + core::hash::Hash,
    S: core::hash::BuildHasher,
{
    type Key = K;
    type Value = V;

    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K>> {
        if self.contains_key(&key) {
            return Err(DuplicateKey::new(key));
        }

        self.insert(key, value);
        Ok(())
    }

    fn extend_unique<I>(&mut self, entries: I) -> Result<(), DuplicateKey<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        self.reserve(entries.size_hint().0);
        for (key, value) in entries {
            self.insert_unique(key, value)?;
        }

        Ok(())
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<K: Ord, V> UniqueInsert for alloc::collections::BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K>> {
        if self.contains_key(&key) {
            return Err(DuplicateKey::new(key));
        }

        self.insert(key, value);
        Ok(())
    }
}
