//! Error types returned by this crate.
//!
//! None of them are recovered from internally. They are handed back to the caller as
//! the `Err` side of a [`Result`], which decides whether to log, translate, or give up.

use thiserror::Error;

/// Two records produced keys that the target mapping considers equal.
///
/// "Equal" is whatever the mapping says: a case-insensitive map reports `"a"` and `"A"`
/// as duplicates while a [`HashMap`](std::collections::HashMap) does not.
///
/// The carried key is the *incoming* one, i.e. the key of the record that was rejected.
/// The entry already present is left untouched.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collect_kit::map::UniqueInsert;
///
/// let mut map = HashMap::new();
/// map.insert_unique("id", 1).unwrap();
///
/// let err = map.insert_unique("id", 2).unwrap_err();
/// assert_eq!(err.key(), &"id");
/// assert_eq!(err.to_string(), r#"duplicate key "id""#);
/// assert_eq!(map["id"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate key {key:?}")]
pub struct DuplicateKey<K> {
    key: K,
}

impl<K> DuplicateKey<K> {
    /// Creates an error for the given colliding key.
    #[inline]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the colliding key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error and returns the colliding key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

/// A required argument was absent when a combinator was built.
///
/// Returned eagerly by the `try_*` constructors, before any element is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required argument `{name}` is missing")]
pub struct MissingArgument {
    name: &'static str,
}

impl MissingArgument {
    #[inline]
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Name of the missing argument.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// A flat-mapper built by [`try_nested()`](crate::func::try_nested) was invoked
/// without an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nested-items extractor is missing")]
pub struct MissingExtractor;

/// Converts an optional argument into a [`Result`], naming it on absence.
#[inline]
pub(crate) fn require<T>(arg: Option<T>, name: &'static str) -> Result<T, MissingArgument> {
    arg.ok_or(MissingArgument::new(name))
}
