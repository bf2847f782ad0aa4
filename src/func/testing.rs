use crate::error::{MissingArgument, require};

/// Builds a predicate that tests a key derived from the item.
///
/// The result evaluates `pred(key_fn(item))`. Keys get no special treatment:
/// if `key_fn` returns an `Option`, `pred` decides what `None` means.
///
/// # Examples
///
/// ```
/// use collect_kit::func::testing;
///
/// let words = ["apple", "fig", "kiwi", "plum"];
/// let short: Vec<_> = words
///     .into_iter()
///     .filter(testing(|word: &&str| word.len(), |len| len <= 4))
///     .collect();
///
/// assert_eq!(short, ["fig", "kiwi", "plum"]);
/// ```
#[inline]
pub fn testing<T, K, F, P>(mut key_fn: F, mut pred: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    F: FnMut(&T) -> K,
    P: FnMut(K) -> bool,
{
    move |item| pred(key_fn(item))
}

/// Like [`testing()`], but either argument may be absent.
///
/// Fails right away with a [`MissingArgument`] naming `key_fn` or `pred`, checked in
/// that order, before any item is tested.
///
/// # Examples
///
/// ```
/// use collect_kit::func::try_testing;
///
/// let key_fn: Option<fn(&u32) -> u32> = Some(|num| num % 10);
/// let pred: Option<fn(u32) -> bool> = None;
///
/// assert_eq!(try_testing(key_fn, pred).err().map(|err| err.name()), Some("pred"));
/// ```
pub fn try_testing<T, K, F, P>(
    key_fn: Option<F>,
    pred: Option<P>,
) -> Result<impl FnMut(&T) -> bool, MissingArgument>
where
    T: ?Sized,
    F: FnMut(&T) -> K,
    P: FnMut(K) -> bool,
{
    let key_fn = require(key_fn, "key_fn")?;
    let pred = require(pred, "pred")?;

    Ok(testing(key_fn, pred))
}
