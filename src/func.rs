//! Combinators over function-valued values.
//!
//! - [`nested()`] turns "get the nested collection, if any" into a flat-mapper.
//! - [`testing()`] turns "get a key" plus "test the key" into a predicate on the whole item.
//! - [`function()`], [`predicate()`], [`consumer()`] and [`always_none()`] pin a closure
//!   to a named shape. They do nothing at runtime, but give the compiler the signature
//!   up front so that an unannotated closure can use its argument right away.
//!
//! ```
//! use collect_kit::func::predicate;
//!
//! let is_blank = predicate::<str, _>(|line| line.trim().is_empty());
//!
//! let lines = ["a", "  ", "b", ""];
//! assert_eq!(lines.iter().filter(|line| is_blank(line)).count(), 2);
//! ```

mod nested;
mod testing;

pub use nested::*;
pub use testing::*;

/// Returns `f` unchanged, typed as a function from `T` to `R`.
///
/// The function must not need mutable state, so the result can be called through a
/// shared reference.
///
/// # Examples
///
/// ```
/// use collect_kit::func::function;
///
/// let shout = function::<&str, _, _>(|word| word.to_uppercase());
///
/// assert_eq!(["hi", "yo"].map(shout), ["HI", "YO"]);
/// ```
#[inline]
pub const fn function<T, R, F>(f: F) -> F
where
    F: Fn(T) -> R,
{
    f
}

/// Returns `f` unchanged, typed as a predicate on `&T`.
///
/// The predicate works for any borrow lifetime, which an unannotated closure stored
/// in a variable would not. Like [`function()`], it must not need mutable state.
#[inline]
pub const fn predicate<T, F>(f: F) -> F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    f
}

/// Returns `f` unchanged, typed as a consumer of `T`.
///
/// # Examples
///
/// ```
/// use collect_kit::func::consumer;
///
/// let mut total = 0;
/// [1, 2, 3].into_iter().for_each(consumer::<i32, _>(|num| total += num));
///
/// assert_eq!(total, 6);
/// ```
#[inline]
pub const fn consumer<T, F>(f: F) -> F
where
    F: FnMut(T),
{
    f
}

/// A function that ignores its argument and returns [`None`].
///
/// Handy as an extractor that never finds anything, e.g. with [`nested()`].
///
/// # Examples
///
/// ```
/// use collect_kit::func::{always_none, nested};
///
/// let flat: Vec<u8> = [1, 2]
///     .into_iter()
///     .flat_map(nested(always_none::<i32, Vec<u8>>()))
///     .collect();
///
/// assert!(flat.is_empty());
/// ```
#[inline]
pub fn always_none<T, R>() -> impl Fn(T) -> Option<R> + Copy {
    |_| None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_sugar_keeps_behavior() {
        let double = function::<i32, _, _>(|num| num * 2);
        assert_eq!(double(21), 42);

        let is_short = predicate::<str, _>(|word| word.len() < 3);
        assert!(is_short("ab"));
        assert!(!is_short("abc"));

        let lines = ["x", " ", ""];
        let short = lines.iter().filter(|line| is_short(line.trim())).count();
        assert_eq!(short, 3);
        let by_ref = &double;
        assert_eq!(by_ref(-1), -2);

        let mut seen = 0;
        let mut count = consumer::<char, _>(|_| seen += 1);
        count('a');
        count('b');
        assert_eq!(seen, 2);

        let none = always_none::<&str, u8>();
        assert_eq!(none("anything"), None);
        assert_eq!(none(""), None);
    }
}
