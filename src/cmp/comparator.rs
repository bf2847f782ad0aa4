use std::cmp::Ordering;

/// A total order over `T`, acting as an `Fn(&T, &T) -> Ordering`.
///
/// Any such closure is a comparator, as are [`OrdComparator`] and [`CaseInsensitive`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collect_kit::cmp::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
///
/// assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
/// assert!(by_len.equal(&"ab", &"cd"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Whether `a` and `b` are the same key under this order.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }
}

/// The natural order of [`Ord`] types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<T> Comparator<T> for OrdComparator
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Orders strings ignoring case.
///
/// Strings are compared as their lowercase character sequences, so `"a"` and `"A"`
/// are equal while `"a"` still sorts before `"B"`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collect_kit::cmp::{CaseInsensitive, Comparator};
///
/// assert!(CaseInsensitive.equal("Straße", "STRAßE"));
/// assert_eq!(CaseInsensitive.compare("a", "B"), Ordering::Less);
/// assert_eq!(CaseInsensitive.compare(&String::from("b"), &String::from("A")), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T> Comparator<T> for CaseInsensitive
where
    T: AsRef<str> + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        a.cmp(b)
    }
}

impl<F, T> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
    T: ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn case_insensitive_is_a_total_order() {
        let words = ["b", "A", "a", "B", "ab", "Ab", ""];

        for a in words {
            assert!(CaseInsensitive.equal(a, a));
            for b in words {
                assert_eq!(
                    CaseInsensitive.compare(a, b),
                    CaseInsensitive.compare(b, a).reverse(),
                    "{a:?} vs {b:?}"
                );
            }
        }

        assert_eq!(CaseInsensitive.compare("", "a"), Ordering::Less);
        assert_eq!(CaseInsensitive.compare("Ab", "aB"), Ordering::Equal);
        assert_eq!(CaseInsensitive.compare("ab", "B"), Ordering::Less);
    }

    #[test]
    fn ord_comparator_matches_ord() {
        assert_eq!(OrdComparator.compare(&1, &2), Ordering::Less);
        assert!(OrdComparator.equal("x", "x"));
        assert!(!OrdComparator.equal("x", "X"));
    }
}
