//! This module provides the generators of streams which compute their elements from a seed.

use crate::{cons_stream, Stream};

use alloc::rc::Rc;

/// Create the ascending stream of the integers from `low` to `high` (both inclusive).
/// - `low` is the first element.
/// - `high` is the last element.
///
/// The result is empty if `low > high`.
/// Every force materializes exactly one more integer.
///
/// # Examples
///
/// ```
/// use lazy_stream::streams::interval;
///
/// assert_eq!(interval(1, 5).iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert!(interval(5, 1).is_empty());
/// ```
pub fn interval<'a>(low: i64, high: i64) -> Stream<'a, i64> {
    if low > high {
        return Stream::empty();
    }

    cons_stream(low, move || match low.checked_add(1) {
        Some(next) => interval(next, high),
        None => Stream::empty(),
    })
}

/// Create the ascending stream of the integers starting at `n`.
///
/// The stream is conceptually infinite; in fact it ends at [`i64::MAX`].
pub fn integers_from<'a>(n: i64) -> Stream<'a, i64> {
    cons_stream(n, move || {
        n.checked_add(1)
            .map_or_else(Stream::empty, integers_from)
    })
}

/// Create an infinite stream of a certain constant.
/// - `x` is the constant.
///
/// # Examples
///
/// Creating an infinite stream of `true`s:
///
/// ```
/// let trues = lazy_stream::streams::constant(true);
///
/// assert_eq!(trues.iter().take(3).collect::<Vec<_>>(), [true, true, true]);
/// ```
pub fn constant<'a, T>(x: T) -> Stream<'a, T>
where
    T: Clone + 'a,
{
    cons_stream(x.clone(), move || constant(x.clone()))
}

/// Serve `items` from position `start` on.
pub(crate) fn from_shared<'a, T>(items: Rc<[T]>, start: usize) -> Stream<'a, T>
where
    T: Clone + 'a,
{
    match items.get(start).cloned() {
        Some(x) => cons_stream(x, move || from_shared(Rc::clone(&items), start + 1)),
        None => Stream::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    #[test]
    fn test_interval() {
        let s = interval(1, 10);
        assert_first_eq!(s, 1);
        assert_rest_starts_with!(s, [2, 3]);
        assert_eq!(s.iter().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_interval_single() {
        let s = interval(-3, -3);
        assert_first_eq!(s, -3);
        assert!(s.rest().is_empty());
    }

    #[test]
    fn test_interval_empty() {
        assert!(interval(1, 0).is_empty());
    }

    #[test]
    fn test_interval_at_max() {
        let s = interval(i64::MAX - 1, i64::MAX);
        assert_eq!(s.iter().collect::<Vec<_>>(), [i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_integers_from() {
        let s = integers_from(40);
        assert_first_eq!(s, 40);
        assert_rest_starts_with!(s, [41, 42, 43]);
        assert_eq!(integers_from(i64::MAX).iter().count(), 1);
    }

    #[test]
    fn test_constant() {
        const X: bool = true;

        let s = constant(X);
        assert_first_eq!(s, X);
        assert_rest_starts_with!(s, [X, X]);
    }

    #[test]
    fn test_from_shared() {
        let items: Rc<[u8]> = Rc::from([3, 1, 4]);

        let s = from_shared(Rc::clone(&items), 1);
        assert_first_eq!(s, 1);
        assert_rest_starts_with!(s, [4]);
        assert!(from_shared(items, 3).is_empty());
    }
}
