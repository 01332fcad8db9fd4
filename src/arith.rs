//! This module provides the number-theoretic predicates used to feed the combinators, most notably a primality test.

use crate::combinators::{filter, reduce};
use crate::streams::interval;

/// Check whether `d` divides `n`. `d` must not be `0`.
#[inline]
pub const fn divides(d: i64, n: i64) -> bool {
    n % d == 0
}

#[inline]
pub const fn is_even(n: i64) -> bool {
    divides(2, n)
}

/// The smallest divisor greater than `1` of `n` for `n > 1` found by trial division up to the square root.
pub const fn smallest_divisor(n: i64) -> i64 {
    if is_even(n) {
        return 2;
    }

    let mut d = 3;
    while d <= n / d {
        if divides(d, n) {
            return d;
        }
        d += 2;
    }
    n
}

/// Check whether `n` is a prime, that is, `n > 1` and no integer in `[2, floor(sqrt(n))]` divides `n`.
///
/// # Examples
///
/// ```
/// use lazy_stream::arith::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(19));
/// assert!(!is_prime(21));
/// assert!(!is_prime(1));
/// ```
pub const fn is_prime(n: i64) -> bool {
    n > 1 && smallest_divisor(n) == n
}

/// Sum the primes in `[low, high]` by filtering an interval stream and reducing the result.
pub fn sum_primes(low: i64, high: i64) -> i64 {
    let primes = filter(&interval(low, high), |n| is_prime(*n));
    reduce(&primes, |n, acc| acc + n, 0)
}
