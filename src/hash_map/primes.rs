//! Prime helpers for bucket counts
//!
//! Bucket counts are always prime so that `hash % capacity` spreads weak
//! digests such as [`additive_hash`](super::additive_hash) across buckets.

/// Trial-division primality test
///
/// 2 and 3 are prime; 0, 1 and even numbers above 2 are not. Odd factors are
/// tried while `factor * factor <= n`.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor = 3usize;
    while factor.saturating_mul(factor) <= n {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}

/// Next prime at or above `n`, searching odd candidates only
///
/// An even `n` is bumped to `n + 1` before the search, so `next_prime(2)`
/// is 3. For every odd `n` and every even `n > 2` the result is the smallest
/// prime `>= n`.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}
