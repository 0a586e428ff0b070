//! Count primes below an exclusive bound with the Sieve of Eratosthenes.
//!
//! The counter allocates one boolean marker per integer in `0..=n`, scans
//! candidates in increasing order, and eliminates multiples of each prime as
//! it is discovered. Marker entries only ever flip from candidate to
//! composite; nothing is ever un-marked.

use crate::errors::SieveError;

/// Count the primes in `[2, n)`.
///
/// ## Parameters
/// - `n`: exclusive upper bound of the scan. Any `u64` is accepted; bounds
///   below 2 yield a count of 0.
///
/// ## Returns
/// - `Ok(count)`: the number of primes strictly below `n`.
/// - `Err(SieveError)`: the marker table could not be allocated.
///
/// ## Notes
/// - Elimination for a prime `i` starts at `i * i`: every smaller multiple
///   `k * i` with `k < i` has a prime factor below `i` and was already
///   eliminated when that factor was scanned.
pub fn count_primes_below(n: u64) -> Result<u64, SieveError> {
    if n < 2 {
        return Ok(0);
    }

    let table_len = usize::try_from(n)
        .ok()
        .and_then(|bound| bound.checked_add(1))
        .ok_or(SieveError::BoundTooLarge { bound: n })?;

    let mut marker: Vec<bool> = Vec::new();
    marker
        .try_reserve_exact(table_len)
        .map_err(|source| SieveError::TableAllocation { bound: n, source })?;
    marker.resize(table_len, true);

    // The scan range [2, n) in table coordinates.
    let limit = table_len - 1;

    let mut count: u64 = 0;
    for i in 2..limit {
        if marker[i] {
            count += 1;
            // On overflow the first multiple is far beyond the table, so
            // there is nothing to eliminate.
            if let Some(start) = i.checked_mul(i) {
                let mut multiple = start;
                while multiple < limit {
                    marker[multiple] = false;
                    multiple += i;
                }
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_below_two_count_nothing() {
        assert_eq!(count_primes_below(0).unwrap(), 0);
        assert_eq!(count_primes_below(1).unwrap(), 0);
        assert_eq!(count_primes_below(2).unwrap(), 0);
    }

    #[test]
    fn small_known_counts() {
        assert_eq!(count_primes_below(3).unwrap(), 1);
        assert_eq!(count_primes_below(10).unwrap(), 4);
        assert_eq!(count_primes_below(100).unwrap(), 25);
        assert_eq!(count_primes_below(1000).unwrap(), 168);
    }

    #[test]
    fn bound_is_exclusive() {
        // 7 is prime but sits on the bound, so it is not counted.
        assert_eq!(count_primes_below(7).unwrap(), 3);
        assert_eq!(count_primes_below(8).unwrap(), 4);
    }

    #[test]
    fn reference_bound_ten_million() {
        assert_eq!(count_primes_below(10_000_000).unwrap(), 620_720);
    }

    #[test]
    fn repeated_calls_agree() {
        let first = count_primes_below(5000).unwrap();
        let second = count_primes_below(5000).unwrap();
        assert_eq!(first, second);
    }
}
