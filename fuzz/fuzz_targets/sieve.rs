#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the first two bytes as a bound; small enough to sieve fast.
    if let Some(bytes) = data.get(..2) {
        let bound = u64::from(u16::from_le_bytes([bytes[0], bytes[1]]));

        let counted = eratos_core::count_primes_below(bound)
            .unwrap_or_else(|e| panic!("sieve failed for bound {}: {}", bound, e));

        // Cross-check against trial division.
        let naive = (2..bound)
            .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
            .count() as u64;
        assert_eq!(counted, naive, "bound {}", bound);
    }
});
