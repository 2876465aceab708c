//! Polynomial string hashing and the prime helpers used when growing
//! open-addressing tables.

/// Multiplier for the Horner accumulation.
pub const HASH_BASE: u64 = 31;

/// Initial slot count when none is given. Prime, so the first probe
/// sequence is already well distributed.
pub const DEFAULT_CAPACITY: usize = 100_003;

/// Map `key` to an index in `[0, capacity)`.
///
/// Computes `h = (h * 31 + c) mod capacity` for each character `c` in
/// order, starting from zero. The accumulator is a `u64` and is reduced on
/// every step, so it stays below `capacity * 31 + char::MAX` and never
/// overflows for any capacity a table can actually allocate. Character
/// codes are Unicode scalar values; for ASCII this is the byte value.
///
/// `capacity` must be non-zero.
#[inline]
pub fn polynomial_hash(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hash into an empty slot array");
    let modulus = capacity as u64;
    let h = key
        .chars()
        .fold(0u64, |h, c| (h * HASH_BASE + u64::from(c)) % modulus);
    h as usize
}

/// Trial division by odd candidates up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3usize;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime `>= n`.
pub fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    // Even candidates above 2 are never prime.
    let mut candidate = n | 1;
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hash_matches_horner_by_hand() {
        // "ab" = (97 * 31 + 98) mod 1000 = 3105 mod 1000
        assert_eq!(polynomial_hash("ab", 1000), 105);
        // Reduction happens at every step, not just at the end.
        let expected = ((97 % 7) * 31 + 98) % 7;
        assert_eq!(polynomial_hash("ab", 7), expected);
    }

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(polynomial_hash("", 13), 0);
        assert_eq!(polynomial_hash("", 1), 0);
    }

    #[test]
    fn capacity_one_maps_everything_to_zero() {
        for k in ["a", "zzz", "hello world", "\u{1F600}"] {
            assert_eq!(polynomial_hash(k, 1), 0);
        }
    }

    #[test]
    fn non_ascii_keys_stay_in_range() {
        let cap = DEFAULT_CAPACITY;
        for k in ["ü", "日本語", "\u{10FFFF}\u{10FFFF}\u{10FFFF}"] {
            assert!(polynomial_hash(k, cap) < cap);
        }
    }

    #[test]
    fn primes_small_values() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn next_prime_examples() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(17), 17);
        assert_eq!(next_prime(200_006), 200_009);
    }

    #[test]
    fn default_capacity_is_prime() {
        assert!(is_prime(DEFAULT_CAPACITY));
    }

    proptest! {
        #[test]
        fn prop_hash_deterministic_and_in_range(key in ".{0,24}", cap in 1usize..1_000_000) {
            let a = polynomial_hash(&key, cap);
            let b = polynomial_hash(&key, cap);
            prop_assert_eq!(a, b);
            prop_assert!(a < cap);
        }

        #[test]
        fn prop_next_prime_is_smallest(n in 0usize..50_000) {
            let p = next_prime(n);
            prop_assert!(p >= n);
            prop_assert!(is_prime(p));
            prop_assert!((n..p).all(|m| !is_prime(m)));
        }
    }
}
