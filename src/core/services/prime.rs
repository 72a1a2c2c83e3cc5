//! Primality testing for computed sums

/// Check whether `n` is prime
///
/// Trial division over odd candidates up to the square root. Values below 2,
/// including zero and negatives, are not prime.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut candidate = 3;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}
