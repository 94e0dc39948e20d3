//! Prime search for permutation map construction.

use crate::error::{OperationError, OperationResult};

/// Find the smallest prime greater than or equal to `n`.
///
/// Prime moduli are handy when building pseudo-random pixel reorder maps,
/// where a generator coprime to the sequence length visits every index.
/// Trial division by 6k±1 candidates; fine for any argument that fits the
/// operation's interactive use.
pub fn find_prime(n: u64) -> OperationResult<u64> {
    if n <= 2 {
        return Ok(2);
    }
    let mut candidate = n;
    loop {
        if is_prime(candidate) {
            return Ok(candidate);
        }
        candidate = candidate
            .checked_add(1)
            .ok_or(OperationError::InvalidParameter(
                "no prime at or above this value fits in 64 bits",
            ))?;
    }
}

fn is_prime(n: u64) -> bool {
    if n % 2 == 0 {
        return n == 2;
    }
    if n % 3 == 0 {
        return n == 3;
    }
    let mut divisor = 5u64;
    // divisor <= n / divisor avoids overflow of divisor * divisor near u64::MAX.
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 2)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(4, 5)]
    #[case(14, 17)]
    #[case(90, 97)]
    #[case(7919, 7919)]
    #[case(7920, 7927)]
    fn finds_the_next_prime(#[case] n: u64, #[case] expected: u64) {
        assert_eq!(find_prime(n).unwrap(), expected);
    }

    #[test]
    fn large_primes_are_confirmed() {
        // 2^31 - 1 is a Mersenne prime.
        assert_eq!(find_prime((1 << 31) - 1).unwrap(), (1 << 31) - 1);
    }
}
