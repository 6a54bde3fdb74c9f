//! Pure numeric operations: factorial, primality and integer power.
//!
//! Results are `i64`. Overflow wraps around (two's complement) instead of
//! panicking, so `factorial(21)` and large powers produce the same bits a
//! native 64-bit multiply would.

use crate::error::NumericError;
use tracing::debug;

/// Iterative factorial.
///
/// ```
/// use closure_combinators::numeric::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64, NumericError> {
    if n < 0 {
        debug!(n, "factorial rejected negative input");
        return Err(NumericError::invalid_argument(
            "factorial",
            n,
            "factorial is not defined for negative numbers",
        ));
    }

    Ok((2..=n).fold(1_i64, |acc, i| acc.wrapping_mul(i)))
}

/// Recursive factorial.
///
/// Splits `1..=n` in half and multiplies the products of the halves, so the
/// recursion depth is `log2(n)` rather than `n`. Wrapping multiplication is
/// associative, so the result agrees with [`factorial`] for every input.
pub fn factorial_recursive(n: i64) -> Result<i64, NumericError> {
    if n < 0 {
        debug!(n, "factorial_recursive rejected negative input");
        return Err(NumericError::invalid_argument(
            "factorial",
            n,
            "factorial is not defined for negative numbers",
        ));
    }
    Ok(range_product(1, n))
}

/// Product of `lo..=hi`, 1 when the range is empty.
fn range_product(lo: i64, hi: i64) -> i64 {
    match hi - lo {
        d if d < 0 => 1,
        0 => lo,
        1 => lo.wrapping_mul(hi),
        d => {
            let mid = lo + d / 2;
            range_product(lo, mid).wrapping_mul(range_product(mid + 1, hi))
        }
    }
}

/// Trial-division primality test.
///
/// Inputs below 2 are simply not prime; this never fails.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    // i <= n / i is i * i <= n without the overflow near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// `base` raised to `exponent` by repeated multiplication.
///
/// Linear in `exponent`. `power(0, 0)` is 1.
pub fn power(base: i64, exponent: i64) -> Result<i64, NumericError> {
    if exponent < 0 {
        debug!(base, exponent, "power rejected negative exponent");
        return Err(NumericError::invalid_argument(
            "power",
            exponent,
            "negative exponents not supported",
        ));
    }

    let mut result = 1_i64;
    for _ in 0..exponent {
        result = result.wrapping_mul(base);
    }
    Ok(result)
}
