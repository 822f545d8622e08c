//! Incremental factorial over the big accumulator.

use log::debug;
use thiserror::Error;

use crate::bignum::BigUint;

/// Largest accepted input.
///
/// 100000! runs to roughly 457 thousand decimal digits and still
/// computes in seconds with the scalar-multiply loop; inputs above this
/// are rejected up front to bound memory and time.
pub const MAX_N: u32 = 100_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    #[error("'{input}' is not a non-negative integer")]
    InvalidArgument { input: String },

    #[error("{n} exceeds the maximum supported input of {max}")]
    TooLarge { n: String, max: u32 },
}

/// Computes the exact decimal representation of `n!`.
///
/// The accumulator starts at 1 and is multiplied by every k in `2..=n`.
/// Each step is one limb-wise scalar multiplication, so the whole run is
/// `O(n log n)` limb operations.
pub fn compute_factorial(n: u32) -> Result<String, FactorialError> {
    if n > MAX_N {
        return Err(FactorialError::TooLarge {
            n: n.to_string(),
            max: MAX_N,
        });
    }
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc.mul_scalar(k);
    }
    debug!("{}! spans {} limbs", n, acc.limb_count());
    Ok(acc.to_decimal())
}

/// Parses a command-line argument into an engine input.
///
/// Negative or non-numeric text is an `InvalidArgument`; numeric text
/// beyond the engine's range is reported as `TooLarge` rather than a
/// parse failure.
pub fn parse_input(text: &str) -> Result<u32, FactorialError> {
    match text.parse::<u32>() {
        Ok(n) => Ok(n),
        Err(_) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            Err(FactorialError::TooLarge {
                n: text.to_owned(),
                max: MAX_N,
            })
        }
        Err(_) => Err(FactorialError::InvalidArgument {
            input: text.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_of_zero_and_one() {
        assert_eq!(compute_factorial(0).unwrap(), "1");
        assert_eq!(compute_factorial(1).unwrap(), "1");
    }

    #[test]
    fn test_factorial_small() {
        assert_eq!(compute_factorial(5).unwrap(), "120");
        assert_eq!(compute_factorial(10).unwrap(), "3628800");
    }

    #[test]
    fn test_factorial_at_machine_word_edge() {
        assert_eq!(compute_factorial(20).unwrap(), "2432902008176640000");
        assert_eq!(
            compute_factorial(25).unwrap(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_rejects_above_maximum() {
        let err = compute_factorial(MAX_N + 1).unwrap_err();
        assert!(matches!(err, FactorialError::TooLarge { .. }));
    }

    #[test]
    fn test_parse_accepts_plain_decimal() {
        assert_eq!(parse_input("0").unwrap(), 0);
        assert_eq!(parse_input("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        for bad in ["-1", "abc", "1.5", "", " 5"] {
            let err = parse_input(bad).unwrap_err();
            assert!(
                matches!(err, FactorialError::InvalidArgument { .. }),
                "{bad:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_maps_huge_numerals_to_too_large() {
        let err = parse_input("18446744073709551616").unwrap_err();
        assert!(matches!(err, FactorialError::TooLarge { .. }));
    }
}
