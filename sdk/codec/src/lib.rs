//! Base-N Digit-String Codec
//!
//! Decodes share values written as digit strings in an arbitrary base
//! (2 to 36, case-insensitive alphanumerics) into arbitrary-precision
//! integers, and encodes integers back for share emission. Pure and
//! stateless; nothing here touches I/O.

use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

/// Smallest base a share document may declare.
pub const MIN_BASE: u32 = 2;
/// Largest base a share document may declare (digits 0-9 then a-z).
pub const MAX_BASE: u32 = 36;

/// Errors from decoding or encoding digit strings
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported base {base}: must be between {MIN_BASE} and {MAX_BASE}")]
    UnsupportedBase { base: u32 },

    #[error("invalid digit '{ch}' for base {base}")]
    InvalidDigit { ch: char, base: u32 },

    #[error("empty digit string")]
    EmptyValue,
}

fn check_base(base: u32) -> Result<(), DecodeError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedBase { base })
    }
}

/// Decode a digit string in the given base into a `BigInt`.
///
/// Digits are case-insensitive alphanumerics mapped to 0-35; an optional
/// leading `-` negates the result. Accumulates left-to-right as
/// `acc = acc * base + digit`.
///
/// # Returns
/// `InvalidDigit` for a character outside the base's alphabet,
/// `UnsupportedBase` for a base outside [2, 36], `EmptyValue` for a
/// string with no digits.
pub fn decode(value: &str, base: u32) -> Result<BigInt, DecodeError> {
    check_base(base)?;

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    let big_base = BigInt::from(base);
    let mut acc = BigInt::zero();
    for ch in digits.chars() {
        let digit = ch
            .to_digit(MAX_BASE)
            .filter(|&d| d < base)
            .ok_or(DecodeError::InvalidDigit { ch, base })?;
        acc = acc * &big_base + BigInt::from(digit);
    }

    Ok(if negative { -acc } else { acc })
}

/// Encode a `BigInt` as a lowercase digit string in the given base.
///
/// Negative values carry a leading `-`. Inverse of [`decode`].
pub fn encode(value: &BigInt, base: u32) -> Result<String, DecodeError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_decimal() {
        assert_eq!(decode("4", 10).unwrap(), BigInt::from(4));
        assert_eq!(decode("213", 10).unwrap(), BigInt::from(213));
    }

    #[test]
    fn test_decode_binary_and_hex() {
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("DeadBeef", 16).unwrap(), decode("deadbeef", 16).unwrap());
        assert_eq!(decode("Zz", 36).unwrap(), BigInt::from(35 * 36 + 35));
    }

    #[test]
    fn test_decode_negative() {
        assert_eq!(decode("-101", 2).unwrap(), BigInt::from(-5));
    }

    #[test]
    fn test_decode_rejects_digit_outside_base() {
        let err = decode("102", 2).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDigit { ch: '2', base: 2 }));

        let err = decode("7g", 16).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDigit { ch: 'g', base: 16 }));
    }

    #[test]
    fn test_decode_rejects_non_alphanumeric() {
        let err = decode("12!4", 10).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDigit { ch: '!', base: 10 }));
    }

    #[test]
    fn test_decode_rejects_bad_base() {
        assert!(matches!(
            decode("10", 1),
            Err(DecodeError::UnsupportedBase { base: 1 })
        ));
        assert!(matches!(
            decode("10", 37),
            Err(DecodeError::UnsupportedBase { base: 37 })
        ));
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(matches!(decode("", 10), Err(DecodeError::EmptyValue)));
        assert!(matches!(decode("-", 10), Err(DecodeError::EmptyValue)));
    }

    #[test]
    fn test_decode_large_value() {
        // 16^20 in hex: 1 followed by twenty zeros
        let mut s = String::from("1");
        s.push_str(&"0".repeat(20));
        assert_eq!(decode(&s, 16).unwrap(), BigInt::from(16).pow(20));
    }

    #[test]
    fn test_roundtrip_all_bases() {
        let values = [
            BigInt::from(0),
            BigInt::from(42),
            BigInt::from(-987_654_321i64),
            BigInt::from(7).pow(51),
        ];
        for base in MIN_BASE..=MAX_BASE {
            for value in &values {
                let encoded = encode(value, base).unwrap();
                assert_eq!(&decode(&encoded, base).unwrap(), value, "base {base}");
            }
        }
    }

    #[test]
    fn test_encode_rejects_bad_base() {
        assert!(matches!(
            encode(&BigInt::from(5), 0),
            Err(DecodeError::UnsupportedBase { base: 0 })
        ));
    }
}
