//! Exact Rational Arithmetic
//!
//! An immutable fraction type over arbitrary-precision integers. Every value
//! is kept fully reduced (gcd of numerator and denominator is 1) with a
//! strictly positive denominator, so equality is structural and magnitudes
//! stay bounded by the minimal representation of the true rational value.
//!
//! Interpolation chains dozens of multiplications and divisions; reducing
//! after every operation is what keeps exact evaluation tractable.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

/// Errors from exact arithmetic
#[derive(Debug, Error)]
pub enum NumericError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("fraction {numerator}/{denominator} is not an integer")]
    NotAnInteger {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// An exact rational number.
///
/// Invariants, enforced by every constructor:
/// - the denominator is strictly positive (the numerator alone carries sign)
/// - `gcd(|numerator|, denominator) == 1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction from a numerator and denominator.
    ///
    /// A negative denominator is folded into the numerator, and both
    /// components are divided by their gcd.
    ///
    /// # Returns
    /// `NumericError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, NumericError> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if denominator.is_negative() {
            Ok(Self::reduced(-numerator, -denominator))
        } else {
            Ok(Self::reduced(numerator, denominator))
        }
    }

    /// Create an integral fraction (denominator 1).
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Reduce a pair whose denominator is already strictly positive.
    fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        let gcd = numerator.gcd(&denominator);
        if !gcd.is_one() {
            numerator /= &gcd;
            denominator /= &gcd;
        }
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether the fraction reduces to an integer (denominator 1).
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Extract the integer value.
    ///
    /// # Returns
    /// `NumericError::NotAnInteger` if the denominator is not 1.
    pub fn to_integer(&self) -> Result<BigInt, NumericError> {
        if self.denominator.is_one() {
            Ok(self.numerator.clone())
        } else {
            Err(NumericError::NotAnInteger {
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
            })
        }
    }

    /// Negate the fraction.
    pub fn neg(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Add two fractions: `a/b + c/d = (ad + cb) / bd`, reduced.
    pub fn add(&self, other: &Self) -> Self {
        let numerator =
            &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::reduced(numerator, denominator)
    }

    /// Subtract `other` from `self`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiply two fractions: `a/b * c/d = ac / bd`, reduced.
    pub fn mul(&self, other: &Self) -> Self {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Self::reduced(numerator, denominator)
    }

    /// Divide `self` by `other` by cross-multiplication.
    ///
    /// # Returns
    /// `NumericError::DivisionByZero` if `other` is the zero fraction.
    pub fn div(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // other.numerator may be negative; new() restores the sign invariant.
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_construction_reduces() {
        let f = frac(6, 8);
        assert_eq!(f.numerator(), &BigInt::from(3));
        assert_eq!(f.denominator(), &BigInt::from(4));
    }

    #[test]
    fn test_sign_canonicalization() {
        let f = frac(3, -9);
        assert_eq!(f.numerator(), &BigInt::from(-1));
        assert_eq!(f.denominator(), &BigInt::from(3));

        let g = frac(-4, -6);
        assert_eq!(g.numerator(), &BigInt::from(2));
        assert_eq!(g.denominator(), &BigInt::from(3));
    }

    #[test]
    fn test_zero_is_canonical() {
        let z = frac(0, 7);
        assert_eq!(z, Fraction::zero());
        assert_eq!(z.denominator(), &BigInt::from(1));
        assert!(z.is_zero());
        assert!(z.is_integer());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let err = Fraction::new(BigInt::from(1), BigInt::zero()).unwrap_err();
        assert!(matches!(err, NumericError::DivisionByZero));
    }

    #[test]
    fn test_add_and_sub() {
        // 1/2 + 1/3 = 5/6
        assert_eq!(frac(1, 2).add(&frac(1, 3)), frac(5, 6));
        // 1/2 - 1/3 = 1/6
        assert_eq!(frac(1, 2).sub(&frac(1, 3)), frac(1, 6));
        // 1/2 + (-1/2) = 0
        assert_eq!(frac(1, 2).add(&frac(-1, 2)), Fraction::zero());
    }

    #[test]
    fn test_mul_reduces() {
        // 2/3 * 9/4 = 3/2
        assert_eq!(frac(2, 3).mul(&frac(9, 4)), frac(3, 2));
    }

    #[test]
    fn test_div() {
        // (1/2) / (3/4) = 2/3
        assert_eq!(frac(1, 2).div(&frac(3, 4)).unwrap(), frac(2, 3));
        // dividing by a negative keeps the denominator positive
        let q = frac(1, 2).div(&frac(-3, 4)).unwrap();
        assert_eq!(q, frac(-2, 3));
        assert!(q.denominator() > &BigInt::zero());
    }

    #[test]
    fn test_div_by_zero_fraction() {
        let err = frac(1, 2).div(&Fraction::zero()).unwrap_err();
        assert!(matches!(err, NumericError::DivisionByZero));
    }

    #[test]
    fn test_field_closure() {
        // a.div(b).mul(b) == a, exactly
        let a = frac(-355, 113);
        let b = frac(7, 12);
        assert_eq!(a.div(&b).unwrap().mul(&b), a);
    }

    #[test]
    fn test_identities() {
        let a = frac(-355, 113);
        assert_eq!(a.mul(&Fraction::one()), a);
        assert_eq!(a.add(&Fraction::zero()), a);
    }

    #[test]
    fn test_from_bigint() {
        let f: Fraction = BigInt::from(5).into();
        assert_eq!(f, frac(5, 1));
        assert!(f.is_integer());
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(frac(8, 4).to_integer().unwrap(), BigInt::from(2));

        let err = frac(1, 2).to_integer().unwrap_err();
        assert!(matches!(err, NumericError::NotAnInteger { .. }));
    }

    #[test]
    fn test_large_values_stay_exact() {
        // 10^40 / 3 * 3 round-trips without loss
        let huge: BigInt = BigInt::from(10).pow(40);
        let third = Fraction::new(huge.clone(), BigInt::from(3)).unwrap();
        let back = third.mul(&Fraction::from_integer(BigInt::from(3)));
        assert_eq!(back.to_integer().unwrap(), huge);
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(42, 1).to_string(), "42");
        assert_eq!(frac(1, 2).to_string(), "1/2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
        assert_eq!(Fraction::zero().to_string(), "0");
    }

    #[test]
    fn test_neg() {
        assert_eq!(frac(1, 3).neg(), frac(-1, 3));
        assert_eq!(frac(-1, 3).neg(), frac(1, 3));
        assert_eq!(Fraction::zero().neg(), Fraction::zero());
    }
}
