//! Exact Lagrange interpolation over the rationals.

use num_bigint::BigInt;
use unseal_rational::{Fraction, NumericError};

use crate::errors::RecoveryError;
use crate::share::Share;

/// Evaluate the unique polynomial through all `shares` at `at`
///
/// With `n` shares this is the degree `< n` interpolating polynomial, summed
/// as exact fractions so no rounding ever occurs:
///
/// ```text
/// P(at) = sum_i  y_i * product_{j != i} (at - x_j) / (x_i - x_j)
/// ```
///
/// # Arguments
/// * `shares` - Points defining the polynomial, x-coordinates pairwise distinct
/// * `at` - The x-coordinate to evaluate at
///
/// # Returns
/// The exact rational value of the polynomial, or
/// `RecoveryError::Arithmetic(DivisionByZero)` when two shares collide on x
pub fn evaluate_at(shares: &[Share], at: &BigInt) -> Result<Fraction, RecoveryError> {
    if shares.is_empty() {
        return Err(RecoveryError::InsufficientShares { got: 0, need: 1 });
    }

    // A repeated x-coordinate zeroes some basis denominator. Check up front
    // so the failure does not depend on which term happens to hit it.
    for (i, share) in shares.iter().enumerate() {
        if shares[..i].iter().any(|other| other.x == share.x) {
            return Err(NumericError::DivisionByZero.into());
        }
    }

    let mut sum = Fraction::zero();

    for (i, share_i) in shares.iter().enumerate() {
        // Basis term: y_i * product of (at - x_j) / (x_i - x_j) over j != i
        let mut term = Fraction::from_integer(share_i.y.clone());

        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let factor = Fraction::new(at - &share_j.x, &share_i.x - &share_j.x)?;
            term = term.mul(&factor);
        }

        sum = sum.add(&term);
    }

    Ok(sum)
}
