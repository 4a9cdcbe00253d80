//! Split a secret into polynomial shares.

use num_bigint::{BigInt, RandBigInt};
use num_traits::Zero;

use crate::errors::RecoveryError;
use crate::share::Share;

/// Coefficients are sampled at the secret's bit width, but never narrower
/// than this.
const MIN_COEFF_BITS: u64 = 64;

/// Split a secret into N shares, requiring K to reconstruct
///
/// Builds `f(x) = secret + a_1*x + ... + a_{k-1}*x^{k-1}` with random signed
/// coefficients and evaluates it at x = 1..=N. Any K of the returned shares
/// reconstruct the secret exactly; fewer than K leave it undetermined.
///
/// # Arguments
/// * `secret` - The integer to hide as the polynomial's constant term
/// * `threshold` - K: minimum shares needed to reconstruct, at least 2
/// * `total` - N: total number of shares to generate, at least K
///
/// # Returns
/// N shares ascending by x
pub fn split_secret(
    secret: &BigInt,
    threshold: usize,
    total: usize,
) -> Result<Vec<Share>, RecoveryError> {
    if threshold < 2 || total < threshold {
        return Err(RecoveryError::InvalidThreshold {
            k: threshold,
            n: total,
        });
    }

    let mut rng = rand::thread_rng();
    let coeff_bits = secret.bits().max(MIN_COEFF_BITS);

    // f(x) = secret + a_1*x + ... + a_{k-1}*x^{k-1}
    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret.clone());
    for _ in 1..threshold - 1 {
        coefficients.push(rng.gen_bigint(coeff_bits));
    }

    // Nonzero leading coefficient keeps the polynomial at true degree k-1.
    let mut leading = rng.gen_bigint(coeff_bits);
    while leading.is_zero() {
        leading = rng.gen_bigint(coeff_bits);
    }
    coefficients.push(leading);

    let mut shares = Vec::with_capacity(total);
    for x in 1..=total {
        let x = BigInt::from(x);
        let mut y = coefficients[0].clone();
        let mut x_power = x.clone();

        for coeff in coefficients.iter().skip(1) {
            y += coeff * &x_power;
            x_power *= &x;
        }

        shares.push(Share { x, y });
    }

    Ok(shares)
}
