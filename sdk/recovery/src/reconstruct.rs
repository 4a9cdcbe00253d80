//! Secret reconstruction and share auditing.
//!
//! The secret is the interpolated polynomial's value at x = 0, computed from
//! the `threshold` shares with the smallest x-coordinates. Every supplied
//! share is then checked against the same polynomial; the ones that disagree
//! become [`Finding`]s in the returned report.

use num_bigint::BigInt;
use num_traits::Zero;
use unseal_rational::{Fraction, NumericError};

use crate::errors::RecoveryError;
use crate::lagrange::evaluate_at;
use crate::share::Share;

/// A single share that disagrees with the reconstructed polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The share's declared y differs from the integer the polynomial
    /// predicts at its x.
    Deviation {
        x: BigInt,
        declared: BigInt,
        predicted: BigInt,
        /// `declared - predicted`, so a tampered share that was bumped up
        /// by one reports `+1`.
        deviation: BigInt,
    },
    /// The polynomial does not even pass through an integer at this x.
    NonIntegerPrediction { x: BigInt, predicted: Fraction },
}

/// Structured result of a full recovery run.
///
/// Pure data; rendering (text or JSON) is the caller's concern.
#[derive(Debug, Clone)]
pub struct RecoveryReport {
    /// Threshold the basis was selected with
    pub threshold: usize,
    /// Total number of shares supplied
    pub share_count: usize,
    /// x-coordinates of the basis shares, ascending
    pub basis_x: Vec<BigInt>,
    /// Polynomial value at x = 0. Integral for any honest share set; a
    /// fractional value is itself a sign of corruption.
    pub secret: Fraction,
    /// Shares inconsistent with the basis polynomial, ascending by x
    pub findings: Vec<Finding>,
}

impl RecoveryReport {
    /// Whether every supplied share lies on the reconstructed polynomial.
    pub fn is_consistent(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Select the interpolation basis: the `threshold` shares with smallest x
///
/// Two shares on the same x anywhere in the set are rejected with the
/// arithmetic `DivisionByZero` kind, whether or not both would have landed
/// in the basis.
///
/// # Arguments
/// * `shares` - All supplied shares, any order
/// * `threshold` - K: number of shares that determine the polynomial
///
/// # Returns
/// The basis shares sorted ascending by x, or `InvalidThreshold` when
/// `threshold < 2`, or `InsufficientShares` when fewer shares were supplied
pub fn select_basis(shares: &[Share], threshold: usize) -> Result<Vec<Share>, RecoveryError> {
    if threshold < 2 {
        return Err(RecoveryError::InvalidThreshold {
            k: threshold,
            n: shares.len(),
        });
    }
    if shares.len() < threshold {
        return Err(RecoveryError::InsufficientShares {
            got: shares.len(),
            need: threshold,
        });
    }

    let mut basis = shares.to_vec();
    basis.sort_by(|a, b| a.x.cmp(&b.x));
    if basis.windows(2).any(|pair| pair[0].x == pair[1].x) {
        return Err(NumericError::DivisionByZero.into());
    }
    basis.truncate(threshold);
    Ok(basis)
}

/// Reconstruct the secret: the basis polynomial evaluated at x = 0
///
/// A non-integer result is returned as-is, not treated as an error; it means
/// the basis shares themselves are mutually inconsistent.
pub fn reconstruct_secret(shares: &[Share], threshold: usize) -> Result<Fraction, RecoveryError> {
    let basis = select_basis(shares, threshold)?;
    evaluate_at(&basis, &BigInt::zero())
}

/// Check every share against the polynomial defined by `basis`
///
/// Shares the polynomial passes through exactly produce no entry. Basis
/// members always pass by construction.
///
/// # Returns
/// Findings in the order the shares were given
pub fn audit_shares(shares: &[Share], basis: &[Share]) -> Result<Vec<Finding>, RecoveryError> {
    let mut findings = Vec::new();

    for share in shares {
        let predicted = evaluate_at(basis, &share.x)?;
        match predicted.to_integer() {
            Ok(value) if value == share.y => {}
            Ok(value) => {
                let deviation = &share.y - &value;
                findings.push(Finding::Deviation {
                    x: share.x.clone(),
                    declared: share.y.clone(),
                    predicted: value,
                    deviation,
                });
            }
            Err(_) => {
                findings.push(Finding::NonIntegerPrediction {
                    x: share.x.clone(),
                    predicted,
                });
            }
        }
    }

    Ok(findings)
}

/// Run the full pipeline: select a basis, reconstruct the secret, audit all
/// shares against it
///
/// # Arguments
/// * `shares` - All supplied shares, any order
/// * `threshold` - K: number of shares that determine the polynomial
///
/// # Returns
/// A [`RecoveryReport`] with the secret and any inconsistencies found
pub fn recover(shares: &[Share], threshold: usize) -> Result<RecoveryReport, RecoveryError> {
    let basis = select_basis(shares, threshold)?;
    let secret = evaluate_at(&basis, &BigInt::zero())?;

    // Audit in ascending-x order so findings read in document order.
    let mut ordered = shares.to_vec();
    ordered.sort_by(|a, b| a.x.cmp(&b.x));
    let findings = audit_shares(&ordered, &basis)?;

    Ok(RecoveryReport {
        threshold,
        share_count: shares.len(),
        basis_x: basis.into_iter().map(|share| share.x).collect(),
        secret,
        findings,
    })
}
