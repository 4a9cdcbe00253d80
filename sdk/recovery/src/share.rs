//! A single point of a secret-sharing polynomial.

use num_bigint::BigInt;

/// One share: a point `(x, y)` on the hidden polynomial.
///
/// The x-coordinate identifies the share holder and must be unique within
/// any set handed to the interpolation routines. The secret itself is the
/// polynomial's value at `x = 0`, so a share with `x == 0` would leak it
/// outright and is never produced by [`split_secret`](crate::split_secret).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Evaluation point, unique per share holder
    pub x: BigInt,
    /// Polynomial value at `x`
    pub y: BigInt,
}

impl Share {
    /// Creates a share from any integer-like pair.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
