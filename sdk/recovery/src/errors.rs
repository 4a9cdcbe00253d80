//! Error types for share recovery operations.

use thiserror::Error;
use unseal_rational::NumericError;

/// Errors that can occur while splitting, reconstructing, or auditing shares
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("invalid threshold: k={k}, n={n} (need 2 <= k <= n)")]
    InvalidThreshold { k: usize, n: usize },

    #[error("insufficient shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },

    /// Exact-arithmetic failure; duplicate x-coordinates surface here as a
    /// division by zero.
    #[error(transparent)]
    Arithmetic(#[from] NumericError),
}
