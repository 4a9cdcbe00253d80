//! Unseal Share Recovery
//!
//! Exact reconstruction of a threshold-shared secret, plus a per-share audit
//! that flags corrupted shares.
//!
//! # Architecture
//!
//! ```text
//! shares (x, y) ──▶ select k smallest x ──▶ Lagrange at x=0 ──▶ secret
//!      │                     │
//!      └───────── audit ◀────┘
//!                 every share re-evaluated on the k-share polynomial;
//!                 mismatches become findings
//! ```
//!
//! Everything is exact: values flow through [`unseal_rational::Fraction`],
//! never floating point, so arbitrarily large secrets reconstruct without
//! rounding.

pub mod errors;
pub mod lagrange;
pub mod reconstruct;
pub mod share;
pub mod split;

pub use errors::RecoveryError;
pub use lagrange::evaluate_at;
pub use reconstruct::{
    Finding, RecoveryReport, audit_shares, reconstruct_secret, recover, select_basis,
};
pub use share::Share;
pub use split::split_secret;
