//! # AppError
//!
//! Centralized error taxonomy for the Forgeboard core. All four domain
//! failures bubble unmodified to the caller; there is no internal retry.

use thiserror::Error;

/// The primary error type for all fb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed input rejected before any write (e.g., bad enum value)
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found (e.g., Thread, Solution, Comment)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Caller supplied no validated identity
    #[error("authentication required")]
    Unauthenticated,

    /// An AuthorizationGate predicate failed; state untouched
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Counters disagree with the vote ledger. The operation aborts rather
    /// than auto-correcting, so a real bug is never masked.
    #[error("consistency violation: {0}")]
    Consistency(String),

    /// Infrastructure failure (e.g., DB down, transaction failed)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Forgeboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
