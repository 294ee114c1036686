//! Error types for PVSS operations

use crate::ShareId;
use thiserror::Error;

/// Result type alias for PVSS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sharing or reconstructing a secret
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scalar bytes have the wrong width or encode a value >= the group order
    #[error("Invalid scalar encoding: {0}")]
    InvalidScalarEncoding(String),

    /// Inverse requested for a scalar congruent to zero
    #[error("Scalar is not invertible")]
    NonInvertibleScalar,

    /// Fewer decrypted shares than the sharing threshold
    #[error("Insufficient shares: required {required}, got {actual}")]
    InsufficientShares { required: usize, actual: usize },

    /// Two shares carry the same identifier
    #[error("Duplicate share identifier: {0}")]
    DuplicateShareIdentifier(ShareId),

    /// Share identifier collides with the secret's evaluation point
    #[error("Invalid share identifier: {0}")]
    InvalidShareIdentifier(ShareId),

    /// No participants, or more required shares than participants
    #[error("Participant count mismatch: threshold {threshold}, participants {participants}")]
    ParticipantCountMismatch { threshold: usize, participants: usize },

    /// Threshold must be at least one
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(usize),

    /// Key derivation error
    #[error("Key derivation error: {0}")]
    Derivation(String),
}
