//! Top-level unified error type for fingerprint-core.

use thiserror::Error;

use super::sub_errors::{CodecError, FingerprintError, OpError};

// ============================================================================
// TOP-LEVEL UNIFIED ERROR TYPE
// ============================================================================

/// Top-level unified error type for the fingerprint engine.
///
/// All crate errors are convertible to this type via `From`
/// implementations, so host adapters can hold one error type per run
/// while the engine's own APIs stay precise about their failure domain.
///
/// # Recoverability
///
/// Row-scoped errors ([`OpError`]) are recoverable by substituting a
/// missing result for the offending row and continuing the batch;
/// construction and decode errors are fatal to the single value they
/// concern.
///
/// # Examples
///
/// ```rust
/// use fingerprint_core::error::{EngineError, OpError};
///
/// let err = EngineError::from(OpError::LengthMismatch { left: 8, right: 16 });
/// assert!(err.is_row_scoped());
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A fingerprint value failed construction-time validation.
    #[error("Malformed fingerprint: {0}")]
    Fingerprint(#[from] FingerprintError),

    /// A combinator, extractor or accumulator rejected its operands.
    #[error("Operation error: {0}")]
    Op(#[from] OpError),

    /// A text encode/decode call failed.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Internal error indicating a bug.
    ///
    /// These errors indicate invariant violations and should be
    /// investigated, not retried.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Check whether this error is scoped to a single row.
    ///
    /// Row-scoped errors may be isolated by batch drivers: the row's
    /// result becomes missing and the run continues.
    #[inline]
    pub fn is_row_scoped(&self) -> bool {
        matches!(self, Self::Op(_))
    }

    /// Create an internal error from a message.
    #[inline]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for engine operations.
///
/// # Examples
///
/// ```rust
/// use fingerprint_core::error::{EngineError, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, EngineError>;
