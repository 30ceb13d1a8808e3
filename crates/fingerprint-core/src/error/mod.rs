//! Error types for fingerprint-core.
//!
//! This module defines the central error types used throughout the engine:
//!
//! - [`EngineError`]: Top-level unified error for all crate errors
//! - Sub-error types: [`FingerprintError`], [`OpError`], [`CodecError`]
//!
//! # Conventions
//!
//! - `thiserror` for all library error types
//! - Never panic in library code; return `Result`
//! - Propagate errors with the `?` operator
//! - Construction errors are fatal to the single value being built and
//!   are never partially accepted
//!
//! # Examples
//!
//! ```rust
//! use fingerprint_core::error::{EngineError, FingerprintError, Result};
//! use fingerprint_core::types::SparseBits;
//!
//! fn build(positions: Vec<u64>, len: u64) -> Result<SparseBits> {
//!     SparseBits::new(positions, len).map_err(EngineError::from)
//! }
//!
//! let result = build(vec![8, 2], 16);
//! assert!(matches!(
//!     result,
//!     Err(EngineError::Fingerprint(FingerprintError::UnsortedPositions { .. }))
//! ));
//! ```

mod sub_errors;
mod unified;

pub use sub_errors::{CodecError, FingerprintError, OpError};
pub use unified::EngineError;

// Re-export Result type alias
pub use unified::Result;
