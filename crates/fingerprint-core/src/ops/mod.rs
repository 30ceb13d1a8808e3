//! Set and arithmetic combinators over fingerprint pairs.
//!
//! All binary operators require *combinable* operands: same [`Kind`],
//! same length. Layout need not match — when it differs, the sparse
//! operand is densified and the dense algorithm runs (densification is
//! the lossless direction; a dense operand is never sparsified
//! mid-operation). Same-layout pairs take the native path: word-parallel
//! bit operations for dense, sorted-list merge-joins for sparse.
//!
//! Operators are pure functions: operands are borrowed, the result is a
//! newly allocated value, and no references are retained after the call
//! returns.
//!
//! # Example
//!
//! ```
//! use fingerprint_core::ops::BinaryOp;
//! use fingerprint_core::types::{DenseCounts, Fingerprint};
//!
//! let a = Fingerprint::from(DenseCounts::new(vec![10, 250, 0, 5]));
//! let b = Fingerprint::from(DenseCounts::new(vec![50, 10, 0, 255]));
//! let sum = BinaryOp::SaturatingAdd.apply(&a, &b).unwrap();
//! assert_eq!(sum, Fingerprint::from(DenseCounts::new(vec![60, 255, 0, 255])));
//! ```

pub mod arithmetic;
pub mod logical;

use serde::{Deserialize, Serialize};

use crate::error::OpError;
use crate::types::{Fingerprint, Kind};

pub use logical::not;

/// Tag for the six binary combinators.
///
/// The tag is data: the group accumulator and host configuration carry
/// it, and [`BinaryOp::apply`] dispatches on it. Every operator is
/// associative and commutative (saturation included), so folds over a
/// group are order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Bit set iff set in both operands.
    And,
    /// Bit set iff set in either operand.
    Or,
    /// Bit set iff set in exactly one operand.
    Xor,
    /// Elementwise minimum of counts.
    Min,
    /// Elementwise maximum of counts.
    Max,
    /// Elementwise sum of counts, clamped at 255.
    SaturatingAdd,
}

impl BinaryOp {
    /// The operand kind this operator is defined for.
    #[inline]
    #[must_use]
    pub fn operand_kind(self) -> Kind {
        match self {
            Self::And | Self::Or | Self::Xor => Kind::Bit,
            Self::Min | Self::Max | Self::SaturatingAdd => Kind::Count,
        }
    }

    /// Stable operator name for error messages and logs.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::SaturatingAdd => "SUM",
        }
    }

    /// Apply this operator to a combinable pair.
    ///
    /// # Errors
    ///
    /// - `OpError::KindMismatch` if an operand's kind differs from
    ///   [`Self::operand_kind`]
    /// - `OpError::LengthMismatch` if the operands declare different
    ///   lengths
    pub fn apply(self, a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
        match self {
            Self::And => logical::and(a, b),
            Self::Or => logical::or(a, b),
            Self::Xor => logical::xor(a, b),
            Self::Min => arithmetic::min(a, b),
            Self::Max => arithmetic::max(a, b),
            Self::SaturatingAdd => arithmetic::saturating_add(a, b),
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject operands that are not combinable under `operation`.
pub(crate) fn check_combinable(
    operation: &'static str,
    expected: Kind,
    a: &Fingerprint,
    b: &Fingerprint,
) -> Result<(), OpError> {
    for fp in [a, b] {
        if fp.kind() != expected {
            return Err(OpError::KindMismatch {
                operation,
                expected,
                actual: fp.kind(),
            });
        }
    }
    if a.len() != b.len() {
        return Err(OpError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
