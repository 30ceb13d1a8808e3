//! Row-at-a-time batch drivers with per-row error isolation.
//!
//! Stateless operators process one row independently of the rest of the
//! batch, so a single row's failure does not have to abort the run: the
//! default policy substitutes a missing result for the offending row,
//! records a warning, and continues. Fail-fast is the caller option for
//! pipelines that prefer aborting.
//!
//! A missing operand yields a missing result with no warning — absent
//! cells are ordinary data, not errors.

use tracing::warn;

use crate::error::OpError;
use crate::ops::{self, BinaryOp};
use crate::types::Fingerprint;

/// Recovery policy for a row-level operator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Substitute a missing result for the failed row and continue.
    SubstituteMissing,
    /// Abort the batch on the first row failure.
    FailFast,
}

/// A row whose result was substituted with missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// Zero-based row index within the batch.
    pub row: usize,
    /// The error that was isolated.
    pub error: OpError,
}

/// Per-row results plus the warnings collected along the way.
#[derive(Debug, Default)]
pub struct RowwiseOutput {
    /// One entry per input row; `None` is a missing output cell.
    pub results: Vec<Option<Fingerprint>>,
    /// Rows whose errors were isolated under
    /// [`RowPolicy::SubstituteMissing`].
    pub warnings: Vec<RowWarning>,
}

impl RowwiseOutput {
    fn push_failure(&mut self, row: usize, error: OpError, policy: RowPolicy) -> Result<(), OpError> {
        match policy {
            RowPolicy::FailFast => Err(error),
            RowPolicy::SubstituteMissing => {
                warn!(row, error = %error, "row failed; substituting missing result");
                self.results.push(None);
                self.warnings.push(RowWarning { row, error });
                Ok(())
            }
        }
    }
}

/// Apply a binary operator across a batch of operand pairs.
///
/// # Errors
///
/// Under [`RowPolicy::FailFast`], the first row-level [`OpError`].
pub fn apply_rowwise(
    op: BinaryOp,
    rows: impl IntoIterator<Item = (Option<Fingerprint>, Option<Fingerprint>)>,
    policy: RowPolicy,
) -> Result<RowwiseOutput, OpError> {
    let mut output = RowwiseOutput::default();
    for (row, pair) in rows.into_iter().enumerate() {
        match pair {
            (Some(a), Some(b)) => match op.apply(&a, &b) {
                Ok(result) => output.results.push(Some(result)),
                Err(error) => output.push_failure(row, error, policy)?,
            },
            _ => output.results.push(None),
        }
    }
    Ok(output)
}

/// Apply bitwise NOT across a batch of single operands.
///
/// The NOT-on-sparse restriction surfaces here as the typical isolated
/// per-row condition.
///
/// # Errors
///
/// Under [`RowPolicy::FailFast`], the first row-level [`OpError`].
pub fn invert_rowwise(
    rows: impl IntoIterator<Item = Option<Fingerprint>>,
    policy: RowPolicy,
) -> Result<RowwiseOutput, OpError> {
    let mut output = RowwiseOutput::default();
    for (row, cell) in rows.into_iter().enumerate() {
        match cell {
            Some(fp) => match ops::not(&fp) {
                Ok(result) => output.results.push(Some(result)),
                Err(error) => output.push_failure(row, error, policy)?,
            },
            None => output.results.push(None),
        }
    }
    Ok(output)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DenseBits, Layout, SparseBits};

    fn bits(pattern: &[bool]) -> Fingerprint {
        DenseBits::from_bits(pattern).into()
    }

    #[test]
    fn substitute_missing_isolates_bad_rows() {
        let rows = vec![
            (Some(bits(&[true, false])), Some(bits(&[false, true]))),
            // length mismatch: isolated, not fatal
            (Some(bits(&[true, false])), Some(bits(&[true, false, true]))),
            (None, Some(bits(&[true, true]))),
            (Some(bits(&[false, false])), Some(bits(&[true, false]))),
        ];
        let out = apply_rowwise(BinaryOp::Or, rows, RowPolicy::SubstituteMissing).unwrap();
        assert_eq!(out.results.len(), 4);
        assert!(out.results[0].is_some());
        assert!(out.results[1].is_none(), "failed row becomes missing");
        assert!(out.results[2].is_none(), "missing operand row is missing, no warning");
        assert!(out.results[3].is_some());
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].row, 1);
        assert_eq!(
            out.warnings[0].error,
            OpError::LengthMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn fail_fast_aborts_on_first_bad_row() {
        let rows = vec![
            (Some(bits(&[true])), Some(bits(&[true]))),
            (Some(bits(&[true])), Some(bits(&[true, false]))),
        ];
        let err = apply_rowwise(BinaryOp::Or, rows, RowPolicy::FailFast).unwrap_err();
        assert_eq!(err, OpError::LengthMismatch { left: 1, right: 2 });
    }

    #[test]
    fn invert_isolates_sparse_rows() {
        let rows = vec![
            Some(bits(&[true, false])),
            Some(Fingerprint::from(SparseBits::new(vec![0], 2).unwrap())),
            None,
        ];
        let out = invert_rowwise(rows, RowPolicy::SubstituteMissing).unwrap();
        assert_eq!(out.results[0], Some(bits(&[false, true])));
        assert!(out.results[1].is_none());
        assert!(out.results[2].is_none());
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(
            out.warnings[0].error,
            OpError::UnsupportedForLayout { operation: "NOT", layout: Layout::Sparse }
        );
    }
}
