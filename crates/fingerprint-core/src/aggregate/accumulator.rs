//! Resettable fold accumulator for one group of fingerprints.

use crate::error::OpError;
use crate::ops::BinaryOp;
use crate::types::Fingerprint;

/// Accumulator state: value-free until the first non-missing input.
#[derive(Debug, Clone)]
enum State {
    /// No value seen yet.
    Empty,
    /// The running combined fingerprint.
    Running(Fingerprint),
    /// An incompatible input aborted this group's accumulation.
    Poisoned(OpError),
}

/// Folds a sequence of same-group fingerprints into one combined value.
///
/// Lifecycle: created (or [`reset`](Self::reset)) per group, fed zero or
/// more inputs via [`accumulate`](Self::accumulate), then finalized
/// exactly once per group with [`finalize`](Self::finalize). `finalize`
/// does not reset; the caller resets before the next group.
///
/// The first non-missing input establishes the group's kind and length.
/// A later input that disagrees poisons the group: the error is returned
/// immediately, and `finalize` reports it instead of a partially
/// combined value — silently dropping an incompatible member would
/// yield a result with undefined provenance.
///
/// All supported operators are associative and commutative, so the
/// finalized value is independent of input order.
///
/// # Example
///
/// ```
/// use fingerprint_core::aggregate::GroupAccumulator;
/// use fingerprint_core::ops::BinaryOp;
/// use fingerprint_core::types::{DenseBits, Fingerprint};
///
/// let mut acc = GroupAccumulator::new(BinaryOp::Or);
/// for bits in [[true, false, true, false], [false, true, true, false]] {
///     let fp = Fingerprint::from(DenseBits::from_bits(&bits));
///     acc.accumulate(Some(&fp)).unwrap();
/// }
/// let combined = acc.finalize().unwrap().unwrap();
/// assert_eq!(combined.nnz(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GroupAccumulator {
    op: BinaryOp,
    state: State,
}

impl GroupAccumulator {
    /// Create an accumulator folding with the given operator.
    ///
    /// The reference configuration for presence fingerprints is
    /// [`BinaryOp::Or`].
    #[must_use]
    pub fn new(op: BinaryOp) -> Self {
        Self {
            op,
            state: State::Empty,
        }
    }

    /// The configured combinator.
    #[inline]
    #[must_use]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// True iff no non-missing input has been accumulated.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Clear to the initial state for the next group.
    pub fn reset(&mut self) {
        self.state = State::Empty;
    }

    /// Fold one group input into the running result.
    ///
    /// `None` marks a missing cell and is a no-op. The first value is
    /// stored as the running result; later values are combined with the
    /// configured operator.
    ///
    /// # Errors
    ///
    /// - the operator's combinability errors, which also poison the
    ///   group
    /// - `OpError::PoisonedGroup` for every input after the poisoning
    ///   one
    pub fn accumulate(&mut self, input: Option<&Fingerprint>) -> Result<(), OpError> {
        let Some(fp) = input else {
            return Ok(());
        };
        let combined = match &self.state {
            State::Poisoned(_) => return Err(OpError::PoisonedGroup),
            State::Empty => {
                if fp.kind() != self.op.operand_kind() {
                    let err = OpError::KindMismatch {
                        operation: self.op.name(),
                        expected: self.op.operand_kind(),
                        actual: fp.kind(),
                    };
                    self.state = State::Poisoned(err.clone());
                    return Err(err);
                }
                self.state = State::Running(fp.clone());
                return Ok(());
            }
            State::Running(current) => self.op.apply(current, fp),
        };
        match combined {
            Ok(value) => {
                self.state = State::Running(value);
                Ok(())
            }
            Err(err) => {
                self.state = State::Poisoned(err.clone());
                Err(err)
            }
        }
    }

    /// The group's combined fingerprint.
    ///
    /// `Ok(None)` when the group contained no non-missing input; the
    /// caller maps it to a missing output cell. Does not reset.
    ///
    /// # Errors
    ///
    /// The poisoning error, if an incompatible input aborted this group.
    pub fn finalize(&self) -> Result<Option<Fingerprint>, OpError> {
        match &self.state {
            State::Empty => Ok(None),
            State::Running(fp) => Ok(Some(fp.clone())),
            State::Poisoned(err) => Err(err.clone()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
