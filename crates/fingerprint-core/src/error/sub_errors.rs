//! Sub-error types for fingerprint-core.
//!
//! Each error type covers a specific domain of failures.

use thiserror::Error;

use crate::types::{Kind, Layout};

// ============================================================================
// FINGERPRINT ERROR
// ============================================================================

/// Construction-time errors for fingerprint values.
///
/// A value that fails any of these checks is rejected whole; there is no
/// partially constructed fingerprint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// A sparse position is at or beyond the declared length bound.
    #[error("Position {position} out of bounds for length {len}")]
    PositionOutOfBounds {
        /// The offending position
        position: u64,
        /// The declared length bound
        len: u64,
    },

    /// Sparse positions are not strictly increasing.
    #[error("Positions not strictly increasing at entry {index}")]
    UnsortedPositions {
        /// Index of the first entry that breaks the ordering
        index: usize,
    },

    /// The same position appears more than once in a sparse entry list.
    #[error("Duplicate position {position}")]
    DuplicatePosition {
        /// The repeated position
        position: u64,
    },

    /// Sparse positions and values vectors have different lengths.
    #[error("Positions ({positions_len}) and values ({values_len}) length mismatch")]
    LengthMismatch {
        /// Length of the positions vector
        positions_len: usize,
        /// Length of the values vector
        values_len: usize,
    },

    /// A sparse count entry carries value zero.
    ///
    /// Zero is the implicit default for unlisted positions; listing it
    /// would make the entry list non-minimal.
    #[error("Sparse count entry at position {position} has value 0")]
    ZeroCountEntry {
        /// Position of the zero-valued entry
        position: u64,
    },

    /// Dense bit storage sets bits at or beyond the declared length.
    #[error("Bits set beyond length {len} in word {word_index}")]
    TrailingBitsSet {
        /// Index of the word carrying stray bits
        word_index: usize,
        /// The declared bit length
        len: u64,
    },

    /// Dense bit storage has the wrong number of backing words.
    #[error("Expected {expected} backing words for length {len}, got {actual}")]
    WordCountMismatch {
        /// Words required by the length
        expected: usize,
        /// Words actually supplied
        actual: usize,
        /// The declared bit length
        len: u64,
    },

    /// A length too large to materialize as a dense array.
    ///
    /// Sparse fingerprints may declare length bounds far beyond what a
    /// contiguous allocation can hold; densifying such a value fails
    /// here rather than aborting on allocation.
    #[error("Length {len} exceeds the dense materialization limit {limit}")]
    LengthOverflow {
        /// The declared length bound
        len: u64,
        /// Maximum dense length supported
        limit: u64,
    },
}

// ============================================================================
// OPERATOR ERROR
// ============================================================================

/// Errors from applying combinators, extractors or the group accumulator.
///
/// These are per-operation failures: the caller decides whether to abort
/// a whole run or substitute a missing result for the offending row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Operands (or operator and operand) disagree on semantic kind.
    #[error("Kind mismatch: {operation} expects {expected:?}, got {actual:?}")]
    KindMismatch {
        /// Name of the operation applied
        operation: &'static str,
        /// Kind the operation requires
        expected: Kind,
        /// Kind actually supplied
        actual: Kind,
    },

    /// Operands declare different lengths.
    ///
    /// Cross-length combination is a caller/data error and is never
    /// silently coerced.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: u64,
        /// Length of the right operand
        right: u64,
    },

    /// The operation is not defined for the operand's layout.
    ///
    /// The reference case is bitwise inversion of a sparse fingerprint:
    /// the caller is expected to densify first.
    #[error("{operation} is not supported for {layout:?} layout")]
    UnsupportedForLayout {
        /// Name of the operation applied
        operation: &'static str,
        /// The unsupported layout
        layout: Layout,
    },

    /// The group accumulator saw an incompatible input earlier.
    ///
    /// Once a group is poisoned no further values are combined; the
    /// group's result is the original error, never a partial fold.
    #[error("Group accumulator poisoned by an earlier incompatible input")]
    PoisonedGroup,

    /// A layout conversion required by the operation failed.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),
}

// ============================================================================
// CODEC ERROR
// ============================================================================

/// Errors from the text codec (binary and hexadecimal strings).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the codec's alphabet.
    #[error("Invalid character {character:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte offset within the input string
        offset: usize,
    },

    /// Decoded length cannot satisfy the explicitly required target length.
    ///
    /// Decoding never silently truncates or pads to fit.
    #[error("Encoded string yields length {decoded}, cannot satisfy requested length {requested}")]
    LengthMismatch {
        /// Length the encoded string decodes to
        decoded: u64,
        /// Length the caller required
        requested: u64,
    },

    /// A projection too large to materialize in memory.
    #[error("Length {len} exceeds the materialization limit {limit}")]
    LengthOverflow {
        /// The declared length bound
        len: u64,
        /// Maximum materializable length
        limit: u64,
    },
}
