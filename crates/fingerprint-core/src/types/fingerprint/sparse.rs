//! Sparse fingerprint storage.
//!
//! Sparse layouts list only the non-default positions — set bits for
//! [`SparseBits`], non-zero counts for [`SparseCounts`] — together with
//! a declared length bound. Positions are strictly increasing and
//! unique, which keeps element access at O(log nnz) via binary search
//! and lets the combinators run merge-joins in O(nnz_a + nnz_b).
//!
//! The length bound is `u64` throughout: a sparse fingerprint may
//! declare a domain far wider than anything a dense array could hold,
//! and cardinality stays exact over it.
//!
//! # Invariants
//!
//! - positions strictly increasing, no duplicates
//! - every position `< len`
//! - count values non-zero (zero is the implicit default; listing it
//!   would make the entry list non-minimal)
//!
//! All invariants are checked at construction and rejected with
//! [`FingerprintError`]; a violating value is never partially accepted.

use serde::{Deserialize, Serialize};

use crate::error::FingerprintError;

use super::dense::{DenseBits, DenseCounts};

/// Validate a sorted unique position list against a length bound.
///
/// Shared by both sparse storage types.
fn validate_positions(positions: &[u64], len: u64) -> Result<(), FingerprintError> {
    for (index, &pos) in positions.iter().enumerate() {
        if pos >= len {
            return Err(FingerprintError::PositionOutOfBounds { position: pos, len });
        }
        if index > 0 {
            let prev = positions[index - 1];
            if pos == prev {
                return Err(FingerprintError::DuplicatePosition { position: pos });
            }
            if pos < prev {
                return Err(FingerprintError::UnsortedPositions { index });
            }
        }
    }
    Ok(())
}

// ============================================================================
// SPARSE BITS
// ============================================================================

/// Sparse presence bitset: the sorted list of set positions.
///
/// A listed position is set (implicitly value 1); every other position
/// below `len` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseBits {
    positions: Vec<u64>,
    len: u64,
}

impl SparseBits {
    /// Create from a sorted position list and a length bound.
    ///
    /// # Errors
    ///
    /// - `FingerprintError::PositionOutOfBounds` if a position is `>= len`
    /// - `FingerprintError::UnsortedPositions` if positions decrease
    /// - `FingerprintError::DuplicatePosition` if a position repeats
    pub fn new(positions: Vec<u64>, len: u64) -> Result<Self, FingerprintError> {
        validate_positions(&positions, len)?;
        Ok(Self { positions, len })
    }

    /// An empty set over the given length bound.
    #[must_use]
    pub fn empty(len: u64) -> Self {
        Self {
            positions: Vec::new(),
            len,
        }
    }

    /// Construct without validation.
    ///
    /// Caller must guarantee the position list is sorted, unique and
    /// in-bounds; used by converters and merge kernels whose outputs
    /// hold the invariants by construction.
    #[inline]
    pub(crate) fn from_sorted_unchecked(positions: Vec<u64>, len: u64) -> Self {
        debug_assert!(validate_positions(&positions, len).is_ok());
        Self { positions, len }
    }

    /// Declared number of positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// The sorted set positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// Number of set positions.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.positions.len()
    }

    /// Bit at `pos`, or `None` past the length bound.
    #[must_use]
    pub fn get(&self, pos: u64) -> Option<bool> {
        if pos >= self.len {
            return None;
        }
        Some(self.positions.binary_search(&pos).is_ok())
    }

    /// Heap bytes owned by this value.
    #[inline]
    #[must_use]
    pub fn memory_size(&self) -> usize {
        self.positions.capacity() * std::mem::size_of::<u64>()
    }

    /// Densify into a packed bitset.
    ///
    /// # Errors
    ///
    /// `FingerprintError::LengthOverflow` if the declared length bound
    /// exceeds the dense materialization limit.
    pub fn to_dense(&self) -> Result<DenseBits, FingerprintError> {
        let mut dense = DenseBits::zeroed(self.len)?;
        for &pos in &self.positions {
            dense.set(pos);
        }
        Ok(dense)
    }
}

// ============================================================================
// SPARSE COUNTS
// ============================================================================

/// Sparse saturating count vector: parallel sorted positions and
/// non-zero values.
///
/// Positions and values are parallel vectors, the representation used
/// throughout for index/value pairs; `positions[i]` carries count
/// `values[i]` and every unlisted position below `len` is implicitly 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseCounts {
    positions: Vec<u64>,
    values: Vec<u8>,
    len: u64,
}

impl SparseCounts {
    /// Create from parallel position/value lists and a length bound.
    ///
    /// # Errors
    ///
    /// - `FingerprintError::LengthMismatch` if the lists differ in length
    /// - `FingerprintError::ZeroCountEntry` if any value is 0
    /// - plus the position-list errors of [`SparseBits::new`]
    pub fn new(positions: Vec<u64>, values: Vec<u8>, len: u64) -> Result<Self, FingerprintError> {
        if positions.len() != values.len() {
            return Err(FingerprintError::LengthMismatch {
                positions_len: positions.len(),
                values_len: values.len(),
            });
        }
        validate_positions(&positions, len)?;
        for (&pos, &value) in positions.iter().zip(values.iter()) {
            if value == 0 {
                return Err(FingerprintError::ZeroCountEntry { position: pos });
            }
        }
        Ok(Self {
            positions,
            values,
            len,
        })
    }

    /// An empty count vector over the given length bound.
    #[must_use]
    pub fn empty(len: u64) -> Self {
        Self {
            positions: Vec::new(),
            values: Vec::new(),
            len,
        }
    }

    /// Construct without validation; see [`SparseBits::from_sorted_unchecked`].
    #[inline]
    pub(crate) fn from_sorted_unchecked(positions: Vec<u64>, values: Vec<u8>, len: u64) -> Self {
        debug_assert_eq!(positions.len(), values.len());
        debug_assert!(validate_positions(&positions, len).is_ok());
        debug_assert!(values.iter().all(|&v| v != 0));
        Self {
            positions,
            values,
            len,
        }
    }

    /// Declared number of positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// The sorted positions holding non-zero counts.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// The counts parallel to [`Self::positions`].
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of non-zero entries.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.positions.len()
    }

    /// Count at `pos` (0 if unlisted), or `None` past the length bound.
    #[must_use]
    pub fn get(&self, pos: u64) -> Option<u8> {
        if pos >= self.len {
            return None;
        }
        match self.positions.binary_search(&pos) {
            Ok(i) => Some(self.values[i]),
            Err(_) => Some(0),
        }
    }

    /// Full-precision sum of all counts; never saturates.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    /// Heap bytes owned by this value.
    #[inline]
    #[must_use]
    pub fn memory_size(&self) -> usize {
        self.positions.capacity() * std::mem::size_of::<u64>() + self.values.capacity()
    }

    /// Densify into a full count array.
    ///
    /// # Errors
    ///
    /// `FingerprintError::LengthOverflow` if the declared length bound
    /// exceeds the dense materialization limit.
    pub fn to_dense(&self) -> Result<DenseCounts, FingerprintError> {
        let mut dense = DenseCounts::zeroed(self.len)?;
        for (&pos, &value) in self.positions.iter().zip(&self.values) {
            dense.set(pos, value);
        }
        Ok(dense)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // VALIDATION
    // ========================================================================

    #[test]
    fn rejects_out_of_bounds_position() {
        let err = SparseBits::new(vec![0, 16], 16).unwrap_err();
        assert_eq!(
            err,
            FingerprintError::PositionOutOfBounds { position: 16, len: 16 }
        );
    }

    #[test]
    fn rejects_unsorted_positions() {
        let err = SparseBits::new(vec![5, 2], 16).unwrap_err();
        assert_eq!(err, FingerprintError::UnsortedPositions { index: 1 });
    }

    #[test]
    fn rejects_duplicate_position() {
        let err = SparseBits::new(vec![2, 2], 16).unwrap_err();
        assert_eq!(err, FingerprintError::DuplicatePosition { position: 2 });
    }

    #[test]
    fn rejects_mismatched_parallel_lists() {
        let err = SparseCounts::new(vec![1, 2], vec![3], 16).unwrap_err();
        assert_eq!(
            err,
            FingerprintError::LengthMismatch { positions_len: 2, values_len: 1 }
        );
    }

    #[test]
    fn rejects_zero_count_entry() {
        let err = SparseCounts::new(vec![1, 2], vec![3, 0], 16).unwrap_err();
        assert_eq!(err, FingerprintError::ZeroCountEntry { position: 2 });
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    #[test]
    fn bit_lookup_is_implicitly_unset() {
        let fp = SparseBits::new(vec![3, 9], 12).unwrap();
        assert_eq!(fp.get(3), Some(true));
        assert_eq!(fp.get(4), Some(false), "unlisted position is unset");
        assert_eq!(fp.get(12), None, "past the bound is absent, not unset");
        assert_eq!(fp.nnz(), 2);
    }

    #[test]
    fn count_lookup_is_implicitly_zero() {
        let fp = SparseCounts::new(vec![1, 7], vec![250, 5], 10).unwrap();
        assert_eq!(fp.get(1), Some(250));
        assert_eq!(fp.get(2), Some(0));
        assert_eq!(fp.get(10), None);
        assert_eq!(fp.total_count(), 255);
    }

    #[test]
    fn supports_lengths_beyond_u32() {
        // length bounds are u64; positions near the top must validate
        let len = 1u64 << 40;
        let fp = SparseBits::new(vec![0, len - 1], len).unwrap();
        assert_eq!(fp.nnz(), 2);
        assert_eq!(fp.get(len - 1), Some(true));
    }

    #[test]
    fn empty_constructors() {
        assert_eq!(SparseBits::empty(64).nnz(), 0);
        assert_eq!(SparseCounts::empty(64).nnz(), 0);
    }
}
