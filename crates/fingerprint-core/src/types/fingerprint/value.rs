//! The [`Fingerprint`] sum type: shared accessors and layout converters.

use serde::{Deserialize, Serialize};

use crate::error::FingerprintError;

use super::dense::{DenseBits, DenseCounts};
use super::kind::{Kind, Layout};
use super::sparse::{SparseBits, SparseCounts};

/// An immutable fingerprint value, tagged by kind and layout.
///
/// Operators match on the variant instead of testing layout or kind
/// through side channels; the tag is decided at construction and never
/// changes for the life of the value.
///
/// Values own their backing storage exclusively and the type is
/// `Send + Sync`; operators borrow their operands and never retain
/// references past the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fingerprint {
    /// Dense presence bitset.
    DenseBits(DenseBits),
    /// Dense count vector.
    DenseCounts(DenseCounts),
    /// Sparse presence bitset.
    SparseBits(SparseBits),
    /// Sparse count vector.
    SparseCounts(SparseCounts),
}

impl Fingerprint {
    /// Number of positions (the declared length for sparse layouts).
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        match self {
            Self::DenseBits(fp) => fp.len(),
            Self::DenseCounts(fp) => fp.len(),
            Self::SparseBits(fp) => fp.len(),
            Self::SparseCounts(fp) => fp.len(),
        }
    }

    /// Semantic kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::DenseBits(_) | Self::SparseBits(_) => Kind::Bit,
            Self::DenseCounts(_) | Self::SparseCounts(_) => Kind::Count,
        }
    }

    /// Physical layout of this value.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Self::DenseBits(_) | Self::DenseCounts(_) => Layout::Dense,
            Self::SparseBits(_) | Self::SparseCounts(_) => Layout::Sparse,
        }
    }

    /// Value at `pos`: 0/1 for bit kind, 0–255 for count kind.
    ///
    /// `None` past the end. O(1) for dense layouts, O(log nnz) for
    /// sparse.
    #[must_use]
    pub fn value_at(&self, pos: u64) -> Option<u8> {
        match self {
            Self::DenseBits(fp) => fp.get(pos).map(u8::from),
            Self::DenseCounts(fp) => fp.get(pos),
            Self::SparseBits(fp) => fp.get(pos).map(u8::from),
            Self::SparseCounts(fp) => fp.get(pos),
        }
    }

    /// Number of non-default entries (set bits / non-zero counts).
    ///
    /// For sparse layouts this is the stored entry count; for dense it
    /// is computed.
    #[must_use]
    pub fn nnz(&self) -> u64 {
        match self {
            Self::DenseBits(fp) => fp.cardinality(),
            Self::DenseCounts(fp) => fp.cardinality(),
            Self::SparseBits(fp) => fp.nnz() as u64,
            Self::SparseCounts(fp) => fp.nnz() as u64,
        }
    }

    /// True iff no position holds a non-default value.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Iterate the non-default positions in increasing order.
    pub fn iter_set(&self) -> Box<dyn Iterator<Item = u64> + '_> {
        match self {
            Self::DenseBits(fp) => Box::new(fp.iter_set()),
            Self::DenseCounts(fp) => Box::new(
                fp.as_values()
                    .iter()
                    .enumerate()
                    .filter(|(_, &v)| v != 0)
                    .map(|(i, _)| i as u64),
            ),
            Self::SparseBits(fp) => Box::new(fp.positions().iter().copied()),
            Self::SparseCounts(fp) => Box::new(fp.positions().iter().copied()),
        }
    }

    /// Convert to the dense layout of the same kind.
    ///
    /// Lossless and deterministic; a no-op clone when already dense.
    ///
    /// # Errors
    ///
    /// `FingerprintError::LengthOverflow` when a sparse value declares a
    /// length bound past the dense materialization limit.
    pub fn to_dense(&self) -> Result<Self, FingerprintError> {
        match self {
            Self::DenseBits(_) | Self::DenseCounts(_) => Ok(self.clone()),
            Self::SparseBits(fp) => fp.to_dense().map(Self::DenseBits),
            Self::SparseCounts(fp) => fp.to_dense().map(Self::DenseCounts),
        }
    }

    /// Convert to the sparse layout of the same kind.
    ///
    /// Always succeeds and yields the minimal non-default entry list; a
    /// no-op clone when already sparse.
    #[must_use]
    pub fn to_sparse(&self) -> Self {
        match self {
            Self::SparseBits(_) | Self::SparseCounts(_) => self.clone(),
            Self::DenseBits(fp) => Self::SparseBits(SparseBits::from_sorted_unchecked(
                fp.iter_set().collect(),
                fp.len(),
            )),
            Self::DenseCounts(fp) => {
                let mut positions = Vec::new();
                let mut values = Vec::new();
                for (i, &v) in fp.as_values().iter().enumerate() {
                    if v != 0 {
                        positions.push(i as u64);
                        values.push(v);
                    }
                }
                Self::SparseCounts(SparseCounts::from_sorted_unchecked(
                    positions,
                    values,
                    fp.len(),
                ))
            }
        }
    }

    /// Heap bytes owned by this value.
    #[must_use]
    pub fn memory_size(&self) -> usize {
        match self {
            Self::DenseBits(fp) => fp.memory_size(),
            Self::DenseCounts(fp) => fp.memory_size(),
            Self::SparseBits(fp) => fp.memory_size(),
            Self::SparseCounts(fp) => fp.memory_size(),
        }
    }
}

impl From<DenseBits> for Fingerprint {
    fn from(fp: DenseBits) -> Self {
        Self::DenseBits(fp)
    }
}

impl From<DenseCounts> for Fingerprint {
    fn from(fp: DenseCounts) -> Self {
        Self::DenseCounts(fp)
    }
}

impl From<SparseBits> for Fingerprint {
    fn from(fp: SparseBits) -> Self {
        Self::SparseBits(fp)
    }
}

impl From<SparseCounts> for Fingerprint {
    fn from(fp: SparseCounts) -> Self {
        Self::SparseCounts(fp)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_dense() -> Fingerprint {
        DenseBits::from_bits(&[true, false, false, true, true, false, false, false, true]).into()
    }

    // ========================================================================
    // TAGS AND ACCESS
    // ========================================================================

    #[test]
    fn tags_follow_variant() {
        let fp = bits_dense();
        assert_eq!(fp.kind(), Kind::Bit);
        assert_eq!(fp.layout(), Layout::Dense);

        let fp = Fingerprint::from(SparseCounts::new(vec![2], vec![9], 4).unwrap());
        assert_eq!(fp.kind(), Kind::Count);
        assert_eq!(fp.layout(), Layout::Sparse);
    }

    #[test]
    fn value_at_projects_bits_to_01() {
        let fp = bits_dense();
        assert_eq!(fp.value_at(0), Some(1));
        assert_eq!(fp.value_at(1), Some(0));
        assert_eq!(fp.value_at(9), None);
    }

    // ========================================================================
    // LAYOUT CONVERSION
    // ========================================================================

    #[test]
    fn dense_sparse_round_trip_bits() {
        let dense = bits_dense();
        let sparse = dense.to_sparse();
        assert_eq!(sparse.layout(), Layout::Sparse);
        assert_eq!(sparse.len(), dense.len());
        assert_eq!(sparse.nnz(), dense.nnz());
        let back = sparse.to_dense().unwrap();
        assert_eq!(back, dense, "dense -> sparse -> dense must be identity");
    }

    #[test]
    fn dense_sparse_round_trip_counts() {
        let dense = Fingerprint::from(DenseCounts::new(vec![10, 0, 250, 0, 5]));
        let sparse = dense.to_sparse();
        assert_eq!(sparse.nnz(), 3, "sparse form lists only non-zero entries");
        assert_eq!(sparse.to_dense().unwrap(), dense);
    }

    #[test]
    fn to_sparse_is_minimal() {
        let dense = Fingerprint::from(DenseCounts::new(vec![0, 0, 0]));
        match dense.to_sparse() {
            Fingerprint::SparseCounts(sc) => {
                assert_eq!(sc.nnz(), 0);
                assert_eq!(sc.len(), 3);
            }
            other => panic!("expected sparse counts, got {other:?}"),
        }
    }

    #[test]
    fn to_dense_refuses_unmaterializable_length() {
        let wide = Fingerprint::from(SparseBits::new(vec![7], 1 << 40).unwrap());
        let err = wide.to_dense().unwrap_err();
        assert!(matches!(err, FingerprintError::LengthOverflow { .. }));
    }

    #[test]
    fn is_empty_tracks_nnz() {
        assert!(Fingerprint::from(SparseBits::empty(128)).is_empty());
        assert!(!bits_dense().is_empty());
        // zero-length fingerprints are empty by definition
        assert!(Fingerprint::from(DenseCounts::new(vec![])).is_empty());
    }

    // ========================================================================
    // SERDE
    // ========================================================================

    #[test]
    fn serde_round_trip_each_variant() {
        let values = vec![
            bits_dense(),
            Fingerprint::from(DenseCounts::new(vec![1, 0, 255])),
            Fingerprint::from(SparseBits::new(vec![0, 63, 64], 128).unwrap()),
            Fingerprint::from(SparseCounts::new(vec![3, 5], vec![7, 200], 16).unwrap()),
        ];
        for fp in values {
            let json = serde_json::to_string(&fp).unwrap();
            let back: Fingerprint = serde_json::from_str(&json).unwrap();
            assert_eq!(back, fp, "serde round trip must preserve the value");
        }
    }
}
