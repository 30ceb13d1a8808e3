//! Scalar property extractors.
//!
//! Stateless pure functions over a single fingerprint value. Counts are
//! `u64` end to end: a sparse-backed fingerprint may declare a length
//! far past the 32-bit range and its cardinality must stay exact.

use crate::config::MAX_COUNT;
use crate::types::{Fingerprint, Kind};

/// Number of non-default positions: set bits for bit kind, non-zero
/// counts for count kind.
#[must_use]
pub fn cardinality(fp: &Fingerprint) -> u64 {
    fp.nnz()
}

/// Total count over all positions.
///
/// Identical to [`cardinality`] for bit kind. For count kind this is the
/// full-precision sum of all values — the per-element saturation bound
/// does not apply to the vector total.
#[must_use]
pub fn total_count(fp: &Fingerprint) -> u64 {
    match fp {
        Fingerprint::DenseBits(_) | Fingerprint::SparseBits(_) => fp.nnz(),
        Fingerprint::DenseCounts(d) => d.total_count(),
        Fingerprint::SparseCounts(s) => s.total_count(),
    }
}

/// Fraction of the maximum possible weight, in `[0.0, 1.0]`.
///
/// `cardinality / len` for bit kind, `total_count / (255 * len)` for
/// count kind. A zero-length fingerprint has density 0.0 by convention.
#[must_use]
pub fn density(fp: &Fingerprint) -> f64 {
    let len = fp.len();
    if len == 0 {
        return 0.0;
    }
    match fp.kind() {
        Kind::Bit => cardinality(fp) as f64 / len as f64,
        Kind::Count => total_count(fp) as f64 / (f64::from(MAX_COUNT) * len as f64),
    }
}

/// True iff the fingerprint holds no non-default entry.
#[must_use]
pub fn is_empty(fp: &Fingerprint) -> bool {
    fp.is_empty()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DenseBits, DenseCounts, SparseBits};

    #[test]
    fn reference_count_scenario() {
        let a = Fingerprint::from(DenseCounts::new(vec![10, 250, 0, 5]));
        assert_eq!(cardinality(&a), 3);
        assert_eq!(total_count(&a), 265, "total is full precision, not saturated");
        let expected = 265.0 / (255.0 * 4.0);
        assert!((density(&a) - expected).abs() < 1e-12, "density = 265/1020");
    }

    #[test]
    fn bit_total_equals_cardinality() {
        let fp = Fingerprint::from(DenseBits::from_bits(&[true, true, false, true]));
        assert_eq!(cardinality(&fp), 3);
        assert_eq!(total_count(&fp), 3);
        assert!((density(&fp) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_length_density_is_zero() {
        let fp = Fingerprint::from(DenseBits::from_bits(&[]));
        assert_eq!(density(&fp), 0.0);
        assert!(is_empty(&fp));
    }

    #[test]
    fn density_stays_in_unit_interval() {
        let full = Fingerprint::from(DenseCounts::new(vec![255; 16]));
        assert!((density(&full) - 1.0).abs() < 1e-12, "all-255 counts have density 1");
        let none = Fingerprint::from(SparseBits::empty(1 << 40));
        assert_eq!(density(&none), 0.0);
    }

    #[test]
    fn cardinality_bounded_by_len() {
        let fp = Fingerprint::from(SparseBits::new(vec![0, 1, 2], 3).unwrap());
        assert_eq!(cardinality(&fp), fp.len());
        assert!((density(&fp) - 1.0).abs() < 1e-12);
    }
}
