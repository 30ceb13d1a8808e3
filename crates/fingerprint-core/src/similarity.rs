//! Similarity coefficients between fingerprint pairs.
//!
//! Tanimoto and Dice over the same combinability rules as the binary
//! operators (same kind, same length). Bit-kind pairs score on set
//! overlap; count-kind pairs use the min/max generalization, so a count
//! fingerprint scores against itself as 1.0 regardless of magnitudes.
//!
//! Merge-join on sorted positions gives O(nnz_a + nnz_b) for
//! sparse/sparse pairs; dense/dense pairs run word-parallel popcounts.
//! Two empty fingerprints are considered identical (score 1.0).

use std::cmp::Ordering;

use crate::error::OpError;
use crate::ops::check_combinable;
use crate::properties::total_count;
use crate::types::{Fingerprint, Kind};

/// Set-overlap statistics for a bit-kind pair: (intersection, |A|, |B|).
fn bit_overlap(
    operation: &'static str,
    a: &Fingerprint,
    b: &Fingerprint,
) -> Result<(u64, u64, u64), OpError> {
    let inter = match (a, b) {
        (Fingerprint::DenseBits(x), Fingerprint::DenseBits(y)) => x
            .as_words()
            .iter()
            .zip(y.as_words())
            .map(|(&wa, &wb)| u64::from((wa & wb).count_ones()))
            .sum(),
        (Fingerprint::SparseBits(x), Fingerprint::SparseBits(y)) => {
            let (ap, bp) = (x.positions(), y.positions());
            let mut inter = 0u64;
            let (mut i, mut j) = (0, 0);
            while i < ap.len() && j < bp.len() {
                match ap[i].cmp(&bp[j]) {
                    Ordering::Equal => {
                        inter += 1;
                        i += 1;
                        j += 1;
                    }
                    Ordering::Less => i += 1,
                    Ordering::Greater => j += 1,
                }
            }
            inter
        }
        // mixed layout: probe the dense side for each sparse position
        (Fingerprint::SparseBits(x), Fingerprint::DenseBits(y)) => x
            .positions()
            .iter()
            .filter(|&&pos| y.get(pos) == Some(true))
            .count() as u64,
        (Fingerprint::DenseBits(x), Fingerprint::SparseBits(y)) => y
            .positions()
            .iter()
            .filter(|&&pos| x.get(pos) == Some(true))
            .count() as u64,
        _ => {
            return Err(OpError::KindMismatch {
                operation,
                expected: Kind::Bit,
                actual: Kind::Count,
            })
        }
    };
    Ok((inter, a.nnz(), b.nnz()))
}

/// Min/max sums for a count-kind pair: (Σ min(aᵢ,bᵢ), Σ max(aᵢ,bᵢ)).
fn count_overlap(
    operation: &'static str,
    a: &Fingerprint,
    b: &Fingerprint,
) -> Result<(u64, u64), OpError> {
    match (a, b) {
        (Fingerprint::DenseCounts(x), Fingerprint::DenseCounts(y)) => {
            let mut sum_min = 0u64;
            let mut sum_max = 0u64;
            for (&va, &vb) in x.as_values().iter().zip(y.as_values()) {
                sum_min += u64::from(va.min(vb));
                sum_max += u64::from(va.max(vb));
            }
            Ok((sum_min, sum_max))
        }
        (Fingerprint::SparseCounts(x), Fingerprint::SparseCounts(y)) => {
            let (ap, av) = (x.positions(), x.values());
            let (bp, bv) = (y.positions(), y.values());
            let mut sum_min = 0u64;
            let mut sum_max = 0u64;
            let (mut i, mut j) = (0, 0);
            while i < ap.len() && j < bp.len() {
                match ap[i].cmp(&bp[j]) {
                    Ordering::Equal => {
                        sum_min += u64::from(av[i].min(bv[j]));
                        sum_max += u64::from(av[i].max(bv[j]));
                        i += 1;
                        j += 1;
                    }
                    // a position on one side only: min is 0, max is the value
                    Ordering::Less => {
                        sum_max += u64::from(av[i]);
                        i += 1;
                    }
                    Ordering::Greater => {
                        sum_max += u64::from(bv[j]);
                        j += 1;
                    }
                }
            }
            sum_max += av[i..].iter().map(|&v| u64::from(v)).sum::<u64>();
            sum_max += bv[j..].iter().map(|&v| u64::from(v)).sum::<u64>();
            Ok((sum_min, sum_max))
        }
        (Fingerprint::DenseCounts(_), Fingerprint::SparseCounts(s)) => {
            count_overlap(operation, a, &Fingerprint::DenseCounts(s.to_dense()?))
        }
        (Fingerprint::SparseCounts(s), Fingerprint::DenseCounts(_)) => {
            count_overlap(operation, &Fingerprint::DenseCounts(s.to_dense()?), b)
        }
        _ => Err(OpError::KindMismatch {
            operation,
            expected: Kind::Count,
            actual: Kind::Bit,
        }),
    }
}

/// Tanimoto coefficient in `[0.0, 1.0]`.
///
/// Bit kind: `|A ∩ B| / |A ∪ B|`. Count kind: `Σ min / Σ max`.
/// Two empty fingerprints score 1.0; an empty against a non-empty
/// scores 0.0.
///
/// # Errors
///
/// Same combinability errors as the binary operators.
pub fn tanimoto(a: &Fingerprint, b: &Fingerprint) -> Result<f64, OpError> {
    check_combinable("TANIMOTO", a.kind(), a, b)?;
    match a.kind() {
        Kind::Bit => {
            let (inter, ca, cb) = bit_overlap("TANIMOTO", a, b)?;
            let union = ca + cb - inter;
            if union == 0 {
                return Ok(1.0);
            }
            Ok(inter as f64 / union as f64)
        }
        Kind::Count => {
            let (sum_min, sum_max) = count_overlap("TANIMOTO", a, b)?;
            if sum_max == 0 {
                return Ok(1.0);
            }
            Ok(sum_min as f64 / sum_max as f64)
        }
    }
}

/// Dice coefficient in `[0.0, 1.0]`.
///
/// Bit kind: `2|A ∩ B| / (|A| + |B|)`. Count kind:
/// `2 Σ min / (Σ a + Σ b)`. Two empty fingerprints score 1.0.
///
/// # Errors
///
/// Same combinability errors as the binary operators.
pub fn dice(a: &Fingerprint, b: &Fingerprint) -> Result<f64, OpError> {
    check_combinable("DICE", a.kind(), a, b)?;
    match a.kind() {
        Kind::Bit => {
            let (inter, ca, cb) = bit_overlap("DICE", a, b)?;
            if ca + cb == 0 {
                return Ok(1.0);
            }
            Ok(2.0 * inter as f64 / (ca + cb) as f64)
        }
        Kind::Count => {
            let (sum_min, _) = count_overlap("DICE", a, b)?;
            let denom = total_count(a) + total_count(b);
            if denom == 0 {
                return Ok(1.0);
            }
            Ok(2.0 * sum_min as f64 / denom as f64)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
