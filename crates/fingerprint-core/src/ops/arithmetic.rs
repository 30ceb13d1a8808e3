//! Arithmetic combinators for count-kind fingerprints: MIN, MAX, SUM.
//!
//! All three saturate at the `[0, 255]` element bound — addition clamps
//! at 255, nothing wraps or goes negative. Sparse/sparse pairs merge the
//! two sorted entry lists, applying the operator with an implicit zero
//! for a position present on only one side and omitting zero results,
//! so the output stays minimal (MIN against an absent entry vanishes;
//! SUM and MAX pass the present value through).

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::error::OpError;
use crate::types::{DenseCounts, Fingerprint, Kind, SparseCounts};

use super::check_combinable;

/// Borrow the dense counts, densifying a sparse operand.
fn to_dense_counts<'a>(
    operation: &'static str,
    fp: &'a Fingerprint,
) -> Result<Cow<'a, DenseCounts>, OpError> {
    match fp {
        Fingerprint::DenseCounts(d) => Ok(Cow::Borrowed(d)),
        Fingerprint::SparseCounts(s) => Ok(Cow::Owned(s.to_dense()?)),
        _ => Err(OpError::KindMismatch {
            operation,
            expected: Kind::Count,
            actual: fp.kind(),
        }),
    }
}

/// Elementwise kernel over two equal-length dense count vectors.
fn zip_counts(x: &DenseCounts, y: &DenseCounts, f: impl Fn(u8, u8) -> u8) -> DenseCounts {
    let values = x
        .as_values()
        .iter()
        .zip(y.as_values())
        .map(|(&a, &b)| f(a, b))
        .collect();
    DenseCounts::new(values)
}

/// Merge two sorted sparse entry lists under `f`, with implicit zeros.
///
/// Zero results are omitted, keeping the output entry list minimal.
fn merge_counts(x: &SparseCounts, y: &SparseCounts, f: impl Fn(u8, u8) -> u8) -> SparseCounts {
    let (ap, av) = (x.positions(), x.values());
    let (bp, bv) = (y.positions(), y.values());
    let mut positions = Vec::with_capacity(ap.len() + bp.len());
    let mut values = Vec::with_capacity(ap.len() + bp.len());
    let mut push = |pos: u64, value: u8| {
        if value != 0 {
            positions.push(pos);
            values.push(value);
        }
    };
    let (mut i, mut j) = (0, 0);
    while i < ap.len() && j < bp.len() {
        match ap[i].cmp(&bp[j]) {
            Ordering::Equal => {
                push(ap[i], f(av[i], bv[j]));
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                push(ap[i], f(av[i], 0));
                i += 1;
            }
            Ordering::Greater => {
                push(bp[j], f(0, bv[j]));
                j += 1;
            }
        }
    }
    while i < ap.len() {
        push(ap[i], f(av[i], 0));
        i += 1;
    }
    while j < bp.len() {
        push(bp[j], f(0, bv[j]));
        j += 1;
    }
    SparseCounts::from_sorted_unchecked(positions, values, x.len())
}

/// Shared driver: native path per layout pair, dense fallback otherwise.
fn elementwise(
    operation: &'static str,
    a: &Fingerprint,
    b: &Fingerprint,
    f: impl Fn(u8, u8) -> u8 + Copy,
) -> Result<Fingerprint, OpError> {
    check_combinable(operation, Kind::Count, a, b)?;
    match (a, b) {
        (Fingerprint::SparseCounts(x), Fingerprint::SparseCounts(y)) => {
            Ok(merge_counts(x, y, f).into())
        }
        _ => {
            let x = to_dense_counts(operation, a)?;
            let y = to_dense_counts(operation, b)?;
            Ok(zip_counts(&x, &y, f).into())
        }
    }
}

/// Elementwise minimum.
pub fn min(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    elementwise("MIN", a, b, u8::min)
}

/// Elementwise maximum.
pub fn max(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    elementwise("MAX", a, b, u8::max)
}

/// Elementwise sum, clamped at 255.
pub fn saturating_add(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    elementwise("SUM", a, b, u8::saturating_add)
}

// ============================================================================
// TESTS
// ============================================================================
