//! Logical combinators for bit-kind fingerprints: AND, OR, XOR, NOT.
//!
//! Dense/dense pairs run word-parallel over the packed backing words.
//! Sparse/sparse pairs run a two-cursor merge-join over the sorted
//! position lists (OR is the sorted union, AND the intersection, XOR
//! the symmetric difference), producing minimal output entries. Mixed
//! pairs densify the sparse operand first.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::config::WORD_BITS;
use crate::error::OpError;
use crate::types::{DenseBits, Fingerprint, Kind, Layout, SparseBits};

use super::check_combinable;

/// Borrow the dense bitset, densifying a sparse operand.
fn to_dense_bits<'a>(
    operation: &'static str,
    fp: &'a Fingerprint,
) -> Result<Cow<'a, DenseBits>, OpError> {
    match fp {
        Fingerprint::DenseBits(d) => Ok(Cow::Borrowed(d)),
        Fingerprint::SparseBits(s) => Ok(Cow::Owned(s.to_dense()?)),
        _ => Err(OpError::KindMismatch {
            operation,
            expected: Kind::Bit,
            actual: fp.kind(),
        }),
    }
}

/// Word-parallel kernel over two equal-length dense bitsets.
fn zip_words(x: &DenseBits, y: &DenseBits, f: impl Fn(u64, u64) -> u64) -> DenseBits {
    let words = x
        .as_words()
        .iter()
        .zip(y.as_words())
        .map(|(&a, &b)| f(a, b))
        .collect();
    DenseBits::from_words_unchecked(words, x.len())
}

/// Sorted union of two position lists.
fn merge_union(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Sorted intersection of two position lists.
fn merge_intersection(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    out
}

/// Sorted symmetric difference of two position lists.
fn merge_symmetric_difference(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Shared driver: native path per layout pair, dense fallback otherwise.
fn bitwise(
    operation: &'static str,
    a: &Fingerprint,
    b: &Fingerprint,
    merge: impl Fn(&[u64], &[u64]) -> Vec<u64>,
    word: impl Fn(u64, u64) -> u64,
) -> Result<Fingerprint, OpError> {
    check_combinable(operation, Kind::Bit, a, b)?;
    match (a, b) {
        (Fingerprint::SparseBits(x), Fingerprint::SparseBits(y)) => {
            let positions = merge(x.positions(), y.positions());
            Ok(SparseBits::from_sorted_unchecked(positions, x.len()).into())
        }
        _ => {
            let x = to_dense_bits(operation, a)?;
            let y = to_dense_bits(operation, b)?;
            Ok(zip_words(&x, &y, word).into())
        }
    }
}

/// Bitwise AND: set iff set in both operands.
pub fn and(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    bitwise("AND", a, b, merge_intersection, |x, y| x & y)
}

/// Bitwise OR: set iff set in either operand.
pub fn or(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    bitwise("OR", a, b, merge_union, |x, y| x | y)
}

/// Bitwise XOR: set iff set in exactly one operand.
pub fn xor(a: &Fingerprint, b: &Fingerprint) -> Result<Fingerprint, OpError> {
    bitwise("XOR", a, b, merge_symmetric_difference, |x, y| x ^ y)
}

/// Bitwise NOT: flip every bit of a dense bitset.
///
/// Defined only for the dense layout. Inverting a sparse mostly-unset
/// representation is not well-defined without fixing which
/// representation the result should use, so sparse callers densify
/// first.
///
/// # Errors
///
/// - `OpError::UnsupportedForLayout` for sparse layout
/// - `OpError::KindMismatch` for count kind
pub fn not(a: &Fingerprint) -> Result<Fingerprint, OpError> {
    match a {
        Fingerprint::DenseBits(fp) => {
            let len = fp.len();
            let mut words: Vec<u64> = fp.as_words().iter().map(|&w| !w).collect();
            let tail_bits = len % WORD_BITS;
            if tail_bits != 0 {
                if let Some(last) = words.last_mut() {
                    *last &= (1u64 << tail_bits) - 1;
                }
            }
            Ok(DenseBits::from_words_unchecked(words, len).into())
        }
        Fingerprint::SparseBits(_) => Err(OpError::UnsupportedForLayout {
            operation: "NOT",
            layout: Layout::Sparse,
        }),
        _ => Err(OpError::KindMismatch {
            operation: "NOT",
            expected: Kind::Bit,
            actual: a.kind(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
