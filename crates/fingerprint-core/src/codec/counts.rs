//! Ordered counts-list projection.
//!
//! Not a string codec: the host's column-of-counts view consumes the
//! `len` integer values in position order, with the implicit-zero rule
//! applied to unlisted sparse positions. Bit kind projects to 0/1.

use crate::config::MAX_DENSE_LEN;
use crate::error::CodecError;
use crate::types::Fingerprint;

/// The `len` values of the fingerprint in position order.
///
/// # Errors
///
/// `CodecError::LengthOverflow` if the declared length exceeds the
/// materialization limit.
pub fn to_counts_list(fp: &Fingerprint) -> Result<Vec<u8>, CodecError> {
    let len = fp.len();
    if len > MAX_DENSE_LEN {
        return Err(CodecError::LengthOverflow {
            len,
            limit: MAX_DENSE_LEN,
        });
    }
    match fp {
        Fingerprint::DenseCounts(d) => Ok(d.as_values().to_vec()),
        Fingerprint::DenseBits(d) => Ok((0..len).map(|p| u8::from(d.get(p) == Some(true))).collect()),
        Fingerprint::SparseBits(s) => {
            let mut values = vec![0u8; len as usize];
            for &pos in s.positions() {
                values[pos as usize] = 1;
            }
            Ok(values)
        }
        Fingerprint::SparseCounts(s) => {
            let mut values = vec![0u8; len as usize];
            for (&pos, &value) in s.positions().iter().zip(s.values()) {
                values[pos as usize] = value;
            }
            Ok(values)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DenseCounts, SparseBits, SparseCounts};

    #[test]
    fn sparse_counts_materialize_implicit_zeros() {
        let fp = Fingerprint::from(SparseCounts::new(vec![1, 4], vec![7, 200], 6).unwrap());
        assert_eq!(to_counts_list(&fp).unwrap(), vec![0, 7, 0, 0, 200, 0]);
    }

    #[test]
    fn bits_project_to_01() {
        let fp = Fingerprint::from(SparseBits::new(vec![0, 3], 5).unwrap());
        assert_eq!(to_counts_list(&fp).unwrap(), vec![1, 0, 0, 1, 0]);
    }

    #[test]
    fn dense_counts_pass_through() {
        let fp = Fingerprint::from(DenseCounts::new(vec![10, 250, 0, 5]));
        assert_eq!(to_counts_list(&fp).unwrap(), vec![10, 250, 0, 5]);
    }

    #[test]
    fn refuses_unmaterializable_length() {
        let fp = Fingerprint::from(SparseBits::new(vec![0], 1 << 40).unwrap());
        assert!(matches!(
            to_counts_list(&fp).unwrap_err(),
            CodecError::LengthOverflow { .. }
        ));
    }
}
