//! Binary-string codec: one character per position.
//!
//! Character `i` of the string is position `i` of the fingerprint
//! (position-0-first, matching the bit vector's natural index order).
//! One character encodes exactly one position, so encode→decode
//! round-trips the length exactly.

use crate::config::MAX_DENSE_LEN;
use crate::error::CodecError;
use crate::types::{DenseBits, DenseCounts, Fingerprint, Kind, Layout, SparseBits, SparseCounts};

/// Encode as a string of `'0'`/`'1'`, position 0 first.
///
/// Count kind encodes presence: `'1'` iff the position holds a non-zero
/// count.
///
/// # Errors
///
/// `CodecError::LengthOverflow` if the declared length exceeds the
/// materialization limit for the output string.
pub fn encode(fp: &Fingerprint) -> Result<String, CodecError> {
    let len = fp.len();
    if len > MAX_DENSE_LEN {
        return Err(CodecError::LengthOverflow {
            len,
            limit: MAX_DENSE_LEN,
        });
    }
    let mut chars = vec![b'0'; len as usize];
    for pos in fp.iter_set() {
        chars[pos as usize] = b'1';
    }
    Ok(chars.iter().map(|&b| char::from(b)).collect())
}

/// Decode a `'0'`/`'1'` string into a fingerprint of the given kind and
/// layout.
///
/// The result length is exactly the character count. Count kind yields
/// values 0/1.
///
/// # Errors
///
/// `CodecError::InvalidCharacter` for anything outside `{'0', '1'}`.
pub fn decode(s: &str, kind: Kind, layout: Layout) -> Result<Fingerprint, CodecError> {
    let mut positions = Vec::new();
    let mut count = 0u64;
    for (offset, character) in s.char_indices() {
        match character {
            '0' => {}
            '1' => positions.push(count),
            _ => return Err(CodecError::InvalidCharacter { character, offset }),
        }
        count += 1;
    }
    Ok(build(positions, count, kind, layout))
}

/// Decode against an explicitly required target length.
///
/// # Errors
///
/// `CodecError::LengthMismatch` if the string does not hold exactly
/// `len` characters — the binary codec never truncates or pads.
pub fn decode_with_len(
    s: &str,
    len: u64,
    kind: Kind,
    layout: Layout,
) -> Result<Fingerprint, CodecError> {
    let decoded = s.chars().count() as u64;
    if decoded != len {
        return Err(CodecError::LengthMismatch {
            decoded,
            requested: len,
        });
    }
    decode(s, kind, layout)
}

/// Assemble a fingerprint from decoded set positions.
pub(crate) fn build(positions: Vec<u64>, len: u64, kind: Kind, layout: Layout) -> Fingerprint {
    match (kind, layout) {
        (Kind::Bit, Layout::Sparse) => {
            SparseBits::from_sorted_unchecked(positions, len).into()
        }
        (Kind::Bit, Layout::Dense) => {
            let mut dense = DenseBits::from_bits(&vec![false; len as usize]);
            for pos in positions {
                dense.set(pos);
            }
            dense.into()
        }
        (Kind::Count, Layout::Sparse) => {
            let values = vec![1u8; positions.len()];
            SparseCounts::from_sorted_unchecked(positions, values, len).into()
        }
        (Kind::Count, Layout::Dense) => {
            let mut values = vec![0u8; len as usize];
            for pos in positions {
                values[pos as usize] = 1;
            }
            DenseCounts::new(values).into()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_position_zero_first() {
        let fp = Fingerprint::from(DenseBits::from_bits(&[true, false, false, true]));
        assert_eq!(encode(&fp).unwrap(), "1001");
    }

    #[test]
    fn round_trip_all_kind_layout_pairs() {
        let lengths = [0u64, 1, 7, 8, 9, 255, 256];
        for &len in &lengths {
            // deterministic pattern: set every third position
            let positions: Vec<u64> = (0..len).filter(|p| p % 3 == 0).collect();
            for kind in [Kind::Bit, Kind::Count] {
                for layout in [Layout::Dense, Layout::Sparse] {
                    let fp = build(positions.clone(), len, kind, layout);
                    let text = encode(&fp).unwrap();
                    assert_eq!(text.len() as u64, len);
                    let back = decode(&text, kind, layout).unwrap();
                    assert_eq!(
                        back, fp,
                        "round trip must be exact for {kind:?}/{layout:?} len {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let err = decode("10x1", Kind::Bit, Layout::Dense).unwrap_err();
        assert_eq!(err, CodecError::InvalidCharacter { character: 'x', offset: 2 });
    }

    #[test]
    fn decode_with_len_is_exact() {
        let fp = decode_with_len("0110", 4, Kind::Bit, Layout::Sparse).unwrap();
        assert_eq!(fp.len(), 4);
        let err = decode_with_len("0110", 5, Kind::Bit, Layout::Sparse).unwrap_err();
        assert_eq!(err, CodecError::LengthMismatch { decoded: 4, requested: 5 });
    }

    #[test]
    fn counts_encode_presence() {
        let fp = Fingerprint::from(DenseCounts::new(vec![0, 200, 1, 0]));
        assert_eq!(encode(&fp).unwrap(), "0110");
    }

    #[test]
    fn empty_string_is_zero_length() {
        let fp = decode("", Kind::Bit, Layout::Dense).unwrap();
        assert_eq!(fp.len(), 0);
        assert_eq!(encode(&fp).unwrap(), "");
    }
}
