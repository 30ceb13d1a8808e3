//! Hexadecimal codec: one digit per 4 consecutive positions.
//!
//! Position `4k` is the most significant bit of digit `k`, so `"8"`
//! decodes to a single set bit at position 0. When the fingerprint
//! length is not a multiple of 4 the final nibble is padded with unset
//! bits: the encode still succeeds but is flagged as truncated, because
//! the exact length is no longer recoverable from the string alone —
//! decoding yields a length rounded up to the next multiple of 4.

use tracing::warn;

use crate::config::{MAX_DENSE_LEN, NIBBLE_BITS};
use crate::error::CodecError;
use crate::types::{Fingerprint, Kind, Layout};

use super::binary::build;

/// Result of a hex encode: the digit string plus the lossy-length flag.
///
/// `truncated` is a warning-level condition, not an error: the string is
/// valid, but round-tripping it recovers a length rounded up to a
/// multiple of 4. Callers that need the exact length retain it
/// out-of-band or use the binary codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexEncoded {
    /// Lower-case hex digits, nibble 0 (positions 0–3) first.
    pub text: String,
    /// True iff the fingerprint length was not a multiple of 4.
    pub truncated: bool,
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode as lower-case hex digits, 4 positions per digit.
///
/// Count kind encodes presence: a non-zero count contributes a set bit.
///
/// # Errors
///
/// `CodecError::LengthOverflow` if the declared length exceeds the
/// materialization limit for the output string.
pub fn encode(fp: &Fingerprint) -> Result<HexEncoded, CodecError> {
    let len = fp.len();
    if len > MAX_DENSE_LEN {
        return Err(CodecError::LengthOverflow {
            len,
            limit: MAX_DENSE_LEN,
        });
    }
    let digit_count = ((len + NIBBLE_BITS - 1) / NIBBLE_BITS) as usize;
    let mut nibbles = vec![0u8; digit_count];
    for pos in fp.iter_set() {
        // most significant bit of the nibble first
        nibbles[(pos / NIBBLE_BITS) as usize] |= 8 >> (pos % NIBBLE_BITS);
    }
    let text: String = nibbles
        .iter()
        .map(|&n| char::from(HEX_DIGITS[n as usize]))
        .collect();
    let truncated = len % NIBBLE_BITS != 0;
    if truncated {
        warn!(
            len,
            encoded_len = digit_count as u64 * NIBBLE_BITS,
            "hex encoding is lossy for this length; exact bit length not recoverable"
        );
    }
    Ok(HexEncoded { text, truncated })
}

/// Decode a hex string into a fingerprint of the given kind and layout.
///
/// The result length is `4 × (number of digits)`. Count kind yields
/// values 0/1.
///
/// # Errors
///
/// `CodecError::InvalidCharacter` for anything outside `[0-9a-fA-F]`.
pub fn decode(s: &str, kind: Kind, layout: Layout) -> Result<Fingerprint, CodecError> {
    let mut positions = Vec::new();
    let mut digits = 0u64;
    for (offset, character) in s.char_indices() {
        let nibble = character
            .to_digit(16)
            .ok_or(CodecError::InvalidCharacter { character, offset })? as u8;
        let base = digits * NIBBLE_BITS;
        for bit in 0..NIBBLE_BITS {
            if nibble & (8 >> bit) != 0 {
                positions.push(base + bit);
            }
        }
        digits += 1;
    }
    Ok(build(positions, digits * NIBBLE_BITS, kind, layout))
}

/// Decode against an explicitly required target length.
///
/// The requested length must round up to exactly the decoded bound, and
/// every padding position at or past it must be unset; decoding never
/// silently truncates or pads to fit.
///
/// # Errors
///
/// `CodecError::LengthMismatch` if the requested length cannot be
/// satisfied, plus the errors of [`decode`].
pub fn decode_with_len(
    s: &str,
    len: u64,
    kind: Kind,
    layout: Layout,
) -> Result<Fingerprint, CodecError> {
    let decoded = s.chars().count() as u64 * NIBBLE_BITS;
    let rounded_up = (len + NIBBLE_BITS - 1) / NIBBLE_BITS * NIBBLE_BITS;
    if rounded_up != decoded {
        return Err(CodecError::LengthMismatch {
            decoded,
            requested: len,
        });
    }
    let full = decode(s, kind, layout)?;
    if full.iter_set().any(|pos| pos >= len) {
        // a set padding bit means the string encodes more than `len` positions
        return Err(CodecError::LengthMismatch {
            decoded,
            requested: len,
        });
    }
    let positions: Vec<u64> = full.iter_set().collect();
    Ok(build(positions, len, kind, layout))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DenseBits, SparseBits};

    fn bits(positions: &[u64], len: u64) -> Fingerprint {
        SparseBits::new(positions.to_vec(), len).unwrap().into()
    }

    #[test]
    fn nibble_is_msb_first() {
        // position 0 is the most significant bit of the first digit
        let fp = bits(&[0], 4);
        let out = encode(&fp).unwrap();
        assert_eq!(out.text, "8");
        assert!(!out.truncated);
        let fp = bits(&[3], 4);
        assert_eq!(encode(&fp).unwrap().text, "1");
    }

    #[test]
    fn multiple_of_four_is_exact() {
        let fp = Fingerprint::from(DenseBits::from_bits(&[
            true, false, true, false, false, true, true, true,
        ]));
        let out = encode(&fp).unwrap();
        assert_eq!(out.text, "a7");
        assert!(!out.truncated);
        let back = decode(&out.text, Kind::Bit, Layout::Dense).unwrap();
        assert_eq!(back, fp, "multiple-of-4 lengths round trip exactly");
    }

    #[test]
    fn lossy_length_scenario() {
        // length 10: encode flags truncated, decode comes back as 12
        let fp = bits(&[0, 5, 9], 10);
        let out = encode(&fp).unwrap();
        assert!(out.truncated, "length 10 is not a nibble boundary");
        assert_eq!(out.text.len(), 3);

        let back = decode(&out.text, Kind::Bit, Layout::Sparse).unwrap();
        assert_eq!(back.len(), 12, "decoded length rounds up to the next nibble");
        for pos in 0..10 {
            assert_eq!(
                back.value_at(pos),
                fp.value_at(pos),
                "first 10 positions must match"
            );
        }
        assert_eq!(back.value_at(10), Some(0), "padding bits are unset");
        assert_eq!(back.value_at(11), Some(0));
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let err = decode("0g", Kind::Bit, Layout::Dense).unwrap_err();
        assert_eq!(err, CodecError::InvalidCharacter { character: 'g', offset: 1 });
    }

    #[test]
    fn decode_accepts_upper_case() {
        let fp = decode("FF", Kind::Bit, Layout::Dense).unwrap();
        assert_eq!(fp.nnz(), 8);
    }

    #[test]
    fn decode_with_len_recovers_out_of_band_length() {
        let fp = bits(&[0, 5, 9], 10);
        let out = encode(&fp).unwrap();
        let back = decode_with_len(&out.text, 10, Kind::Bit, Layout::Sparse).unwrap();
        assert_eq!(back.len(), 10);
        assert_eq!(back, fp, "out-of-band length restores the exact value");
    }

    #[test]
    fn decode_with_len_rejects_unsatisfiable_lengths() {
        // "ab" decodes to 8 positions; 10 needs 3 digits, 4 needs 1
        for requested in [10u64, 4] {
            let err = decode_with_len("ab", requested, Kind::Bit, Layout::Dense).unwrap_err();
            assert_eq!(
                err,
                CodecError::LengthMismatch { decoded: 8, requested },
                "requested {requested} must be rejected"
            );
        }
    }

    #[test]
    fn decode_with_len_rejects_set_padding_bits() {
        // "ff" sets positions 0..8; a requested length of 6 leaves set bits
        // in the padding range
        let err = decode_with_len("ff", 6, Kind::Bit, Layout::Dense).unwrap_err();
        assert_eq!(err, CodecError::LengthMismatch { decoded: 8, requested: 6 });
    }

    #[test]
    fn empty_input() {
        let out = encode(&bits(&[], 0)).unwrap();
        assert_eq!(out.text, "");
        assert!(!out.truncated);
        let fp = decode("", Kind::Bit, Layout::Sparse).unwrap();
        assert_eq!(fp.len(), 0);
    }
}
