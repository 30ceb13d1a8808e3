//! Fixed constants consumed by validation and the codecs.
//!
//! These are properties of the data model, not tunables: count values
//! saturate at [`MAX_COUNT`], dense bit storage packs [`WORD_BITS`] bits
//! per backing word, and the hexadecimal codec maps [`NIBBLE_BITS`]
//! positions to one digit.

/// Saturation bound for count-vector elements.
pub const MAX_COUNT: u8 = u8::MAX;

/// Bits per backing word of dense bit storage.
pub const WORD_BITS: u64 = u64::BITS as u64;

/// Positions encoded per hexadecimal digit.
pub const NIBBLE_BITS: u64 = 4;

/// Maximum length a fingerprint may have and still be materialized
/// densely.
///
/// Sparse fingerprints may declare length bounds past this limit; they
/// remain fully usable in sparse form, but `to_dense()` and the counts
/// projection refuse rather than attempt the allocation.
pub const MAX_DENSE_LEN: u64 = 1 << 32;
