//! Text encodings for fingerprint values.
//!
//! Two encodings plus one projection:
//!
//! - [`binary`]: one `'0'`/`'1'` character per position, position 0
//!   first. Lossless: the length is always fully recoverable.
//! - [`hex`]: one digit per 4 consecutive positions. When the length
//!   is not a multiple of 4 the final nibble is zero-padded and the
//!   encoder flags the result as truncated (a warning condition, not an
//!   error): decoding recovers a length rounded up to the next multiple
//!   of 4. Callers that need the exact length keep it out-of-band or
//!   use the binary encoding.
//! - [`counts`]: the position-ordered list of integer values, with
//!   implicit zeros materialized for unlisted sparse positions.
//!
//! Both string codecs encode *presence*: a non-zero count contributes a
//! set bit. Count magnitudes are carried by the counts projection, not
//! by the string forms.

pub mod binary;
pub mod counts;
pub mod hex;

pub use hex::HexEncoded;
