//! Engine-wide constants and limits.

mod constants;

pub use constants::{MAX_COUNT, MAX_DENSE_LEN, NIBBLE_BITS, WORD_BITS};
