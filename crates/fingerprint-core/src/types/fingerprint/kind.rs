//! Classification tags for fingerprint values.

use serde::{Deserialize, Serialize};

/// Semantic flavor of a fingerprint.
///
/// The kind is decided once at construction and carried by the value
/// itself; it is never inferred from ambient context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Presence bitset: each position is set or unset.
    Bit,
    /// Saturating count vector: each position holds a count in `[0, 255]`.
    Count,
}

/// Physical storage layout of a fingerprint.
///
/// Layout is an implementation detail of a value, not part of its
/// meaning: converting between layouts is lossless and deterministic,
/// and every operator yields the same result regardless of operand
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Contiguous array covering every position.
    Dense,
    /// Ordered, duplicate-free list of the non-default positions.
    Sparse,
}
