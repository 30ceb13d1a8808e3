//! Fingerprint Vector Engine
//!
//! A pure value/algorithm library for fixed-length feature vectors
//! ("fingerprints") over molecules or records, invoked by a caller-owned
//! iteration loop.
//!
//! # Architecture
//!
//! This crate defines:
//! - The fingerprint value model ([`types::Fingerprint`]): two semantic
//!   kinds (presence bitset, saturating count vector) times two storage
//!   layouts (dense array, sparse position/value list)
//! - Logical and arithmetic combinators ([`ops`]): AND, OR, XOR, NOT,
//!   MIN, MAX, saturating SUM
//! - Scalar property extractors ([`properties`]): cardinality, total
//!   count, density, emptiness
//! - Similarity coefficients ([`similarity`]): Tanimoto, Dice
//! - Text codecs ([`codec`]): lossless binary strings, lossy-length hex,
//!   counts-list projection
//! - Group aggregation ([`aggregate`]): a resettable fold accumulator
//!   plus row-wise batch drivers with per-row error isolation
//! - Error types and a result alias ([`error`])
//!
//! Fingerprints are immutable values carrying their own kind/layout
//! tags; every operator is a pure function producing a new value, so
//! callers parallelize freely across independent accumulators.
//!
//! # Example
//!
//! ```
//! use fingerprint_core::aggregate::GroupAccumulator;
//! use fingerprint_core::ops::BinaryOp;
//! use fingerprint_core::types::{Fingerprint, SparseBits};
//!
//! let mut acc = GroupAccumulator::new(BinaryOp::Or);
//! let fp = Fingerprint::from(SparseBits::new(vec![1, 3], 8)?);
//! acc.accumulate(Some(&fp))?;
//! acc.accumulate(None)?; // missing cells are skipped
//! let combined = acc.finalize()?;
//! assert_eq!(combined.map(|fp| fp.nnz()), Some(2));
//! # Ok::<(), fingerprint_core::error::EngineError>(())
//! ```

pub mod aggregate;
pub mod codec;
pub mod config;
pub mod error;
pub mod ops;
pub mod properties;
pub mod similarity;
pub mod types;

// Re-exports for convenience
pub use error::{EngineError, Result};
pub use ops::BinaryOp;
pub use types::{Fingerprint, Kind, Layout};
