//! Core value types for the fingerprint engine.

pub mod fingerprint;

pub use fingerprint::{
    DenseBits, DenseCounts, Fingerprint, Kind, Layout, SparseBits, SparseCounts,
};
