//! Fingerprint value model.
//!
//! A fingerprint is an immutable fixed-length feature vector classified
//! along two independent axes:
//!
//! - **Kind**: [`Kind::Bit`] (presence bitset) or [`Kind::Count`]
//!   (saturating count vector, elements in `[0, 255]`).
//! - **Layout**: [`Layout::Dense`] (contiguous array covering every
//!   position) or [`Layout::Sparse`] (ordered list of the non-default
//!   positions, bounded by a declared length).
//!
//! The four concrete storage types ([`DenseBits`], [`DenseCounts`],
//! [`SparseBits`], [`SparseCounts`]) validate their invariants at
//! construction; [`Fingerprint`] is the tagged sum over them and carries
//! the shared accessor surface, so operators dispatch on the variant
//! instead of scattering layout checks.
//!
//! # Example
//!
//! ```
//! use fingerprint_core::types::{Fingerprint, Kind, Layout, SparseBits};
//!
//! let fp: Fingerprint = SparseBits::new(vec![1, 3], 8).unwrap().into();
//! assert_eq!(fp.kind(), Kind::Bit);
//! assert_eq!(fp.layout(), Layout::Sparse);
//! assert_eq!(fp.len(), 8);
//! assert_eq!(fp.value_at(3), Some(1));
//! assert_eq!(fp.value_at(4), Some(0));
//! assert_eq!(fp.value_at(8), None);
//! ```

mod dense;
mod kind;
mod sparse;
mod value;

pub use dense::{DenseBits, DenseCounts};
pub use kind::{Kind, Layout};
pub use sparse::{SparseBits, SparseCounts};
pub use value::Fingerprint;
