//! Group aggregation and row-wise batch processing.
//!
//! The engine owns no iteration: an external grouping iterator, already
//! partitioned on a pre-sorted key (or one-row-per-group), drives one
//! [`GroupAccumulator`] per batch, and the row-wise helpers implement
//! the per-row error isolation policy for stateless operators.
//!
//! Multiple accumulators may run concurrently (one per partition key,
//! parallelized by the caller); an individual accumulator is not
//! internally synchronized and must be driven by a single thread at a
//! time.

mod accumulator;
mod rowwise;

pub use accumulator::GroupAccumulator;
pub use rowwise::{apply_rowwise, invert_rowwise, RowPolicy, RowWarning, RowwiseOutput};
