//! Immutable data types for hash operations.
//!
//! Configuration, progress reporting, chunk views and comparison results.
//! These values are passed between the service and its callers without
//! mutation; the only shared mutable piece is the [`CancelFlag`].

pub mod cancel;
pub mod checksum;
pub mod chunk;
pub mod comparison;
pub mod options;
pub mod progress;

pub use cancel::CancelFlag;
pub use checksum::Checksum;
pub use chunk::ByteChunk;
pub use comparison::ComparisonResult;
pub use options::{DEFAULT_CHUNK_SIZE, HashOptions, HashPhase, MAX_CHUNK_SIZE};
pub use progress::Progress;
