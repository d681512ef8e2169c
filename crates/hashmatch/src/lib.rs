//! Streaming multi-algorithm content hashing and digest comparison.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations (comparison, validation)
//! - [`effects`] - Byte sources and the hash service
//!
//! # Key Features
//!
//! - **Bounded memory**: files are read in fixed windows through one reused buffer
//! - **Atomic results**: a failed or cancelled operation never yields a digest
//! - **Injected registry**: digest backends come from an explicit
//!   [`DigestRegistry`], never from global state
//! - **Mechanism only**: no UI; callers own progress display and retries

pub mod config;
pub mod core;
pub mod data;
pub mod effects;

mod api;
mod error;

pub use api::{calculate_file_hash, calculate_text_hash, compare_hashes};
pub use config::EngineConfig;
pub use data::{ByteChunk, CancelFlag, Checksum, ComparisonResult, HashOptions, HashPhase, Progress};
pub use effects::{AsyncFileSource, ByteSource, FileSource, HashService, TextSource};
pub use error::{Error, Result};

pub use hashmatch_verify::{Digest, DigestAlgorithm, DigestRegistry};
