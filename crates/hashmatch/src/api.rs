//! Entry points for the UI layer.
//!
//! Each call builds its own standard registry and service; nothing is
//! shared between calls.

use std::path::Path;

use crate::core;
use crate::data::{ComparisonResult, HashOptions};
use crate::effects::HashService;
use crate::error::Result;

/// Hash the UTF-8 encoding of `text` with `options.algorithm`.
///
/// Fails with [`Error::EmptyInput`](crate::Error::EmptyInput) for empty or
/// whitespace-only text.
///
/// # Examples
///
/// ```
/// use hashmatch::{calculate_text_hash, HashOptions};
///
/// let hash = calculate_text_hash("abc", &HashOptions::default()).unwrap();
/// assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
/// ```
pub fn calculate_text_hash(text: &str, options: &HashOptions) -> Result<String> {
    HashService::with_options(options.clone()).hash_text(text, options.algorithm)
}

/// Hash the file at `path` with `options.algorithm`, reading it in
/// `options.chunk_size` windows.
pub fn calculate_file_hash(path: impl AsRef<Path>, options: &HashOptions) -> Result<String> {
    HashService::with_options(options.clone()).hash_file(path, options.algorithm)
}

/// Compare two digest strings ignoring case.
pub fn compare_hashes(first: &str, second: &str) -> ComparisonResult { core::compare_hashes(first, second) }
