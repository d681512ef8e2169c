//! Pure transformations: comparison and input validation.
//!
//! Nothing in this module performs I/O or touches a digest session.

mod compare;
mod validation;

pub use compare::{compare_hashes, normalize_hash};
pub use validation::{ensure_text, is_hex_digest, validate_chunk_size};
