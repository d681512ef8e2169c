use hashmatch_verify::DigestAlgorithm;

use crate::data::MAX_CHUNK_SIZE;
use crate::error::{Error, Result};

/// Reject empty or whitespace-only text before any hashing starts.
pub fn ensure_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(())
    }
}

/// Returns `chunk_size` if it lies in `1..=MAX_CHUNK_SIZE`.
pub fn validate_chunk_size(chunk_size: usize) -> Result<usize> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(Error::InvalidConfig(format!(
            "chunk size must be between 1 and {MAX_CHUNK_SIZE} bytes, got {chunk_size}"
        )));
    }
    Ok(chunk_size)
}

/// Returns `true` if `hash` is a hex digest of the right length for `algorithm`.
///
/// # Examples
///
/// ```
/// use hashmatch::core::is_hex_digest;
/// use hashmatch_verify::DigestAlgorithm;
///
/// assert!(is_hex_digest("900150983CD24FB0D6963F7D28E17F72", DigestAlgorithm::Md5));
/// assert!(!is_hex_digest("900150983cd24fb0", DigestAlgorithm::Md5));
/// ```
pub fn is_hex_digest(hash: &str, algorithm: DigestAlgorithm) -> bool {
    hash.len() == algorithm.hex_len() && hash.bytes().all(|b| b.is_ascii_hexdigit())
}
