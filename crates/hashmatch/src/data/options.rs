use std::fmt;
use std::sync::Arc;

use hashmatch_verify::DigestAlgorithm;

use super::cancel::CancelFlag;
use super::progress::Progress;

/// Default read window: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Largest accepted read window: 64 MiB.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Phases of a hash operation.
///
/// Operations progress through these phases in order:
/// Reading → Finalizing → Completed
///
/// A failed or cancelled operation stops wherever it was and never reaches
/// `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashPhase {
    /// Pulling chunks from the source and feeding the session.
    #[default]
    Reading,

    /// All bytes consumed; padding and digest extraction in progress.
    Finalizing,

    /// Digest produced.
    ///
    /// This is the terminal state for successful operations.
    Completed,
}

impl fmt::Display for HashPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashPhase::Reading => write!(f, "Reading"),
            HashPhase::Finalizing => write!(f, "Finalizing"),
            HashPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Configuration for hash operations.
///
/// # Examples
///
/// ```
/// use hashmatch::data::HashOptions;
/// use hashmatch_verify::DigestAlgorithm;
///
/// let options = HashOptions::default()
///     .algorithm(DigestAlgorithm::Sha1)
///     .chunk_size(256 * 1024);
/// ```
#[derive(Clone)]
pub struct HashOptions {
    /// Digest algorithm used by the top-level helpers.
    ///
    /// Default: SHA-256
    pub algorithm: DigestAlgorithm,

    /// Size of each read window in bytes.
    ///
    /// Must be in `1..=MAX_CHUNK_SIZE`; validated when an operation starts.
    ///
    /// Default: 1 MiB
    pub chunk_size: usize,

    /// Cancellation signal checked before every chunk read.
    ///
    /// Default: a fresh, unset flag
    pub cancel: CancelFlag,

    /// Progress callback invoked on phase transitions and after every chunk.
    ///
    /// Default: None
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl fmt::Debug for HashOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashOptions")
            .field("algorithm", &self.algorithm)
            .field("chunk_size", &self.chunk_size)
            .field("cancel", &self.cancel)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            algorithm:   DigestAlgorithm::Sha256,
            chunk_size:  DEFAULT_CHUNK_SIZE,
            cancel:      CancelFlag::new(),
            on_progress: None,
        }
    }
}

impl HashOptions {
    #[must_use]
    pub fn algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Share an existing cancellation flag with the host.
    #[must_use]
    pub fn cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Set the progress callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashmatch::data::{HashOptions, HashPhase};
    /// use std::sync::Arc;
    ///
    /// let options = HashOptions::default().on_progress(Arc::new(|progress| {
    ///     if progress.phase == HashPhase::Reading {
    ///         if let Some(pct) = progress.percentage() {
    ///             println!("hashed {pct:.1}%");
    ///         }
    ///     }
    /// }));
    /// ```
    #[must_use]
    pub fn on_progress(mut self, on_progress: Arc<dyn Fn(&Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(ref callback) = self.on_progress {
            callback(&progress);
        }
    }
}
