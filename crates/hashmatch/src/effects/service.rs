use std::path::Path;
use std::sync::Arc;

use hashmatch_verify::{Digest, DigestAlgorithm, DigestRegistry, DigestSession};
use tokio::io::AsyncRead;

use crate::core::{compare_hashes, ensure_text, validate_chunk_size};
use crate::data::{ByteChunk, Checksum, ComparisonResult, HashOptions, HashPhase, Progress};
use crate::effects::async_source::AsyncFileSource;
use crate::effects::source::{ByteSource, FileSource, TextSource};
use crate::error::{Error, Result};

/// Drives byte sources through digest sessions.
///
/// The registry is shared read-only; every hash operation opens its own
/// sessions from it and drops them when the operation ends, successfully or
/// not. Nothing partial ever leaves the service.
#[derive(Debug, Clone)]
pub struct HashService {
    registry: Arc<DigestRegistry>,
    options:  HashOptions,
}

impl Default for HashService {
    fn default() -> Self { Self::new(Arc::new(DigestRegistry::standard()), HashOptions::default()) }
}

impl HashService {
    pub fn new(registry: Arc<DigestRegistry>, options: HashOptions) -> Self { Self { registry, options } }

    /// Standard registry with the given options.
    pub fn with_options(options: HashOptions) -> Self {
        Self::new(Arc::new(DigestRegistry::standard()), options)
    }

    pub fn registry(&self) -> &DigestRegistry { &self.registry }

    pub fn options(&self) -> &HashOptions { &self.options }

    /// Hash `source` and return the lowercase hex digest.
    pub fn compute<S: ByteSource>(&self, source: S, algorithm: DigestAlgorithm) -> Result<String> {
        self.compute_digest(source, algorithm).map(|digest| digest.to_hex())
    }

    pub fn compute_digest<S: ByteSource>(&self, source: S, algorithm: DigestAlgorithm) -> Result<Digest> {
        let mut digests = self.compute_many(source, &[algorithm])?;
        digests
            .pop()
            .ok_or_else(|| Error::InvalidState("no digest produced".to_string()))
    }

    /// Hash `source` under several algorithms in a single read pass.
    ///
    /// Digests come back in the order of `algorithms`. The source's window
    /// size must lie in `1..=MAX_CHUNK_SIZE`.
    pub fn compute_many<S: ByteSource>(
        &self,
        mut source: S,
        algorithms: &[DigestAlgorithm],
    ) -> Result<Vec<Digest>> {
        let (mut sessions, mut progress) = self.start(algorithms, source.chunk_size(), source.total_len())?;

        loop {
            self.check_cancelled(&progress)?;
            let Some(chunk) = source.next_chunk()? else { break };
            self.absorb(&mut sessions, chunk, &mut progress)?;
        }

        self.finish(sessions, progress)
    }

    /// Hash text as UTF-8. Empty or whitespace-only text is rejected.
    pub fn hash_text(&self, text: &str, algorithm: DigestAlgorithm) -> Result<String> {
        ensure_text(text)?;
        self.compute(TextSource::new(text, self.options.chunk_size)?, algorithm)
    }

    /// Hash the file at `path` in bounded windows.
    pub fn hash_file(&self, path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> Result<String> {
        self.registry.resolve(algorithm)?;
        let source = FileSource::open(path, self.options.chunk_size)?;
        self.compute(source, algorithm)
    }

    /// Hash two sources with independent sessions and compare the results.
    pub fn compare_sources<A: ByteSource, B: ByteSource>(
        &self,
        first: A,
        second: B,
        algorithm: DigestAlgorithm,
    ) -> Result<ComparisonResult> {
        let first = self.compute(first, algorithm)?;
        let second = self.compute(second, algorithm)?;
        Ok(compare_hashes(&first, &second))
    }

    pub fn compare_texts(&self, first: &str, second: &str, algorithm: DigestAlgorithm) -> Result<ComparisonResult> {
        let first = self.hash_text(first, algorithm)?;
        let second = self.hash_text(second, algorithm)?;
        Ok(compare_hashes(&first, &second))
    }

    pub fn compare_files(
        &self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
        algorithm: DigestAlgorithm,
    ) -> Result<ComparisonResult> {
        let first = self.hash_file(first, algorithm)?;
        let second = self.hash_file(second, algorithm)?;
        Ok(compare_hashes(&first, &second))
    }

    /// Hash `source` with the checksum's algorithm and require a match.
    pub fn verify<S: ByteSource>(&self, source: S, expected: &Checksum) -> Result<Digest> {
        let actual = self.compute_digest(source, expected.algorithm)?;
        if expected.matches(&actual) {
            Ok(actual)
        } else {
            Err(Error::ChecksumMismatch {
                expected: expected.expected.clone(),
                actual:   actual.to_hex(),
            })
        }
    }

    pub async fn compute_async<R: AsyncRead + Unpin>(
        &self,
        mut source: AsyncFileSource<R>,
        algorithm: DigestAlgorithm,
    ) -> Result<Digest> {
        let (mut sessions, mut progress) =
            self.start(&[algorithm], source.chunk_size(), Some(source.total_len()))?;

        loop {
            self.check_cancelled(&progress)?;
            let Some(chunk) = source.next_chunk().await? else { break };
            self.absorb(&mut sessions, chunk, &mut progress)?;
        }

        let mut digests = self.finish(sessions, progress)?;
        digests
            .pop()
            .ok_or_else(|| Error::InvalidState("no digest produced".to_string()))
    }

    pub async fn hash_file_async(&self, path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> Result<String> {
        self.registry.resolve(algorithm)?;
        let source = AsyncFileSource::open(path, self.options.chunk_size).await?;
        Ok(self.compute_async(source, algorithm).await?.to_hex())
    }

    /// Hash both files concurrently, each with its own session.
    pub async fn compare_files_async(
        &self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
        algorithm: DigestAlgorithm,
    ) -> Result<ComparisonResult> {
        let (first, second) = tokio::try_join!(
            self.hash_file_async(first, algorithm),
            self.hash_file_async(second, algorithm),
        )?;
        Ok(compare_hashes(&first, &second))
    }

    /// Validate the window size, open one session per algorithm and report
    /// the initial `Reading` phase.
    fn start(
        &self,
        algorithms: &[DigestAlgorithm],
        chunk_size: usize,
        total_bytes: Option<u64>,
    ) -> Result<(Vec<DigestSession>, Progress)> {
        validate_chunk_size(chunk_size)?;
        if algorithms.is_empty() {
            return Err(Error::InvalidState("no digest algorithm requested".to_string()));
        }
        let sessions = algorithms
            .iter()
            .map(|algorithm| self.registry.open(*algorithm).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(?algorithms, ?total_bytes, chunk_size, "hash started");

        let progress = Progress {
            phase: HashPhase::Reading,
            bytes_processed: 0,
            total_bytes,
            chunks_processed: 0,
        };
        self.options.report(progress.clone());
        Ok((sessions, progress))
    }

    /// Feed one chunk to every session, in order, and report progress.
    fn absorb(&self, sessions: &mut [DigestSession], chunk: ByteChunk<'_>, progress: &mut Progress) -> Result<()> {
        for session in sessions.iter_mut() {
            session.update(chunk.bytes)?;
        }
        progress.bytes_processed += chunk.len() as u64;
        progress.chunks_processed += 1;
        self.options.report(progress.clone());
        Ok(())
    }

    fn check_cancelled(&self, progress: &Progress) -> Result<()> {
        if self.options.cancel.is_cancelled() {
            tracing::warn!(
                bytes = progress.bytes_processed,
                chunks = progress.chunks_processed,
                "hash cancelled, discarding session"
            );
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    fn finish(&self, sessions: Vec<DigestSession>, mut progress: Progress) -> Result<Vec<Digest>> {
        progress.phase = HashPhase::Finalizing;
        self.options.report(progress.clone());

        let digests = sessions
            .into_iter()
            .map(|mut session| session.finalize().map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            bytes = progress.bytes_processed,
            chunks = progress.chunks_processed,
            "hash completed"
        );
        progress.phase = HashPhase::Completed;
        self.options.report(progress);
        Ok(digests)
    }
}
