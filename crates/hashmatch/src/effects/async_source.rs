use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::window::Window;
use crate::core::validate_chunk_size;
use crate::data::ByteChunk;
use crate::error::{Error, Result};

/// Async counterpart of [`FileSource`](super::FileSource).
///
/// Same windowing contract: sequential, non-overlapping windows of exactly
/// `chunk_size` bytes, the last holding the remainder. Awaiting a window is
/// the only suspension point of an async hash operation.
pub struct AsyncFileSource<R> {
    reader: R,
    window: Window,
}

impl AsyncFileSource<File> {
    pub async fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyInput);
        }
        validate_chunk_size(chunk_size)?;

        let file = File::open(path).await.map_err(|e| Error::read_at(0, e))?;
        let total_len = file.metadata().await.map_err(|e| Error::read_at(0, e))?.len();
        tracing::debug!(path = %path.display(), total_len, chunk_size, "opened async file source");
        Self::new(file, total_len, chunk_size)
    }
}

impl<R> AsyncFileSource<R> {
    /// Fails with [`Error::InvalidConfig`] unless `chunk_size` is in `1..=MAX_CHUNK_SIZE`.
    pub fn new(reader: R, total_len: u64, chunk_size: usize) -> Result<Self> {
        Ok(Self {
            reader,
            window: Window::new(total_len, chunk_size)?,
        })
    }

    pub fn total_len(&self) -> u64 { self.window.total_len() }

    pub fn chunk_size(&self) -> usize { self.window.chunk_size() }

    pub fn chunks_read(&self) -> u64 { self.window.chunks_read() }

    pub fn bytes_read(&self) -> u64 { self.window.bytes_read() }

    pub fn window_capacity(&self) -> usize { self.window.capacity() }
}

impl<R: AsyncRead + Unpin> AsyncFileSource<R> {
    /// The next window, or `None` once the declared length is consumed.
    pub async fn next_chunk(&mut self) -> Result<Option<ByteChunk<'_>>> {
        let Some(len) = self.window.next_len() else { return Ok(None) };

        let mut filled = 0;
        while filled < len {
            let read = self.reader.read(self.window.slot(filled, len)).await;
            filled = self.window.record(read, filled)?;
        }
        Ok(Some(self.window.advance(len)))
    }
}
