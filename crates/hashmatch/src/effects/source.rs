use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::window::Window;
use crate::core::validate_chunk_size;
use crate::data::ByteChunk;
use crate::error::{Error, Result};

/// An ordered producer of byte chunks.
///
/// Chunks come out in ascending offset order without gaps or overlap. A
/// source owns its read cursor, so one hash operation drives it from start
/// to end and nothing else reads it concurrently.
pub trait ByteSource {
    /// Total number of bytes the source will yield, if known up front.
    fn total_len(&self) -> Option<u64>;

    /// Largest window the source yields.
    fn chunk_size(&self) -> usize;

    /// The next window, or `None` once the source is exhausted.
    fn next_chunk(&mut self) -> Result<Option<ByteChunk<'_>>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn total_len(&self) -> Option<u64> { (**self).total_len() }

    fn chunk_size(&self) -> usize { (**self).chunk_size() }

    fn next_chunk(&mut self) -> Result<Option<ByteChunk<'_>>> { (**self).next_chunk() }
}

/// Yields the UTF-8 encoding of a string in uniform windows.
#[derive(Debug, Clone)]
pub struct TextSource<'a> {
    bytes:      &'a [u8],
    chunk_size: usize,
    offset:     usize,
}

impl<'a> TextSource<'a> {
    pub fn new(text: &'a str, chunk_size: usize) -> Result<Self> { Self::from_bytes(text.as_bytes(), chunk_size) }

    /// Fails with [`Error::InvalidConfig`] unless `chunk_size` is in `1..=MAX_CHUNK_SIZE`.
    pub fn from_bytes(bytes: &'a [u8], chunk_size: usize) -> Result<Self> {
        Ok(Self {
            bytes,
            chunk_size: validate_chunk_size(chunk_size)?,
            offset: 0,
        })
    }
}

impl ByteSource for TextSource<'_> {
    fn total_len(&self) -> Option<u64> { Some(self.bytes.len() as u64) }

    fn chunk_size(&self) -> usize { self.chunk_size }

    fn next_chunk(&mut self) -> Result<Option<ByteChunk<'_>>> {
        if self.offset >= self.bytes.len() {
            return Ok(None);
        }
        let start = self.offset;
        let end = (start + self.chunk_size).min(self.bytes.len());
        self.offset = end;
        Ok(Some(ByteChunk::new(start as u64, &self.bytes[start..end])))
    }
}

/// Reads a source of known length in fixed-size sequential windows.
///
/// Every window except the last is exactly `chunk_size` bytes; a source of
/// `K * chunk_size + r` bytes yields `K + 1` chunks, or `K` when `r == 0`.
/// One buffer of at most `chunk_size` bytes is reused for every window.
/// Bytes past the declared length are never read.
pub struct FileSource<R> {
    reader: R,
    window: Window,
}

impl FileSource<File> {
    /// Open `path` and take its length from the file metadata.
    pub fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyInput);
        }
        validate_chunk_size(chunk_size)?;

        let file = File::open(path).map_err(|e| Error::read_at(0, e))?;
        let total_len = file.metadata().map_err(|e| Error::read_at(0, e))?.len();
        tracing::debug!(path = %path.display(), total_len, chunk_size, "opened file source");
        Self::new(file, total_len, chunk_size)
    }
}

impl<R> FileSource<R> {
    /// Wrap `reader`, which must provide at least `total_len` bytes.
    ///
    /// Fails with [`Error::InvalidConfig`] unless `chunk_size` is in `1..=MAX_CHUNK_SIZE`.
    pub fn new(reader: R, total_len: u64, chunk_size: usize) -> Result<Self> {
        Ok(Self {
            reader,
            window: Window::new(total_len, chunk_size)?,
        })
    }

    /// Number of windows yielded so far.
    pub fn chunks_read(&self) -> u64 { self.window.chunks_read() }

    /// Number of bytes yielded so far.
    pub fn bytes_read(&self) -> u64 { self.window.bytes_read() }

    /// Current size of the reusable window buffer.
    pub fn window_capacity(&self) -> usize { self.window.capacity() }

    pub fn into_inner(self) -> R { self.reader }
}

impl<R: Read> ByteSource for FileSource<R> {
    fn total_len(&self) -> Option<u64> { Some(self.window.total_len()) }

    fn chunk_size(&self) -> usize { self.window.chunk_size() }

    fn next_chunk(&mut self) -> Result<Option<ByteChunk<'_>>> {
        let Some(len) = self.window.next_len() else { return Ok(None) };

        let mut filled = 0;
        while filled < len {
            let read = self.reader.read(self.window.slot(filled, len));
            filled = self.window.record(read, filled)?;
        }
        Ok(Some(self.window.advance(len)))
    }
}
