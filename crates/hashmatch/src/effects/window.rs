use std::io;

use crate::core::validate_chunk_size;
use crate::data::ByteChunk;
use crate::error::{Error, Result};

/// Read cursor and reusable buffer behind the file adapters.
///
/// Windows are exactly `chunk_size` bytes except the last, which holds the
/// remainder. The buffer never grows past `chunk_size`.
#[derive(Debug)]
pub(crate) struct Window {
    total_len:   u64,
    chunk_size:  usize,
    offset:      u64,
    buffer:      Vec<u8>,
    chunks_read: u64,
}

impl Window {
    pub(crate) fn new(total_len: u64, chunk_size: usize) -> Result<Self> {
        Ok(Self {
            total_len,
            chunk_size: validate_chunk_size(chunk_size)?,
            offset: 0,
            buffer: Vec::new(),
            chunks_read: 0,
        })
    }

    pub(crate) fn total_len(&self) -> u64 { self.total_len }

    pub(crate) fn chunk_size(&self) -> usize { self.chunk_size }

    pub(crate) fn chunks_read(&self) -> u64 { self.chunks_read }

    pub(crate) fn bytes_read(&self) -> u64 { self.offset }

    pub(crate) fn capacity(&self) -> usize { self.buffer.len() }

    /// Length of the next window, or `None` once the declared length is consumed.
    pub(crate) fn next_len(&mut self) -> Option<usize> {
        let remaining = self.total_len - self.offset;
        if remaining == 0 {
            return None;
        }
        let window = remaining.min(self.chunk_size as u64) as usize;
        if self.buffer.len() < window {
            self.buffer.resize(window, 0);
        }
        Some(window)
    }

    /// The unfilled part of the current window.
    pub(crate) fn slot(&mut self, filled: usize, window: usize) -> &mut [u8] { &mut self.buffer[filled..window] }

    /// Account for one read into [`slot`](Self::slot) and return the new fill level.
    ///
    /// A zero-length read before the window is full means the source ended
    /// early. Interrupted reads leave the fill level unchanged.
    pub(crate) fn record(&self, read: io::Result<usize>, filled: usize) -> Result<usize> {
        let at = self.offset + filled as u64;
        match read {
            Ok(0) => {
                tracing::warn!(offset = at, "source ended early");
                Err(Error::read_at(
                    at,
                    io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("source ended at {at} of {} declared bytes", self.total_len),
                    ),
                ))
            }
            Ok(n) => Ok(filled + n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(filled),
            Err(e) => {
                tracing::warn!(offset = at, error = %e, "source read failed");
                Err(Error::read_at(at, e))
            }
        }
    }

    /// Hand out the filled window and move the cursor past it.
    pub(crate) fn advance(&mut self, window: usize) -> ByteChunk<'_> {
        let offset = self.offset;
        self.offset += window as u64;
        self.chunks_read += 1;
        tracing::trace!(offset, len = window, "read window");
        ByteChunk::new(offset, &self.buffer[..window])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MAX_CHUNK_SIZE;

    #[test]
    fn rejects_out_of_range_chunk_size() {
        assert!(matches!(Window::new(10, 0), Err(Error::InvalidConfig(_))));
        assert!(matches!(Window::new(10, MAX_CHUNK_SIZE + 1), Err(Error::InvalidConfig(_))));
        assert!(matches!(Window::new(10, usize::MAX), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn buffer_never_exceeds_chunk_size() {
        let mut window = Window::new(10, 4).unwrap();
        let mut lens = Vec::new();
        while let Some(len) = window.next_len() {
            lens.push(len);
            window.advance(len);
            assert!(window.capacity() <= 4);
        }
        assert_eq!(lens, vec![4, 4, 2]);
        assert_eq!(window.chunks_read(), 3);
    }

    #[test]
    fn record_tracks_fill_level() {
        let window = Window::new(8, 8).unwrap();
        assert_eq!(window.record(Ok(3), 2).unwrap(), 5);
        assert_eq!(
            window.record(Err(io::Error::from(io::ErrorKind::Interrupted)), 5).unwrap(),
            5
        );
        match window.record(Ok(0), 5) {
            Err(Error::SourceRead { offset, source }) => {
                assert_eq!(offset, 5);
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected SourceRead, got {other:?}"),
        }
    }
}
