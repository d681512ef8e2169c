/// A borrowed window of source bytes.
///
/// Chunks are views into the adapter's reusable buffer, so only one is live
/// at a time and none outlives the next read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteChunk<'a> {
    /// Byte offset of the first byte within the source.
    pub offset: u64,
    pub bytes:  &'a [u8],
}

impl<'a> ByteChunk<'a> {
    pub fn new(offset: u64, bytes: &'a [u8]) -> Self { Self { offset, bytes } }

    pub fn len(&self) -> usize { self.bytes.len() }

    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// Offset one past the last byte of this chunk.
    pub fn end_offset(&self) -> u64 { self.offset + self.bytes.len() as u64 }
}
