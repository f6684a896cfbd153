//! Chunked byte buffer over a [`ByteSource`].

use alloc::vec::Vec;

use crate::error::PnmError;
use crate::source::ByteSource;

/// Bytes requested from the source per refill.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Holds one in-flight block of unread bytes.
///
/// A new block is pulled only once the current one is fully consumed, so
/// at most one block is ever buffered.
pub(crate) struct ChunkedBuffer<S> {
    source: S,
    block: Vec<u8>,
    pos: usize,
}

impl<S: ByteSource> ChunkedBuffer<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            block: Vec::new(),
            pos: 0,
        }
    }

    pub(crate) fn peek_byte(&mut self) -> Result<u8, PnmError> {
        if self.pos >= self.block.len() {
            self.refill()?;
        }
        Ok(self.block[self.pos])
    }

    /// Advance past the current byte. A no-op when nothing is buffered.
    pub(crate) fn skip_byte(&mut self) {
        if self.pos < self.block.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8, PnmError> {
        let byte = self.peek_byte()?;
        self.skip_byte();
        Ok(byte)
    }

    fn refill(&mut self) -> Result<(), PnmError> {
        self.pos = 0;
        self.source.pull(&mut self.block, CHUNK_SIZE)?;
        log::trace!("pulled {} byte block", self.block.len());
        if self.block.is_empty() {
            return Err(PnmError::UnexpectedEof);
        }
        Ok(())
    }
}
