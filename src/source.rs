//! Byte sources the decoder pulls from.
//!
//! The decoder never seeks. It asks for one block at a time and treats an
//! empty block as end of input.

use alloc::vec::Vec;

use crate::error::PnmError;

/// Supplies raw bytes on demand.
///
/// Failures other than end of input should be reported as
/// [`PnmError::Source`].
pub trait ByteSource {
    /// Replace the contents of `block` with up to `size` bytes.
    ///
    /// Leaving `block` empty signals that the source is exhausted.
    fn pull(&mut self, block: &mut Vec<u8>, size: usize) -> Result<(), PnmError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn pull(&mut self, block: &mut Vec<u8>, size: usize) -> Result<(), PnmError> {
        (**self).pull(block, size)
    }
}

/// In-memory source over a byte slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }
}

impl ByteSource for SliceSource<'_> {
    fn pull(&mut self, block: &mut Vec<u8>, size: usize) -> Result<(), PnmError> {
        let take = size.min(self.data.len());
        let (head, tail) = self.data.split_at(take);
        block.clear();
        block.extend_from_slice(head);
        self.data = tail;
        Ok(())
    }
}

/// Source backed by a pull function, see [`from_fn`].
pub struct FnSource<F> {
    pull: F,
}

/// Wrap a pull function `|size| -> Vec<u8>` as a [`ByteSource`].
///
/// The function receives the requested block size and returns at most that
/// many bytes; an empty vector ends the input. Longer blocks are accepted
/// as-is.
pub fn from_fn<F>(pull: F) -> FnSource<F>
where
    F: FnMut(usize) -> Vec<u8>,
{
    FnSource { pull }
}

impl<F> ByteSource for FnSource<F>
where
    F: FnMut(usize) -> Vec<u8>,
{
    fn pull(&mut self, block: &mut Vec<u8>, size: usize) -> Result<(), PnmError> {
        *block = (self.pull)(size);
        Ok(())
    }
}

/// Source backed by any [`std::io::Read`].
#[cfg(feature = "std")]
pub struct ReadSource<R> {
    reader: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for ReadSource<R> {
    fn pull(&mut self, block: &mut Vec<u8>, size: usize) -> Result<(), PnmError> {
        block.clear();
        block.resize(size, 0);
        loop {
            match self.reader.read(block) {
                Ok(n) => {
                    block.truncate(n);
                    return Ok(());
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    block.clear();
                    return Err(e.into());
                }
            }
        }
    }
}
