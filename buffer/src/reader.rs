//! Read cursor over a borrowed byte region.

use crate::error::{BufferError, BufferResult};

/// A read cursor for decoding bytes from a borrowed slice.
///
/// All reads are bounds-checked. A read that would pass the end fails before
/// consuming anything, so the position is unchanged on error.
#[derive(Debug, Clone)]
pub struct InBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InBuffer<'a> {
    /// Creates a new `InBuffer` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the total length of the underlying region.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the unread bytes without consuming them.
    #[must_use]
    pub fn unread(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Rewinds to the start of the region.
    pub fn clear(&mut self) {
        self.pos = 0;
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> BufferResult<u8> {
        self.ensure(1)?;
        Ok(self.data[self.pos])
    }

    /// Reads a single byte.
    pub fn get(&mut self) -> BufferResult<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Copies `into.len()` bytes into a caller-owned destination.
    pub fn get_into(&mut self, into: &mut [u8]) -> BufferResult<()> {
        let src = self.get_slice(into.len())?;
        into.copy_from_slice(src);
        Ok(())
    }

    /// Returns a view of the next `len` bytes and consumes them.
    ///
    /// The view borrows from the original region, not from the cursor, so it
    /// outlives further reads.
    pub fn get_slice(&mut self, len: usize) -> BufferResult<&'a [u8]> {
        self.ensure(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Skips `len` bytes.
    pub fn advance(&mut self, len: usize) -> BufferResult<()> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    fn ensure(&self, requested: usize) -> BufferResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(BufferError::BufferUnderflow {
                requested,
                available,
            });
        }
        Ok(())
    }
}
