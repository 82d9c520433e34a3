//! Write cursor over a borrowed fixed-capacity byte region.

use crate::error::{BufferError, BufferResult};

/// A write cursor for encoding bytes into a caller-owned slice.
///
/// The region never grows. A write that does not fit fails without touching
/// the region, so the bytes already committed stay valid.
#[derive(Debug)]
pub struct OutBuffer<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> OutBuffer<'a> {
    /// Creates a new `OutBuffer` positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the total capacity of the underlying region.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes that can still be written.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if no more bytes can be written.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    /// Resets the cursor to the start of the region.
    ///
    /// Previously written bytes are left in place and will be overwritten.
    pub fn clear(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor back to an earlier position, discarding what was
    /// written after it.
    ///
    /// Positions past the current one are ignored.
    pub fn rewind_to(&mut self, pos: usize) {
        if pos < self.pos {
            self.pos = pos;
        }
    }

    /// Writes a single byte.
    pub fn put(&mut self, byte: u8) -> BufferResult<()> {
        self.ensure(1)?;
        self.data[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Writes a run of bytes.
    pub fn put_slice(&mut self, bytes: &[u8]) -> BufferResult<()> {
        self.ensure(bytes.len())?;
        let end = self.pos + bytes.len();
        self.data[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Finishes writing and returns the number of bytes used.
    #[must_use]
    pub fn finish(self) -> usize {
        self.pos
    }

    fn ensure(&self, requested: usize) -> BufferResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(BufferError::BufferOverflow {
                requested,
                available,
            });
        }
        Ok(())
    }
}
