//! Bounds-checked byte cursors for the flexproto codec.
//!
//! This crate provides [`OutBuffer`] and [`InBuffer`], cursors over a
//! caller-owned fixed-capacity byte region. Encoders advance an `OutBuffer`,
//! decoders advance an `InBuffer`; neither owns or allocates the bytes.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Every access goes through a checked slice.
//! - **Atomic per call** - A failing put/get leaves the cursor where it was.
//! - **No encoding knowledge** - Varints, strings and arrays live in `codec`.
//! - **Explicit errors** - Overrun is an error value, never a panic.
//!
//! # Example
//!
//! ```
//! use buffer::{InBuffer, OutBuffer};
//!
//! let mut storage = [0u8; 4];
//! let mut out = OutBuffer::new(&mut storage);
//! out.put(0x2A).unwrap();
//! out.put_slice(b"hi").unwrap();
//! let used = out.finish();
//!
//! let mut inp = InBuffer::new(&storage[..used]);
//! assert_eq!(inp.get().unwrap(), 0x2A);
//! assert_eq!(inp.get_slice(2).unwrap(), b"hi");
//! assert!(inp.is_empty());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BufferError, BufferResult};
pub use reader::InBuffer;
pub use writer::OutBuffer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let mut storage = [0u8; 0];
        let out = OutBuffer::new(&mut storage);
        assert_eq!(out.finish(), 0);

        let inp = InBuffer::new(&storage);
        assert!(inp.is_empty());
    }

    #[test]
    fn single_byte_roundtrip() {
        let mut storage = [0u8; 1];
        let mut out = OutBuffer::new(&mut storage);
        out.put(0xA5).unwrap();
        assert!(out.is_full());

        let mut inp = InBuffer::new(&storage);
        assert_eq!(inp.get().unwrap(), 0xA5);
    }

    #[test]
    fn mixed_roundtrip() {
        let mut storage = [0u8; 16];
        let mut out = OutBuffer::new(&mut storage);
        out.put(1).unwrap();
        out.put_slice(&[2, 3, 4]).unwrap();
        out.put(5).unwrap();
        let used = out.finish();
        assert_eq!(used, 5);

        let mut inp = InBuffer::new(&storage[..used]);
        assert_eq!(inp.get().unwrap(), 1);
        let mut mid = [0u8; 2];
        inp.get_into(&mut mid).unwrap();
        assert_eq!(mid, [2, 3]);
        assert_eq!(inp.get_slice(1).unwrap(), &[4]);
        assert_eq!(inp.get().unwrap(), 5);
        assert!(inp.is_empty());
    }

    #[test]
    fn overflow_and_underflow_are_distinct() {
        let mut storage = [0u8; 1];
        let mut out = OutBuffer::new(&mut storage);
        let write_err = out.put_slice(&[0, 0]).unwrap_err();

        let mut inp = InBuffer::new(&storage);
        let read_err = inp.get_slice(2).unwrap_err();

        assert!(write_err.is_overflow());
        assert!(read_err.is_underflow());
        assert_ne!(write_err, read_err);
    }
}
