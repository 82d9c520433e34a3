//! Compact, untagged binary encoding for integers, strings, blobs and arrays.
//!
//! This crate is the flexproto codec proper, layered on the cursors from
//! `buffer`:
//!
//! - Unsigned integers are base-128 varints, least-significant group first.
//! - Signed integers are zig-zag mapped, then varint encoded.
//! - Strings and blobs are a varint byte count followed by the raw bytes.
//! - Variable-size arrays are a varint element count followed by the elements.
//! - Fixed-size arrays are the elements only.
//!
//! There are no tags or field identifiers. Both sides must agree on the
//! structure out of band; [`flex_struct!`] and [`flex_enum!`] make that
//! structure a Rust type.
//!
//! # Design Principles
//!
//! - **Static dispatch** - Scalar behaviour is chosen by type through sealed
//!   traits, never by inspecting values at runtime.
//! - **Caller-owned memory** - Encoders write into a fixed region; nothing
//!   grows behind the caller's back.
//! - **First error wins** - Composite encodings stop at the first failing part.
//!
//! # Example
//!
//! ```
//! use codec::{decode_variable_array, encode_variable_array, InBuffer, OutBuffer};
//!
//! let mut storage = [0u8; 16];
//! let mut out = OutBuffer::new(&mut storage);
//! encode_variable_array(&mut out, &[1u16, 300, 65535]).unwrap();
//! let used = out.finish();
//!
//! let mut inp = InBuffer::new(&storage[..used]);
//! let values: Vec<u16> = decode_variable_array(&mut inp).unwrap();
//! assert_eq!(values, [1, 300, 65535]);
//! ```

mod array;
mod bytes;
mod error;
mod flex;
mod limits;
mod macros;
mod varint;
mod zigzag;

mod sealed {
    pub trait Sealed {}
}

pub use array::{
    decode_fixed_array, decode_fixed_array_into, decode_variable_array,
    decode_variable_array_with_limits, encode_fixed_array, encode_variable_array,
    MAX_EMPTY_ELEMENTS,
};
pub use buffer::{BufferError, BufferResult, InBuffer, OutBuffer};
pub use bytes::{
    decode_blob, decode_blob_ref, decode_blob_with_limits, decode_str, decode_string,
    decode_string_with_limits, encode_blob, encode_string, encoded_len_bytes, Blob,
};
pub use error::{CodecError, CodecResult, LimitKind};
pub use flex::{decode_exact, decode_exact_with_limits, encode_to_slice, encode_to_vec, Flex};
pub use limits::CodecLimits;
pub use varint::{decode_uint, encode_uint, encoded_len_uint, Varint, MAX_VARINT_LEN};
pub use zigzag::{decode_int, encode_int, unzigzag, zigzag, ZigZag};
