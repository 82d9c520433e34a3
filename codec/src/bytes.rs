//! Length-prefixed strings and blobs.
//!
//! Layout: varint byte count followed by the raw bytes. No padding, no
//! terminator. Strings and blobs share the layout; strings are checked for
//! UTF-8 on decode.

use buffer::{BufferResult, InBuffer, OutBuffer};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::varint::{decode_uint, encode_uint, encoded_len_uint};

/// An owned binary blob.
///
/// Exists so blobs and `Vec<u8>` can both implement [`crate::Flex`]: a blob is
/// copied raw after its length, while a `Vec<u8>` is an array of varint bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    /// Wraps a byte vector.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps into the byte vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Writes a length-prefixed blob.
///
/// If the payload does not fit after the length was written, the length is
/// taken back and the cursor ends where it started.
pub fn encode_blob(out: &mut OutBuffer<'_>, bytes: &[u8]) -> BufferResult<()> {
    let start = out.position();
    encode_uint(out, bytes.len())?;
    if let Err(err) = out.put_slice(bytes) {
        out.rewind_to(start);
        return Err(err);
    }
    Ok(())
}

/// Writes a length-prefixed UTF-8 string.
pub fn encode_string(out: &mut OutBuffer<'_>, value: &str) -> BufferResult<()> {
    encode_blob(out, value.as_bytes())
}

/// Returns the encoded size of a blob or string payload of `len` bytes.
pub fn encoded_len_bytes(len: usize) -> usize {
    encoded_len_uint(len) + len
}

/// Reads a length-prefixed blob as a view into the input.
///
/// On failure the cursor does not move.
pub fn decode_blob_ref<'a>(inp: &mut InBuffer<'a>) -> BufferResult<&'a [u8]> {
    let mut probe = inp.clone();
    let len = decode_uint::<usize>(&mut probe)?;
    let bytes = probe.get_slice(len)?;
    *inp = probe;
    Ok(bytes)
}

/// Reads a length-prefixed blob into an owned vector.
pub fn decode_blob(inp: &mut InBuffer<'_>) -> BufferResult<Vec<u8>> {
    decode_blob_ref(inp).map(<[u8]>::to_vec)
}

/// Reads a length-prefixed blob, rejecting lengths above
/// [`CodecLimits::max_bytes_len`].
pub fn decode_blob_with_limits(
    inp: &mut InBuffer<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<u8>> {
    let bytes = decode_bytes_checked(inp, limits)?;
    Ok(bytes.to_vec())
}

/// Reads a length-prefixed string as a view into the input.
///
/// On failure, including invalid UTF-8, the cursor does not move.
pub fn decode_str<'a>(inp: &mut InBuffer<'a>) -> CodecResult<&'a str> {
    let mut probe = inp.clone();
    let bytes = decode_blob_ref(&mut probe)?;
    let value = utf8(bytes)?;
    *inp = probe;
    Ok(value)
}

/// Reads a length-prefixed string into an owned `String`.
pub fn decode_string(inp: &mut InBuffer<'_>) -> CodecResult<String> {
    decode_str(inp).map(str::to_owned)
}

/// Reads a length-prefixed string, rejecting lengths above
/// [`CodecLimits::max_bytes_len`].
pub fn decode_string_with_limits(
    inp: &mut InBuffer<'_>,
    limits: &CodecLimits,
) -> CodecResult<String> {
    let mut probe = inp.clone();
    let bytes = decode_bytes_checked(&mut probe, limits)?;
    let value = utf8(bytes)?.to_owned();
    *inp = probe;
    Ok(value)
}

fn decode_bytes_checked<'a>(
    inp: &mut InBuffer<'a>,
    limits: &CodecLimits,
) -> CodecResult<&'a [u8]> {
    let mut probe = inp.clone();
    let len = decode_uint::<usize>(&mut probe)?;
    if len > limits.max_bytes_len {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::BytesLength,
            limit: limits.max_bytes_len,
            actual: len,
        });
    }
    let bytes = probe.get_slice(len)?;
    *inp = probe;
    Ok(bytes)
}

fn utf8(bytes: &[u8]) -> CodecResult<&str> {
    std::str::from_utf8(bytes).map_err(|err| CodecError::InvalidUtf8 {
        valid_up_to: err.valid_up_to(),
    })
}
