//! The [`Flex`] trait and its implementations for built-in types.

use buffer::{BufferResult, InBuffer, OutBuffer};

use crate::array::{
    decode_fixed_array_into, decode_variable_array, decode_variable_array_with_limits,
    encode_fixed_array, encode_variable_array,
};
use crate::bytes::{
    decode_blob, decode_blob_with_limits, decode_string, decode_string_with_limits, encode_blob,
    encode_string, encoded_len_bytes, Blob,
};
use crate::error::{CodecError, CodecResult};
use crate::limits::CodecLimits;
use crate::varint::{decode_uint, encode_uint, encoded_len_uint};
use crate::zigzag::{decode_int, encode_int, ZigZag};

/// A type with a flexproto encoding.
///
/// The encoding carries no type information; the decoder must ask for the
/// same type the encoder wrote. Composite implementations call their parts in
/// a fixed order and stop at the first error.
pub trait Flex: Sized {
    /// Writes `self` to the cursor.
    fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()>;

    /// Reads a value from the cursor.
    fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self>;

    /// Reads a value, checking every count and length inside it against
    /// `limits`.
    ///
    /// Types without counts or lengths have nothing to check.
    fn decode_with_limits(inp: &mut InBuffer<'_>, _limits: &CodecLimits) -> CodecResult<Self> {
        Self::decode(inp)
    }

    /// Returns the exact number of bytes [`Flex::encode`] writes.
    fn encoded_len(&self) -> usize;

    /// The value a field starts as: zero, empty, or the first enum variant.
    ///
    /// Also fills fixed-size arrays before decoding into them, which works
    /// for any length where `Default` stops at 32.
    fn empty() -> Self;
}

macro_rules! impl_unsigned_flex {
    ( $( $ty:ident ),* ) => {
        $(
            impl Flex for $ty {
                fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
                    encode_uint(out, *self)
                }

                fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
                    Ok(decode_uint(inp)?)
                }

                fn encoded_len(&self) -> usize {
                    encoded_len_uint(*self)
                }

                fn empty() -> Self {
                    0
                }
            }
        )*
    };
}

macro_rules! impl_signed_flex {
    ( $( $ty:ident ),* ) => {
        $(
            impl Flex for $ty {
                fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
                    encode_int(out, *self)
                }

                fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
                    Ok(decode_int(inp)?)
                }

                fn encoded_len(&self) -> usize {
                    encoded_len_uint(self.zigzag())
                }

                fn empty() -> Self {
                    0
                }
            }
        )*
    };
}

impl_unsigned_flex!(u8, u16, u32, u64, usize);
impl_signed_flex!(i8, i16, i32, i64, isize);

impl Flex for String {
    fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
        encode_string(out, self)
    }

    fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
        decode_string(inp)
    }

    fn decode_with_limits(inp: &mut InBuffer<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        decode_string_with_limits(inp, limits)
    }

    fn encoded_len(&self) -> usize {
        encoded_len_bytes(self.len())
    }

    fn empty() -> Self {
        Self::new()
    }
}

impl Flex for Blob {
    fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
        encode_blob(out, &self.0)
    }

    fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
        Ok(Self(decode_blob(inp)?))
    }

    fn decode_with_limits(inp: &mut InBuffer<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        decode_blob_with_limits(inp, limits).map(Self)
    }

    fn encoded_len(&self) -> usize {
        encoded_len_bytes(self.0.len())
    }

    fn empty() -> Self {
        Self::default()
    }
}

/// Variable-size array: count prefix, then the elements.
impl<T: Flex> Flex for Vec<T> {
    fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
        encode_variable_array(out, self)
    }

    fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
        decode_variable_array(inp)
    }

    fn decode_with_limits(inp: &mut InBuffer<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        decode_variable_array_with_limits(inp, limits)
    }

    fn encoded_len(&self) -> usize {
        encoded_len_uint(self.len()) + self.iter().map(Flex::encoded_len).sum::<usize>()
    }

    fn empty() -> Self {
        Self::new()
    }
}

/// Fixed-size array: the elements only, the count is implied by `N`.
impl<T: Flex, const N: usize> Flex for [T; N] {
    fn encode(&self, out: &mut OutBuffer<'_>) -> BufferResult<()> {
        encode_fixed_array(out, self)
    }

    fn decode(inp: &mut InBuffer<'_>) -> CodecResult<Self> {
        let mut values = Self::empty();
        decode_fixed_array_into(inp, &mut values)?;
        Ok(values)
    }

    fn decode_with_limits(inp: &mut InBuffer<'_>, limits: &CodecLimits) -> CodecResult<Self> {
        let mut values = Self::empty();
        for slot in &mut values {
            *slot = T::decode_with_limits(inp, limits)?;
        }
        Ok(values)
    }

    fn encoded_len(&self) -> usize {
        self.iter().map(Flex::encoded_len).sum()
    }

    fn empty() -> Self {
        std::array::from_fn(|_| T::empty())
    }
}

/// Encodes a value into a freshly allocated vector of exactly the right size.
pub fn encode_to_vec<T: Flex>(value: &T) -> BufferResult<Vec<u8>> {
    let mut buf = vec![0u8; value.encoded_len()];
    let mut out = OutBuffer::new(&mut buf);
    value.encode(&mut out)?;
    let used = out.finish();
    buf.truncate(used);
    Ok(buf)
}

/// Encodes a value into `buf`, returning the number of bytes used.
pub fn encode_to_slice<T: Flex>(value: &T, buf: &mut [u8]) -> BufferResult<usize> {
    let mut out = OutBuffer::new(buf);
    value.encode(&mut out)?;
    Ok(out.finish())
}

/// Decodes a value that must span the whole buffer.
pub fn decode_exact<T: Flex>(bytes: &[u8]) -> CodecResult<T> {
    let mut inp = InBuffer::new(bytes);
    let value = T::decode(&mut inp)?;
    ensure_consumed(&inp)?;
    Ok(value)
}

/// Like [`decode_exact`], checking every nested count and length against
/// `limits`.
pub fn decode_exact_with_limits<T: Flex>(bytes: &[u8], limits: &CodecLimits) -> CodecResult<T> {
    let mut inp = InBuffer::new(bytes);
    let value = T::decode_with_limits(&mut inp, limits)?;
    ensure_consumed(&inp)?;
    Ok(value)
}

fn ensure_consumed(inp: &InBuffer<'_>) -> CodecResult<()> {
    if !inp.is_empty() {
        return Err(CodecError::TrailingBytes {
            remaining: inp.remaining(),
        });
    }
    Ok(())
}
