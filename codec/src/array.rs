//! Fixed-size and variable-size arrays.
//!
//! A fixed-size array is its elements back to back; the count comes from the
//! surrounding structure. A variable-size array puts a varint element count in
//! front.

use buffer::{BufferResult, InBuffer, OutBuffer};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::flex::Flex;
use crate::limits::CodecLimits;
use crate::varint::{decode_uint, encode_uint};

/// Writes each element in order, without a count.
pub fn encode_fixed_array<T: Flex>(out: &mut OutBuffer<'_>, values: &[T]) -> BufferResult<()> {
    for value in values {
        value.encode(out)?;
    }
    Ok(())
}

/// Most elements accepted when an element's encoding is zero bytes long.
///
/// Such elements read nothing, so the count alone would decide the work done.
pub const MAX_EMPTY_ELEMENTS: usize = 64 * 1024;

/// Reads exactly `count` elements.
///
/// Preallocation is capped at the number of unread bytes, so an absurd
/// `count` fails on underflow instead of allocating for it. Elements that
/// consume no input are accepted only up to [`MAX_EMPTY_ELEMENTS`].
pub fn decode_fixed_array<T: Flex>(inp: &mut InBuffer<'_>, count: usize) -> CodecResult<Vec<T>> {
    decode_elements(inp, count, T::decode)
}

/// Decodes into every slot of `values`, in order.
///
/// On error the slots before the failing one hold decoded values and the rest
/// are untouched.
pub fn decode_fixed_array_into<T: Flex>(
    inp: &mut InBuffer<'_>,
    values: &mut [T],
) -> CodecResult<()> {
    for slot in values.iter_mut() {
        *slot = T::decode(inp)?;
    }
    Ok(())
}

/// Writes the element count, then each element in order.
pub fn encode_variable_array<T: Flex>(out: &mut OutBuffer<'_>, values: &[T]) -> BufferResult<()> {
    encode_uint(out, values.len())?;
    encode_fixed_array(out, values)
}

/// Reads an element count, then that many elements.
///
/// The count is not checked against the remaining input up front; a corrupt
/// count surfaces as an underflow while decoding elements. Use
/// [`decode_variable_array_with_limits`] for untrusted input.
pub fn decode_variable_array<T: Flex>(inp: &mut InBuffer<'_>) -> CodecResult<Vec<T>> {
    let count = decode_uint::<usize>(inp)?;
    decode_fixed_array(inp, count)
}

/// Like [`decode_variable_array`], but rejects counts above
/// [`CodecLimits::max_array_len`] before decoding any element.
///
/// Elements are decoded with [`Flex::decode_with_limits`], so nested arrays,
/// strings and blobs are held to the same limits.
pub fn decode_variable_array_with_limits<T: Flex>(
    inp: &mut InBuffer<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<T>> {
    let count = decode_uint::<usize>(inp)?;
    if count > limits.max_array_len {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::ArrayLength,
            limit: limits.max_array_len,
            actual: count,
        });
    }
    decode_elements(inp, count, |inp| T::decode_with_limits(inp, limits))
}

fn decode_elements<T>(
    inp: &mut InBuffer<'_>,
    count: usize,
    mut decode: impl FnMut(&mut InBuffer<'_>) -> CodecResult<T>,
) -> CodecResult<Vec<T>> {
    let mut values = Vec::with_capacity(count.min(inp.remaining()));
    for _ in 0..count {
        let before = inp.position();
        values.push(decode(inp)?);
        if inp.position() == before && count > MAX_EMPTY_ELEMENTS {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::ArrayLength,
                limit: MAX_EMPTY_ELEMENTS,
                actual: count,
            });
        }
    }
    Ok(values)
}
