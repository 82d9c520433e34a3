//! Base-128 varint encoding for unsigned integers.
//!
//! Each byte carries seven bits of the value, least-significant group first.
//! Bit 7 is set when more groups follow. Zero encodes as a single `0x00`.
//!
//! ```txt
//! 300 = 0b1_0010_1100  ->  [0b1010_1100, 0b0000_0010]  ->  [0xAC, 0x02]
//! ```

use buffer::{BufferError, BufferResult, InBuffer, OutBuffer};

use crate::sealed::Sealed;

/// Longest encoding of any supported width (64 bits in 7-bit groups).
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u64 = 0x7F;

/// Unsigned integer types with a varint encoding.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and `usize`.
pub trait Varint: Sealed + Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// Longest possible encoding in bytes, `ceil(BITS / 7)`.
    const MAX_ENCODED_SIZE: usize;

    /// Widens to `u64`.
    fn to_u64(self) -> u64;

    /// Narrows from `u64`, discarding bits above the type width.
    fn from_u64_truncating(value: u64) -> Self;
}

macro_rules! impl_varint {
    ( $ty:ident ) => {
        impl Sealed for $ty {}

        impl Varint for $ty {
            const BITS: u32 = $ty::BITS;
            const MAX_ENCODED_SIZE: usize = ($ty::BITS as usize + 6) / 7;

            #[allow(clippy::cast_lossless)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_u64_truncating(value: u64) -> Self {
                value as $ty
            }
        }
    };
}

impl_varint!(u8);
impl_varint!(u16);
impl_varint!(u32);
impl_varint!(u64);
impl_varint!(usize);

/// Writes `value` as a varint.
///
/// The encoding is staged on the stack and committed with one bulk write, so
/// on [`BufferError::BufferOverflow`] nothing is written and the cursor does
/// not move.
pub fn encode_uint<T: Varint>(out: &mut OutBuffer<'_>, value: T) -> BufferResult<()> {
    let mut scratch = [0u8; MAX_VARINT_LEN];
    let len = write_groups(value.to_u64(), &mut scratch);
    out.put_slice(&scratch[..len])
}

/// Reads a varint into `T`.
///
/// Groups that land beyond the width of `T` contribute nothing, but bytes are
/// still consumed up to the terminating group. Fails with
/// [`BufferError::BufferUnderflow`] if the input ends first, in which case no
/// bytes are consumed.
pub fn decode_uint<T: Varint>(inp: &mut InBuffer<'_>) -> BufferResult<T> {
    let unread = inp.unread();
    let mut value = 0u64;
    let mut shift = 0u32;
    for (idx, &byte) in unread.iter().enumerate() {
        if shift < T::BITS {
            value |= (u64::from(byte) & GROUP_MASK) << shift;
        }
        shift = shift.saturating_add(7);
        if byte & CONTINUATION == 0 {
            inp.advance(idx + 1)?;
            return Ok(T::from_u64_truncating(value));
        }
    }
    Err(BufferError::BufferUnderflow {
        requested: unread.len() + 1,
        available: unread.len(),
    })
}

/// Returns the number of bytes [`encode_uint`] emits for `value`.
pub fn encoded_len_uint<T: Varint>(value: T) -> usize {
    let mut value = value.to_u64();
    let mut len = 1;
    while value > GROUP_MASK {
        value >>= 7;
        len += 1;
    }
    len
}

#[allow(clippy::cast_possible_truncation)]
fn write_groups(mut value: u64, scratch: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut len = 0;
    loop {
        let more = value > GROUP_MASK;
        scratch[len] = (u8::from(more) << 7) | (value & GROUP_MASK) as u8;
        len += 1;
        value >>= 7;
        if !more {
            return len;
        }
    }
}
