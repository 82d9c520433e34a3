//! Zig-zag mapping between signed and unsigned integers of the same width.
//!
//! Small magnitudes map to small unsigned values regardless of sign, so they
//! stay short once varint encoded: `0, -1, 1, -2, 2, ...` become
//! `0, 1, 2, 3, 4, ...`.

use buffer::{BufferResult, InBuffer, OutBuffer};

use crate::sealed::Sealed;
use crate::varint::{decode_uint, encode_uint, Varint};

/// Signed integer types with a zig-zag mapping onto their unsigned twin.
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait ZigZag: Sealed + Copy {
    /// Unsigned type of the same width.
    type Unsigned: Varint;

    /// Longest possible varint encoding in bytes.
    const MAX_ENCODED_SIZE: usize = <Self::Unsigned as Varint>::MAX_ENCODED_SIZE;

    /// Maps a signed value onto its unsigned zig-zag form.
    fn zigzag(self) -> Self::Unsigned;

    /// Inverse of [`ZigZag::zigzag`].
    fn unzigzag(value: Self::Unsigned) -> Self;
}

macro_rules! impl_zigzag {
    ( $sty:ident => $uty:ident ) => {
        impl Sealed for $sty {}

        impl ZigZag for $sty {
            type Unsigned = $uty;

            #[allow(clippy::cast_sign_loss)]
            fn zigzag(self) -> $uty {
                let bits = self as $uty;
                if bits & (1 << ($uty::BITS - 1)) != 0 {
                    !(bits << 1)
                } else {
                    bits << 1
                }
            }

            #[allow(clippy::cast_possible_wrap)]
            fn unzigzag(value: $uty) -> $sty {
                if value & 1 != 0 {
                    !(value >> 1) as $sty
                } else {
                    (value >> 1) as $sty
                }
            }
        }
    };
}

impl_zigzag!(i8 => u8);
impl_zigzag!(i16 => u16);
impl_zigzag!(i32 => u32);
impl_zigzag!(i64 => u64);
impl_zigzag!(isize => usize);

/// Maps a signed value onto its unsigned zig-zag form.
pub fn zigzag<T: ZigZag>(value: T) -> T::Unsigned {
    value.zigzag()
}

/// Maps an unsigned zig-zag value back to its signed form.
pub fn unzigzag<T: ZigZag>(value: T::Unsigned) -> T {
    T::unzigzag(value)
}

/// Writes a signed value as a zig-zag varint.
pub fn encode_int<T: ZigZag>(out: &mut OutBuffer<'_>, value: T) -> BufferResult<()> {
    encode_uint(out, value.zigzag())
}

/// Reads a zig-zag varint into a signed value.
pub fn decode_int<T: ZigZag>(inp: &mut InBuffer<'_>) -> BufferResult<T> {
    decode_uint::<T::Unsigned>(inp).map(T::unzigzag)
}
