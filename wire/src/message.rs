//! Framing for values that implement [`Flex`].

use buffer::{BufferResult, InBuffer, OutBuffer};
use codec::{decode_exact_with_limits, encode_to_vec, CodecLimits, Flex};

use crate::error::FrameResult;
use crate::frame::{decode_frame_with_limits, encode_frame};
use crate::limits::FrameLimits;

/// Encodes `value` and writes it as one frame.
pub fn encode_message<T: Flex>(out: &mut OutBuffer<'_>, value: &T) -> BufferResult<()> {
    let payload = encode_to_vec(value)?;
    encode_frame(out, &payload)
}

/// Reads one frame and decodes it as exactly one `T`.
///
/// Uses the default frame and codec limits. Bytes left in the payload after
/// `T` are an error.
pub fn decode_message<T: Flex>(inp: &mut InBuffer<'_>) -> FrameResult<T> {
    decode_message_with_limits(inp, &FrameLimits::default(), &CodecLimits::default())
}

/// Like [`decode_message`], with explicit limits. `codec_limits` applies to
/// every count and length inside the payload, not only the outermost.
pub fn decode_message_with_limits<T: Flex>(
    inp: &mut InBuffer<'_>,
    frame_limits: &FrameLimits,
    codec_limits: &CodecLimits,
) -> FrameResult<T> {
    let payload = decode_frame_with_limits(inp, frame_limits)?;
    Ok(decode_exact_with_limits(&payload, codec_limits)?)
}
