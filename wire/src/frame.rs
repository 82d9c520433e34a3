//! Consistent Overhead Byte Stuffing with a zero sentinel.
//!
//! A frame is the stuffed payload followed by a single `0x00`. The stuffed
//! bytes never contain zero, so a receiver can resynchronize on any sentinel.
//! Each block starts with a code byte `n`: the next `n - 1` bytes are data,
//! followed by an implied zero unless `n == 0xFF` or the block ends the frame.

use std::convert::Infallible;

use buffer::{BufferError, BufferResult, InBuffer, OutBuffer};

use crate::error::{FrameError, FrameResult};
use crate::limits::FrameLimits;

/// Frame terminator.
pub const SENTINEL: u8 = 0x00;

/// Longest run of data bytes a single block can carry.
const MAX_RUN: usize = 254;

/// Worst-case framed size of an `n`-byte payload, sentinel included.
#[must_use]
pub const fn max_frame_len(payload_len: usize) -> usize {
    payload_len + payload_len / MAX_RUN + 2
}

/// Exact framed size of `payload`, sentinel included.
#[must_use]
pub fn frame_len(payload: &[u8]) -> usize {
    let mut len = 1;
    let _ = stuff(payload, |_, run| -> Result<(), Infallible> {
        len += 1 + run.len();
        Ok(())
    });
    len
}

/// Writes `payload` as one frame.
///
/// Either the whole frame is written or nothing is: if `out` lacks room for
/// the stuffed bytes and the sentinel, it is left untouched.
pub fn encode_frame(out: &mut OutBuffer<'_>, payload: &[u8]) -> BufferResult<()> {
    let needed = frame_len(payload);
    if needed > out.remaining() {
        return Err(BufferError::BufferOverflow {
            requested: needed,
            available: out.remaining(),
        });
    }
    stuff(payload, |code, run| {
        out.put(code)?;
        out.put_slice(run)
    })?;
    out.put(SENTINEL)
}

/// Reads one frame and returns its unstuffed payload.
///
/// Uses [`FrameLimits::default`], like every other entry point without
/// explicit limits. Fails with a buffer underflow when no sentinel is present
/// yet; more input may complete the frame. The cursor moves past the sentinel
/// only on success.
pub fn decode_frame(inp: &mut InBuffer<'_>) -> FrameResult<Vec<u8>> {
    decode_frame_with_limits(inp, &FrameLimits::default())
}

/// Reads one frame, rejecting frames longer than `limits.max_frame_bytes`.
///
/// The scan for the sentinel stops at the limit, so an unterminated stream is
/// reported as too large rather than as waiting for more input.
pub fn decode_frame_with_limits(
    inp: &mut InBuffer<'_>,
    limits: &FrameLimits,
) -> FrameResult<Vec<u8>> {
    let unread = inp.unread();
    let window = &unread[..unread.len().min(limits.max_frame_bytes.saturating_add(1))];
    let Some(end) = window.iter().position(|&b| b == SENTINEL) else {
        if unread.len() > limits.max_frame_bytes {
            return Err(FrameError::FrameTooLarge {
                limit: limits.max_frame_bytes,
                actual: unread.len(),
            });
        }
        return Err(FrameError::Buffer(BufferError::BufferUnderflow {
            requested: unread.len() + 1,
            available: unread.len(),
        }));
    };

    let payload = unstuff(&unread[..end])?;
    inp.advance(end + 1)?;
    Ok(payload)
}

/// Iterator over consecutive frames in a byte stream.
///
/// Yields each payload in order and stops at the end of input. A trailing
/// partial frame is reported as an underflow error, after which the iterator
/// is exhausted.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    inp: InBuffer<'a>,
    limits: FrameLimits,
    failed: bool,
}

impl<'a> Frames<'a> {
    /// Creates an iterator over `data` with default limits.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, FrameLimits::default())
    }

    /// Creates an iterator over `data` with explicit limits.
    #[must_use]
    pub fn with_limits(data: &'a [u8], limits: FrameLimits) -> Self {
        Self {
            inp: InBuffer::new(data),
            limits,
            failed: false,
        }
    }

    /// Byte offset of the next frame.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.inp.position()
    }
}

impl Iterator for Frames<'_> {
    type Item = FrameResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.inp.is_empty() {
            return None;
        }
        let result = decode_frame_with_limits(&mut self.inp, &self.limits);
        self.failed = result.is_err();
        Some(result)
    }
}

/// Splits `payload` into blocks and hands each `(code, run)` to `emit`.
#[allow(clippy::cast_possible_truncation)]
fn stuff<E>(payload: &[u8], mut emit: impl FnMut(u8, &[u8]) -> Result<(), E>) -> Result<(), E> {
    let mut segments = payload.split(|&b| b == SENTINEL).peekable();
    while let Some(mut segment) = segments.next() {
        let last = segments.peek().is_none();
        loop {
            if segment.len() >= MAX_RUN {
                let (run, rest) = segment.split_at(MAX_RUN);
                emit(0xFF, run)?;
                segment = rest;
                if segment.is_empty() && last {
                    return Ok(());
                }
            } else {
                // Fits in a byte: len < MAX_RUN.
                emit(segment.len() as u8 + 1, segment)?;
                break;
            }
        }
    }
    Ok(())
}

fn unstuff(frame: &[u8]) -> FrameResult<Vec<u8>> {
    if frame.is_empty() {
        return Err(FrameError::Malformed { offset: 0 });
    }
    let mut payload = Vec::with_capacity(frame.len());
    let mut idx = 0;
    while idx < frame.len() {
        let code = usize::from(frame[idx]);
        let end = idx + code;
        if end > frame.len() {
            return Err(FrameError::Malformed { offset: idx });
        }
        payload.extend_from_slice(&frame[idx + 1..end]);
        idx = end;
        if code < 0xFF && idx < frame.len() {
            payload.push(SENTINEL);
        }
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(payload: &[u8]) -> Vec<u8> {
        let mut storage = vec![0u8; max_frame_len(payload.len())];
        let mut out = OutBuffer::new(&mut storage);
        encode_frame(&mut out, payload).unwrap();
        let used = out.finish();
        storage.truncate(used);
        storage
    }

    #[test]
    fn known_encodings() {
        assert_eq!(framed(&[]), vec![0x01, 0x00]);
        assert_eq!(framed(&[0x00]), vec![0x01, 0x01, 0x00]);
        assert_eq!(framed(&[0x00, 0x00]), vec![0x01, 0x01, 0x01, 0x00]);
        assert_eq!(
            framed(&[0x11, 0x22, 0x00, 0x33]),
            vec![0x03, 0x11, 0x22, 0x02, 0x33, 0x00]
        );
        assert_eq!(
            framed(&[0x11, 0x00, 0x00, 0x00]),
            vec![0x02, 0x11, 0x01, 0x01, 0x01, 0x00]
        );
    }

    #[test]
    fn full_run_has_no_trailing_block() {
        let payload: Vec<u8> = (1..=254).collect();
        let bytes = framed(&payload);
        assert_eq!(bytes.len(), 256);
        assert_eq!(bytes[0], 0xFF);
        assert_eq!(bytes[255], SENTINEL);
    }

    #[test]
    fn full_run_then_zero() {
        let mut payload: Vec<u8> = (1..=254).collect();
        payload.push(0);
        let bytes = framed(&payload);
        assert_eq!(bytes[0], 0xFF);
        assert_eq!(&bytes[255..], &[0x01, 0x01, 0x00]);

        let mut inp = InBuffer::new(&bytes);
        assert_eq!(decode_frame(&mut inp).unwrap(), payload);
    }

    #[test]
    fn long_runs_roundtrip() {
        let payload: Vec<u8> = (0..2000u32).map(|i| (i % 255) as u8 + 1).collect();
        let bytes = framed(&payload);
        assert!(bytes.len() <= max_frame_len(payload.len()));
        assert_eq!(bytes.iter().filter(|&&b| b == 0).count(), 1);

        let mut inp = InBuffer::new(&bytes);
        assert_eq!(decode_frame(&mut inp).unwrap(), payload);
        assert!(inp.is_empty());
    }

    #[test]
    fn frame_len_matches_output() {
        for payload in [&[][..], &[0, 0, 0], &[1, 2, 3, 0, 4], &[7; 600]] {
            assert_eq!(frame_len(payload), framed(payload).len());
        }
    }

    #[test]
    fn encode_overflow_writes_nothing() {
        let mut storage = [0xAAu8; 4];
        let mut out = OutBuffer::new(&mut storage);
        let err = encode_frame(&mut out, &[1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            BufferError::BufferOverflow {
                requested: 6,
                available: 4,
            }
        );
        assert_eq!(out.position(), 0);
        assert_eq!(storage, [0xAA; 4]);
    }

    #[test]
    fn missing_sentinel_is_underflow() {
        let bytes = [0x03, 0x11, 0x22];
        let mut inp = InBuffer::new(&bytes);
        let err = decode_frame(&mut inp).unwrap_err();
        assert_eq!(
            err,
            FrameError::Buffer(BufferError::BufferUnderflow {
                requested: 4,
                available: 3,
            })
        );
        assert_eq!(inp.position(), 0);
    }

    #[test]
    fn code_past_end_is_malformed() {
        let bytes = [0x02, 0x11, 0x05, 0x22, 0x00];
        let mut inp = InBuffer::new(&bytes);
        assert_eq!(
            decode_frame(&mut inp).unwrap_err(),
            FrameError::Malformed { offset: 2 }
        );
        assert_eq!(inp.position(), 0);
    }

    #[test]
    fn empty_frame_is_malformed() {
        let mut inp = InBuffer::new(&[0x00]);
        assert_eq!(
            decode_frame(&mut inp).unwrap_err(),
            FrameError::Malformed { offset: 0 }
        );
    }

    #[test]
    fn limits_reject_unterminated_stream() {
        let bytes = vec![0x05; 600];
        let mut inp = InBuffer::new(&bytes);
        let err = decode_frame_with_limits(&mut inp, &FrameLimits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            FrameError::FrameTooLarge {
                limit: 512,
                actual: 600,
            }
        );
    }

    #[test]
    fn entry_points_share_default_limits() {
        let limit = FrameLimits::default().max_frame_bytes;
        let bytes = vec![0x05; limit + 1];

        let mut inp = InBuffer::new(&bytes);
        let single = decode_frame(&mut inp).unwrap_err();
        let streamed = Frames::new(&bytes).next().unwrap().unwrap_err();
        assert_eq!(single, streamed);
        assert!(matches!(single, FrameError::FrameTooLarge { .. }));
    }

    #[test]
    fn limits_allow_frame_at_limit() {
        let limits = FrameLimits { max_frame_bytes: 5 };
        let bytes = framed(&[1, 2, 3, 4]);
        assert_eq!(bytes.len(), 6);
        let mut inp = InBuffer::new(&bytes);
        assert_eq!(
            decode_frame_with_limits(&mut inp, &limits).unwrap(),
            vec![1, 2, 3, 4]
        );

        let limits = FrameLimits { max_frame_bytes: 4 };
        let mut inp = InBuffer::new(&bytes);
        assert!(matches!(
            decode_frame_with_limits(&mut inp, &limits),
            Err(FrameError::FrameTooLarge { limit: 4, .. })
        ));
    }

    #[test]
    fn resynchronizes_after_garbage() {
        let mut stream = vec![0x09, 0x42, 0x00];
        stream.extend(framed(&[0x10, 0x00, 0x20]));

        let mut inp = InBuffer::new(&stream);
        assert!(decode_frame(&mut inp).is_err());
        inp.advance(3).unwrap();
        assert_eq!(decode_frame(&mut inp).unwrap(), vec![0x10, 0x00, 0x20]);
    }

    #[test]
    fn frames_iterates_stream() {
        let mut stream = framed(&[1]);
        stream.extend(framed(&[]));
        stream.extend(framed(&[0, 2]));

        let frames: Vec<Vec<u8>> = Frames::new(&stream).map(Result::unwrap).collect();
        assert_eq!(frames, vec![vec![1], vec![], vec![0, 2]]);
    }

    #[test]
    fn frames_stops_after_partial_tail() {
        let mut stream = framed(&[1, 2]);
        stream.extend([0x03, 0x04]);

        let mut frames = Frames::new(&stream);
        assert_eq!(frames.next().unwrap().unwrap(), vec![1, 2]);
        assert_eq!(frames.position(), 4);
        assert!(frames.next().unwrap().is_err());
        assert!(frames.next().is_none());
    }
}
