//! Zero-terminated framing for flexproto byte streams.
//!
//! flexproto encodings carry no length or boundary of their own. This crate
//! adds one for stream transports: each message is stuffed with Consistent
//! Overhead Byte Stuffing and terminated by a single `0x00`, so a receiver
//! that joins mid-stream or sees corruption can resynchronize on the next
//! sentinel.
//!
//! # Design Principles
//!
//! - **Optional layer** - The codec never depends on framing.
//! - **Bounded decoding** - Frame size is checked against limits while scanning.
//! - **All or nothing** - A frame is written whole or not at all.
//!
//! # Example
//!
//! ```
//! use wire::{decode_frame, encode_frame, max_frame_len};
//! use buffer::{InBuffer, OutBuffer};
//!
//! let payload = [0x11, 0x00, 0x22];
//! let mut storage = vec![0u8; max_frame_len(payload.len())];
//! let mut out = OutBuffer::new(&mut storage);
//! encode_frame(&mut out, &payload).unwrap();
//! let used = out.finish();
//! assert_eq!(&storage[..used], &[0x02, 0x11, 0x02, 0x22, 0x00]);
//!
//! let mut inp = InBuffer::new(&storage[..used]);
//! assert_eq!(decode_frame(&mut inp).unwrap(), payload);
//! ```

mod error;
mod frame;
mod limits;
mod message;

pub use error::{FrameError, FrameResult};
pub use frame::{
    decode_frame, decode_frame_with_limits, encode_frame, frame_len, max_frame_len, Frames,
    SENTINEL,
};
pub use limits::FrameLimits;
pub use message::{decode_message, decode_message_with_limits, encode_message};
