//! Inspection and conversion tools for flexproto data.
//!
//! This crate provides utilities for looking at encoded bytes by hand:
//!
//! - Walk a buffer as a stream of varints
//! - Encode integers to their wire bytes
//! - Wrap and unwrap COBS frames
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use buffer::{InBuffer, OutBuffer};
use codec::{decode_uint, encode_int, encode_uint, unzigzag, MAX_VARINT_LEN};
use serde::Serialize;
use wire::{encode_frame, frame_len, FrameLimits, Frames};

/// One varint found by [`inspect_varints`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarintEntry {
    pub offset: usize,
    pub hex: String,
    pub unsigned: u64,
    pub signed: i64,
}

/// Result of walking a buffer as consecutive varints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub total_bytes: usize,
    pub entries: Vec<VarintEntry>,
    /// Offset of a trailing varint with no terminating byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_at: Option<usize>,
}

/// Decodes `bytes` as back-to-back 64-bit varints.
///
/// Each entry carries both the unsigned value and its zig-zag decoding, since
/// the bytes alone do not say which was meant.
#[must_use]
pub fn inspect_varints(bytes: &[u8]) -> InspectReport {
    let mut inp = InBuffer::new(bytes);
    let mut entries = Vec::new();
    let mut truncated_at = None;
    while !inp.is_empty() {
        let offset = inp.position();
        match decode_uint::<u64>(&mut inp) {
            Ok(unsigned) => entries.push(VarintEntry {
                offset,
                hex: format_hex(&bytes[offset..inp.position()]),
                unsigned,
                signed: unzigzag::<i64>(unsigned),
            }),
            Err(_) => {
                truncated_at = Some(offset);
                break;
            }
        }
    }
    InspectReport {
        total_bytes: bytes.len(),
        entries,
        truncated_at,
    }
}

/// Renders a report one varint per line.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport, signed: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} varints in {} bytes",
        report.entries.len(),
        report.total_bytes
    );
    for entry in &report.entries {
        let value = if signed {
            entry.signed.to_string()
        } else {
            entry.unsigned.to_string()
        };
        let _ = writeln!(out, "  @{:<6} {:<30} {value}", entry.offset, entry.hex);
    }
    if let Some(offset) = report.truncated_at {
        let _ = writeln!(out, "  @{offset:<6} truncated varint");
    }
    out
}

/// Parses integer literals and encodes them back to back.
///
/// With `signed`, values are parsed as `i64` and zig-zag encoded; otherwise
/// they are parsed as `u64`.
pub fn encode_values<S: AsRef<str>>(values: &[S], signed: bool) -> Result<Vec<u8>> {
    let mut storage = vec![0u8; values.len() * MAX_VARINT_LEN];
    let mut out = OutBuffer::new(&mut storage);
    for value in values {
        let value = value.as_ref();
        if signed {
            let parsed: i64 = value
                .parse()
                .with_context(|| format!("parse signed value {value:?}"))?;
            encode_int(&mut out, parsed)?;
        } else {
            let parsed: u64 = value
                .parse()
                .with_context(|| format!("parse unsigned value {value:?}"))?;
            encode_uint(&mut out, parsed)?;
        }
    }
    let used = out.finish();
    storage.truncate(used);
    Ok(storage)
}

/// Formats bytes as lowercase hex pairs separated by spaces.
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Wraps `payload` in a single frame.
pub fn frame_bytes(payload: &[u8]) -> Result<Vec<u8>> {
    let mut storage = vec![0u8; frame_len(payload)];
    let mut out = OutBuffer::new(&mut storage);
    encode_frame(&mut out, payload).context("encode frame")?;
    Ok(storage)
}

/// Unwraps every frame in `data` and concatenates the payloads.
pub fn unframe_bytes(data: &[u8], limits: FrameLimits) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(data.len());
    let mut frames = Frames::with_limits(data, limits);
    let mut offset = frames.position();
    while let Some(frame) = frames.next() {
        let frame = frame.with_context(|| format!("decode frame at byte {offset}"))?;
        payload.extend_from_slice(&frame);
        offset = frames.position();
    }
    Ok(payload)
}
