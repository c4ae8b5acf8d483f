//! Byte-buffer helpers: word padding, hex rendering, and buffer growth.

use core::fmt::Write;

use crate::{Error, Result, Word};

/// Largest integer that survives a round trip through an IEEE-754 double.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Converts a usize into a big-endian word.
pub fn pad_usize(value: usize) -> Word {
    pad_u64(value as u64)
}

/// Converts a u64 into a big-endian word.
pub fn pad_u64(value: u64) -> Word {
    let mut padded = Word::zero();
    padded[24..].copy_from_slice(&value.to_be_bytes());
    padded
}

/// Rounds `len` up to the next multiple of 32.
pub fn padded_len(len: usize) -> usize {
    (len + 31) / 32 * 32
}

/// Copies `bytes` into a buffer right-padded with zeros to a word boundary.
/// An empty input stays empty.
pub fn pad_right(bytes: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(bytes.len()));
    padded.extend_from_slice(bytes);
    ensure_len(&mut padded, padded_len(bytes.len()));
    padded
}

/// Grows `buf` with trailing zeros until it is at least `len` bytes long.
pub fn ensure_len(buf: &mut Vec<u8>, len: usize) {
    if buf.len() < len {
        buf.resize(len, 0);
    }
}

/// Renders bytes as a lowercase `0x`-prefixed hex string. Empty input renders
/// as `0x`.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Renders a buffer as hex after rounding its length up to a whole number of
/// words. Unwritten trailing bytes render as zero.
pub fn to_word_hex(bytes: &[u8]) -> String {
    let mut rounded = bytes.to_vec();
    ensure_len(&mut rounded, padded_len(bytes.len()));
    to_hex(rounded)
}

/// Strips an optional `0x` prefix.
pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes a hex string with or without `0x`.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(strip_0x(s))?)
}

/// Minimal `0x` quantity rendering (`0x0` for zero, no leading zeros).
///
/// Only integers up to [`MAX_SAFE_INTEGER`] are accepted, since callers feed
/// these from loosely typed inputs.
pub fn quantity_hex(value: u64) -> Result<String> {
    if value > MAX_SAFE_INTEGER {
        return Err(Error::UnsafeNumeric(format!(
            "{value} exceeds the safe integer range"
        )));
    }
    Ok(format!("{value:#x}"))
}

/// One line per 32-byte chunk: `0x<offset>: <64 hex chars>`.
pub fn format_words(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks(32).enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(out, "0x{:04x}: {}", i * 32, hex::encode(chunk));
    }
    out
}
