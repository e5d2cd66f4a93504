//! Fixed-width little-endian integer fields.
//!
//! Values embedded in records are stored as fixed 8- or 4-byte
//! little-endian fields at caller-chosen offsets — no length prefix, no
//! framing. The complement variant stores `!v`, so a field that grows
//! logically (a revision counter) shrinks in its stored form and the
//! engine's ascending iteration yields it newest-first.
//!
//! Byte order is handled by [`byteorder::LittleEndian`]; host endianness
//! is resolved at compile time, never re-checked per call.

use byteorder::{ByteOrder, LittleEndian};

/// Writes `v` as 8 little-endian bytes at `buf[offset..offset + 8]`.
///
/// # Panics
///
/// Panics if fewer than 8 bytes remain at `offset`; the caller guarantees
/// the space.
pub fn put_i64_le(buf: &mut [u8], offset: usize, v: i64) {
    LittleEndian::write_i64(&mut buf[offset..offset + 8], v);
}

/// Writes the bitwise complement of `v` (`v XOR -1`) as 8 little-endian
/// bytes at `buf[offset..offset + 8]`.
///
/// # Panics
///
/// Panics if fewer than 8 bytes remain at `offset`.
pub fn put_i64_complement_le(buf: &mut [u8], offset: usize, v: i64) {
    LittleEndian::write_i64(&mut buf[offset..offset + 8], !v);
}

/// Writes `v` as 4 little-endian bytes at `buf[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if fewer than 4 bytes remain at `offset`.
pub fn put_i32_le(buf: &mut [u8], offset: usize, v: i32) {
    LittleEndian::write_i32(&mut buf[offset..offset + 4], v);
}

/// Reads the 8-byte little-endian value at `buf[offset..offset + 8]`.
///
/// Exact inverse of [`put_i64_le`].
///
/// # Panics
///
/// Panics if fewer than 8 bytes remain at `offset`.
#[must_use]
pub fn get_i64_le(buf: &[u8], offset: usize) -> i64 {
    LittleEndian::read_i64(&buf[offset..offset + 8])
}

/// Reads a value written by [`put_i64_complement_le`], undoing the
/// complement.
///
/// # Panics
///
/// Panics if fewer than 8 bytes remain at `offset`.
#[must_use]
pub fn get_i64_complement_le(buf: &[u8], offset: usize) -> i64 {
    !LittleEndian::read_i64(&buf[offset..offset + 8])
}

/// Reads the 4-byte little-endian value at `buf[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if fewer than 4 bytes remain at `offset`.
#[must_use]
pub fn get_i32_le(buf: &[u8], offset: usize) -> i32 {
    LittleEndian::read_i32(&buf[offset..offset + 4])
}
