//! # Coding — numeric codecs for the tablekv on-disk formats
//!
//! Two families of primitives, shared by the key layout and by values:
//!
//! - **Varints** — base-128 continuation-encoded unsigned integers, used for
//!   the keyspace/table ids and the row/column length fields inside a data
//!   key. Seven payload bits per byte, high bit set while more bytes follow.
//! - **Fixed-width little-endian integers** — 8- and 4-byte fields written
//!   at caller-chosen offsets inside value buffers, including a
//!   bitwise-complement variant that makes an ascending revision counter
//!   iterate newest-first under the engine's ascending byte order.
//!
//! Everything here is pure and allocation-free apart from
//! [`encode_varint`] appending to its destination. The fixed-width writers
//! follow the caller-guarantees-space contract of the surrounding store:
//! they panic on a short slice rather than reporting an error. Varint
//! *decoding* sits on the boundary where corrupt bytes can arrive, so it
//! reports [`CodingError`] instead.

mod fixed;
mod varint;

pub use fixed::{
    get_i32_le, get_i64_complement_le, get_i64_le, put_i32_le, put_i64_complement_le, put_i64_le,
};
pub use varint::{decode_varint, encode_varint, varint_len, MAX_VARINT_LEN};

use thiserror::Error;

/// Errors reported by the varint decoding boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodingError {
    /// The buffer ended in the middle of a continuation sequence.
    #[error("varint runs past the end of the buffer")]
    TruncatedVarint,

    /// More continuation bytes than any 64-bit value can need.
    #[error("varint longer than {MAX_VARINT_LEN} bytes")]
    VarintTooLong,
}
