//! # Keycode — composite key layout and ordering
//!
//! tablekv stores every cell of a multi-tenant column store inside a flat
//! sorted key-value engine. The engine only orders raw byte sequences; this
//! crate supplies the byte layout and the comparator that make that raw
//! ordering express `keyspace → table → row → column`.
//!
//! ## Data key layout (size `S`, 0-indexed)
//!
//! ```text
//! ┌──────────────────┬────────────────────────────────────────────┐
//! │ [0]              │ tag byte, b'1' for data keys               │
//! │ [1 ..]           │ keyspace id     (varint, KSL bytes)        │
//! │ [1+KSL ..]       │ table id        (varint, TL bytes)         │
//! │ [1+KSL+TL ..]    │ row key         (KLEN bytes)               │
//! │ [.. +CLEN]       │ column name     (CLEN bytes)               │
//! │ [S-4-CLL-KLL ..] │ KLEN            (varint, KLL bytes)        │
//! │ [S-4-CLL ..]     │ CLEN            (varint, CLL bytes)        │
//! │ [S-4]            │ (KSL << 3) | TL                            │
//! │ [S-3]            │ (KLL << 3) | CLL                           │
//! │ [S-2, S-1]       │ opaque trailer, preserved verbatim         │
//! └──────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Field positions are recovered back to front: the two packed bytes give
//! the four varint lengths (3 bits each, so every varint fits in 0..=7
//! bytes), those locate the row/column length varints, and the row and
//! column ranges are then accumulated forward from byte 1. The two trailing
//! opaque bytes belong to the embedding runtime and never participate in
//! ordering.
//!
//! Metadata keys (tag `0x00`) and any future tag compare purely bytewise;
//! only data keys get the hierarchical treatment. See
//! [`TupleKeyComparator`].
//!
//! Every comparison the engine performs during merges, lookups, and range
//! scans goes through this crate, so the decode path allocates nothing and
//! the comparator never fails: a key that does not match the layout it
//! declares gets a deterministic bytewise fallback order, and the typed
//! errors below surface only at the embedding runtime's decoding boundary.

mod comparator;
mod layout;

pub use comparator::{Comparator, TupleKeyComparator, COMPARATOR_NAME};
pub use layout::{
    classify, decode_data_key, encode_data_key, DataKey, KeyKind, TrailerLengths, DATA_TAG,
    METADATA_TAG, MIN_DATA_KEY_LEN,
};

use coding::CodingError;
use thiserror::Error;

/// Errors reported when a key fails to match the declared layout.
///
/// The comparator never reports these — it falls back to bytewise ordering
/// on malformed input — but code that decodes keys back into their logical
/// fields gets a diagnosable failure instead of an undefined result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Shorter than the tag plus the four trailer bytes.
    #[error("key too short for a data key: {0} bytes")]
    TooShort(usize),

    /// First byte is not the data-key tag.
    #[error("not a data key: tag {0:#04x}")]
    WrongTag(u8),

    /// A varint length descriptor must fit in 3 bits.
    #[error("varint length descriptor out of range 0..=7: {0}")]
    LengthOutOfRange(u8),

    /// A declared field range falls outside the key.
    #[error("declared field range exceeds the key")]
    OutOfBounds,

    /// A varint inside the key failed to decode.
    #[error(transparent)]
    Coding(#[from] CodingError),
}

#[cfg(test)]
mod tests;
