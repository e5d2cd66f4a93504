//! Total order over encoded keys.
//!
//! This is the function registered with the key-value engine: every merge,
//! lookup, and range scan orders keys through it, so it must be pure,
//! total, and bit-for-bit consistent with the layout in this crate.

use crate::layout::{decode_data_key, DATA_TAG};
use std::cmp::Ordering;

/// Name persisted with every store written under this layout. The engine
/// refuses to open a store recorded under a different comparator name.
pub const COMPARATOR_NAME: &str = "tablekv/TupleKeyComparator1";

/// The ordering seam between this crate and the key-value engine.
///
/// Besides the order itself, a comparator carries a versioned
/// [`name`](Comparator::name) and two refinement hooks the engine may call
/// to shorten index keys at compaction boundaries. Leaving a hook's buffer
/// untouched is always a correct implementation.
pub trait Comparator {
    /// Versioned identity string persisted by the engine.
    fn name(&self) -> &'static str;

    /// Total order over two encoded keys.
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;

    /// May replace `start` with any shorter key in `[start, limit)`.
    fn find_shortest_separator(&self, start: &mut Vec<u8>, limit: &[u8]);

    /// May replace `key` with a short key ordered at or after it.
    fn find_short_successor(&self, key: &mut Vec<u8>);
}

/// Hierarchical comparator for tablekv keys.
///
/// Data keys order by `(keyspace, table, row, column)` — ids numerically as
/// signed integers, row and column bytes lexicographically, earliest
/// differing field wins. Everything else (metadata keys, unknown tags,
/// malformed data keys) orders bytewise, and keys with different tag bytes
/// never interleave: the tag byte alone decides between families.
///
/// Equal means equal tuples: two data keys with identical fields but
/// different opaque trailer bytes compare `Equal`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TupleKeyComparator;

impl Comparator for TupleKeyComparator {
    fn name(&self) -> &'static str {
        COMPARATOR_NAME
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        match (a.first(), b.first()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(ta), Some(tb)) if ta != tb => a.cmp(b),
            (Some(&DATA_TAG), _) => compare_data_keys(a, b),
            _ => a.cmp(b),
        }
    }

    // This layout never shortens keys; both hooks leave their input as is.
    fn find_shortest_separator(&self, _start: &mut Vec<u8>, _limit: &[u8]) {}

    fn find_short_successor(&self, _key: &mut Vec<u8>) {}
}

/// Field-by-field comparison of two data keys.
fn compare_data_keys(a: &[u8], b: &[u8]) -> Ordering {
    let (Ok(ka), Ok(kb)) = (decode_data_key(a), decode_data_key(b)) else {
        // Malformed keys have no field order; raw bytes keep the relation
        // total and deterministic.
        return a.cmp(b);
    };

    ka.keyspace
        .cmp(&kb.keyspace)
        .then_with(|| ka.table.cmp(&kb.table))
        .then_with(|| ka.row.cmp(kb.row))
        .then_with(|| ka.column.cmp(kb.column))
}
