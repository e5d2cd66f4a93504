//! Encoding and decoding of the composite data-key layout.

use crate::KeyError;
use coding::{decode_varint, encode_varint, varint_len};

/// Tag byte of metadata keys. Compared purely bytewise.
pub const METADATA_TAG: u8 = 0x00;

/// Tag byte of data keys (ASCII `'1'`). Compared hierarchically.
pub const DATA_TAG: u8 = b'1';

/// Smallest possible data key: the tag plus the four trailer bytes.
pub const MIN_DATA_KEY_LEN: usize = 5;

/// Key family, selected by the first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Engine bookkeeping keys (tag `0x00`).
    Metadata,
    /// Composite keyspace/table/row/column keys (tag `b'1'`).
    Data,
    /// Any other tag, including the empty key. Ordered bytewise.
    Other,
}

/// Classifies `key` by its first byte.
#[must_use]
pub fn classify(key: &[u8]) -> KeyKind {
    match key.first() {
        Some(&METADATA_TAG) => KeyKind::Metadata,
        Some(&DATA_TAG) => KeyKind::Data,
        _ => KeyKind::Other,
    }
}

/// The four 3-bit varint lengths packed into key bytes `[S-4]` and `[S-3]`.
///
/// Each field counts the bytes its varint occupies inside the key. Packing
/// four of them into two bytes caps every varint at 7 bytes, which bounds
/// keyspace/table ids and row/column lengths at 49 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailerLengths {
    /// Bytes occupied by the keyspace id varint.
    pub keyspace_len: u8,
    /// Bytes occupied by the table id varint.
    pub table_len: u8,
    /// Bytes occupied by the row-length varint.
    pub row_len_len: u8,
    /// Bytes occupied by the column-length varint.
    pub col_len_len: u8,
}

impl TrailerLengths {
    /// Builds a descriptor, rejecting any length outside `0..=7`.
    pub fn new(
        keyspace_len: u8,
        table_len: u8,
        row_len_len: u8,
        col_len_len: u8,
    ) -> Result<Self, KeyError> {
        for len in [keyspace_len, table_len, row_len_len, col_len_len] {
            if len > 7 {
                return Err(KeyError::LengthOutOfRange(len));
            }
        }
        Ok(Self {
            keyspace_len,
            table_len,
            row_len_len,
            col_len_len,
        })
    }

    /// Reads the descriptor from the two packed bytes of `key`.
    pub fn parse(key: &[u8]) -> Result<Self, KeyError> {
        if key.len() < MIN_DATA_KEY_LEN {
            return Err(KeyError::TooShort(key.len()));
        }
        let ids = key[key.len() - 4];
        let lens = key[key.len() - 3];
        Ok(Self {
            keyspace_len: (ids >> 3) & 0x7,
            table_len: ids & 0x7,
            row_len_len: (lens >> 3) & 0x7,
            col_len_len: lens & 0x7,
        })
    }

    /// Packs the descriptor back into its two trailer bytes.
    #[must_use]
    pub fn pack(&self) -> [u8; 2] {
        [
            (self.keyspace_len << 3) | self.table_len,
            (self.row_len_len << 3) | self.col_len_len,
        ]
    }
}

/// A data key decoded into its logical fields.
///
/// `row` and `column` borrow from the encoded key; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataKey<'a> {
    /// Tenant/namespace id.
    pub keyspace: i64,
    /// Table id within the keyspace.
    pub table: i64,
    /// Row key bytes.
    pub row: &'a [u8],
    /// Column name bytes.
    pub column: &'a [u8],
    /// The two opaque bytes at the end of the key. Not interpreted here;
    /// code that rewrites a key must carry them over verbatim.
    pub trailer: [u8; 2],
}

/// Decodes the composite layout of a data key.
///
/// Walks the layout back to front: packed varint lengths from the trailer,
/// then the row/column length varints at their trailer offsets, then the
/// field ranges accumulated forward from byte 1.
///
/// Returns an error if the key is shorter than [`MIN_DATA_KEY_LEN`],
/// carries a different tag, or declares ranges that do not fit inside it.
/// Keys produced by [`encode_data_key`] always decode.
pub fn decode_data_key(key: &[u8]) -> Result<DataKey<'_>, KeyError> {
    let lens = TrailerLengths::parse(key)?;
    if key[0] != DATA_TAG {
        return Err(KeyError::WrongTag(key[0]));
    }

    let size = key.len();
    let row_len_at = size
        .checked_sub(4 + lens.col_len_len as usize + lens.row_len_len as usize)
        .ok_or(KeyError::OutOfBounds)?;
    let col_len_at = size - 4 - lens.col_len_len as usize;

    let (keyspace, _) = decode_varint(key, 1)?;
    let (table, _) = decode_varint(key, 1 + lens.keyspace_len as usize)?;
    let (row_len, _) = decode_varint(key, row_len_at)?;
    let (col_len, _) = decode_varint(key, col_len_at)?;

    let row_len = usize::try_from(row_len).map_err(|_| KeyError::OutOfBounds)?;
    let col_len = usize::try_from(col_len).map_err(|_| KeyError::OutOfBounds)?;

    let row_start = 1 + lens.keyspace_len as usize + lens.table_len as usize;
    let col_start = row_start.checked_add(row_len).ok_or(KeyError::OutOfBounds)?;
    let col_end = col_start.checked_add(col_len).ok_or(KeyError::OutOfBounds)?;
    if col_end > row_len_at {
        return Err(KeyError::OutOfBounds);
    }

    Ok(DataKey {
        keyspace,
        table,
        row: &key[row_start..col_start],
        column: &key[col_start..col_end],
        trailer: [key[size - 2], key[size - 1]],
    })
}

/// Encodes a data key from its logical fields.
///
/// The two `trailer` bytes are written verbatim after the packed length
/// descriptors. Errors if an id or field length needs a varint longer than
/// the 7 bytes its 3-bit descriptor can declare; in particular ids must be
/// non-negative (a negative id widens to a ten-byte varint).
pub fn encode_data_key(
    keyspace: i64,
    table: i64,
    row: &[u8],
    column: &[u8],
    trailer: [u8; 2],
) -> Result<Vec<u8>, KeyError> {
    let lens = TrailerLengths::new(
        varint_len(keyspace as u64) as u8,
        varint_len(table as u64) as u8,
        varint_len(row.len() as u64) as u8,
        varint_len(column.len() as u64) as u8,
    )?;

    let size = 1
        + lens.keyspace_len as usize
        + lens.table_len as usize
        + row.len()
        + column.len()
        + lens.row_len_len as usize
        + lens.col_len_len as usize
        + 4;

    let mut key = Vec::with_capacity(size);
    key.push(DATA_TAG);
    encode_varint(&mut key, keyspace as u64);
    encode_varint(&mut key, table as u64);
    key.extend_from_slice(row);
    key.extend_from_slice(column);
    encode_varint(&mut key, row.len() as u64);
    encode_varint(&mut key, column.len() as u64);
    key.extend_from_slice(&lens.pack());
    key.extend_from_slice(&trailer);
    debug_assert_eq!(key.len(), size);

    Ok(key)
}
