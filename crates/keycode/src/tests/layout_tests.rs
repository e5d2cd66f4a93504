use crate::*;
use coding::CodingError;

// -------------------- Classification --------------------

#[test]
fn classify_by_first_byte() {
    assert_eq!(classify(&[METADATA_TAG, 1, 2]), KeyKind::Metadata);
    assert_eq!(classify(&[DATA_TAG]), KeyKind::Data);
    assert_eq!(classify(&[0x42, 0x00]), KeyKind::Other);
    assert_eq!(classify(b"2abc"), KeyKind::Other);
}

#[test]
fn classify_empty_key_is_other() {
    assert_eq!(classify(&[]), KeyKind::Other);
}

// -------------------- Trailer lengths --------------------

#[test]
fn trailer_lengths_pack_parse_roundtrip() {
    let lens = TrailerLengths::new(1, 2, 3, 7).unwrap();
    let packed = lens.pack();
    assert_eq!(packed, [(1 << 3) | 2, (3 << 3) | 7]);

    // Rebuild a minimal key carrying the packed bytes and parse them back.
    let key = [DATA_TAG, packed[0], packed[1], 0xaa, 0xbb];
    assert_eq!(TrailerLengths::parse(&key).unwrap(), lens);
}

#[test]
fn trailer_lengths_reject_out_of_range() {
    assert_eq!(
        TrailerLengths::new(8, 0, 0, 0),
        Err(KeyError::LengthOutOfRange(8))
    );
    assert_eq!(
        TrailerLengths::new(0, 0, 0, 255),
        Err(KeyError::LengthOutOfRange(255))
    );
}

#[test]
fn trailer_lengths_parse_requires_minimum_size() {
    assert_eq!(
        TrailerLengths::parse(&[DATA_TAG, 0, 0, 0]),
        Err(KeyError::TooShort(4))
    );
}

// -------------------- Encode / decode round-trips --------------------

#[test]
fn data_key_roundtrip() {
    let key = encode_data_key(3, 7, b"row1", b"c1", [0xde, 0xad]).unwrap();
    let decoded = decode_data_key(&key).unwrap();

    assert_eq!(decoded.keyspace, 3);
    assert_eq!(decoded.table, 7);
    assert_eq!(decoded.row, b"row1");
    assert_eq!(decoded.column, b"c1");
    assert_eq!(decoded.trailer, [0xde, 0xad]);
}

#[test]
fn data_key_exact_byte_layout() {
    // keyspace 3, table 7, row "row1", column "c1": every varint is one
    // byte, so the packed descriptors are both (1 << 3) | 1.
    let key = encode_data_key(3, 7, b"row1", b"c1", [0xfe, 0xff]).unwrap();
    assert_eq!(
        key,
        [
            DATA_TAG, // tag
            3,        // keyspace varint
            7,        // table varint
            b'r', b'o', b'w', b'1', // row key
            b'c', b'1', // column
            4,    // KLEN varint
            2,    // CLEN varint
            0x09, // (KSL << 3) | TL
            0x09, // (KLL << 3) | CLL
            0xfe, 0xff, // opaque trailer
        ]
    );
}

#[test]
fn data_key_roundtrip_multibyte_varints() {
    // Two-byte keyspace/table varints and a row long enough for a two-byte
    // length varint.
    let row = vec![0xabu8; 300];
    let key = encode_data_key(1_000, 50_000, &row, b"col", [0, 0]).unwrap();

    let lens = TrailerLengths::parse(&key).unwrap();
    assert_eq!(lens.keyspace_len, 2);
    assert_eq!(lens.table_len, 3);
    assert_eq!(lens.row_len_len, 2);
    assert_eq!(lens.col_len_len, 1);

    let decoded = decode_data_key(&key).unwrap();
    assert_eq!(decoded.keyspace, 1_000);
    assert_eq!(decoded.table, 50_000);
    assert_eq!(decoded.row, &row[..]);
    assert_eq!(decoded.column, b"col");
}

#[test]
fn data_key_roundtrip_empty_fields() {
    let key = encode_data_key(0, 0, b"", b"", [0, 0]).unwrap();
    assert_eq!(key.len(), MIN_DATA_KEY_LEN + 4); // tag + 2 id + 2 len varints + 4 trailer

    let decoded = decode_data_key(&key).unwrap();
    assert_eq!(decoded.keyspace, 0);
    assert_eq!(decoded.table, 0);
    assert!(decoded.row.is_empty());
    assert!(decoded.column.is_empty());
}

#[test]
fn data_key_roundtrip_binary_fields() {
    let row = [0x00u8, 0xff, 0x31, 0x80];
    let col = [0x80u8, 0x00];
    let key = encode_data_key(9, 1, &row, &col, [0x31, 0x00]).unwrap();

    let decoded = decode_data_key(&key).unwrap();
    assert_eq!(decoded.row, &row[..]);
    assert_eq!(decoded.column, &col[..]);
    assert_eq!(decoded.trailer, [0x31, 0x00]);
}

#[test]
fn encode_rejects_negative_ids() {
    // A negative id widens to a ten-byte varint, past the 3-bit descriptor.
    assert_eq!(
        encode_data_key(-1, 0, b"r", b"c", [0, 0]),
        Err(KeyError::LengthOutOfRange(10))
    );
}

#[test]
fn encode_accepts_largest_declarable_id() {
    // 2^49 - 1 is the largest id whose varint fits in 7 bytes.
    let max_id = (1i64 << 49) - 1;
    let key = encode_data_key(max_id, max_id, b"r", b"c", [0, 0]).unwrap();
    let decoded = decode_data_key(&key).unwrap();
    assert_eq!(decoded.keyspace, max_id);
    assert_eq!(decoded.table, max_id);

    assert_eq!(
        encode_data_key(1i64 << 49, 0, b"r", b"c", [0, 0]),
        Err(KeyError::LengthOutOfRange(8))
    );
}

// -------------------- Decode error reporting --------------------

#[test]
fn decode_rejects_short_keys() {
    assert_eq!(decode_data_key(&[]), Err(KeyError::TooShort(0)));
    assert_eq!(decode_data_key(&[DATA_TAG]), Err(KeyError::TooShort(1)));
    assert_eq!(
        decode_data_key(&[DATA_TAG, 0, 0, 0]),
        Err(KeyError::TooShort(4))
    );
}

#[test]
fn decode_rejects_wrong_tag() {
    let mut key = encode_data_key(1, 1, b"r", b"c", [0, 0]).unwrap();
    key[0] = METADATA_TAG;
    assert_eq!(decode_data_key(&key), Err(KeyError::WrongTag(METADATA_TAG)));
}

#[test]
fn decode_rejects_ranges_past_the_buffer() {
    // Well-formed key, then corrupt the row-length varint to declare a row
    // far larger than the key.
    let key = encode_data_key(1, 1, b"row1", b"c1", [0, 0]).unwrap();
    let mut corrupt = key.clone();
    let row_len_at = corrupt.len() - 4 - 1 - 1; // CLL = KLL = 1
    corrupt[row_len_at] = 0x7f; // KLEN = 127
    assert_eq!(decode_data_key(&corrupt), Err(KeyError::OutOfBounds));
}

#[test]
fn decode_rejects_descriptors_larger_than_key() {
    // Minimal size with descriptors claiming 7-byte varints everywhere.
    let key = [DATA_TAG, 0x3f, 0x3f, 0, 0];
    assert_eq!(decode_data_key(&key), Err(KeyError::OutOfBounds));
}

#[test]
fn decode_reports_truncated_varint_inside_key() {
    // Every byte after the tag keeps its continuation bit set, so the
    // keyspace varint never terminates before the end of the key.
    let key = [DATA_TAG, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80];
    assert_eq!(
        decode_data_key(&key),
        Err(KeyError::Coding(CodingError::TruncatedVarint))
    );
}
