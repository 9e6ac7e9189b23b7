//! Wire-format conformance tests.
//!
//! These tests pin the exact byte layout of every codec. Stored keys depend on
//! it, so any change here is a storage-format break.

use sortkey::encoding::{
    decode_bytes_ascending, encode_bytes_ascending, encode_bytes_descending, encode_float,
    encode_float_ascending, encode_null_ascending, encode_null_descending, encode_value_to_vec,
    encode_varint_ascending, encode_varint_descending, peek_type, tags, Type,
};
use sortkey::{Direction, EncodingError, Value};

fn varint_asc(v: i64) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_varint_ascending(&mut buf, v);
    buf
}

fn varint_desc(v: i64) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_varint_descending(&mut buf, v);
    buf
}

#[test]
fn test_tag_assignments() {
    assert_eq!(tags::ENCODED_NULL, 0x00);
    assert_eq!(tags::FLOAT_NAN, 0x01);
    assert_eq!(tags::FLOAT_NEG, 0x02);
    assert_eq!(tags::FLOAT_ZERO, 0x03);
    assert_eq!(tags::FLOAT_POS, 0x04);
    assert_eq!(tags::FLOAT_NAN_DESC, 0x05);
    assert_eq!(tags::BYTES_MARKER, 0x06);
    assert_eq!(tags::BYTES_DESC_MARKER, 0x07);
    assert_eq!(tags::INT_MIN, 0x80);
    assert_eq!(tags::INT_ZERO, 0x88);
    assert_eq!(tags::INT_MAX, 0xfd);
    assert_eq!(tags::ENCODED_NULL_DESC, 0xff);
    assert_eq!((tags::ESCAPE, tags::ESCAPED_TERM, tags::ESCAPED_00), (0x00, 0x01, 0xff));
}

#[test]
fn test_bytes_with_escapes() {
    let mut buf = Vec::new();
    encode_bytes_ascending(&mut buf, &[0, 1, b'a']);
    assert_eq!(buf, [0x06, 0x00, 0xff, 0x01, b'a', 0x00, 0x01]);

    let (rest, decoded) = decode_bytes_ascending(&buf).expect("valid encoding");
    assert_eq!(decoded, [0, 1, b'a']);
    assert!(rest.is_empty());
}

#[test]
fn test_varint_vectors() {
    assert_eq!(varint_asc(0), [0x88]);
    assert_eq!(varint_asc(1), [0x89]);
    assert_eq!(varint_asc(109), [0xf5]);
    assert_eq!(varint_asc(112), [0xf6, 0x70]);
    assert_eq!(varint_asc(-1), [0x87, 0xff]);
    assert!(varint_asc(-1) < varint_asc(0));

    assert_eq!(varint_desc(0), [0x87, 0xff]);
    assert_eq!(varint_desc(-1), [0x88]);
}

#[test]
fn test_varint_extremes() {
    assert_eq!(varint_asc(i64::MAX), [0xfd, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(varint_asc(i64::MIN), [0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn test_missing_terminator() {
    let err = decode_bytes_ascending(&[0x06, b'a']).expect_err("no terminator");
    assert!(matches!(err, EncodingError::TerminatorNotFound { .. }));
}

#[test]
fn test_missing_marker() {
    let err = decode_bytes_ascending(b"a").expect_err("no marker");
    assert!(matches!(err, EncodingError::MarkersNotFound { .. }));
}

#[test]
fn test_peek_type_of_encodings() {
    let mut buf = Vec::new();
    encode_null_ascending(&mut buf);
    assert_eq!(peek_type(&buf), Type::Null);

    buf.clear();
    encode_null_descending(&mut buf);
    assert_eq!(peek_type(&buf), Type::Null);

    buf.clear();
    encode_float_ascending(&mut buf, 0.0);
    assert_eq!(peek_type(&buf), Type::Float);

    buf.clear();
    encode_bytes_descending(&mut buf, &[]);
    assert_eq!(peek_type(&buf), Type::BytesDesc);
    assert_eq!(buf, [0x07, 0xff, 0xfe]);
}

#[test]
fn test_peek_type_for_every_value() {
    let values = [
        (Value::Null, Type::Null, Type::Null),
        (Value::Int(-500), Type::Int, Type::Int),
        (Value::Int(7), Type::Int, Type::Int),
        (Value::Float(f64::NAN), Type::Float, Type::Float),
        (Value::Float(-1.5), Type::Float, Type::Float),
        (Value::Bytes(b"x".to_vec()), Type::Bytes, Type::BytesDesc),
    ];
    for (value, asc, desc) in values {
        assert_eq!(peek_type(&encode_value_to_vec(&value, Direction::Ascending)), asc);
        assert_eq!(peek_type(&encode_value_to_vec(&value, Direction::Descending)), desc);
    }
}

#[test]
fn test_float_layout() {
    let mut buf = Vec::new();
    encode_float(&mut buf, 1.0, Direction::Ascending);
    assert_eq!(buf, [0x04, 0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    buf.clear();
    encode_float(&mut buf, 1.0, Direction::Descending);
    assert_eq!(buf, [0x02, 0x40, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_cross_type_order() {
    let ascending = [
        Value::Null,
        Value::Float(f64::NAN),
        Value::Float(-1.0),
        Value::Float(0.0),
        Value::Float(1.0),
        Value::Bytes(vec![0xff; 4]),
        Value::Int(i64::MIN),
        Value::Int(i64::MAX),
    ];
    let encoded: Vec<_> =
        ascending.iter().map(|v| encode_value_to_vec(v, Direction::Ascending)).collect();
    for pair in encoded.windows(2) {
        assert!(pair[0] < pair[1], "{:x?} should sort before {:x?}", pair[0], pair[1]);
    }
    assert!(encoded.last() < Some(&encode_value_to_vec(&Value::Null, Direction::Descending)));
}
