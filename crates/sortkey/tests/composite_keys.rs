//! Integration tests for composite index keys.
//!
//! These tests build secondary-index style keys, a collection id followed by
//! indexed fields with per-field directions and a document id, and verify
//! that:
//! - Sorting the raw keys sorts rows by their fields
//! - Prefix bounds select exactly the rows of one collection or field value
//! - Keys decode back to typed fields

use sortkey::encoding::{prefix_end, KeyBuilder, KeyReader};
use sortkey::{Direction, EncodingError, FieldKind, FieldValue, Type};

const ASC: Direction = Direction::Ascending;
const DESC: Direction = Direction::Descending;

/// A row of a `(city ASC, score DESC, active ASC)` index.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    collection: u64,
    city: Option<String>,
    score: f64,
    active: bool,
    doc_id: String,
}

fn row(collection: u64, city: Option<&str>, score: f64, active: bool, doc_id: &str) -> Row {
    Row { collection, city: city.map(str::to_owned), score, active, doc_id: doc_id.to_owned() }
}

fn index_key(r: &Row) -> Vec<u8> {
    let city = r.city.clone().map_or(FieldValue::Null, FieldValue::String);
    KeyBuilder::with_capacity(64)
        .push_uint(r.collection, ASC)
        .push_field(&city, ASC)
        .push_float(r.score, DESC)
        .push_field(&FieldValue::Bool(r.active), ASC)
        .push_str(&r.doc_id, ASC)
        .finish()
}

fn decode_row(key: &[u8]) -> Row {
    let mut reader = KeyReader::new(key);
    let collection = reader.read_uint(ASC).expect("collection id");
    let city = match reader.read_field(ASC, FieldKind::String).expect("city") {
        FieldValue::Null => None,
        FieldValue::String(s) => Some(s),
        other => panic!("unexpected city {other:?}"),
    };
    let score = reader.read_float(DESC).expect("score");
    let active = reader.read_field(ASC, FieldKind::Bool).expect("active") == FieldValue::Bool(true);
    let doc_id = reader.read_string(ASC).expect("doc id");
    reader.finish().expect("no trailing bytes");
    Row { collection, city, score, active, doc_id }
}

fn rows() -> Vec<Row> {
    vec![
        row(2, Some("berlin"), 10.0, true, "d1"),
        row(1, Some("paris"), 3.5, false, "d2"),
        row(1, None, 99.0, true, "d3"),
        row(1, Some("paris"), 7.25, true, "d4"),
        row(1, Some("oslo"), -1.0, true, "d5"),
        row(1, Some("paris"), 7.25, false, "d6"),
        row(300, Some("lima"), 0.0, false, "d7"),
    ]
}

#[test]
fn test_keys_sort_by_fields() {
    let mut keys: Vec<Vec<u8>> = rows().iter().map(index_key).collect();
    keys.sort();
    let ids: Vec<String> = keys.iter().map(|k| decode_row(k).doc_id).collect();
    assert_eq!(ids, ["d3", "d5", "d6", "d4", "d2", "d1", "d7"]);
}

#[test]
fn test_keys_decode_back() {
    for r in rows() {
        assert_eq!(decode_row(&index_key(&r)), r);
    }
}

#[test]
fn test_prefix_scan_selects_one_collection() {
    let start = KeyBuilder::new().push_uint(1, ASC).finish();
    let end = prefix_end(&start).expect("bounded prefix");

    let in_range: Vec<String> = rows()
        .iter()
        .filter(|r| {
            let key = index_key(r);
            key >= start && key < end
        })
        .map(|r| r.doc_id.clone())
        .collect();
    assert_eq!(in_range.len(), 5);
    assert!(in_range.iter().all(|id| ["d2", "d3", "d4", "d5", "d6"].contains(&id.as_str())));
}

#[test]
fn test_prefix_scan_selects_one_field_value() {
    let start = KeyBuilder::new().push_uint(1, ASC).push_str("paris", ASC).finish();
    let end = prefix_end(&start).expect("bounded prefix");

    let mut matching: Vec<Vec<u8>> =
        rows().iter().map(index_key).filter(|k| *k >= start && *k < end).collect();
    matching.sort();
    let ids: Vec<String> = matching.iter().map(|k| decode_row(k).doc_id).collect();
    assert_eq!(ids, ["d6", "d4", "d2"]);
}

#[test]
fn test_skip_to_document_id() {
    let key = index_key(&rows()[0]);
    let mut reader = KeyReader::new(&key);
    for _ in 0..4 {
        reader.skip().expect("field");
    }
    assert_eq!(reader.peek_type(), Type::Bytes);
    assert_eq!(reader.read_string(ASC).expect("doc id"), "d1");
    assert!(reader.is_empty());
}

#[test]
fn test_wrong_kind_is_reported() {
    let key = index_key(&rows()[1]);
    let mut reader = KeyReader::new(&key);
    reader.skip().expect("collection id");

    let err = reader.read_field(ASC, FieldKind::Int).expect_err("city is not an int");
    assert!(matches!(err, EncodingError::CanNotDecodeFieldValue { kind: FieldKind::Int, .. }));
    assert!(err.to_string().starts_with("can not decode int field value"));

    // The failed read left the reader on the city field.
    assert_eq!(
        reader.read_field(ASC, FieldKind::String).expect("city"),
        FieldValue::String("paris".to_owned())
    );
}

#[test]
fn test_truncated_key() {
    let key = index_key(&rows()[0]);
    let truncated = &key[..key.len() - 1];
    let mut reader = KeyReader::new(truncated);
    for _ in 0..4 {
        reader.skip().expect("field");
    }
    assert!(matches!(
        reader.read_string(ASC),
        Err(EncodingError::TerminatorNotFound { .. } | EncodingError::MalformedEscape { .. })
    ));
}
