//! Typed field values.
//!
//! Index fields are declared with a [`FieldKind`], which is richer than the
//! wire types: bools are stored as the integers 0 and 1, and strings as byte
//! strings. [`decode_field_value`] maps the decoded wire value back to the
//! declared kind and reports [`EncodingError::CanNotDecodeFieldValue`] when
//! the bytes cannot be read as that kind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bytes::{encode_bytes, encode_string};
use super::value::{decode_value, encode_value};
use super::varint::encode_varint;
use crate::error::{EncodingError, EncodingResult};
use crate::types::{Direction, FieldKind, Value};

/// A decoded field, typed by its [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Missing value; valid for every kind.
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 text
    String(String),
    /// Opaque bytes
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// The kind this value belongs to, or `None` for null.
    #[must_use]
    pub const fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(FieldKind::Bool),
            Self::Int(_) => Some(FieldKind::Int),
            Self::Float(_) => Some(FieldKind::Float),
            Self::String(_) => Some(FieldKind::String),
            Self::Bytes(_) => Some(FieldKind::Bytes),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(field: FieldValue) -> Self {
        match field {
            FieldValue::Null => Self::Null,
            FieldValue::Bool(b) => Self::Int(i64::from(b)),
            FieldValue::Int(i) => Self::Int(i),
            FieldValue::Float(f) => Self::Float(f),
            FieldValue::String(s) => Self::Bytes(s.into_bytes()),
            FieldValue::Bytes(b) => Self::Bytes(b),
        }
    }
}

/// Appends a field value in the given direction.
pub fn encode_field_value(buf: &mut Vec<u8>, field: &FieldValue, dir: Direction) {
    match field {
        FieldValue::Null => encode_value(buf, &Value::Null, dir),
        FieldValue::Bool(b) => encode_varint(buf, i64::from(*b), dir),
        FieldValue::Int(i) => encode_value(buf, &Value::Int(*i), dir),
        FieldValue::Float(f) => encode_value(buf, &Value::Float(*f), dir),
        FieldValue::String(s) => encode_string(buf, s, dir),
        FieldValue::Bytes(b) => encode_bytes(buf, b, dir),
    }
}

/// Decodes one field of the given kind from the start of `b`.
///
/// Null is accepted for every kind, and an integer is widened where a float
/// is expected.
///
/// # Errors
///
/// - [`EncodingError::CanNotDecodeFieldValue`] if the decoded value cannot be
///   read as `kind`, including a bool other than 0 or 1 and non-UTF-8 text
/// - any error of [`decode_value`]
///
/// ```
/// use sortkey::encoding::{decode_field_value, encode_field_value, FieldValue};
/// use sortkey::{Direction, FieldKind};
///
/// let mut buf = Vec::new();
/// encode_field_value(&mut buf, &FieldValue::Bool(true), Direction::Ascending);
///
/// let (_, field) = decode_field_value(&buf, Direction::Ascending, FieldKind::Bool).unwrap();
/// assert_eq!(field, FieldValue::Bool(true));
///
/// assert!(decode_field_value(&buf, Direction::Ascending, FieldKind::String).is_err());
/// ```
pub fn decode_field_value(
    b: &[u8],
    dir: Direction,
    kind: FieldKind,
) -> EncodingResult<(&[u8], FieldValue)> {
    let (rest, value) = decode_value(b, dir)?;
    let consumed = &b[..b.len() - rest.len()];
    let field = match (kind, value) {
        (_, Value::Null) => FieldValue::Null,
        (FieldKind::Bool, Value::Int(0)) => FieldValue::Bool(false),
        (FieldKind::Bool, Value::Int(1)) => FieldValue::Bool(true),
        (FieldKind::Int, Value::Int(i)) => FieldValue::Int(i),
        (FieldKind::Float, Value::Float(f)) => FieldValue::Float(f),
        (FieldKind::Float, Value::Int(i)) => FieldValue::Float(i as f64),
        (FieldKind::String, Value::Bytes(bytes)) => match String::from_utf8(bytes) {
            Ok(s) => FieldValue::String(s),
            Err(_) => return Err(mismatch(consumed, kind, "text is not UTF-8")),
        },
        (FieldKind::Bytes, Value::Bytes(bytes)) => FieldValue::Bytes(bytes),
        (_, value) => return Err(mismatch(consumed, kind, value.type_name())),
    };
    Ok((rest, field))
}

fn mismatch(consumed: &[u8], kind: FieldKind, found: &str) -> EncodingError {
    debug!(%kind, found, "field value does not match its kind");
    EncodingError::can_not_decode_field_value(consumed, kind)
}
