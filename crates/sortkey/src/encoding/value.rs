//! Value-level encoding.
//!
//! Dispatches a [`Value`] to the codec for its variant, and decodes by
//! peeking at the tag. Because every codec's tag range is disjoint, values of
//! different types may share a column: they order by tag first (see
//! [`tags`](super::tags)) and by value within a type.
//!
//! # Example
//!
//! ```
//! use sortkey::encoding::{decode_value, encode_value};
//! use sortkey::{Direction, Value};
//!
//! let values = vec![Value::Int(-10), Value::Int(0), Value::Int(10)];
//!
//! let mut encoded: Vec<Vec<u8>> = values
//!     .iter()
//!     .map(|v| {
//!         let mut buf = Vec::new();
//!         encode_value(&mut buf, v, Direction::Descending);
//!         buf
//!     })
//!     .collect();
//! encoded.sort();
//!
//! let decoded: Vec<Value> =
//!     encoded.iter().map(|e| decode_value(e, Direction::Descending).unwrap().1).collect();
//! assert_eq!(decoded, vec![Value::Int(10), Value::Int(0), Value::Int(-10)]);
//! ```

use tracing::debug;

use super::bytes::{decode_bytes, encode_bytes};
use super::float::{decode_float, encode_float};
use super::null::encode_null;
use super::peek::{peek_type, Type};
use super::varint::{decode_varint, encode_varint};
use crate::error::{EncodingError, EncodingResult};
use crate::types::{Direction, Value};

/// Appends `value` in the given direction.
pub fn encode_value(buf: &mut Vec<u8>, value: &Value, dir: Direction) {
    match value {
        Value::Null => encode_null(buf, dir),
        Value::Int(i) => encode_varint(buf, *i, dir),
        Value::Float(f) => encode_float(buf, *f, dir),
        Value::Bytes(b) => encode_bytes(buf, b, dir),
    }
}

/// Encodes `value` into a fresh buffer sized from [`Value::encoded_len_hint`].
#[must_use]
pub fn encode_value_to_vec(value: &Value, dir: Direction) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_len_hint());
    encode_value(&mut buf, value, dir);
    buf
}

/// Decodes one value of the given direction from the start of `b`.
///
/// A null of either direction is accepted; typed values must match `dir`.
/// Integers and floats carry no direction in their tag, so decoding one with
/// the wrong direction yields a wrong value rather than an error.
///
/// # Errors
///
/// - [`EncodingError::CanNotDecode`] if the tag is unknown, or is a byte
///   string marker of the opposite direction
/// - any error of the underlying codec
pub fn decode_value(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], Value)> {
    match (peek_type(b), dir) {
        (Type::Null, _) => Ok((&b[1..], Value::Null)),
        (Type::Int, _) => {
            let (rest, i) = decode_varint(b, dir)?;
            Ok((rest, Value::Int(i)))
        }
        (Type::Float, _) => {
            let (rest, f) = decode_float(b, dir)?;
            Ok((rest, Value::Float(f)))
        }
        (Type::Bytes, Direction::Ascending) | (Type::BytesDesc, Direction::Descending) => {
            let (rest, bytes) = decode_bytes(b, dir)?;
            Ok((rest, Value::Bytes(bytes)))
        }
        (ty, _) => {
            debug!(tag = ?b.first(), %ty, %dir, "cannot decode value");
            Err(EncodingError::can_not_decode(b))
        }
    }
}
