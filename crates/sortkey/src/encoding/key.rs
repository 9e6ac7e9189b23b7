//! Composite keys.
//!
//! A composite key is the concatenation of encoded fields, each with its own
//! direction. Because every encoding is self-delimiting and order-preserving,
//! comparing two keys bytewise compares their fields left to right.
//!
//! # Example
//!
//! ```
//! use sortkey::encoding::{KeyBuilder, KeyReader};
//! use sortkey::{Direction, Value};
//!
//! let key = KeyBuilder::new()
//!     .push_str("users", Direction::Ascending)
//!     .push_int(42, Direction::Descending)
//!     .finish();
//!
//! let mut reader = KeyReader::new(&key);
//! assert_eq!(reader.read_string(Direction::Ascending).unwrap(), "users");
//! assert_eq!(reader.read_value(Direction::Descending).unwrap(), Value::Int(42));
//! reader.finish().unwrap();
//! ```

use tracing::trace;

use super::bytes::{decode_bytes, decode_string, encode_bytes, encode_string};
use super::field::{decode_field_value, encode_field_value, FieldValue};
use super::float::{decode_float, encode_float};
use super::null::{decode_if_null, encode_null};
use super::peek::{peek_length, peek_type, Type};
use super::value::{decode_value, encode_value};
use super::varint::{decode_uvarint, decode_varint, encode_uvarint, encode_varint};
use crate::error::{EncodingError, EncodingResult};
use crate::types::{Direction, FieldKind, Value};

/// Builds a composite key field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBuilder {
    buf: Vec<u8>,
}

impl KeyBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty builder that can hold `capacity` bytes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    /// Appends a null.
    pub fn push_null(&mut self, dir: Direction) -> &mut Self {
        encode_null(&mut self.buf, dir);
        self
    }

    /// Appends a signed integer.
    pub fn push_int(&mut self, v: i64, dir: Direction) -> &mut Self {
        encode_varint(&mut self.buf, v, dir);
        self
    }

    /// Appends an unsigned integer.
    pub fn push_uint(&mut self, v: u64, dir: Direction) -> &mut Self {
        encode_uvarint(&mut self.buf, v, dir);
        self
    }

    /// Appends a float.
    pub fn push_float(&mut self, f: f64, dir: Direction) -> &mut Self {
        encode_float(&mut self.buf, f, dir);
        self
    }

    /// Appends a byte string.
    pub fn push_bytes(&mut self, data: &[u8], dir: Direction) -> &mut Self {
        encode_bytes(&mut self.buf, data, dir);
        self
    }

    /// Appends a string as a byte string.
    pub fn push_str(&mut self, s: &str, dir: Direction) -> &mut Self {
        encode_string(&mut self.buf, s, dir);
        self
    }

    /// Appends any [`Value`].
    pub fn push_value(&mut self, value: &Value, dir: Direction) -> &mut Self {
        encode_value(&mut self.buf, value, dir);
        self
    }

    /// Appends a typed field.
    pub fn push_field(&mut self, field: &FieldValue, dir: Direction) -> &mut Self {
        encode_field_value(&mut self.buf, field, dir);
        self
    }

    /// The key built so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length of the key built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no field has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drops all fields, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the key, leaving the builder empty.
    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Returns the smallest key greater than every key starting with `prefix`.
///
/// Trailing `0xff` bytes are dropped before the last byte is incremented.
/// Returns `None` if the prefix is empty or all `0xff`, in which case no such
/// bound exists and a range scan should run to the end of the keyspace.
///
/// ```
/// use sortkey::encoding::prefix_end;
///
/// assert_eq!(prefix_end(&[0x06, 0x61]), Some(vec![0x06, 0x62]));
/// assert_eq!(prefix_end(&[0x06, 0xff]), Some(vec![0x07]));
/// assert_eq!(prefix_end(&[0xff]), None);
/// ```
#[must_use]
pub fn prefix_end(prefix: &[u8]) -> Option<Vec<u8>> {
    let last = prefix.iter().rposition(|&b| b != 0xff)?;
    let mut end = prefix[..=last].to_vec();
    end[last] += 1;
    Some(end)
}

/// Reads the fields of a composite key in order.
///
/// Each read consumes one field on success and leaves the reader where it was
/// on failure.
#[derive(Debug, Clone, Copy)]
pub struct KeyReader<'a> {
    buf: &'a [u8],
}

impl<'a> KeyReader<'a> {
    /// Creates a reader positioned at the first field of `key`.
    #[must_use]
    pub const fn new(key: &'a [u8]) -> Self {
        Self { buf: key }
    }

    /// The bytes not yet read.
    #[must_use]
    pub const fn remaining(&self) -> &'a [u8] {
        self.buf
    }

    /// Returns `true` once every field has been read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Type of the next field, without consuming it.
    #[must_use]
    pub fn peek_type(&self) -> Type {
        peek_type(self.buf)
    }

    /// Steps over the next field without decoding it, returning its bytes.
    ///
    /// # Errors
    ///
    /// Any error of [`peek_length`].
    pub fn skip(&mut self) -> EncodingResult<&'a [u8]> {
        let len = peek_length(self.buf)?;
        let (field, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(field)
    }

    /// Consumes the next field if it is a null of `dir`.
    pub fn read_null(&mut self, dir: Direction) -> bool {
        let (rest, is_null) = decode_if_null(self.buf, dir);
        self.buf = rest;
        is_null
    }

    /// Reads a signed integer.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_varint`](super::decode_varint).
    pub fn read_int(&mut self, dir: Direction) -> EncodingResult<i64> {
        let (rest, v) = decode_varint(self.buf, dir)?;
        self.buf = rest;
        Ok(v)
    }

    /// Reads an unsigned integer.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_uvarint`](super::decode_uvarint).
    pub fn read_uint(&mut self, dir: Direction) -> EncodingResult<u64> {
        let (rest, v) = decode_uvarint(self.buf, dir)?;
        self.buf = rest;
        Ok(v)
    }

    /// Reads a float.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_float`](super::decode_float).
    pub fn read_float(&mut self, dir: Direction) -> EncodingResult<f64> {
        let (rest, f) = decode_float(self.buf, dir)?;
        self.buf = rest;
        Ok(f)
    }

    /// Reads a byte string.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_bytes`](super::decode_bytes).
    pub fn read_bytes(&mut self, dir: Direction) -> EncodingResult<Vec<u8>> {
        let (rest, bytes) = decode_bytes(self.buf, dir)?;
        self.buf = rest;
        Ok(bytes)
    }

    /// Reads a byte string as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_string`](super::decode_string).
    pub fn read_string(&mut self, dir: Direction) -> EncodingResult<String> {
        let (rest, s) = decode_string(self.buf, dir)?;
        self.buf = rest;
        Ok(s)
    }

    /// Reads a field of any type.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_value`].
    pub fn read_value(&mut self, dir: Direction) -> EncodingResult<Value> {
        let (rest, value) = decode_value(self.buf, dir)?;
        self.buf = rest;
        Ok(value)
    }

    /// Reads a field declared as `kind`.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_field_value`].
    pub fn read_field(&mut self, dir: Direction, kind: FieldKind) -> EncodingResult<FieldValue> {
        let (rest, field) = decode_field_value(self.buf, dir, kind)?;
        self.buf = rest;
        Ok(field)
    }

    /// Checks that the whole key has been read.
    ///
    /// # Errors
    ///
    /// [`EncodingError::CanNotDecode`] carrying the unread bytes.
    pub fn finish(self) -> EncodingResult<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        trace!(remaining = self.buf.len(), "trailing bytes after last key field");
        Err(EncodingError::can_not_decode(self.buf))
    }
}
