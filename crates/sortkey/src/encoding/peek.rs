//! Type discrimination from the leading tag byte.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bytes;
use super::tags::{
    BYTES_DESC_MARKER, BYTES_MARKER, ENCODED_NULL, ENCODED_NULL_DESC, FLOAT_NAN, FLOAT_NAN_DESC,
    FLOAT_NEG, FLOAT_POS, INT_MAX, INT_MIN, INT_SMALL, INT_ZERO,
};
use crate::error::{EncodingError, EncodingResult};
use crate::types::Direction;

/// The codec a tag byte dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Empty input or an unassigned tag.
    Unknown,
    /// Null, in either direction.
    Null,
    /// Integer, in either direction.
    Int,
    /// Float, in either direction.
    Float,
    /// Ascending byte string.
    Bytes,
    /// Descending byte string.
    BytesDesc,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Null => "null",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bytes => "bytes",
            Self::BytesDesc => "bytes-desc",
        };
        f.write_str(name)
    }
}

/// Classifies the encoded value at the start of `b` by its first byte.
///
/// This never reads past `b[0]` and does not check that the rest of the
/// value is well formed.
///
/// ```
/// use sortkey::encoding::{encode_null_ascending, peek_type, Type};
///
/// let mut buf = Vec::new();
/// encode_null_ascending(&mut buf);
/// assert_eq!(peek_type(&buf), Type::Null);
/// assert_eq!(peek_type(&[]), Type::Unknown);
/// ```
#[inline]
#[must_use]
pub fn peek_type(b: &[u8]) -> Type {
    let Some(&m) = b.first() else {
        return Type::Unknown;
    };
    match m {
        ENCODED_NULL | ENCODED_NULL_DESC => Type::Null,
        BYTES_MARKER => Type::Bytes,
        BYTES_DESC_MARKER => Type::BytesDesc,
        FLOAT_NAN..=FLOAT_NAN_DESC => Type::Float,
        INT_MIN..=INT_MAX => Type::Int,
        _ => Type::Unknown,
    }
}

/// Returns the length in bytes of the encoded value at the start of `b`.
///
/// Used to step over fields of a composite key without decoding them.
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if `b` is empty or starts with an unassigned tag
/// - [`EncodingError::InsufficientBytes`] if a numeric payload is truncated
/// - any byte-string error if a string has no valid terminator
pub fn peek_length(b: &[u8]) -> EncodingResult<usize> {
    let len = match peek_type(b) {
        Type::Unknown => return Err(EncodingError::markers_not_found(b, &[])),
        Type::Null => 1,
        Type::Bytes => return bytes::encoded_len(b, Direction::Ascending),
        Type::BytesDesc => return bytes::encoded_len(b, Direction::Descending),
        Type::Float => match b[0] {
            FLOAT_NEG | FLOAT_POS => 9,
            _ => 1,
        },
        Type::Int => {
            let tag = b[0];
            if tag < INT_ZERO {
                1 + usize::from(INT_ZERO - tag)
            } else if tag <= INT_ZERO + INT_SMALL {
                1
            } else {
                1 + usize::from(tag - INT_ZERO - INT_SMALL)
            }
        }
    };
    if b.len() < len {
        return Err(EncodingError::InsufficientBytes { expected: len - 1, actual: b.len() - 1 });
    }
    Ok(len)
}
