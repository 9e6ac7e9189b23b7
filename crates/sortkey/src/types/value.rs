//! Scalar values, sort directions, and field kinds.
//!
//! # Example
//!
//! ```
//! use sortkey::Value;
//!
//! let id: Value = 42i64.into();
//! let score: Value = 0.5f64.into();
//! let name: Value = "alice".into();
//!
//! assert_eq!(id.as_int(), Some(42));
//! assert_eq!(score.as_float(), Some(0.5));
//! assert_eq!(name.as_bytes(), Some(&b"alice"[..]));
//! assert!(Value::Null.is_null());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value that can be encoded into an order-preserving key.
///
/// | Variant | Rust Type | Ordering |
/// |---------|-----------|----------|
/// | `Null` | - | before (ascending) or after (descending) every other value |
/// | `Int` | `i64` | numeric |
/// | `Float` | `f64` | numeric, NaN first, `-0.0 == +0.0` |
/// | `Bytes` | `Vec<u8>` | lexicographic, prefixes first |
///
/// Strings are carried as [`Value::Bytes`]; see [`FieldKind::String`] for the
/// typed view that validates UTF-8 on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/missing value
    Null,
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns `true` if this is [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the integer if this is [`Value::Int`].
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is [`Value::Float`].
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the byte string if this is [`Value::Bytes`].
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Estimated size of this value's encoding, for pre-allocating buffers.
    ///
    /// Exact for nulls and floats, an upper bound for integers, and a lower
    /// bound for byte strings (embedded zero bytes are escaped to two bytes).
    #[must_use]
    pub fn encoded_len_hint(&self) -> usize {
        match self {
            Self::Null => 1,
            Self::Int(_) => 9,
            Self::Float(f) if f.is_nan() || *f == 0.0 => 1,
            Self::Float(_) => 9,
            // marker + data + terminator
            Self::Bytes(b) => 1 + b.len() + 2,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Int(i64::from(b))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Bytes(s.into_bytes())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// The byte order an encoding is optimized for.
///
/// Ascending encodings compare like the original values; descending
/// encodings compare in reverse. Mixing directions across fields of one
/// composite key is allowed: each field carries its own tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Smaller values produce smaller byte strings.
    #[default]
    Ascending,
    /// Smaller values produce larger byte strings.
    Descending,
}

impl Direction {
    /// Returns `true` for [`Direction::Descending`].
    #[inline]
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl From<bool> for Direction {
    /// Maps a `descending` flag to a direction.
    fn from(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ASC"),
            Self::Descending => write!(f, "DESC"),
        }
    }
}

/// The typed interpretation a caller expects for an encoded field.
///
/// Several kinds share one wire type: bools are stored as integers and
/// strings as byte strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// `false`/`true`, stored as the integers 0 and 1.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float; integers are widened on decode.
    Float,
    /// UTF-8 text, stored as a byte string.
    String,
    /// Opaque bytes.
    Bytes,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bytes => "bytes",
        };
        f.write_str(name)
    }
}
