//! Order-preserving encodings.
//!
//! Every encoder appends to a caller-supplied buffer, and the resulting byte
//! strings compare (lexicographically, as unsigned bytes) in the same order as
//! the values they encode. Descending variants reverse that order. Every
//! decoder takes the input and returns the unread remainder along with the
//! decoded value, so fields can be read one after another from a composite
//! key.
//!
//! # Codecs
//!
//! - Null: a single tag byte, see [`encode_null`]
//! - Integers: variable-length signed and unsigned, see [`encode_varint`] and [`encode_uvarint`]
//! - Fixed-width unsigned integers, see [`encode_uint64_ascending`]
//! - Floats: see [`encode_float`]
//! - Byte strings and text: escaped and terminated, see [`encode_bytes`]
//!
//! # Dispatch
//!
//! - [`peek_type`] and [`peek_length`] classify and measure a value from its tag
//! - [`encode_value`] and [`decode_value`] work on [`Value`](crate::types::Value)
//! - [`encode_field_value`] and [`decode_field_value`] add the declared
//!   [`FieldKind`](crate::types::FieldKind) of a field
//! - [`KeyBuilder`] and [`KeyReader`] assemble and take apart composite keys
//!
//! The tag byte values live in [`tags`].
//!
//! # Example
//!
//! ```
//! use sortkey::encoding::{decode_varint_descending, encode_varint_descending};
//!
//! let mut small = Vec::new();
//! let mut large = Vec::new();
//! encode_varint_descending(&mut small, -3);
//! encode_varint_descending(&mut large, 1_000);
//! assert!(large < small);
//!
//! let (rest, v) = decode_varint_descending(&large).unwrap();
//! assert_eq!(v, 1_000);
//! assert!(rest.is_empty());
//! ```

mod bytes;
mod field;
mod fixed;
mod float;
mod key;
mod null;
mod peek;
pub mod tags;
mod value;
mod varint;


pub use bytes::{
    decode_bytes, decode_bytes_ascending, decode_bytes_descending, decode_bytes_into,
    decode_string, decode_string_ascending, decode_string_descending, encode_bytes,
    encode_bytes_ascending, encode_bytes_descending, encode_string, encode_string_ascending,
    encode_string_descending,
};
pub use field::{decode_field_value, encode_field_value, FieldValue};
pub use fixed::{
    decode_uint32_ascending, decode_uint32_descending, decode_uint64_ascending,
    decode_uint64_descending, encode_uint32_ascending, encode_uint32_descending,
    encode_uint64_ascending, encode_uint64_descending,
};
pub use float::{
    decode_float, decode_float_ascending, decode_float_descending, encode_float,
    encode_float_ascending, encode_float_descending,
};
pub use key::{prefix_end, KeyBuilder, KeyReader};
pub use null::{
    decode_if_null, decode_if_null_ascending, decode_if_null_descending, encode_null,
    encode_null_ascending, encode_null_descending,
};
pub use peek::{peek_length, peek_type, Type};
pub use value::{decode_value, encode_value, encode_value_to_vec};
pub use varint::{
    decode_uvarint, decode_uvarint_ascending, decode_uvarint_descending, decode_varint,
    decode_varint_ascending, decode_varint_descending, encode_uvarint, encode_uvarint_ascending,
    encode_uvarint_descending, encode_varint, encode_varint_ascending, encode_varint_descending,
};
