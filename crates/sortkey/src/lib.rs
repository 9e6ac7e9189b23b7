//! Sortkey
//!
//! Order-preserving binary encodings for building sorted keys in ordered
//! key-value stores.
//!
//! # Overview
//!
//! Each supported value is encoded to a byte string such that comparing two
//! encodings lexicographically gives the same answer as comparing the values.
//! Every type can be encoded ascending or descending, and encodings are
//! self-delimiting, so fields with independent directions can be
//! concatenated into composite keys that sort field by field.
//!
//! - **Null**: a single tag, first ascending and last descending
//! - **Integers**: signed and unsigned varints, one to nine bytes
//! - **Floats**: IEEE-754 doubles, with NaN before every number
//! - **Byte strings**: escaped and terminated, prefixes sorting first
//!
//! The leading tag byte of every encoding identifies its type, so a decoder
//! can [peek](encoding::peek_type) before choosing a codec.
//!
//! # Example
//!
//! ```
//! use sortkey::encoding::{KeyBuilder, KeyReader};
//! use sortkey::{Direction, Value};
//!
//! // Newest events first within each stream.
//! let key = |stream: &str, ts: i64| {
//!     KeyBuilder::new()
//!         .push_str(stream, Direction::Ascending)
//!         .push_int(ts, Direction::Descending)
//!         .finish()
//! };
//!
//! let mut keys = vec![key("orders", 100), key("audit", 5), key("orders", 250)];
//! keys.sort();
//! assert_eq!(keys, vec![key("audit", 5), key("orders", 250), key("orders", 100)]);
//!
//! let mut reader = KeyReader::new(&keys[1]);
//! assert_eq!(reader.read_value(Direction::Ascending).unwrap(), Value::from("orders"));
//! assert_eq!(reader.read_int(Direction::Descending).unwrap(), 250);
//! ```
//!
//! # Modules
//!
//! - [`encoding`] - Codecs, type peeking, and composite keys
//! - [`types`] - [`Value`], [`Direction`], and [`FieldKind`]
//! - [`error`] - Error types ([`EncodingError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use encoding::{FieldValue, Type};
pub use error::{EncodingError, EncodingResult};
pub use types::{Direction, FieldKind, Value};
