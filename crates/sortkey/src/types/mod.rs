//! Core types for the order-preserving codec.
//!
//! - [`Value`] - the scalar values the codec encodes
//! - [`Direction`] - ascending or descending byte order
//! - [`FieldKind`] - the typed view a caller expects when decoding a field

mod value;

pub use value::{Direction, FieldKind, Value};
