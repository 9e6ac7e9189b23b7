//! Null encoding.
//!
//! A null is a single tag byte: `0x00` ascending, `0xff` descending. The
//! ascending tag sorts before every other tag and the descending tag after
//! every other tag, so nulls come first in ascending scans and last once a
//! column is reversed.

use super::tags::{ENCODED_NULL, ENCODED_NULL_DESC};
use crate::types::Direction;

/// Appends an ascending null.
#[inline]
pub fn encode_null_ascending(buf: &mut Vec<u8>) {
    buf.push(ENCODED_NULL);
}

/// Appends a descending null.
#[inline]
pub fn encode_null_descending(buf: &mut Vec<u8>) {
    buf.push(ENCODED_NULL_DESC);
}

/// Appends a null in the given direction.
#[inline]
pub fn encode_null(buf: &mut Vec<u8>, dir: Direction) {
    match dir {
        Direction::Ascending => encode_null_ascending(buf),
        Direction::Descending => encode_null_descending(buf),
    }
}

/// Consumes an ascending null if `b` starts with one.
///
/// Returns the remaining input and whether a null was found. When no null is
/// present `b` is returned untouched; this probe never fails.
#[inline]
#[must_use]
pub fn decode_if_null_ascending(b: &[u8]) -> (&[u8], bool) {
    decode_if_tag(b, ENCODED_NULL)
}

/// Consumes a descending null if `b` starts with one.
#[inline]
#[must_use]
pub fn decode_if_null_descending(b: &[u8]) -> (&[u8], bool) {
    decode_if_tag(b, ENCODED_NULL_DESC)
}

/// Consumes a null of the given direction if `b` starts with one.
///
/// ```
/// use sortkey::encoding::{decode_if_null, encode_null};
/// use sortkey::Direction;
///
/// let mut buf = Vec::new();
/// encode_null(&mut buf, Direction::Descending);
/// buf.push(0x42);
///
/// let (rest, is_null) = decode_if_null(&buf, Direction::Descending);
/// assert!(is_null);
/// assert_eq!(rest, &[0x42]);
///
/// let (rest, is_null) = decode_if_null(&buf, Direction::Ascending);
/// assert!(!is_null);
/// assert_eq!(rest.len(), 2);
/// ```
#[inline]
#[must_use]
pub fn decode_if_null(b: &[u8], dir: Direction) -> (&[u8], bool) {
    match dir {
        Direction::Ascending => decode_if_null_ascending(b),
        Direction::Descending => decode_if_null_descending(b),
    }
}

#[inline]
fn decode_if_tag(b: &[u8], tag: u8) -> (&[u8], bool) {
    match b.split_first() {
        Some((&first, rest)) if first == tag => (rest, true),
        _ => (b, false),
    }
}
