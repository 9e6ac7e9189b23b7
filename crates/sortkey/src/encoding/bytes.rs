//! Byte string encoding.
//!
//! Byte strings are self-delimiting: a marker byte, the payload with every
//! `0x00` escaped, and a two-byte terminator.
//!
//! ```text
//! ascending:   0x06  payload(0x00 -> 0x00 0xff)  0x00 0x01
//! descending:  0x07  complement of everything after the ascending marker
//! ```
//!
//! The only sequences starting with the escape byte are the escaped zero and
//! the terminator. The terminator's second byte is smaller than both the
//! escaped zero and any payload byte that could follow, so a string that is a
//! prefix of another sorts first.
//!
//! # Example
//!
//! ```
//! use sortkey::encoding::{decode_bytes_ascending, encode_bytes_ascending};
//!
//! let mut buf = Vec::new();
//! encode_bytes_ascending(&mut buf, &[0, 1, b'a']);
//! assert_eq!(buf, [0x06, 0x00, 0xff, 0x01, b'a', 0x00, 0x01]);
//!
//! let (rest, decoded) = decode_bytes_ascending(&buf).unwrap();
//! assert_eq!(decoded, [0, 1, b'a']);
//! assert!(rest.is_empty());
//! ```

use super::tags::{BYTES_DESC_MARKER, BYTES_MARKER, ESCAPE, ESCAPED_00, ESCAPED_TERM};
use crate::error::{EncodingError, EncodingResult};
use crate::types::Direction;

/// The escape alphabet for one direction.
#[derive(Debug, Clone, Copy)]
struct Escapes {
    marker: u8,
    escape: u8,
    escaped_term: u8,
    escaped_00: u8,
    /// The raw byte an escaped zero stands for before any complement.
    literal_00: u8,
    inverted: bool,
}

const ASCENDING: Escapes = Escapes {
    marker: BYTES_MARKER,
    escape: ESCAPE,
    escaped_term: ESCAPED_TERM,
    escaped_00: ESCAPED_00,
    literal_00: 0x00,
    inverted: false,
};

const DESCENDING: Escapes = Escapes {
    marker: BYTES_DESC_MARKER,
    escape: !ESCAPE,
    escaped_term: !ESCAPED_TERM,
    escaped_00: !ESCAPED_00,
    literal_00: 0xff,
    inverted: true,
};

const fn escapes(dir: Direction) -> Escapes {
    match dir {
        Direction::Ascending => ASCENDING,
        Direction::Descending => DESCENDING,
    }
}

/// Appends `data` as an ascending byte string.
pub fn encode_bytes_ascending(buf: &mut Vec<u8>, data: &[u8]) {
    buf.reserve(data.len() + 3);
    buf.push(BYTES_MARKER);
    encode_bytes_payload(buf, data);
}

/// Appends `data` as a descending byte string.
///
/// The payload is produced by the ascending algorithm and then complemented
/// in place; only the marker differs.
pub fn encode_bytes_descending(buf: &mut Vec<u8>, data: &[u8]) {
    buf.reserve(data.len() + 3);
    buf.push(BYTES_DESC_MARKER);
    let start = buf.len();
    encode_bytes_payload(buf, data);
    invert(&mut buf[start..]);
}

/// Appends `data` as a byte string in the given direction.
#[inline]
pub fn encode_bytes(buf: &mut Vec<u8>, data: &[u8], dir: Direction) {
    match dir {
        Direction::Ascending => encode_bytes_ascending(buf, data),
        Direction::Descending => encode_bytes_descending(buf, data),
    }
}

/// Appends `s` as an ascending byte string.
#[inline]
pub fn encode_string_ascending(buf: &mut Vec<u8>, s: &str) {
    encode_bytes_ascending(buf, s.as_bytes());
}

/// Appends `s` as a descending byte string.
#[inline]
pub fn encode_string_descending(buf: &mut Vec<u8>, s: &str) {
    encode_bytes_descending(buf, s.as_bytes());
}

/// Appends `s` as a byte string in the given direction.
#[inline]
pub fn encode_string(buf: &mut Vec<u8>, s: &str, dir: Direction) {
    encode_bytes(buf, s.as_bytes(), dir);
}

/// Escapes zero bytes and appends the terminator.
fn encode_bytes_payload(buf: &mut Vec<u8>, mut data: &[u8]) {
    while let Some(i) = data.iter().position(|&c| c == ESCAPE) {
        buf.extend_from_slice(&data[..i]);
        buf.push(ESCAPE);
        buf.push(ESCAPED_00);
        data = &data[i + 1..];
    }
    buf.extend_from_slice(data);
    buf.push(ESCAPE);
    buf.push(ESCAPED_TERM);
}

/// Decodes an ascending byte string, returning the remainder and the payload.
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if `b` does not start with the ascending marker
/// - [`EncodingError::TerminatorNotFound`] if the input ends before the terminator
/// - [`EncodingError::MalformedEscape`] if the escape byte is the last byte
/// - [`EncodingError::UnknownEscapeSequence`] if the escape byte is followed by
///   anything other than the terminator or escaped zero
pub fn decode_bytes_ascending(b: &[u8]) -> EncodingResult<(&[u8], Vec<u8>)> {
    decode_bytes(b, Direction::Ascending)
}

/// Decodes a descending byte string.
///
/// # Errors
///
/// Same as [`decode_bytes_ascending`], with the descending marker.
pub fn decode_bytes_descending(b: &[u8]) -> EncodingResult<(&[u8], Vec<u8>)> {
    decode_bytes(b, Direction::Descending)
}

/// Decodes a byte string in the given direction.
///
/// # Errors
///
/// See [`decode_bytes_ascending`].
pub fn decode_bytes(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], Vec<u8>)> {
    let mut out = Vec::new();
    let rest = decode_bytes_into(b, &mut out, dir)?;
    Ok((rest, out))
}

/// Decodes a byte string, appending the payload to `out`.
///
/// Lets a caller reuse one allocation across many decodes. On error `out` is
/// left as it was.
///
/// # Errors
///
/// See [`decode_bytes_ascending`].
pub fn decode_bytes_into<'a>(
    b: &'a [u8],
    out: &mut Vec<u8>,
    dir: Direction,
) -> EncodingResult<&'a [u8]> {
    let start = out.len();
    let result = decode_bytes_internal(b, out, escapes(dir));
    match result {
        Ok(rest) => Ok(rest),
        Err(err) => {
            out.truncate(start);
            Err(err)
        }
    }
}

/// Decodes a byte string and checks it is UTF-8.
///
/// # Errors
///
/// Any error of [`decode_bytes`], or [`EncodingError::InvalidUtf8`].
pub fn decode_string(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], String)> {
    let (rest, bytes) = decode_bytes(b, dir)?;
    let s = String::from_utf8(bytes)
        .map_err(|e| EncodingError::InvalidUtf8 { source: e.utf8_error() })?;
    Ok((rest, s))
}

/// Decodes an ascending byte string as UTF-8 text.
///
/// # Errors
///
/// See [`decode_string`].
#[inline]
pub fn decode_string_ascending(b: &[u8]) -> EncodingResult<(&[u8], String)> {
    decode_string(b, Direction::Ascending)
}

/// Decodes a descending byte string as UTF-8 text.
///
/// # Errors
///
/// See [`decode_string`].
#[inline]
pub fn decode_string_descending(b: &[u8]) -> EncodingResult<(&[u8], String)> {
    decode_string(b, Direction::Descending)
}

fn decode_bytes_internal<'a>(
    buf: &'a [u8],
    out: &mut Vec<u8>,
    e: Escapes,
) -> EncodingResult<&'a [u8]> {
    let start = out.len();
    let mut b = match buf.split_first() {
        Some((&marker, rest)) if marker == e.marker => rest,
        _ => return Err(EncodingError::markers_not_found(buf, &[e.marker])),
    };
    loop {
        let i = scan_escape(buf, b, e)?;
        out.extend_from_slice(&b[..i]);
        let rest = &b[i + 2..];
        if b[i + 1] == e.escaped_term {
            if e.inverted {
                invert(&mut out[start..]);
            }
            return Ok(rest);
        }
        out.push(e.literal_00);
        b = rest;
    }
}

/// Length of the byte string at the start of `buf`, marker and terminator included.
pub(crate) fn encoded_len(buf: &[u8], dir: Direction) -> EncodingResult<usize> {
    let e = escapes(dir);
    let mut b = match buf.split_first() {
        Some((&marker, rest)) if marker == e.marker => rest,
        _ => return Err(EncodingError::markers_not_found(buf, &[e.marker])),
    };
    loop {
        let i = scan_escape(buf, b, e)?;
        let rest = &b[i + 2..];
        if b[i + 1] == e.escaped_term {
            return Ok(buf.len() - rest.len());
        }
        b = rest;
    }
}

/// Finds the next escape in `b` and validates the byte after it.
///
/// On success `b[i + 1]` is either the terminator or the escaped zero.
fn scan_escape(buf: &[u8], b: &[u8], e: Escapes) -> EncodingResult<usize> {
    let Some(i) = b.iter().position(|&c| c == e.escape) else {
        return Err(EncodingError::TerminatorNotFound { bytes: buf.to_vec() });
    };
    let Some(&next) = b.get(i + 1) else {
        return Err(EncodingError::MalformedEscape { bytes: buf.to_vec() });
    };
    if next != e.escaped_term && next != e.escaped_00 {
        return Err(EncodingError::UnknownEscapeSequence {
            bytes: buf.to_vec(),
            sequence: [b[i], next],
        });
    }
    Ok(i)
}

/// One's-complements every byte in place.
#[inline]
pub(crate) fn invert(b: &mut [u8]) {
    for byte in b {
        *byte = !*byte;
    }
}
