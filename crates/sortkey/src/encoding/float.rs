//! IEEE-754 double encoding.
//!
//! Floats are classified into NaN, negative, zero and positive, each with its
//! own tag. Non-zero finite and infinite values are followed by eight
//! big-endian bytes: the raw bit pattern for positives, and its complement for
//! negatives so that larger magnitudes sort first.
//!
//! ```text
//! 0x01  NaN (ascending)     no payload
//! 0x02  negative            !bits
//! 0x03  zero (+0.0, -0.0)   no payload
//! 0x04  positive            bits
//! 0x05  NaN (descending)    no payload
//! ```
//!
//! Descending floats are the ascending encoding of `-f`, except that NaN
//! takes the descending NaN tag. NaN therefore sorts first in an ascending
//! scan and last in a descending one.
//!
//! Both zeros share one tag and decode to `+0.0`.

use super::fixed::{decode_uint64_ascending, encode_uint64_ascending};
use super::tags::{FLOAT_NAN, FLOAT_NAN_DESC, FLOAT_NEG, FLOAT_POS, FLOAT_TAGS, FLOAT_ZERO};
use crate::error::{EncodingError, EncodingResult};
use crate::types::Direction;

const SIGN_BIT: u64 = 1 << 63;

/// Appends `f` so that ascending byte order matches numeric order.
///
/// ```
/// use sortkey::encoding::encode_float_ascending;
///
/// let (mut a, mut b) = (Vec::new(), Vec::new());
/// encode_float_ascending(&mut a, -2.5);
/// encode_float_ascending(&mut b, 1e-300);
/// assert!(a < b);
/// ```
pub fn encode_float_ascending(buf: &mut Vec<u8>, f: f64) {
    if f.is_nan() {
        buf.push(FLOAT_NAN);
        return;
    }
    if f == 0.0 {
        buf.push(FLOAT_ZERO);
        return;
    }
    let bits = f.to_bits();
    if bits & SIGN_BIT != 0 {
        buf.push(FLOAT_NEG);
        encode_uint64_ascending(buf, !bits);
    } else {
        buf.push(FLOAT_POS);
        encode_uint64_ascending(buf, bits);
    }
}

/// Appends `f` so that ascending byte order matches reverse numeric order.
#[inline]
pub fn encode_float_descending(buf: &mut Vec<u8>, f: f64) {
    if f.is_nan() {
        buf.push(FLOAT_NAN_DESC);
        return;
    }
    encode_float_ascending(buf, -f);
}

/// Appends `f` in the given direction.
#[inline]
pub fn encode_float(buf: &mut Vec<u8>, f: f64, dir: Direction) {
    match dir {
        Direction::Ascending => encode_float_ascending(buf, f),
        Direction::Descending => encode_float_descending(buf, f),
    }
}

/// Decodes a float written by [`encode_float_ascending`].
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if `b` does not start with a float tag
/// - [`EncodingError::InsufficientBytes`] if the payload is truncated
pub fn decode_float_ascending(b: &[u8]) -> EncodingResult<(&[u8], f64)> {
    let Some((&tag, rest)) = b.split_first() else {
        return Err(EncodingError::markers_not_found(b, &FLOAT_TAGS));
    };
    match tag {
        FLOAT_NAN | FLOAT_NAN_DESC => Ok((rest, f64::NAN)),
        FLOAT_ZERO => Ok((rest, 0.0)),
        FLOAT_NEG => {
            let (rest, u) = decode_uint64_ascending(rest)?;
            Ok((rest, f64::from_bits(!u)))
        }
        FLOAT_POS => {
            let (rest, u) = decode_uint64_ascending(rest)?;
            Ok((rest, f64::from_bits(u)))
        }
        _ => Err(EncodingError::markers_not_found(b, &FLOAT_TAGS)),
    }
}

/// Decodes a float written by [`encode_float_descending`].
///
/// # Errors
///
/// Same as [`decode_float_ascending`].
pub fn decode_float_descending(b: &[u8]) -> EncodingResult<(&[u8], f64)> {
    let (rest, f) = decode_float_ascending(b)?;
    // Negating zero would hand back -0.0.
    let f = if f == 0.0 { 0.0 } else { -f };
    Ok((rest, f))
}

/// Decodes a float in the given direction.
///
/// # Errors
///
/// Same as [`decode_float_ascending`].
#[inline]
pub fn decode_float(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], f64)> {
    match dir {
        Direction::Ascending => decode_float_ascending(b),
        Direction::Descending => decode_float_descending(b),
    }
}
