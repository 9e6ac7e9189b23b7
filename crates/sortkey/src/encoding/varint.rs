//! Variable-width integer encoding.
//!
//! An integer is one tag byte followed by zero to eight big-endian payload
//! bytes. The tag alone orders values of different magnitude classes, so the
//! whole encoding compares correctly as plain bytes.
//!
//! ## Tag Layout
//!
//! ```text
//! 0x80 ..= 0x87   negative, 8 ..= 1 payload bytes
//! 0x88            zero
//! 0x89 ..= 0xf5   1 ..= 109, no payload (value folded into the tag)
//! 0xf6 ..= 0xfd   positive, 1 ..= 8 payload bytes
//! ```
//!
//! Sign is carried by the side of `0x88` the tag falls on, not by a sign
//! bit. Negative payloads are the low bytes of the two's-complement value,
//! which for a fixed width increase with the value.
//!
//! | Value | Ascending | Descending |
//! |-------|-----------|------------|
//! | `0` | `88` | `87 ff` |
//! | `1` | `89` | `87 fe` |
//! | `-1` | `87 ff` | `88` |
//! | `109` | `f5` | `87 92` |
//! | `112` | `f6 70` | `87 8f` |
//!
//! Descending integers are the ascending encoding of the complement `!v`,
//! which reverses the order while staying inside the same tag range.

use super::tags::{INT_MAX, INT_MIN, INT_SMALL, INT_ZERO};
use crate::error::{EncodingError, EncodingResult};
use crate::types::Direction;

/// Appends `v` so that ascending byte order matches numeric order.
///
/// ```
/// use sortkey::encoding::encode_varint_ascending;
///
/// let mut buf = Vec::new();
/// encode_varint_ascending(&mut buf, -1);
/// assert_eq!(buf, [0x87, 0xff]);
/// ```
pub fn encode_varint_ascending(buf: &mut Vec<u8>, v: i64) {
    if v >= 0 {
        encode_uvarint_ascending(buf, v.unsigned_abs());
        return;
    }
    let width = byte_width(v.unsigned_abs());
    buf.push(INT_ZERO - width);
    put_be(buf, v as u64, width);
}

/// Appends `v` so that ascending byte order matches reverse numeric order.
#[inline]
pub fn encode_varint_descending(buf: &mut Vec<u8>, v: i64) {
    encode_varint_ascending(buf, !v);
}

/// Appends `v` in the given direction.
#[inline]
pub fn encode_varint(buf: &mut Vec<u8>, v: i64, dir: Direction) {
    match dir {
        Direction::Ascending => encode_varint_ascending(buf, v),
        Direction::Descending => encode_varint_descending(buf, v),
    }
}

/// Appends the unsigned `v`, using only the non-negative tag half.
///
/// Values up to `u64::MAX` fit; the eight-byte class covers what a signed
/// encoding would lose to the sign.
pub fn encode_uvarint_ascending(buf: &mut Vec<u8>, v: u64) {
    if v <= u64::from(INT_SMALL) {
        buf.push(INT_ZERO + v as u8);
        return;
    }
    let width = byte_width(v);
    buf.push(INT_ZERO + INT_SMALL + width);
    put_be(buf, v, width);
}

/// Appends the unsigned `v` in reverse order, using the negative tag half.
pub fn encode_uvarint_descending(buf: &mut Vec<u8>, v: u64) {
    if v == 0 {
        buf.push(INT_ZERO);
        return;
    }
    let width = byte_width(v);
    buf.push(INT_ZERO - width);
    put_be(buf, !v, width);
}

/// Appends the unsigned `v` in the given direction.
#[inline]
pub fn encode_uvarint(buf: &mut Vec<u8>, v: u64, dir: Direction) {
    match dir {
        Direction::Ascending => encode_uvarint_ascending(buf, v),
        Direction::Descending => encode_uvarint_descending(buf, v),
    }
}

/// Decodes an integer written by [`encode_varint_ascending`].
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if `b` does not start with an integer tag
/// - [`EncodingError::InsufficientBytes`] if the payload is truncated
/// - [`EncodingError::VarintOverflow`] if the magnitude does not fit in an `i64`
pub fn decode_varint_ascending(b: &[u8]) -> EncodingResult<(&[u8], i64)> {
    let tag = match b.first() {
        Some(&tag) if (INT_MIN..=INT_MAX).contains(&tag) => tag,
        _ => return Err(EncodingError::markers_not_found(b, &[INT_MIN, INT_MAX])),
    };
    if tag >= INT_ZERO {
        let (rest, u) = decode_uvarint_ascending(b)?;
        let v = i64::try_from(u).map_err(|_| EncodingError::VarintOverflow { value: u })?;
        return Ok((rest, v));
    }
    // Complementing each byte rebuilds the non-negative `!v`.
    let width = INT_ZERO - tag;
    let (rest, complement) = read_be(&b[1..], width, true)?;
    // Only the eight-byte class can rebuild a magnitude past `i64::MIN`.
    let complement = i64::try_from(complement)
        .map_err(|_| EncodingError::VarintOverflow { value: complement })?;
    Ok((rest, !complement))
}

/// Decodes an integer written by [`encode_varint_descending`].
///
/// # Errors
///
/// Same as [`decode_varint_ascending`].
#[inline]
pub fn decode_varint_descending(b: &[u8]) -> EncodingResult<(&[u8], i64)> {
    let (rest, v) = decode_varint_ascending(b)?;
    Ok((rest, !v))
}

/// Decodes an integer in the given direction.
///
/// # Errors
///
/// Same as [`decode_varint_ascending`].
#[inline]
pub fn decode_varint(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], i64)> {
    match dir {
        Direction::Ascending => decode_varint_ascending(b),
        Direction::Descending => decode_varint_descending(b),
    }
}

/// Decodes an unsigned integer written by [`encode_uvarint_ascending`].
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if the tag is not in `0x88..=0xfd`
/// - [`EncodingError::InsufficientBytes`] if the payload is truncated
pub fn decode_uvarint_ascending(b: &[u8]) -> EncodingResult<(&[u8], u64)> {
    let tag = match b.first() {
        Some(&tag) if (INT_ZERO..=INT_MAX).contains(&tag) => tag,
        _ => return Err(EncodingError::markers_not_found(b, &[INT_ZERO, INT_MAX])),
    };
    let rest = &b[1..];
    let small = tag - INT_ZERO;
    if small <= INT_SMALL {
        return Ok((rest, u64::from(small)));
    }
    read_be(rest, small - INT_SMALL, false)
}

/// Decodes an unsigned integer written by [`encode_uvarint_descending`].
///
/// # Errors
///
/// - [`EncodingError::MarkersNotFound`] if the tag is not in `0x80..=0x88`
/// - [`EncodingError::InsufficientBytes`] if the payload is truncated
pub fn decode_uvarint_descending(b: &[u8]) -> EncodingResult<(&[u8], u64)> {
    let tag = match b.first() {
        Some(&tag) if (INT_MIN..=INT_ZERO).contains(&tag) => tag,
        _ => return Err(EncodingError::markers_not_found(b, &[INT_MIN, INT_ZERO])),
    };
    read_be(&b[1..], INT_ZERO - tag, true)
}

/// Decodes an unsigned integer in the given direction.
///
/// # Errors
///
/// See [`decode_uvarint_ascending`] and [`decode_uvarint_descending`].
#[inline]
pub fn decode_uvarint(b: &[u8], dir: Direction) -> EncodingResult<(&[u8], u64)> {
    match dir {
        Direction::Ascending => decode_uvarint_ascending(b),
        Direction::Descending => decode_uvarint_descending(b),
    }
}

/// Number of bytes needed to hold `v`, at least one.
#[inline]
fn byte_width(v: u64) -> u8 {
    let bits = 64 - v.leading_zeros();
    bits.div_ceil(8).max(1) as u8
}

/// Appends the low `width` bytes of `v`, big-endian.
#[inline]
fn put_be(buf: &mut Vec<u8>, v: u64, width: u8) {
    buf.extend_from_slice(&v.to_be_bytes()[8 - usize::from(width)..]);
}

/// Reads `width` big-endian bytes, complementing each one if `invert` is set.
fn read_be(b: &[u8], width: u8, invert: bool) -> EncodingResult<(&[u8], u64)> {
    let width = usize::from(width);
    if b.len() < width {
        return Err(EncodingError::InsufficientBytes { expected: width, actual: b.len() });
    }
    let (payload, rest) = b.split_at(width);
    let mask = if invert { 0xff } else { 0x00 };
    let v = payload.iter().fold(0u64, |acc, &t| (acc << 8) | u64::from(t ^ mask));
    Ok((rest, v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn asc(v: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_varint_ascending(&mut buf, v);
        buf
    }

    fn desc(v: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_varint_descending(&mut buf, v);
        buf
    }

    // Values on both sides of every magnitude-class boundary.
    fn boundaries() -> Vec<i64> {
        let mut values = vec![i64::MIN, i64::MIN + 1, -1, 0, 1, 109, 110, 111, 112];
        values.extend_from_slice(&[i64::MAX - 1, i64::MAX]);
        for shift in (8..64).step_by(8) {
            let edge = 1i64 << shift;
            values.extend_from_slice(&[edge - 2, edge - 1, edge, edge + 1]);
            values.extend_from_slice(&[-edge - 1, -edge, -edge + 1, -edge + 2]);
        }
        values.sort_unstable();
        values.dedup();
        values
    }

    #[test]
    fn ascending_vectors() {
        assert_eq!(asc(0), [0x88]);
        assert_eq!(asc(1), [0x89]);
        assert_eq!(asc(109), [0xf5]);
        assert_eq!(asc(110), [0xf6, 0x6e]);
        assert_eq!(asc(112), [0xf6, 0x70]);
        assert_eq!(asc(255), [0xf6, 0xff]);
        assert_eq!(asc(256), [0xf7, 0x01, 0x00]);
        assert_eq!(asc(-1), [0x87, 0xff]);
        assert_eq!(asc(-255), [0x87, 0x01]);
        assert_eq!(asc(-256), [0x86, 0xff, 0x00]);
        assert_eq!(asc(i64::MAX), [0xfd, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(asc(i64::MIN), [0x80, 0x80, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn descending_vectors() {
        assert_eq!(desc(0), [0x87, 0xff]);
        assert_eq!(desc(-1), [0x88]);
        assert_eq!(desc(1), [0x87, 0xfe]);
        assert_eq!(desc(-110), [0xf5]);
    }

    #[test]
    fn roundtrip_both_directions() {
        for v in boundaries() {
            assert_eq!(decode_varint_ascending(&asc(v)).unwrap(), (&[][..], v), "asc {v}");
            assert_eq!(decode_varint_descending(&desc(v)).unwrap(), (&[][..], v), "desc {v}");
            for dir in [Direction::Ascending, Direction::Descending] {
                let mut buf = Vec::new();
                encode_varint(&mut buf, v, dir);
                buf.extend_from_slice(b"rest");
                assert_eq!(decode_varint(&buf, dir).unwrap(), (&b"rest"[..], v));
            }
        }
    }

    #[test]
    fn order_preserved() {
        let values = boundaries();
        for pair in values.windows(2) {
            assert!(asc(pair[0]) < asc(pair[1]), "{} < {}", pair[0], pair[1]);
            assert!(desc(pair[0]) > desc(pair[1]), "{} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn uvarint_roundtrip_and_order() {
        let mut values = vec![0u64, 1, 109, 110, 255, 256, u64::MAX - 1, u64::MAX];
        for shift in (8..64).step_by(8) {
            values.extend_from_slice(&[(1u64 << shift) - 1, 1u64 << shift]);
        }
        values.sort_unstable();
        values.dedup();

        let encode = |v: u64, dir: Direction| {
            let mut buf = Vec::new();
            encode_uvarint(&mut buf, v, dir);
            buf
        };
        for v in &values {
            for dir in [Direction::Ascending, Direction::Descending] {
                let enc = encode(*v, dir);
                assert_eq!(decode_uvarint(&enc, dir).unwrap(), (&[][..], *v), "{v} {dir}");
            }
        }
        for pair in values.windows(2) {
            assert!(encode(pair[0], Direction::Ascending) < encode(pair[1], Direction::Ascending));
            assert!(
                encode(pair[0], Direction::Descending) > encode(pair[1], Direction::Descending)
            );
        }
    }

    #[test]
    fn uvarint_vectors() {
        let mut buf = Vec::new();
        encode_uvarint_ascending(&mut buf, u64::MAX);
        assert_eq!(buf, [0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);

        buf.clear();
        encode_uvarint_descending(&mut buf, 0);
        assert_eq!(buf, [0x88]);

        buf.clear();
        encode_uvarint_descending(&mut buf, 1);
        assert_eq!(buf, [0x87, 0xfe]);
    }

    #[test]
    fn overflow_int64() {
        let buf = [INT_MAX, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let err = decode_varint_ascending(&buf).unwrap_err();
        assert!(matches!(err, EncodingError::VarintOverflow { value: u64::MAX }));
        assert_eq!(err.to_string(), "varint 18446744073709551615 overflows int64");

        // The same bytes are a valid unsigned value.
        assert_eq!(decode_uvarint_ascending(&buf).unwrap().1, u64::MAX);
    }

    #[test]
    fn overflow_negative_int64() {
        // One past `i64::MIN` in the widest negative class.
        let buf = [INT_MIN, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        for dir in [Direction::Ascending, Direction::Descending] {
            let err = decode_varint(&buf, dir).unwrap_err();
            assert!(matches!(err, EncodingError::VarintOverflow { value: 0x8000_0000_0000_0000 }));
        }

        let zeros = [INT_MIN, 0, 0, 0, 0, 0, 0, 0, 0];
        for dir in [Direction::Ascending, Direction::Descending] {
            let err = decode_varint(&zeros, dir).unwrap_err();
            assert!(matches!(err, EncodingError::VarintOverflow { value: u64::MAX }));
        }

        // The smallest value still decodes in both directions.
        assert_eq!(decode_varint_ascending(&asc(i64::MIN)).unwrap().1, i64::MIN);
        assert_eq!(decode_varint_descending(&desc(i64::MAX)).unwrap().1, i64::MAX);
    }

    #[test]
    fn rejects_non_integer_tags() {
        for b in [&[][..], &[0x00][..], &[0x06, 0x00][..], &[0xfe][..], &[0xff][..]] {
            let err = decode_varint_ascending(b).unwrap_err();
            assert!(matches!(err, EncodingError::MarkersNotFound { .. }));
        }
        let err = decode_uvarint_ascending(&[0x87, 0xff]).unwrap_err();
        assert!(matches!(err, EncodingError::MarkersNotFound { .. }));
        let err = decode_uvarint_descending(&[0x89]).unwrap_err();
        assert!(matches!(err, EncodingError::MarkersNotFound { .. }));
    }

    #[test]
    fn truncated_payload() {
        assert!(matches!(
            decode_varint_ascending(&[0xf8, 0x01]),
            Err(EncodingError::InsufficientBytes { expected: 3, actual: 1 })
        ));
        assert!(matches!(
            decode_varint_ascending(&[0x80]),
            Err(EncodingError::InsufficientBytes { expected: 8, actual: 0 })
        ));
    }
}
