//! Fixed-width unsigned integers.
//!
//! These are untagged big-endian encodings: the caller must know the type
//! from context. Descending variants store the bitwise complement. The float
//! codec uses [`encode_uint64_ascending`] for its payload.

use crate::error::{EncodingError, EncodingResult};

/// Appends `v` as four big-endian bytes.
#[inline]
pub fn encode_uint32_ascending(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Appends the complement of `v` as four big-endian bytes.
#[inline]
pub fn encode_uint32_descending(buf: &mut Vec<u8>, v: u32) {
    encode_uint32_ascending(buf, !v);
}

/// Appends `v` as eight big-endian bytes.
#[inline]
pub fn encode_uint64_ascending(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Appends the complement of `v` as eight big-endian bytes.
#[inline]
pub fn encode_uint64_descending(buf: &mut Vec<u8>, v: u64) {
    encode_uint64_ascending(buf, !v);
}

/// Decodes a value written by [`encode_uint32_ascending`].
///
/// # Errors
///
/// Returns [`EncodingError::InsufficientBytes`] if fewer than four bytes remain.
#[inline]
pub fn decode_uint32_ascending(b: &[u8]) -> EncodingResult<(&[u8], u32)> {
    let (head, rest) = split_fixed::<4>(b)?;
    Ok((rest, u32::from_be_bytes(head)))
}

/// Decodes a value written by [`encode_uint32_descending`].
///
/// # Errors
///
/// Returns [`EncodingError::InsufficientBytes`] if fewer than four bytes remain.
#[inline]
pub fn decode_uint32_descending(b: &[u8]) -> EncodingResult<(&[u8], u32)> {
    let (rest, v) = decode_uint32_ascending(b)?;
    Ok((rest, !v))
}

/// Decodes a value written by [`encode_uint64_ascending`].
///
/// # Errors
///
/// Returns [`EncodingError::InsufficientBytes`] if fewer than eight bytes remain.
#[inline]
pub fn decode_uint64_ascending(b: &[u8]) -> EncodingResult<(&[u8], u64)> {
    let (head, rest) = split_fixed::<8>(b)?;
    Ok((rest, u64::from_be_bytes(head)))
}

/// Decodes a value written by [`encode_uint64_descending`].
///
/// # Errors
///
/// Returns [`EncodingError::InsufficientBytes`] if fewer than eight bytes remain.
#[inline]
pub fn decode_uint64_descending(b: &[u8]) -> EncodingResult<(&[u8], u64)> {
    let (rest, v) = decode_uint64_ascending(b)?;
    Ok((rest, !v))
}

fn split_fixed<const N: usize>(b: &[u8]) -> EncodingResult<([u8; N], &[u8])> {
    if b.len() < N {
        return Err(EncodingError::InsufficientBytes { expected: N, actual: b.len() });
    }
    let (head, rest) = b.split_at(N);
    let head: [u8; N] = head
        .try_into()
        .map_err(|_| EncodingError::InsufficientBytes { expected: N, actual: head.len() })?;
    Ok((head, rest))
}
