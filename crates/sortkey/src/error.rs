//! Error types for the sortkey crate.

use thiserror::Error;

use crate::types::FieldKind;

/// Maximum number of bytes rendered when an error displays its input.
const MAX_BYTES_DISPLAY_LEN: usize = 100;

/// Errors that can occur while decoding order-preserving encodings.
///
/// Encoding never fails: every well-typed value has an encoding. All variants
/// describe input that could not be decoded, and decoders never consume input
/// past the point where they failed.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The expected type marker was absent, or the input was empty.
    #[error("did not find marker {} in buffer {}", render_bytes(.expected), render_bytes(.bytes))]
    MarkersNotFound {
        /// The input that was being decoded.
        bytes: Vec<u8>,
        /// The marker bytes that would have been accepted.
        expected: Vec<u8>,
    },

    /// A byte string ran out of input before its terminator.
    #[error("did not find terminator in buffer {}", render_bytes(.bytes))]
    TerminatorNotFound {
        /// The input that was being decoded.
        bytes: Vec<u8>,
    },

    /// An escape byte was the last byte of the input.
    #[error("malformed escape in buffer {}", render_bytes(.bytes))]
    MalformedEscape {
        /// The input that was being decoded.
        bytes: Vec<u8>,
    },

    /// An escape byte was followed by neither the terminator nor the escaped zero.
    #[error("unknown escape sequence {} in buffer {}", render_bytes(.sequence), render_bytes(.bytes))]
    UnknownEscapeSequence {
        /// The input that was being decoded.
        bytes: Vec<u8>,
        /// The offending two-byte sequence.
        sequence: [u8; 2],
    },

    /// A decoded magnitude does not fit in the target integer width.
    #[error("varint {value} overflows int64")]
    VarintOverflow {
        /// The reconstructed unsigned magnitude.
        value: u64,
    },

    /// The tag announced more payload bytes than the input holds.
    #[error("insufficient bytes to decode value: expected {expected}, found {actual}")]
    InsufficientBytes {
        /// Number of payload bytes the tag requires.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// A decoded byte string was requested as text but is not valid UTF-8.
    #[error("invalid UTF-8 in decoded string: {source}")]
    InvalidUtf8 {
        /// The underlying UTF-8 error.
        #[source]
        source: std::str::Utf8Error,
    },

    /// The leading bytes do not form any value this codec understands.
    #[error("can not decode value from bytes {}", render_bytes(.bytes))]
    CanNotDecode {
        /// The input that was being decoded.
        bytes: Vec<u8>,
    },

    /// The decoded value could not be mapped to the expected field kind.
    #[error("can not decode {kind} field value from bytes {}", render_bytes(.bytes))]
    CanNotDecodeFieldValue {
        /// The input that was being decoded.
        bytes: Vec<u8>,
        /// The kind the caller asked for.
        kind: FieldKind,
    },
}

/// Result alias used by every fallible function in this crate.
pub type EncodingResult<T> = Result<T, EncodingError>;

impl EncodingError {
    pub(crate) fn markers_not_found(bytes: &[u8], expected: &[u8]) -> Self {
        Self::MarkersNotFound { bytes: bytes.to_vec(), expected: expected.to_vec() }
    }

    pub(crate) fn can_not_decode(bytes: &[u8]) -> Self {
        Self::CanNotDecode { bytes: bytes.to_vec() }
    }

    pub(crate) fn can_not_decode_field_value(bytes: &[u8], kind: FieldKind) -> Self {
        Self::CanNotDecodeFieldValue { bytes: bytes.to_vec(), kind }
    }
}

/// Renders bytes as `[0x06 0x61 ...]`, truncated for display.
fn render_bytes(bytes: &[u8]) -> String {
    let shown = &bytes[..bytes.len().min(MAX_BYTES_DISPLAY_LEN)];
    let mut out = String::with_capacity(2 + shown.len() * 5);
    out.push('[');
    for (i, b) in shown.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{b:#04x}"));
    }
    if bytes.len() > MAX_BYTES_DISPLAY_LEN {
        out.push_str(" ...");
    }
    out.push(']');
    out
}
