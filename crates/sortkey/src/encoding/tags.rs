//! The global tag-byte table.
//!
//! The first byte of every encoded value identifies its type and direction.
//! Ranges never overlap, so [`peek_type`](super::peek::peek_type) needs only
//! that byte. These values are part of the on-disk format and must not be
//! renumbered without a storage migration.
//!
//! ```text
//! 0x00        NULL (ascending)
//! 0x01        FLOAT NaN (ascending)
//! 0x02        FLOAT negative
//! 0x03        FLOAT zero
//! 0x04        FLOAT positive
//! 0x05        FLOAT NaN (descending)
//! 0x06        BYTES (ascending)
//! 0x07        BYTES (descending)
//! 0x80-0x87   INT negative, 8..1 payload bytes
//! 0x88        INT zero
//! 0x89-0xf5   INT 1..=109 folded into the tag
//! 0xf6-0xfd   INT positive, 1..8 payload bytes
//! 0xff        NULL (descending)
//! ```

/// Null, ascending: sorts before every other tag.
pub const ENCODED_NULL: u8 = 0x00;
/// Null, descending: sorts after every other tag.
pub const ENCODED_NULL_DESC: u8 = 0xff;

/// NaN in an ascending float column.
pub const FLOAT_NAN: u8 = ENCODED_NULL + 1;
/// Negative non-zero float.
pub const FLOAT_NEG: u8 = FLOAT_NAN + 1;
/// Positive or negative zero.
pub const FLOAT_ZERO: u8 = FLOAT_NEG + 1;
/// Positive non-zero float.
pub const FLOAT_POS: u8 = FLOAT_ZERO + 1;
/// NaN in a descending float column.
pub const FLOAT_NAN_DESC: u8 = FLOAT_POS + 1;

/// Byte string, ascending.
pub const BYTES_MARKER: u8 = FLOAT_NAN_DESC + 1;
/// Byte string, descending.
pub const BYTES_DESC_MARKER: u8 = BYTES_MARKER + 1;

/// Maximum number of payload bytes after an integer tag.
pub const INT_MAX_WIDTH: u8 = 8;
/// Lowest integer tag: negative values with eight payload bytes.
pub const INT_MIN: u8 = 0x80;
/// Tag of the integer zero.
pub const INT_ZERO: u8 = INT_MIN + INT_MAX_WIDTH;
/// Highest integer tag: positive values with eight payload bytes.
pub const INT_MAX: u8 = 0xfd;
/// Largest value folded directly into the tag (`INT_ZERO + v`).
pub const INT_SMALL: u8 = INT_MAX - INT_ZERO - INT_MAX_WIDTH;

/// Escape byte inside an ascending byte string.
pub const ESCAPE: u8 = 0x00;
/// Second byte of the ascending terminator `(ESCAPE, ESCAPED_TERM)`.
pub const ESCAPED_TERM: u8 = 0x01;
/// Second byte of an ascending escaped zero `(ESCAPE, ESCAPED_00)`.
pub const ESCAPED_00: u8 = 0xff;

/// The float tags, in the order they sort.
pub const FLOAT_TAGS: [u8; 5] = [FLOAT_NAN, FLOAT_NEG, FLOAT_ZERO, FLOAT_POS, FLOAT_NAN_DESC];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_wire_format() {
        assert_eq!(ENCODED_NULL, 0x00);
        assert_eq!(FLOAT_TAGS, [0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(BYTES_MARKER, 0x06);
        assert_eq!(BYTES_DESC_MARKER, 0x07);
        assert_eq!(INT_ZERO, 0x88);
        assert_eq!(INT_SMALL, 109);
        assert_eq!(INT_ZERO + INT_SMALL, 0xf5);
        assert_eq!(INT_MAX - INT_MAX_WIDTH + 1, 0xf6);
        assert_eq!(ENCODED_NULL_DESC, 0xff);
    }

    #[test]
    fn cross_type_order() {
        let order = [
            ENCODED_NULL,
            FLOAT_NAN,
            FLOAT_NAN_DESC,
            BYTES_MARKER,
            BYTES_DESC_MARKER,
            INT_MIN,
            INT_MAX,
            ENCODED_NULL_DESC,
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
