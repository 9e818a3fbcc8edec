//! Byte classification tables
//!
//! Every class is one bit in a 256-entry table built at compile time. NUL is
//! never a member of any class, so a scan always stops at the end of input.

pub const SPACE: u16 = 1 << 0;
/// Element type and PI target bytes
pub const NAME: u16 = 1 << 1;
pub const ATTRIBUTE_NAME: u16 = 1 << 2;
/// Attribute value inside double quotes
pub const ATTRIBUTE_VALUE_DQ: u16 = 1 << 3;
pub const ATTRIBUTE_VALUE_DQ_NO_REF: u16 = 1 << 4;
/// Attribute value inside single quotes
pub const ATTRIBUTE_VALUE_SQ: u16 = 1 << 5;
pub const ATTRIBUTE_VALUE_SQ_NO_REF: u16 = 1 << 6;
pub const TEXT: u16 = 1 << 7;
pub const TEXT_NO_SPACE: u16 = 1 << 8;
pub const TEXT_NO_REF: u16 = 1 << 9;
pub const TEXT_NO_SPACE_REF: u16 = 1 << 10;

/// Returned by the digit classifiers for bytes that are not digits
pub const NOT_A_DIGIT: u8 = 255;

static TABLE: [u16; 256] = build_table();

const fn is_space_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

const fn classes_of(b: u8) -> u16 {
    if b == 0 {
        return 0;
    }
    let space = is_space_byte(b);
    let mut bits = 0;

    if space {
        bits |= SPACE;
    }
    if !space && !matches!(b, b'/' | b'>' | b'?') {
        bits |= NAME;
    }
    if !space && !matches!(b, b'!' | b'/' | b'<' | b'=' | b'>' | b'?') {
        bits |= ATTRIBUTE_NAME;
    }
    if b != b'"' {
        bits |= ATTRIBUTE_VALUE_DQ;
        if b != b'&' {
            bits |= ATTRIBUTE_VALUE_DQ_NO_REF;
        }
    }
    if b != b'\'' {
        bits |= ATTRIBUTE_VALUE_SQ;
        if b != b'&' {
            bits |= ATTRIBUTE_VALUE_SQ_NO_REF;
        }
    }
    if b != b'<' {
        bits |= TEXT;
        if !space {
            bits |= TEXT_NO_SPACE;
        }
        if b != b'&' {
            bits |= TEXT_NO_REF;
            if !space {
                bits |= TEXT_NO_SPACE_REF;
            }
        }
    }
    bits
}

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = classes_of(i as u8);
        i += 1;
    }
    table
}

/// Check if a byte belongs to any of the classes in `class`
#[inline]
pub fn is(b: u8, class: u16) -> bool {
    TABLE[b as usize] & class != 0
}

#[inline]
pub fn is_space(b: u8) -> bool {
    is(b, SPACE)
}

/// Value of a decimal digit, or [`NOT_A_DIGIT`]
#[inline]
pub fn decimal_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        _ => NOT_A_DIGIT,
    }
}

/// Value of a hexadecimal digit (either case), or [`NOT_A_DIGIT`]
#[inline]
pub fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => NOT_A_DIGIT,
    }
}
