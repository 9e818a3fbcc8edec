//! In-place entity reference decoding
//!
//! Handles the predefined references (`&lt; &gt; &amp; &quot; &apos;`) and
//! numeric character references (`&#65;` `&#x41;`). The decoded bytes are
//! written at a destination index behind the cursor, so the buffer shrinks
//! as references are expanded.
//!
//! Numeric references are stored as UTF-8. The encoding of a code point is
//! never longer than the shortest reference that can name it, so decoded
//! output always fits in the bytes the reference occupied.

use super::chars::{self, NOT_A_DIGIT};
use super::scanner::Scanner;
use crate::error::{ErrorKind, ParseError, Result};

const PREDEFINED: [(&[u8], u8); 5] = [
    (b"amp;", b'&'),
    (b"lt;", b'<'),
    (b"gt;", b'>'),
    (b"apos;", b'\''),
    (b"quot;", b'"'),
];

/// Decode the reference at the cursor (which must be on `&`)
///
/// Writes the decoded bytes at `dest`, advances the cursor past the `;` and
/// returns the destination index following the decoded bytes.
pub fn decode_reference(scanner: &mut Scanner<'_>, dest: usize) -> Result<usize> {
    let amp = scanner.position();
    debug_assert_eq!(scanner.peek(), b'&');

    if scanner.peek_at(1) == b'#' {
        let code = decode_numeric(scanner, amp)?;
        let ch = match char::from_u32(code) {
            Some(ch) if code != 0 => ch,
            _ => return Err(ParseError::new(ErrorKind::InvalidCharacterReference, amp)),
        };
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        scanner.write(dest, encoded);
        return Ok(dest + encoded.len());
    }

    for (name, byte) in PREDEFINED {
        if scanner.starts_with_at(amp + 1, name) {
            scanner.advance(1 + name.len());
            scanner.write(dest, &[byte]);
            return Ok(dest + 1);
        }
    }
    Err(ParseError::new(ErrorKind::MalformedReference, amp))
}

/// Accumulate the digits of `&#...;` / `&#x...;` and step past the `;`
fn decode_numeric(scanner: &mut Scanner<'_>, amp: usize) -> Result<u32> {
    let (radix, digit): (u32, fn(u8) -> u8) = if scanner.peek_at(2) == b'x' {
        scanner.advance(3);
        (16, chars::hex_value)
    } else {
        scanner.advance(2);
        (10, chars::decimal_value)
    };

    let mut code: u32 = 0;
    let mut digits = 0;
    loop {
        let value = digit(scanner.peek());
        if value == NOT_A_DIGIT {
            break;
        }
        code = code
            .checked_mul(radix)
            .and_then(|c| c.checked_add(value as u32))
            .ok_or_else(|| ParseError::new(ErrorKind::InvalidCharacterReference, amp))?;
        digits += 1;
        scanner.advance(1);
    }

    if digits == 0 || scanner.peek() != b';' {
        return Err(ParseError::new(ErrorKind::MalformedReference, amp));
    }
    scanner.advance(1);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode every reference in `input` the way text extraction does,
    /// returning the compacted bytes
    fn decode_all(input: &[u8]) -> Result<Vec<u8>> {
        let mut buf = input.to_vec();
        let mut scanner = Scanner::new(&mut buf);
        let mut dest = 0;
        while !scanner.is_eof() {
            let start = scanner.position();
            let len = scanner.scan(chars::TEXT_NO_REF);
            scanner.compact(start..start + len, dest);
            dest += len;
            if scanner.peek() == b'&' {
                dest = decode_reference(&mut scanner, dest)?;
            } else {
                break;
            }
        }
        Ok(scanner.slice(0..dest).to_vec())
    }

    #[test]
    fn test_predefined() {
        assert_eq!(decode_all(b"&lt;&amp;&gt;").unwrap(), b"<&>");
        assert_eq!(
            decode_all(b"say &quot;hi&quot; &apos;x&apos;").unwrap(),
            b"say \"hi\" 'x'"
        );
    }

    #[test]
    fn test_numeric_decimal() {
        assert_eq!(decode_all(b"&#65;&#66;&#67;").unwrap(), b"ABC");
    }

    #[test]
    fn test_numeric_hex() {
        assert_eq!(decode_all(b"&#x41;&#x42;&#x43;").unwrap(), b"ABC");
        assert_eq!(decode_all(b"&#x4a;").unwrap(), b"J");
    }

    #[test]
    fn test_unicode_reference() {
        assert_eq!(decode_all(b"&#233;").unwrap(), "é".as_bytes());
        assert_eq!(decode_all(b"&#x20AC;").unwrap(), "€".as_bytes());
        assert_eq!(decode_all(b"a&#x1F600;b").unwrap(), "a😀b".as_bytes());
    }

    #[test]
    fn test_unknown_entity() {
        let err = decode_all(b"ab&nbsp;").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedReference);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_unterminated() {
        let err = decode_all(b"x&amp").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedReference);
        assert_eq!(err.offset(), 1);

        let err = decode_all(b"&#65").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedReference);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_empty_numeric() {
        for input in [&b"&#;"[..], b"&#x;", b"&#X41;"] {
            let err = decode_all(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedReference);
        }
    }

    #[test]
    fn test_invalid_code_points() {
        for input in [&b"&#0;"[..], b"&#xD800;", b"&#x110000;", b"&#99999999999;"] {
            let err = decode_all(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCharacterReference);
            assert_eq!(err.offset(), 0);
        }
    }
}
