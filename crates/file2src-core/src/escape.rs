//! Decoding of escaped prefix text.
//!
//! The input is treated as the body of a double-quoted string literal. A bare
//! `"` is an ordinary character and never ends the literal.

use std::str::CharIndices;

/// A malformed escape sequence. Offsets are byte offsets of the backslash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("dangling backslash at offset {offset}")]
    DanglingBackslash { offset: usize },

    #[error("unknown escape sequence '\\{escape}' at offset {offset}")]
    UnknownEscape { offset: usize, escape: char },

    #[error("malformed '\\{escape}' escape at offset {offset}: expected {expected} digits")]
    InvalidDigits {
        offset: usize,
        escape: char,
        expected: usize,
    },

    #[error("octal escape at offset {offset} is out of range: {value:o} > 377")]
    OctalOutOfRange { offset: usize, value: u32 },

    #[error("escape at offset {offset} is not a valid code point: U+{value:04X}")]
    InvalidCodePoint { offset: usize, value: u32 },
}

/// Resolve backslash escapes in `raw` into the bytes the literal denotes.
///
/// `\x` and octal escapes produce a single raw byte; `\u` and `\U` produce
/// the UTF-8 encoding of the code point.
///
/// Intentionally looser than a Go double-quoted literal: bare quotes, `\'`
/// and raw control characters such as newlines are accepted as written.
pub fn unescape(raw: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }

        let Some((_, escape)) = chars.next() else {
            return Err(DecodeError::DanglingBackslash { offset });
        };

        match escape {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            // `\'` is allowed here; Go only permits it in rune literals.
            '\\' | '"' | '\'' => out.push(escape as u8),
            'x' => {
                let value = read_digits(&mut chars, offset, escape, 2, 16)?;
                out.push(value as u8);
            }
            '0'..='7' => {
                let high = escape.to_digit(8).unwrap_or_default();
                let value = high * 64 + read_digits(&mut chars, offset, escape, 2, 8)?;
                if value > 0xff {
                    return Err(DecodeError::OctalOutOfRange { offset, value });
                }
                out.push(value as u8);
            }
            'u' | 'U' => {
                let width = if escape == 'u' { 4 } else { 8 };
                let value = read_digits(&mut chars, offset, escape, width, 16)?;
                let c = char::from_u32(value)
                    .ok_or(DecodeError::InvalidCodePoint { offset, value })?;
                push_char(&mut out, c);
            }
            other => {
                return Err(DecodeError::UnknownEscape {
                    offset,
                    escape: other,
                });
            }
        }
    }

    Ok(out)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut utf8 = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
}

/// Consume exactly `count` digits in `radix`.
fn read_digits(
    chars: &mut CharIndices<'_>,
    offset: usize,
    escape: char,
    count: usize,
    radix: u32,
) -> Result<u32, DecodeError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(radix))
            .ok_or(DecodeError::InvalidDigits {
                offset,
                escape,
                // octal: the leading digit was already consumed as the escape char
                expected: if radix == 8 { count + 1 } else { count },
            })?;
        value = value * radix + digit;
    }
    Ok(value)
}
