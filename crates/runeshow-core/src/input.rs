//! Parsing of user-supplied inputs: hex byte strings, hex code units and
//! rune literals.
//!
//! Hex input accepts whitespace or commas between tokens, and `0x` or `\x`
//! (`\u` for code units) prefixes, so `ed a0 bd 00`, `eda0bd00` and
//! `\xed\xa0\xbd\x00` all parse to the same bytes.

use thiserror::Error;

use crate::text::Rune;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("hex group '{token}' must have a multiple of {digits} digits")]
    OddLength { token: String, digits: usize },
    #[error("invalid hex digits in '{token}'")]
    InvalidHex { token: String },
    #[error("invalid rune value '{value}'")]
    InvalidNumber { value: String },
    #[error("rune value '{value}' does not fit in 32 bits")]
    TooWide { value: String },
}

/// Parses a hex byte string.
///
/// # Examples
/// ```
/// use runeshow_core::input::parse_hex_bytes;
///
/// assert_eq!(parse_hex_bytes(r"\xed\xa0\xbd\x00")?, vec![0xED, 0xA0, 0xBD, 0x00]);
/// assert_eq!(parse_hex_bytes("ed a0, bd 0x00")?, vec![0xED, 0xA0, 0xBD, 0x00]);
/// # Ok::<(), runeshow_core::input::InputError>(())
/// ```
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, InputError> {
    let mut bytes = Vec::new();
    for piece in hex_pieces(input, "\\x") {
        for group in hex_groups(piece, 2)? {
            let value = u8::from_str_radix(group, 16).map_err(|_| InputError::InvalidHex {
                token: piece.to_string(),
            })?;
            bytes.push(value);
        }
    }
    if bytes.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(bytes)
}

/// Parses hex UTF-16 code units, four digits each.
///
/// # Examples
/// ```
/// use runeshow_core::input::parse_hex_units;
///
/// assert_eq!(parse_hex_units(r"0041 \ud83d")?, vec![0x0041, 0xD83D]);
/// # Ok::<(), runeshow_core::input::InputError>(())
/// ```
pub fn parse_hex_units(input: &str) -> Result<Vec<u16>, InputError> {
    let mut units = Vec::new();
    for piece in hex_pieces(input, "\\u") {
        for group in hex_groups(piece, 4)? {
            let value = u16::from_str_radix(group, 16).map_err(|_| InputError::InvalidHex {
                token: piece.to_string(),
            })?;
            units.push(value);
        }
    }
    if units.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(units)
}

/// Parses a rune literal: decimal, `0x` hex or `U+` hex.
///
/// Any value that fits in 32 signed bits is accepted, including surrogates
/// and values beyond U+10FFFF.
///
/// # Examples
/// ```
/// use runeshow_core::input::parse_rune;
///
/// assert_eq!(parse_rune("55357")?, 0xD83D);
/// assert_eq!(parse_rune("0xfffffff")?, 268435455);
/// assert_eq!(parse_rune("U+1F4A9")?, 0x1F4A9);
/// assert!(parse_rune("0x1_0000_0000").is_err());
/// # Ok::<(), runeshow_core::input::InputError>(())
/// ```
pub fn parse_rune(input: &str) -> Result<Rune, InputError> {
    let trimmed = input.trim();
    let hex = ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix));
    let parsed = match hex {
        Some(digits) if digits.starts_with(['+', '-']) => {
            return Err(InputError::InvalidNumber {
                value: trimmed.to_string(),
            });
        }
        Some(digits) => i64::from_str_radix(digits, 16),
        None => trimmed.parse::<i64>(),
    };
    let value = parsed.map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            InputError::TooWide {
                value: trimmed.to_string(),
            }
        }
        _ => InputError::InvalidNumber {
            value: trimmed.to_string(),
        },
    })?;
    Rune::try_from(value).map_err(|_| InputError::TooWide {
        value: trimmed.to_string(),
    })
}

fn hex_pieces<'a>(input: &'a str, escape: &'a str) -> impl Iterator<Item = &'a str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .flat_map(move |token| token.split(escape))
        .map(|piece| {
            piece
                .strip_prefix("0x")
                .or_else(|| piece.strip_prefix("0X"))
                .unwrap_or(piece)
        })
        .filter(|piece| !piece.is_empty())
}

fn hex_groups(piece: &str, digits: usize) -> Result<Vec<&str>, InputError> {
    if !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InputError::InvalidHex {
            token: piece.to_string(),
        });
    }
    if piece.len() % digits != 0 {
        return Err(InputError::OddLength {
            token: piece.to_string(),
            digits,
        });
    }
    Ok((0..piece.len())
        .step_by(digits)
        .map(|start| &piece[start..start + digits])
        .collect())
}
