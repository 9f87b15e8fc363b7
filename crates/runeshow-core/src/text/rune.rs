//! Decoded-unit values and their rendering.
//!
//! A [`Rune`] is a plain 32-bit signed integer. It is meant to carry a
//! Unicode scalar value, but nothing in the type stops a caller from storing
//! a surrogate half or a value far above U+10FFFF. The helpers here answer
//! questions about a rune without ever rejecting one at construction time.

use std::fmt;

/// One decoded unit. Any `i32` is representable, valid or not.
pub type Rune = i32;

/// Placeholder emitted wherever decoding fails (U+FFFD).
pub const REPLACEMENT_RUNE: Rune = 0xFFFD;
/// Highest Unicode scalar value.
pub const MAX_RUNE: Rune = 0x10FFFF;
/// First surrogate code point.
pub const SURROGATE_MIN: Rune = 0xD800;
/// Last surrogate code point.
pub const SURROGATE_MAX: Rune = 0xDFFF;

/// Returns true when `r` is a Unicode scalar value.
///
/// # Examples
/// ```
/// use runeshow_core::text::valid_rune;
///
/// assert!(valid_rune(0x65E5));
/// assert!(!valid_rune(0xD83D));
/// assert!(!valid_rune(0xFFFFFFF));
/// ```
pub fn valid_rune(r: Rune) -> bool {
    matches!(r, 0..SURROGATE_MIN | 0xE000..=MAX_RUNE)
}

/// Converts a rune to `char` when it is a scalar value.
pub fn to_char(r: Rune) -> Option<char> {
    u32::try_from(r).ok().and_then(char::from_u32)
}

/// UTF-8 byte length of `r`, or `None` when `r` cannot be encoded.
pub fn rune_len(r: Rune) -> Option<usize> {
    to_char(r).map(char::len_utf8)
}

/// UTF-8 encoding of `r`, or `None` when `r` cannot be encoded.
///
/// # Examples
/// ```
/// use runeshow_core::text::encode_rune;
///
/// assert_eq!(encode_rune(0x65E5), Some(vec![0xE6, 0x97, 0xA5]));
/// assert_eq!(encode_rune(0xD83D), None);
/// ```
pub fn encode_rune(r: Rune) -> Option<Vec<u8>> {
    let ch = to_char(r)?;
    let mut buf = [0u8; 4];
    Some(ch.encode_utf8(&mut buf).as_bytes().to_vec())
}

/// Whether `r` gets its glyph shown next to the `U+` form.
///
/// Not shown: control characters, whitespace other than the ASCII space,
/// format characters (Cf), private-use characters, noncharacters, and
/// anything outside the scalar-value domain. Other unassigned code points
/// are shown; there are no category tables to detect them.
pub fn is_printable(r: Rune) -> bool {
    match to_char(r) {
        Some(' ') => true,
        Some(ch) => {
            !ch.is_control()
                && !ch.is_whitespace()
                && !is_format(r)
                && !is_private_use(r)
                && !is_noncharacter(r)
        }
        None => false,
    }
}

fn is_format(r: Rune) -> bool {
    matches!(
        r,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

fn is_private_use(r: Rune) -> bool {
    matches!(r, 0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD)
}

fn is_noncharacter(r: Rune) -> bool {
    (0xFDD0..=0xFDEF).contains(&r) || (r & 0xFFFE) == 0xFFFE
}

/// Renders a rune as `U+XXXX`, followed by the quoted glyph when printable.
///
/// Negative values are shown through their sign-extended 64-bit pattern.
///
/// # Examples
/// ```
/// use runeshow_core::text::UnicodeDisplay;
///
/// assert_eq!(UnicodeDisplay(0x65E5).to_string(), "U+65E5 '日'");
/// assert_eq!(UnicodeDisplay(0).to_string(), "U+0000");
/// assert_eq!(UnicodeDisplay(0xD83D).to_string(), "U+D83D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeDisplay(pub Rune);

impl fmt::Display for UnicodeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = i64::from(self.0) as u64;
        write!(f, "U+{bits:04X}")?;
        if let Some(ch) = to_char(self.0).filter(|_| is_printable(self.0)) {
            write!(f, " '{ch}'")?;
        }
        Ok(())
    }
}

/// Shorthand for `UnicodeDisplay(r).to_string()`.
pub fn format_unicode(r: Rune) -> String {
    UnicodeDisplay(r).to_string()
}
