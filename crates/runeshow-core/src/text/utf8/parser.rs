use super::error::DecodeError;
use super::layout;
use super::reader::Utf8Reader;
use crate::text::rune::{MAX_RUNE, Rune, SURROGATE_MAX, SURROGATE_MIN};

/// Decodes the UTF-8 unit at the start of `bytes`.
///
/// Returns the decoded rune and the number of bytes it occupies. Overlong
/// forms, encoded surrogates and values above U+10FFFF are rejected even
/// though their bit patterns are well formed.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf8::decode_rune;
///
/// assert_eq!(decode_rune("日本語".as_bytes()), Ok((0x65E5, 3)));
/// assert!(decode_rune(&[0xC0, 0x80]).is_err());
/// ```
pub fn decode_rune(bytes: &[u8]) -> Result<(Rune, usize), DecodeError> {
    let reader = Utf8Reader::new(bytes);
    let lead = reader.read_lead()?;
    let (len, mut value) = match lead {
        b if layout::ASCII_RANGE.contains(&b) => return Ok((Rune::from(b), 1)),
        b if layout::LEAD2_RANGE.contains(&b) => (2, u32::from(b & layout::LEAD2_PAYLOAD)),
        b if layout::LEAD3_RANGE.contains(&b) => (3, u32::from(b & layout::LEAD3_PAYLOAD)),
        b if layout::LEAD4_RANGE.contains(&b) => (4, u32::from(b & layout::LEAD4_PAYLOAD)),
        value => return Err(DecodeError::InvalidLeadByte { value }),
    };

    for offset in 1..len {
        value = (value << 6) | reader.read_continuation(offset, len)?;
    }

    if value < layout::MIN_VALUE_BY_LEN[len] {
        return Err(DecodeError::Overlong { value, len });
    }
    let rune = Rune::try_from(value).map_err(|_| DecodeError::OutOfRange { value })?;
    if (SURROGATE_MIN..=SURROGATE_MAX).contains(&rune) {
        return Err(DecodeError::Surrogate { value });
    }
    if rune > MAX_RUNE {
        return Err(DecodeError::OutOfRange { value });
    }
    Ok((rune, len))
}
