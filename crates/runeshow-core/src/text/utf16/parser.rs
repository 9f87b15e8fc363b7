use super::error::Utf16Error;
use super::layout;
use crate::text::rune::Rune;

/// Decodes the UTF-16 unit at the start of `units`.
///
/// Returns the rune and the number of code units it occupies (1 or 2).
///
/// # Examples
/// ```
/// use runeshow_core::text::utf16::decode_unit;
///
/// assert_eq!(decode_unit(&[0xD83D, 0xDCA9]), Ok((0x1F4A9, 2)));
/// assert!(decode_unit(&[0xD83D]).is_err());
/// ```
pub fn decode_unit(units: &[u16]) -> Result<(Rune, usize), Utf16Error> {
    let first = units.first().copied().ok_or(Utf16Error::Empty)?;
    if layout::LOW_SURROGATES.contains(&first) {
        return Err(Utf16Error::UnpairedLow { value: first });
    }
    if !layout::HIGH_SURROGATES.contains(&first) {
        return Ok((Rune::from(first), 1));
    }
    match units.get(1) {
        Some(&second) if layout::LOW_SURROGATES.contains(&second) => {
            let high = u32::from(first & layout::SURROGATE_PAYLOAD);
            let low = u32::from(second & layout::SURROGATE_PAYLOAD);
            let value = layout::SUPPLEMENTARY_BASE + ((high << 10) | low);
            Ok((value as Rune, 2))
        }
        _ => Err(Utf16Error::UnpairedHigh { value: first }),
    }
}
