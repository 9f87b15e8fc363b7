use std::iter::FusedIterator;

use super::error::Utf16Error;
use super::layout;
use super::parser::decode_unit;
use crate::text::rune::{REPLACEMENT_RUNE, Rune};

/// Returns true iff every surrogate in `units` is part of a proper pair.
pub fn is_valid_utf16(units: &[u16]) -> bool {
    char::decode_utf16(units.iter().copied()).all(|decoded| decoded.is_ok())
}

/// Iterates `(code-unit index, rune)` pairs over `units`.
///
/// An unpaired surrogate yields [`REPLACEMENT_RUNE`] and the scan moves on
/// by one code unit.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf16::utf16_positions;
///
/// let pairs: Vec<_> = utf16_positions(&[0x41, 0xD83D, 0xDCA9, 0xD83D]).collect();
/// assert_eq!(pairs, vec![(0, 0x41), (1, 0x1F4A9), (3, 0xFFFD)]);
/// ```
pub fn utf16_positions(units: &[u16]) -> Utf16Positions<'_> {
    Utf16Positions { units, index: 0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Step {
    pub index: usize,
    pub rune: Rune,
    pub width: usize,
    pub error: Option<Utf16Error>,
}

#[derive(Debug, Clone)]
pub struct Utf16Positions<'a> {
    units: &'a [u16],
    index: usize,
}

impl Utf16Positions<'_> {
    pub fn next_step(&mut self) -> Option<Utf16Step> {
        let rest = self.units.get(self.index..).filter(|rest| !rest.is_empty())?;
        let step = match decode_unit(rest) {
            Ok((rune, width)) => Utf16Step {
                index: self.index,
                rune,
                width,
                error: None,
            },
            Err(error) => Utf16Step {
                index: self.index,
                rune: REPLACEMENT_RUNE,
                width: 1,
                error: Some(error),
            },
        };
        self.index += step.width;
        Some(step)
    }
}

impl Iterator for Utf16Positions<'_> {
    type Item = (usize, Rune);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(|step| (step.index, step.rune))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len().saturating_sub(self.index);
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Utf16Positions<'_> {}

/// Replaces each unpaired surrogate with U+FFFD, keeping the length.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf16::repair_utf16;
///
/// assert_eq!(repair_utf16(&[0x7C, 0xD83D, 0x7C]), vec![0x7C, 0xFFFD, 0x7C]);
/// ```
pub fn repair_utf16(units: &[u16]) -> Vec<u16> {
    let mut repaired = Vec::with_capacity(units.len());
    let mut positions = utf16_positions(units);
    while let Some(step) = positions.next_step() {
        if step.error.is_some() {
            repaired.push(layout::REPLACEMENT_UNIT);
        } else {
            repaired.extend_from_slice(&units[step.index..step.index + step.width]);
        }
    }
    repaired
}

/// Renders `units` as a `String`, substituting U+FFFD for unpaired surrogates.
pub fn utf16_to_string_lossy(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
