use std::iter::FusedIterator;

use super::error::DecodeError;
use super::parser::decode_rune;
use crate::text::rune::{REPLACEMENT_RUNE, Rune};

/// Returns true iff `bytes` is entirely well-formed UTF-8.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf8::is_valid_utf8;
///
/// assert!(is_valid_utf8("日本語".as_bytes()));
/// assert!(!is_valid_utf8(b"\xed\xa0\xbd\x00"));
/// ```
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

/// Iterates `(byte offset, rune)` pairs over `bytes`.
///
/// A position that does not start a well-formed unit yields
/// [`REPLACEMENT_RUNE`] and the scan moves on by a single byte.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf8::utf8_positions;
///
/// let pairs: Vec<_> = utf8_positions(b"\xff\x00").collect();
/// assert_eq!(pairs, vec![(0, 0xFFFD), (1, 0)]);
/// ```
pub fn utf8_positions(bytes: &[u8]) -> Utf8Positions<'_> {
    Utf8Positions { bytes, offset: 0 }
}

/// One iteration step with the detail the plain pair leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Step {
    pub offset: usize,
    pub rune: Rune,
    /// Bytes consumed; always 1 for a substitution.
    pub width: usize,
    /// Present when `rune` is a substitution.
    pub error: Option<DecodeError>,
}

#[derive(Debug, Clone)]
pub struct Utf8Positions<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Utf8Positions<'_> {
    /// Byte offset of the next step.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_step(&mut self) -> Option<Utf8Step> {
        let rest = self.bytes.get(self.offset..).filter(|rest| !rest.is_empty())?;
        let step = match decode_rune(rest) {
            Ok((rune, width)) => Utf8Step {
                offset: self.offset,
                rune,
                width,
                error: None,
            },
            Err(error) => Utf8Step {
                offset: self.offset,
                rune: REPLACEMENT_RUNE,
                width: 1,
                error: Some(error),
            },
        };
        self.offset += step.width;
        Some(step)
    }
}

impl Iterator for Utf8Positions<'_> {
    type Item = (usize, Rune);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(|step| (step.offset, step.rune))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len().saturating_sub(self.offset);
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Utf8Positions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::rune::rune_len;

    #[test]
    fn nihongo_steps_every_three_bytes() {
        let pairs: Vec<_> = utf8_positions("日本語".as_bytes()).collect();
        assert_eq!(pairs, vec![(0, 0x65E5), (3, 0x672C), (6, 0x8A9E)]);
    }

    #[test]
    fn encoded_surrogate_is_skipped_byte_by_byte() {
        let pairs: Vec<_> = utf8_positions(b"\xed\xa0\xbd\x00").collect();
        assert_eq!(
            pairs,
            vec![
                (0, REPLACEMENT_RUNE),
                (1, REPLACEMENT_RUNE),
                (2, REPLACEMENT_RUNE),
                (3, 0)
            ]
        );
    }

    #[test]
    fn bad_lead_then_terminator_yields_two_pairs() {
        for lead in [0x80u8, 0xBF, 0xC0, 0xF5, 0xFF] {
            let pairs: Vec<_> = utf8_positions(&[lead, 0x00]).collect();
            assert_eq!(pairs, vec![(0, REPLACEMENT_RUNE), (1, 0)], "lead 0x{lead:02x}");
        }
    }

    #[test]
    fn truncated_tail_is_replaced_per_byte() {
        let pairs: Vec<_> = utf8_positions(b"a\xe6\x97").collect();
        assert_eq!(
            pairs,
            vec![(0, 0x61), (1, REPLACEMENT_RUNE), (2, REPLACEMENT_RUNE)]
        );
    }

    #[test]
    fn valid_widths_add_up_to_the_input_length() {
        let text = "a\u{7FF}\u{FFFD}\u{10FFFF}é";
        let mut total = 0;
        let mut last = None;
        for (offset, rune) in utf8_positions(text.as_bytes()) {
            assert_eq!(offset, total);
            if let Some(prev) = last {
                assert!(offset > prev);
            }
            last = Some(offset);
            total += rune_len(rune).unwrap();
        }
        assert_eq!(total, text.len());
    }

    #[test]
    fn steps_carry_the_decode_error() {
        let mut positions = utf8_positions(b"\xc0\x80");
        let step = positions.next_step().unwrap();
        assert_eq!(step.width, 1);
        assert_eq!(
            step.error,
            Some(DecodeError::Overlong { value: 0, len: 2 })
        );
        assert_eq!(positions.offset(), 1);
        let step = positions.next_step().unwrap();
        assert_eq!(step.error, Some(DecodeError::InvalidLeadByte { value: 0x80 }));
        assert!(positions.next_step().is_none());
    }

    #[test]
    fn iteration_can_be_restarted() {
        let positions = utf8_positions("日本".as_bytes());
        let first: Vec<_> = positions.clone().collect();
        let second: Vec<_> = positions.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(is_valid_utf8(b""));
        assert_eq!(utf8_positions(b"").next(), None);
    }

    #[test]
    fn validity_agrees_with_substitutions() {
        let samples: [&[u8]; 8] = [
            b"plain ascii",
            "日本語".as_bytes(),
            b"\xed\xa0\xbd\x00",
            b"\xc0\x80",
            b"\xf4\x90\x80\x80",
            b"\xe6\x97",
            b"\xf0\x9f\x92\xa9",
            b"ok\xffok",
        ];
        for bytes in samples {
            assert!(utf8_positions(bytes).count() <= bytes.len());
            let mut positions = utf8_positions(bytes);
            let mut clean = true;
            while let Some(step) = positions.next_step() {
                clean &= step.error.is_none();
            }
            assert_eq!(is_valid_utf8(bytes), clean, "{bytes:02x?}");
        }
    }
}
