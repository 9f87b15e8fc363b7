use crate::text::format_unicode;
use crate::text::utf8::utf8_positions;
use crate::text::utf16::utf16_positions;
use crate::{DecodeStep, Encoding, REPORT_VERSION, TextReport, ToolInfo};

/// Scans `bytes` as UTF-8 and summarizes every step.
pub fn inspect_utf8(bytes: &[u8]) -> TextReport {
    let mut steps = Vec::new();
    let mut positions = utf8_positions(bytes);
    while let Some(step) = positions.next_step() {
        if let Some(error) = step.error.as_ref() {
            tracing::trace!(offset = step.offset, %error, "substituted U+FFFD");
        }
        steps.push(DecodeStep {
            offset: step.offset,
            rune: step.rune,
            unicode: format_unicode(step.rune),
            width: step.width,
            error: step.error.map(|error| error.to_string()),
        });
    }
    finish(Encoding::Utf8, bytes.len(), steps)
}

/// Scans `units` as UTF-16 and summarizes every step.
pub fn inspect_utf16(units: &[u16]) -> TextReport {
    let mut steps = Vec::new();
    let mut positions = utf16_positions(units);
    while let Some(step) = positions.next_step() {
        if let Some(error) = step.error.as_ref() {
            tracing::trace!(index = step.index, %error, "substituted U+FFFD");
        }
        steps.push(DecodeStep {
            offset: step.index,
            rune: step.rune,
            unicode: format_unicode(step.rune),
            width: step.width,
            error: step.error.map(|error| error.to_string()),
        });
    }
    finish(Encoding::Utf16, units.len(), steps)
}

fn finish(encoding: Encoding, length: usize, steps: Vec<DecodeStep>) -> TextReport {
    let replacements = steps.iter().filter(|step| step.is_replacement()).count();
    let valid = replacements == 0;
    tracing::debug!(
        encoding = encoding.as_str(),
        length,
        steps = steps.len(),
        replacements,
        valid,
        "inspected input"
    );
    TextReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo::default(),
        encoding,
        length,
        valid,
        replacements,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_report_counts_replacements() {
        let report = inspect_utf8(b"\xed\xa0\xbd\x00");
        assert!(!report.valid);
        assert_eq!(report.length, 4);
        assert_eq!(report.replacements, 3);
        let offsets: Vec<_> = report.steps.iter().map(|step| step.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert_eq!(
            report.steps[0].error.as_deref(),
            Some("encoded surrogate half: U+D83D")
        );
        assert_eq!(
            report.steps[1].error.as_deref(),
            Some("invalid lead byte: 0xa0")
        );
        assert_eq!(report.steps[3].unicode, "U+0000");
    }

    #[test]
    fn utf8_report_widths_cover_valid_input() {
        let text = "日本語";
        let report = inspect_utf8(text.as_bytes());
        assert!(report.valid);
        assert_eq!(report.replacements, 0);
        let total: usize = report.steps.iter().map(|step| step.width).sum();
        assert_eq!(total, text.len());
        assert_eq!(report.steps[1].unicode, "U+672C '本'");
    }

    #[test]
    fn utf16_report_uses_code_unit_offsets() {
        let report = inspect_utf16(&[0x41, 0xD83D, 0xDCA9, 0xDCA9]);
        assert!(!report.valid);
        assert_eq!(report.length, 4);
        let offsets: Vec<_> = report.steps.iter().map(|step| step.offset).collect();
        assert_eq!(offsets, vec![0, 1, 3]);
        assert_eq!(report.steps[1].width, 2);
        assert_eq!(report.steps[1].rune, 0x1F4A9);
        assert_eq!(
            report.steps[2].error.as_deref(),
            Some("unpaired low surrogate: 0xdca9")
        );
    }

    #[test]
    fn empty_input_is_valid() {
        let report = inspect_utf8(b"");
        assert!(report.valid);
        assert!(report.steps.is_empty());
    }
}
