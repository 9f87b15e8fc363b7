//! Fixed demonstration scripts.
//!
//! Every scenario writes human-readable lines to the given sink in program
//! order. Raw input bytes are written as-is, so a terminal shows whatever it
//! makes of invalid sequences.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::text::utf8::{is_valid_utf8, utf8_positions};
use crate::text::utf16::{is_valid_utf16, repair_utf16, utf16_positions, utf16_to_string_lossy};
use crate::text::{Rune, UnicodeDisplay};

/// An encoded surrogate half (U+D83D) followed by a NUL terminator.
pub const SURROGATE_BYTES: &[u8] = b"\xed\xa0\xbd\x00";
/// Three characters, three bytes each.
pub const NIHONGO: &str = "日本語";
/// A surrogate half stored directly in a rune.
pub const SURROGATE_RUNE: Rune = 0xD83D;
/// Not even a code point.
pub const OUT_OF_RANGE_RUNE: Rune = 0xFFFFFFF;
/// High half of the U+1F4A9 surrogate pair.
pub const HIGH_SURROGATE_UNIT: u16 = 0xD83D;
/// Low half of the U+1F4A9 surrogate pair.
pub const LOW_SURROGATE_UNIT: u16 = 0xDCA9;

/// Which demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Byte strings holding invalid UTF-8, and out-of-domain runes.
    #[default]
    Bytes,
    /// UTF-16 with a proper surrogate pair versus a lone surrogate.
    SurrogatePair,
    /// A lone surrogate repaired when wrapped into a well-formed string.
    LoneSurrogate,
    /// All of the above, in order.
    All,
}

impl Scenario {
    pub const NAMES: [&'static str; 4] = ["bytes", "surrogate-pair", "lone-surrogate", "all"];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Bytes => "bytes",
            Scenario::SurrogatePair => "surrogate-pair",
            Scenario::LoneSurrogate => "lone-surrogate",
            Scenario::All => "all",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{0}' (expected one of: bytes, surrogate-pair, lone-surrogate, all)")]
pub struct UnknownScenario(pub String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(Scenario::Bytes),
            "surrogate-pair" => Ok(Scenario::SurrogatePair),
            "lone-surrogate" => Ok(Scenario::LoneSurrogate),
            "all" => Ok(Scenario::All),
            other => Err(UnknownScenario(other.to_string())),
        }
    }
}

/// Runs `scenario`, writing its output to `out`.
///
/// # Examples
/// ```
/// use runeshow_core::{Scenario, run_scenario};
///
/// let mut out = Vec::new();
/// run_scenario(Scenario::Bytes, &mut out)?;
/// assert!(out.ends_with(b"Rune? 268435455\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run_scenario<W: Write>(scenario: Scenario, out: &mut W) -> io::Result<()> {
    tracing::debug!(%scenario, "running demonstration");
    match scenario {
        Scenario::Bytes => byte_strings(out),
        Scenario::SurrogatePair => surrogate_pair(out),
        Scenario::LoneSurrogate => lone_surrogate(out),
        Scenario::All => {
            byte_strings(out)?;
            writeln!(out)?;
            surrogate_pair(out)?;
            writeln!(out)?;
            lone_surrogate(out)
        }
    }
}

/// Prints validity and the position-wise trace of `bytes`.
pub fn show_string<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"For string \"")?;
    out.write_all(bytes)?;
    writeln!(out, "\" (Valid? {}):", is_valid_utf8(bytes))?;
    for (offset, rune) in utf8_positions(bytes) {
        writeln!(
            out,
            "  {} starts at byte position {}",
            UnicodeDisplay(rune),
            offset
        )?;
    }
    Ok(())
}

/// Prints validity and the position-wise trace of UTF-16 `units`.
pub fn show_units<W: Write>(out: &mut W, units: &[u16]) -> io::Result<()> {
    writeln!(
        out,
        "For code units [{}] (Valid? {}):",
        hex_units(units),
        is_valid_utf16(units)
    )?;
    for (index, rune) in utf16_positions(units) {
        writeln!(
            out,
            "  {} starts at code unit {}",
            UnicodeDisplay(rune),
            index
        )?;
    }
    Ok(())
}

fn byte_strings<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all("Hello, 世界 ".as_bytes())?;
    out.write_all(SURROGATE_BYTES)?;
    writeln!(out)?;
    show_string(out, NIHONGO.as_bytes())?;
    show_string(out, SURROGATE_BYTES)?;

    let surrogate: Rune = SURROGATE_RUNE;
    writeln!(out, "Rune? {surrogate}")?;
    let out_of_range: Rune = OUT_OF_RANGE_RUNE;
    writeln!(out, "Rune? {out_of_range}")?;
    Ok(())
}

fn surrogate_pair<W: Write>(out: &mut W) -> io::Result<()> {
    let mut paired: Vec<u16> = "ABC: ".encode_utf16().collect();
    let mut lone = paired.clone();
    paired.extend([HIGH_SURROGATE_UNIT, LOW_SURROGATE_UNIT]);
    lone.push(HIGH_SURROGATE_UNIT);

    writeln!(out, "Surrogate pair (well-formed UTF-16):")?;
    describe_units(out, &paired)?;
    writeln!(out, "Lone surrogate (not well-formed UTF-16):")?;
    describe_units(out, &lone)
}

fn describe_units<W: Write>(out: &mut W, units: &[u16]) -> io::Result<()> {
    writeln!(
        out,
        "  length = {} (Valid? {})",
        units.len(),
        is_valid_utf16(units)
    )?;
    writeln!(out, "  {}", utf16_to_string_lossy(units))
}

fn lone_surrogate<W: Write>(out: &mut W) -> io::Result<()> {
    let original = [HIGH_SURROGATE_UNIT];
    writeln!(out, "Original code units: {}", hex_units(&original))?;

    let mut wrapped: Vec<u16> = vec![u16::from(b'|')];
    wrapped.extend_from_slice(&original);
    wrapped.push(u16::from(b'|'));
    let repaired = repair_utf16(&wrapped);

    writeln!(out, "Wrapped: {}", utf16_to_string_lossy(&repaired))?;
    writeln!(out, "length = {}", repaired.len())?;
    writeln!(out, "code units = [{}]", hex_units(&repaired))
}

fn hex_units(units: &[u16]) -> String {
    units
        .iter()
        .map(|unit| format!("0x{unit:x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(scenario: Scenario) -> Vec<u8> {
        let mut out = Vec::new();
        run_scenario(scenario, &mut out).expect("write to vec");
        out
    }

    #[test]
    fn scenario_names_parse_back() {
        for name in Scenario::NAMES {
            let scenario: Scenario = name.parse().unwrap();
            assert_eq!(scenario.as_str(), name);
        }
        let err = "nope".parse::<Scenario>().unwrap_err();
        assert!(err.to_string().contains("unknown scenario 'nope'"));
    }

    #[test]
    fn show_string_writes_raw_bytes() {
        let mut out = Vec::new();
        show_string(&mut out, b"\xff\x00").unwrap();
        let mut expected = b"For string \"\xff\x00\" (Valid? false):\n".to_vec();
        expected.extend_from_slice("  U+FFFD '\u{FFFD}' starts at byte position 0\n".as_bytes());
        expected.extend_from_slice(b"  U+0000 starts at byte position 1\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn show_units_traces_code_units() {
        let mut out = Vec::new();
        show_units(&mut out, &[0x41, 0xD83D]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "For code units [0x41, 0xd83d] (Valid? false):\n\
             \x20 U+0041 'A' starts at code unit 0\n\
             \x20 U+FFFD '\u{FFFD}' starts at code unit 1\n"
        );
    }

    #[test]
    fn byte_strings_print_out_of_domain_runes() {
        let out = render(Scenario::Bytes);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Rune? 55357\n"));
        assert!(text.contains("Rune? 268435455\n"));
        assert!(text.contains("  U+8A9E '語' starts at byte position 6\n"));
    }

    #[test]
    fn surrogate_pair_lengths() {
        let out = String::from_utf8(render(Scenario::SurrogatePair)).unwrap();
        assert_eq!(
            out,
            "Surrogate pair (well-formed UTF-16):\n\
             \x20 length = 7 (Valid? true)\n\
             \x20 ABC: 💩\n\
             Lone surrogate (not well-formed UTF-16):\n\
             \x20 length = 6 (Valid? false)\n\
             \x20 ABC: \u{FFFD}\n"
        );
    }

    #[test]
    fn lone_surrogate_is_repaired_in_place() {
        let out = String::from_utf8(render(Scenario::LoneSurrogate)).unwrap();
        assert_eq!(
            out,
            "Original code units: 0xd83d\n\
             Wrapped: |\u{FFFD}|\n\
             length = 3\n\
             code units = [0x7c, 0xfffd, 0x7c]\n"
        );
    }

    #[test]
    fn all_runs_every_scenario() {
        let all = render(Scenario::All);
        let mut expected = render(Scenario::Bytes);
        expected.push(b'\n');
        expected.extend(render(Scenario::SurrogatePair));
        expected.push(b'\n');
        expected.extend(render(Scenario::LoneSurrogate));
        assert_eq!(all, expected);
    }
}
