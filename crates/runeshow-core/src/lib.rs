//! runeshow core library: inspecting byte strings that may not be text.
//!
//! A byte string carries no guarantee of being valid UTF-8. This crate
//! answers two questions about such input: is it well formed, and what does
//! a position-wise scan see? The scan never fails. Every position that does
//! not start a well-formed unit yields U+FFFD and a one-byte step, so the
//! caller always gets a finite trace covering the whole input.
//!
//! Decoded units are plain [`text::Rune`] integers, not `char`. A rune may
//! hold a surrogate half or a value beyond U+10FFFF; the [`demo`] module
//! prints such values on purpose.
//!
//! Layout:
//! - `text::utf8` / `text::utf16`: decoders (layout/reader/parser/positions)
//! - `input`: parsing of hex and rune literals supplied by users
//! - `inspect`: builds serializable [`TextReport`]s from a scan
//! - `demo`: fixed demonstration scripts written to any `io::Write`
//!
//! # Examples
//! ```
//! use runeshow_core::text::utf8::{is_valid_utf8, utf8_positions};
//!
//! let bytes = b"\xed\xa0\xbd\x00";
//! assert!(!is_valid_utf8(bytes));
//! let offsets: Vec<usize> = utf8_positions(bytes).map(|(offset, _)| offset).collect();
//! assert_eq!(offsets, vec![0, 1, 2, 3]);
//! ```

use serde::{Deserialize, Serialize};

pub mod demo;
pub mod input;
mod inspect;
pub mod text;

pub use demo::{Scenario, UnknownScenario, run_scenario, show_string, show_units};
pub use inspect::{inspect_utf8, inspect_utf16};
pub use text::Rune;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Encoding a report was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "utf-16")]
    Utf16,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16 => "utf-16",
        }
    }

    /// Name of the offset unit used in traces.
    pub fn unit_name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "byte",
            Encoding::Utf16 => "code unit",
        }
    }
}

/// Result of one inspection.
///
/// # Examples
/// ```
/// use runeshow_core::{Encoding, inspect_utf8};
///
/// let report = inspect_utf8("日本語".as_bytes());
/// assert_eq!(report.encoding, Encoding::Utf8);
/// assert!(report.valid);
/// assert_eq!(report.steps.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    /// Report schema version.
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    pub encoding: Encoding,
    /// Input length in bytes (UTF-8) or code units (UTF-16).
    pub length: usize,
    /// Whether the whole input is well formed.
    pub valid: bool,
    /// Number of steps that are U+FFFD substitutions.
    pub replacements: usize,
    /// One entry per iteration step, in input order.
    pub steps: Vec<DecodeStep>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: "runeshow".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One position of a scan.
///
/// # Examples
/// ```
/// use runeshow_core::DecodeStep;
///
/// let step = DecodeStep {
///     offset: 3,
///     rune: 0,
///     unicode: "U+0000".to_string(),
///     width: 1,
///     error: None,
/// };
/// assert!(!step.is_replacement());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStep {
    /// Start of the unit, in bytes or code units.
    pub offset: usize,
    /// Decoded value, or U+FFFD for a substitution.
    pub rune: Rune,
    /// `U+XXXX 'c'` rendering of `rune`.
    pub unicode: String,
    /// Input elements consumed by this step.
    pub width: usize,
    /// Why decoding failed, for substitutions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeStep {
    pub fn is_replacement(&self) -> bool {
        self.error.is_some()
    }
}
