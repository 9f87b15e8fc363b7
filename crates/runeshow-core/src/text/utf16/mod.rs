//! UTF-16 decoding over code-unit slices.
//!
//! Only unpaired surrogates can be malformed here. They are reported the
//! same way as UTF-8 failures: U+FFFD and a single-unit step.

pub mod error;
pub mod layout;
pub mod parser;
pub mod positions;

pub use error::Utf16Error;
pub use parser::decode_unit;
pub use positions::{
    Utf16Positions, Utf16Step, is_valid_utf16, repair_utf16, utf16_positions,
    utf16_to_string_lossy,
};
