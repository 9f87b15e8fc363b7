//! UTF-8 decoding.
//!
//! `parser` decodes one unit and explains failures; `positions` walks a
//! whole byte sequence, turning every failure into U+FFFD and a one-byte
//! step so that the scan always terminates. Bit masks and lead-byte ranges
//! live in `layout`, safe byte access in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod positions;
pub mod reader;

pub use error::DecodeError;
pub use parser::decode_rune;
pub use positions::{Utf8Positions, Utf8Step, is_valid_utf8, utf8_positions};
