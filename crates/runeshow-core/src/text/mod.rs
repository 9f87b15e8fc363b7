//! Text decoding modules.
//!
//! Each encoding follows the same layering:
//! - `layout`: bit masks and value ranges
//! - `reader`: safe access to the input (UTF-8 only)
//! - `parser`: decode one unit, explaining failures
//! - `positions`: lossy position-wise iteration and validity
//! - `error`: explicit decode errors
//!
//! `rune` holds the decoded-unit type shared by both encodings.

pub mod rune;
pub mod utf16;
pub mod utf8;

pub use rune::{
    MAX_RUNE, REPLACEMENT_RUNE, Rune, UnicodeDisplay, encode_rune, format_unicode, is_printable,
    rune_len, to_char, valid_rune,
};
