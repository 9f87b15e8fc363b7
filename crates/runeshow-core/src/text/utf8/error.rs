use thiserror::Error;

/// Why a single UTF-8 unit failed to decode.
///
/// Iterators never surface this; it explains what a substituted
/// U+FFFD stands for.
///
/// # Examples
/// ```
/// use runeshow_core::text::utf8::{DecodeError, decode_rune};
///
/// let err = decode_rune(&[0xED, 0xA0, 0xBD]).unwrap_err();
/// assert_eq!(err, DecodeError::Surrogate { value: 0xD83D });
/// assert!(err.to_string().contains("surrogate"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no bytes to decode")]
    Empty,
    #[error("invalid lead byte: 0x{value:02x}")]
    InvalidLeadByte { value: u8 },
    #[error("truncated sequence: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("invalid continuation byte 0x{value:02x} at offset {offset}")]
    InvalidContinuation { offset: usize, value: u8 },
    #[error("overlong encoding of U+{value:04X} in {len} bytes")]
    Overlong { value: u32, len: usize },
    #[error("encoded surrogate half: U+{value:04X}")]
    Surrogate { value: u32 },
    #[error("value out of range: 0x{value:X}")]
    OutOfRange { value: u32 },
}
