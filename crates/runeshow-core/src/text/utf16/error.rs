use thiserror::Error;

/// Why a single UTF-16 unit failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf16Error {
    #[error("no code units to decode")]
    Empty,
    #[error("unpaired high surrogate: 0x{value:04x}")]
    UnpairedHigh { value: u16 },
    #[error("unpaired low surrogate: 0x{value:04x}")]
    UnpairedLow { value: u16 },
}
