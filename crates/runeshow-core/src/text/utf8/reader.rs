use super::error::DecodeError;
use super::layout;

pub struct Utf8Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn read_lead(&self) -> Result<u8, DecodeError> {
        self.bytes.first().copied().ok_or(DecodeError::Empty)
    }

    /// Reads the payload bits of the continuation byte at `offset`.
    pub fn read_continuation(&self, offset: usize, needed: usize) -> Result<u32, DecodeError> {
        let value = self
            .bytes
            .get(offset)
            .copied()
            .ok_or(DecodeError::Truncated {
                needed,
                actual: self.bytes.len(),
            })?;
        if value & layout::CONTINUATION_MASK != layout::CONTINUATION_TAG {
            return Err(DecodeError::InvalidContinuation { offset, value });
        }
        Ok(u32::from(value & layout::CONTINUATION_PAYLOAD))
    }
}
