pub const MAX_UNIT_LEN: usize = 4;

pub const CONTINUATION_MASK: u8 = 0b1100_0000;
pub const CONTINUATION_TAG: u8 = 0b1000_0000;
pub const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

pub const ASCII_RANGE: std::ops::RangeInclusive<u8> = 0x00..=0x7F;
pub const LEAD2_RANGE: std::ops::RangeInclusive<u8> = 0xC0..=0xDF;
pub const LEAD3_RANGE: std::ops::RangeInclusive<u8> = 0xE0..=0xEF;
pub const LEAD4_RANGE: std::ops::RangeInclusive<u8> = 0xF0..=0xF7;

pub const LEAD2_PAYLOAD: u8 = 0b0001_1111;
pub const LEAD3_PAYLOAD: u8 = 0b0000_1111;
pub const LEAD4_PAYLOAD: u8 = 0b0000_0111;

/// Smallest value that may be encoded with 2, 3 and 4 bytes.
pub const MIN_VALUE_BY_LEN: [u32; MAX_UNIT_LEN + 1] = [0, 0, 0x80, 0x800, 0x1_0000];
