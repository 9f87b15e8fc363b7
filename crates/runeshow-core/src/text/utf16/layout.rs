pub const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
pub const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

pub const SURROGATE_PAYLOAD: u16 = 0x03FF;
pub const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

pub const REPLACEMENT_UNIT: u16 = 0xFFFD;
