use crate::pattern::PatternType;
use num_enum::TryFromPrimitiveError;
use thiserror::Error;

/// The primary error type for the `mipi-dsi-types` library.
#[derive(Error, Debug)]
pub enum DsiError {
    #[error("invalid test pattern identifier: {0:#04x} (valid range is 0..=3)")]
    InvalidPatternType(u8),

    #[error("invalid clock source selector: {0:#04x}")]
    InvalidClockSource(u8),

    #[error("virtual channel out of range: {0} (DSI addresses channels 0..=3)")]
    InvalidVirtualChannel(u8),

    #[error("data type does not fit in 6 bits: {0:#04x}")]
    InvalidDataType(u8),
}

impl From<TryFromPrimitiveError<PatternType>> for DsiError {
    fn from(e: TryFromPrimitiveError<PatternType>) -> Self {
        DsiError::InvalidPatternType(e.number)
    }
}

#[cfg(feature = "esp32p4")]
impl From<TryFromPrimitiveError<crate::clock::PhyClockSource>> for DsiError {
    fn from(e: TryFromPrimitiveError<crate::clock::PhyClockSource>) -> Self {
        DsiError::InvalidClockSource(e.number)
    }
}

#[cfg(feature = "esp32p4")]
impl From<TryFromPrimitiveError<crate::clock::DpiClockSource>> for DsiError {
    fn from(e: TryFromPrimitiveError<crate::clock::DpiClockSource>) -> Self {
        DsiError::InvalidClockSource(e.number)
    }
}
