use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Test pattern generated by the DSI host controller instead of the normal
/// pixel stream. Closed set: anything outside 0..=3 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PatternType {
    /// No pattern, pixels come from the DPI interface
    #[default]
    None = 0,
    /// Vertical color bars
    BarVertical = 1,
    /// Horizontal color bars
    BarHorizontal = 2,
    /// Vertical Bit Error Rate (BER) pattern
    BerVertical = 3,
}
