//! Clock-source selectors for the DSI PHY and the DPI pixel path.
//!
//! Mirrors the platform capability switch of the original vocabulary: with
//! the `esp32p4` feature the aliases resolve to the platform's clock-tree
//! enums, otherwise they fall back to a plain integer so dependent code
//! compiles on targets without the peripheral.

#[cfg(feature = "esp32p4")]
pub use soc::{DpiClockSource, PhyClockSource};

/// Clock feeding the D-PHY on targets without a DSI peripheral.
#[cfg(not(feature = "esp32p4"))]
pub type PhyClockSource = i32;

/// Clock feeding the DPI pixel path on targets without a DSI peripheral.
#[cfg(not(feature = "esp32p4"))]
pub type DpiClockSource = i32;

#[cfg(feature = "esp32p4")]
pub mod soc {
    use num_enum::{IntoPrimitive, TryFromPrimitive};
    use strum_macros::Display;

    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Clock that can feed the MIPI DSI D-PHY.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default, TryFromPrimitive, IntoPrimitive)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[repr(u8)]
    pub enum PhyClockSource {
        /// Internal fast RC oscillator
        RcFast = 0,
        /// 20 MHz PLL tap, the power-on mux selection
        #[default]
        Pll20M = 1,
        /// 25 MHz PLL tap
        Pll25M = 2,
    }

    /// Clock that can feed the DPI pixel path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default, TryFromPrimitive, IntoPrimitive)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[repr(u8)]
    pub enum DpiClockSource {
        /// Crystal oscillator
        Xtal = 0,
        /// 160 MHz PLL tap, the power-on mux selection
        #[default]
        Pll160M = 1,
        /// 240 MHz PLL tap
        Pll240M = 2,
    }
}
