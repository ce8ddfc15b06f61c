//! Common test utilities and shared imports

// Allow unused imports since this module is shared across test files
// and not every item is used in every file
#[allow(unused_imports)]
pub use hex;
#[allow(unused_imports)]
pub use mipi_dsi_types::clock::{DpiClockSource, PhyClockSource};
#[allow(unused_imports)]
pub use mipi_dsi_types::constants::*;
#[allow(unused_imports)]
pub use mipi_dsi_types::data_type::{DataId, DataType};
#[allow(unused_imports)]
pub use mipi_dsi_types::error::DsiError;
#[allow(unused_imports)]
pub use mipi_dsi_types::pattern::PatternType;
#[allow(unused_imports)]
pub use num_enum::FromPrimitive;

/// Decode hex string to bytes for testing
#[allow(dead_code)]
pub fn hex_to_bytes(hex_data: &str) -> Vec<u8> {
    hex::decode(hex_data).expect("Failed to decode hex")
}

/// Every named data type with its wire value, in the order of the vocabulary
#[allow(dead_code)]
pub const DATA_TYPE_TABLE: &[(DataType, u8)] = &[
    (DataType::VsyncStart, 0x01),
    (DataType::VsyncEnd, 0x11),
    (DataType::HsyncStart, 0x21),
    (DataType::HsyncEnd, 0x31),
    (DataType::EotPacket, 0x08),
    (DataType::ColorModeOff, 0x02),
    (DataType::ColorModeOn, 0x12),
    (DataType::ShutdownPeripheral, 0x22),
    (DataType::TurnOnPeripheral, 0x32),
    (DataType::GenericShortWrite0, 0x03),
    (DataType::GenericShortWrite1, 0x13),
    (DataType::GenericShortWrite2, 0x23),
    (DataType::GenericReadRequest0, 0x04),
    (DataType::GenericReadRequest1, 0x14),
    (DataType::GenericReadRequest2, 0x24),
    (DataType::DcsShortWrite0, 0x05),
    (DataType::DcsShortWrite1, 0x15),
    (DataType::DcsRead0, 0x06),
    (DataType::SetMaximumReturnPacket, 0x37),
    (DataType::NullPacket, 0x09),
    (DataType::BlankingPacket, 0x19),
    (DataType::GenericLongWrite, 0x29),
    (DataType::DcsLongWrite, 0x39),
    (DataType::PackedPixelStreamRgb16, 0x0E),
    (DataType::PackedPixelStreamRgb18, 0x1E),
    (DataType::LooselyPixelStreamRgb18, 0x2E),
    (DataType::PackedPixelStreamRgb24, 0x3E),
];
