use crate::constants::{DATA_TYPE_MASK, VIRTUAL_CHANNEL_COUNT};
use crate::error::DsiError;
use modular_bitfield::prelude::*;
use num_enum::{FromPrimitive, IntoPrimitive};
use strum_macros::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// MIPI DSI packet Data Type (DT).
///
/// The 6-bit code in a packet's Data Identifier byte that tells the
/// peripheral what the payload is. Values are fixed by the MIPI DSI
/// specification and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoPrimitive, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DataType {
    /// V Sync Start
    VsyncStart = 0x01,
    /// V Sync End
    VsyncEnd = 0x11,
    /// H Sync Start
    HsyncStart = 0x21,
    /// H Sync End
    HsyncEnd = 0x31,
    /// End of Transmission
    EotPacket = 0x08,
    /// Color Mode Off
    ColorModeOff = 0x02,
    /// Color Mode On
    ColorModeOn = 0x12,
    /// Shutdown Peripheral
    ShutdownPeripheral = 0x22,
    /// Turn On Peripheral
    TurnOnPeripheral = 0x32,
    /// Generic Short Write, no parameter
    GenericShortWrite0 = 0x03,
    /// Generic Short Write, 1 byte parameter
    GenericShortWrite1 = 0x13,
    /// Generic Short Write, 2 byte parameter
    GenericShortWrite2 = 0x23,
    /// Generic Read Request, no parameter
    GenericReadRequest0 = 0x04,
    /// Generic Read Request, 1 byte parameter
    GenericReadRequest1 = 0x14,
    /// Generic Read Request, 2 byte parameter
    GenericReadRequest2 = 0x24,
    /// DCS Short Write, no parameter
    DcsShortWrite0 = 0x05,
    /// DCS Short Write, 1 byte parameter
    DcsShortWrite1 = 0x15,
    /// DCS Read, no parameter
    DcsRead0 = 0x06,
    /// Set Maximum Return Packet Size
    SetMaximumReturnPacket = 0x37,
    /// Null Packet, no data
    NullPacket = 0x09,
    /// Blanking Packet, no data
    BlankingPacket = 0x19,
    /// Generic Long Write
    GenericLongWrite = 0x29,
    /// DCS Long Write
    DcsLongWrite = 0x39,
    /// Packed Pixel Stream, RGB565
    PackedPixelStreamRgb16 = 0x0E,
    /// Packed Pixel Stream, RGB666
    PackedPixelStreamRgb18 = 0x1E,
    /// Loosely Packed Pixel Stream, RGB666
    LooselyPixelStreamRgb18 = 0x2E,
    /// Packed Pixel Stream, RGB888
    PackedPixelStreamRgb24 = 0x3E,

    #[num_enum(catch_all)]
    Unknown(u8),
}

impl DataType {
    /// True for data types carried in a long packet (payload + checksum
    /// after the 4-byte header). Long-packet DT codes have a low nibble of
    /// 0x9, 0xC, 0xD or 0xE.
    pub fn is_long(&self) -> bool {
        matches!(
            self,
            DataType::NullPacket
                | DataType::BlankingPacket
                | DataType::GenericLongWrite
                | DataType::DcsLongWrite
                | DataType::PackedPixelStreamRgb16
                | DataType::PackedPixelStreamRgb18
                | DataType::LooselyPixelStreamRgb18
                | DataType::PackedPixelStreamRgb24
        )
    }

    /// True for recognized data types carried in a 4-byte short packet.
    pub fn is_short(&self) -> bool {
        !matches!(self, DataType::Unknown(_)) && !self.is_long()
    }

    /// True if the processor expects return data from the peripheral.
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            DataType::GenericReadRequest0
                | DataType::GenericReadRequest1
                | DataType::GenericReadRequest2
                | DataType::DcsRead0
        )
    }

    /// True for data types that carry a Display Command Set payload.
    pub fn is_dcs(&self) -> bool {
        matches!(
            self,
            DataType::DcsShortWrite0 | DataType::DcsShortWrite1 | DataType::DcsRead0 | DataType::DcsLongWrite
        )
    }

    /// True for the generic (non-DCS) write/read data types.
    pub fn is_generic(&self) -> bool {
        matches!(
            self,
            DataType::GenericShortWrite0
                | DataType::GenericShortWrite1
                | DataType::GenericShortWrite2
                | DataType::GenericReadRequest0
                | DataType::GenericReadRequest1
                | DataType::GenericReadRequest2
                | DataType::GenericLongWrite
        )
    }

    /// True for the V/H sync start and end events of video mode.
    pub fn is_sync_event(&self) -> bool {
        matches!(
            self,
            DataType::VsyncStart | DataType::VsyncEnd | DataType::HsyncStart | DataType::HsyncEnd
        )
    }

    /// True for the RGB pixel stream encodings.
    pub fn is_pixel_stream(&self) -> bool {
        matches!(
            self,
            DataType::PackedPixelStreamRgb16
                | DataType::PackedPixelStreamRgb18
                | DataType::LooselyPixelStreamRgb18
                | DataType::PackedPixelStreamRgb24
        )
    }
}

/// The Data Identifier (DI) byte: virtual channel in the top two bits,
/// data type in the low six.
#[bitfield(bytes = 1)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataId {
    pub data_type: B6,
    pub virtual_channel: B2,
}

impl DataId {
    /// Build a DI byte, rejecting values that do not fit their fields.
    pub fn checked(virtual_channel: u8, data_type: u8) -> Result<Self, DsiError> {
        if virtual_channel >= VIRTUAL_CHANNEL_COUNT {
            return Err(DsiError::InvalidVirtualChannel(virtual_channel));
        }
        if data_type > DATA_TYPE_MASK {
            return Err(DsiError::InvalidDataType(data_type));
        }
        Ok(DataId::new()
            .with_virtual_channel(virtual_channel)
            .with_data_type(data_type))
    }

    /// The data type field decoded into the [`DataType`] vocabulary.
    pub fn data_type_enum(&self) -> DataType {
        DataType::from_primitive(self.data_type())
    }
}

impl From<u8> for DataId {
    fn from(byte: u8) -> Self {
        DataId::from_bytes([byte])
    }
}

impl From<DataId> for u8 {
    fn from(id: DataId) -> Self {
        id.into_bytes()[0]
    }
}
