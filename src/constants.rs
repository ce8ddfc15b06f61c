// Fixed sizes and masks of the MIPI DSI packet layout

/// Size of a short packet (4 bytes: DI, two data bytes, ECC)
pub const SHORT_PACKET_SIZE: usize = 4;

/// Size of a packet header, short and long alike (4 bytes)
pub const PACKET_HEADER_SIZE: usize = 4;

/// Size of the checksum trailing a long-packet payload (2 bytes)
pub const CHECKSUM_SIZE: usize = 2;

/// Long-packet overhead: header plus payload checksum (6 bytes)
pub const LONG_PACKET_OVERHEAD: usize = PACKET_HEADER_SIZE + CHECKSUM_SIZE;

/// Mask for the data type field of the Data Identifier byte
pub const DATA_TYPE_MASK: u8 = 0x3F;

/// Mask for the virtual channel field of the Data Identifier byte
pub const VIRTUAL_CHANNEL_MASK: u8 = 0xC0;

/// Shift of the virtual channel field within the Data Identifier byte
pub const VIRTUAL_CHANNEL_SHIFT: u8 = 6;

/// Number of virtual channels addressable on one link
pub const VIRTUAL_CHANNEL_COUNT: u8 = 4;
