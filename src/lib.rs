pub mod clock;
pub mod constants;
pub mod data_type;
pub mod error;
pub mod pattern;

// Re-export the core vocabulary for easy access
pub use clock::{DpiClockSource, PhyClockSource};
pub use data_type::{DataId, DataType};
pub use error::DsiError;
pub use pattern::PatternType;
