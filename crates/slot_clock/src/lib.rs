pub mod clock;
pub mod config;
pub mod conversions;
pub mod error;
pub mod registry;
pub mod types;

pub use clock::{current_slot, ManualTimeSource, SlotClock, SystemTimeSource, TimeSource};
pub use registry::{Network, NetworkRegistry};
