pub mod config;
pub mod error;
pub mod relay;
pub mod slack;
pub mod status;
pub mod store;
pub mod trigger;

pub use error::{RelayError, Result};
pub use status::{DeviceStatus, StatusReport};
pub use store::StatusStore;
pub use trigger::Trigger;
