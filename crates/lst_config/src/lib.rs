//! Persisted observer settings and inbound configuration messages.
//!
//! This crate provides:
//! - `SettingsStore`, a single-key binary record store (existence-checked
//!   read, unconditional overwrite)
//! - `ObserverConfig`, the longitude record the conversion pipeline reads
//! - `ConfigMessage`, the decoded phone-side configuration payload

pub mod error;
pub mod message;
pub mod store;

pub use error::ConfigError;
pub use message::{ConfigMessage, LONGITUDE_SCALE};
pub use store::{ObserverConfig, SettingsStore};
