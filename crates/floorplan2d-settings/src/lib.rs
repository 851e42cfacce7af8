//! floorplan2d Settings Crate
//!
//! Loads, validates and saves the viewer configuration.

pub mod config;
pub mod error;

pub use config::{InteractionSettings, RulerSettings, ViewerSettings, ViewportSettings};
pub use error::{SettingsError, SettingsResult};
