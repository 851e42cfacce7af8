//! # floorplan2d Core
//!
//! Core types shared by the floorplan2d viewer crates: the interaction
//! [`Mode`] enumeration, scene cursor points, snap masks, element kinds,
//! and the error taxonomy for contract violations.

pub mod constants;
pub mod error;
pub mod mode;
pub mod types;

pub use error::{Error, PickError, Result, ViewportError};
pub use mode::Mode;
pub use types::{CursorPoint, ElementKind, SnapMask};
