//! Error handling for floorplan2d
//!
//! The viewer performs no I/O, so every error here is a contract violation:
//! - Pick errors (malformed element metadata on the drawing surface)
//! - Viewport errors (degenerate geometry fed to the transform engine)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Element picker error type
///
/// Raised when an element root on the drawing surface was built without the
/// metadata the picker relies on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// A required attribute is missing from an element root
    #[error("Element root is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The attribute name.
        attribute: &'static str,
    },

    /// The prototype attribute names no known element kind
    #[error("Unknown element prototype: {prototype}")]
    UnknownPrototype {
        /// The prototype value found on the element root.
        prototype: String,
    },

    /// The node handle does not belong to the surface being picked
    #[error("Node {node} does not exist on the drawing surface")]
    UnknownNode {
        /// Debug rendering of the node handle.
        node: String,
    },
}

/// Viewport transform error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// Scene bounds with zero (or negative) extent cannot be fitted
    #[error("Degenerate scene size {width}x{height}")]
    DegenerateScene {
        /// Scene width in scene units.
        width: f64,
        /// Scene height in scene units.
        height: f64,
    },

    /// Viewer with zero (or negative) extent
    #[error("Degenerate viewer size {width}x{height}")]
    DegenerateViewer {
        /// Viewer width in pixels.
        width: f64,
        /// Viewer height in pixels.
        height: f64,
    },

    /// A zoom factor or coordinate that is not a finite positive number
    #[error("Invalid zoom factor: {factor}")]
    InvalidFactor {
        /// The rejected factor.
        factor: f64,
    },

    /// Matrix with a zero scale cannot be inverted
    #[error("Viewport matrix is not invertible")]
    Singular,
}

/// Main error type for floorplan2d
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Picker error
    #[error(transparent)]
    Pick(#[from] PickError),

    /// Viewport error
    #[error(transparent)]
    Viewport(#[from] ViewportError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a picker error
    pub fn is_pick_error(&self) -> bool {
        matches!(self, Error::Pick(_))
    }

    /// Check if this is a viewport error
    pub fn is_viewport_error(&self) -> bool {
        matches!(self, Error::Viewport(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
