//! # floorplan2d
//!
//! Interactive core of a 2D floor-plan viewer. Raw pointer events on a
//! pannable, zoomable drawing surface become scene-editing calls on external
//! action handlers.
//!
//! ## Architecture
//!
//! floorplan2d is organized as a workspace with multiple crates:
//!
//! 1. **floorplan2d-core** - Modes, scene points, snap masks, element kinds, errors
//! 2. **floorplan2d-viewer** - Viewport math, coordinate mapping, element picking,
//!    the mode dispatcher and the reference collaborator
//! 3. **floorplan2d-settings** - Viewer configuration persistence
//! 4. **floorplan2d** - Session-script replay binary that integrates all crates

pub mod script;

pub use floorplan2d_core::{
    CursorPoint, ElementKind, Error, Mode, PickError, Result, SnapMask, ViewportError,
};
pub use floorplan2d_settings::{SettingsError, ViewerSettings};
pub use floorplan2d_viewer::{
    ActionCall, Collaborators, ElementData, ElementTree, PointerEvent, SessionRecorder,
    SurfaceTree, Tool, Viewer2D, ViewerFrame, ViewerOptions, ViewerSnapshot, ViewportTransform,
};
pub use script::{replay, Replay, ScriptElement, ScriptStep, SessionScript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout for replay output
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
