//! Viewer options and the per-event state snapshot.

use floorplan2d_core::constants::{DEFAULT_ZOOM_STEP, RULER_UNIT_PIXEL_SIZE};
use floorplan2d_core::{CursorPoint, Mode, SnapMask};

use crate::viewport::{AlignX, AlignY, ViewportTransform};

/// Static configuration of a [`Viewer2D`](crate::Viewer2D).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Suppresses every editing call; pan, zoom and drawing stay available.
    pub view_only: bool,
    /// Multiplier applied by one click of the zoom-in tool.
    pub zoom_step: f64,
    /// Scene units kept on screen while panning.
    pub pan_limit: Option<f64>,
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub scale_factor_min: Option<f64>,
    pub scale_factor_max: Option<f64>,
    pub ruler_unit_pixel_size: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            view_only: false,
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_limit: None,
            align_x: AlignX::Cover,
            align_y: AlignY::Cover,
            scale_factor_min: None,
            scale_factor_max: None,
            ruler_unit_pixel_size: RULER_UNIT_PIXEL_SIZE,
        }
    }
}

/// Snapshot of the project state, read once at the start of each handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot {
    pub mode: Mode,
    pub scene_width: f64,
    pub scene_height: f64,
    /// Layer receiving newly drawn elements.
    pub selected_layer: String,
    pub snap_mask: SnapMask,
    /// Last reported mouse position, in scene units.
    pub mouse: CursorPoint,
    /// Zoom scale last reported through `update_zoom_scale`.
    pub zoom: f64,
    pub camera: Option<ViewportTransform>,
}

impl ViewerSnapshot {
    /// Idle snapshot of an empty scene of the given size.
    pub fn new(scene_width: f64, scene_height: f64, selected_layer: impl Into<String>) -> Self {
        Self {
            mode: Mode::Idle,
            scene_width,
            scene_height,
            selected_layer: selected_layer.into(),
            snap_mask: SnapMask::NONE,
            mouse: CursorPoint::default(),
            zoom: 1.0,
            camera: None,
        }
    }
}
