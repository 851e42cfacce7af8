//! Render output handed to the host.
//!
//! A [`ViewerFrame`] is everything the host needs to draw one frame of the
//! viewer: host tool configuration, scene-layer styling, ruler placement
//! inputs and the toolbar. Drawing itself is left to the host.

use serde::Serialize;

use crate::mode_table::{Cursor, PointerEvents, Tool};
use crate::toolbar::ToolbarButton;
use crate::viewport::ViewportTransform;

/// Inputs for placing the horizontal and vertical rulers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RulerFrame {
    pub unit_pixel_size: f64,
    pub zoom: f64,
    pub mouse_x: f64,
    pub mouse_y: f64,
    /// Viewer x of the scene origin.
    pub zero_left_position: f64,
    /// Viewer y of the scene origin (scene y grows upward).
    pub zero_top_position: f64,
    pub x_units: u32,
    pub y_units: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerFrame {
    pub width: f64,
    pub height: f64,
    pub tool: Tool,
    pub detect_autopan: bool,
    pub cursor: Cursor,
    pub pointer_events: PointerEvents,
    /// Camera to apply, `None` until the viewer is mounted.
    pub value: Option<ViewportTransform>,
    pub scene_width: f64,
    pub scene_height: f64,
    pub rulers: RulerFrame,
    pub toolbar: Vec<ToolbarButton>,
    pub view_only: bool,
}

impl ViewerFrame {
    /// CSS cursor for the scene layer.
    pub fn cursor_css(&self) -> &'static str {
        self.cursor.as_css()
    }

    /// Whether the scene layer should receive pointer events.
    pub fn scene_receives_pointer(&self) -> bool {
        self.pointer_events == PointerEvents::Auto
    }
}
