//! Interaction modes of the 2D viewer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current interaction state governing how pointer events are interpreted.
///
/// The mode is owned by the project state; the viewer only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    #[default]
    Idle,
    Pan,
    ZoomIn,
    ZoomOut,
    WaitingDrawingLine,
    DrawingLine,
    DrawingHole,
    DrawingItem,
    DraggingLine,
    DraggingHole,
    DraggingVertex,
    DraggingItem,
    RotatingItem,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 13] = [
        Mode::Idle,
        Mode::Pan,
        Mode::ZoomIn,
        Mode::ZoomOut,
        Mode::WaitingDrawingLine,
        Mode::DrawingLine,
        Mode::DrawingHole,
        Mode::DrawingItem,
        Mode::DraggingLine,
        Mode::DraggingHole,
        Mode::DraggingVertex,
        Mode::DraggingItem,
        Mode::RotatingItem,
    ];

    /// A drawing gesture is in progress (a speculative element exists).
    pub fn is_drawing(self) -> bool {
        matches!(self, Mode::DrawingLine | Mode::DrawingHole | Mode::DrawingItem)
    }

    /// A drag or rotate gesture is in progress.
    pub fn is_dragging(self) -> bool {
        matches!(
            self,
            Mode::DraggingLine
                | Mode::DraggingHole
                | Mode::DraggingVertex
                | Mode::DraggingItem
                | Mode::RotatingItem
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Pan => "PAN",
            Mode::ZoomIn => "ZOOM_IN",
            Mode::ZoomOut => "ZOOM_OUT",
            Mode::WaitingDrawingLine => "WAITING_DRAWING_LINE",
            Mode::DrawingLine => "DRAWING_LINE",
            Mode::DrawingHole => "DRAWING_HOLE",
            Mode::DrawingItem => "DRAWING_ITEM",
            Mode::DraggingLine => "DRAGGING_LINE",
            Mode::DraggingHole => "DRAGGING_HOLE",
            Mode::DraggingVertex => "DRAGGING_VERTEX",
            Mode::DraggingItem => "DRAGGING_ITEM",
            Mode::RotatingItem => "ROTATING_ITEM",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
