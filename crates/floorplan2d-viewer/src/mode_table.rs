//! Per-mode presentation attributes.
//!
//! A single lookup from [`Mode`] to the tool shown by the pan/zoom host, the
//! cursor over the scene layer, whether the scene layer receives pointer
//! events, and whether the host should auto-pan near the edges.

use floorplan2d_core::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tool of the pan/zoom host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Host does nothing with the pointer; the scene layer handles it.
    None,
    Pan,
    ZoomIn,
    ZoomOut,
    /// Host pans on drag and zooms on wheel; clicks reach the scene.
    Auto,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tool::None => "none",
            Tool::Pan => "pan",
            Tool::ZoomIn => "zoom-in",
            Tool::ZoomOut => "zoom-out",
            Tool::Auto => "auto",
        })
    }
}

/// Cursor style over the scene layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Default,
    Move,
    EwResize,
    Crosshair,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Move => "move",
            Cursor::EwResize => "ew-resize",
            Cursor::Crosshair => "crosshair",
        }
    }
}

/// Whether the scene layer receives pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvents {
    Auto,
    /// Events pass through to the pan/zoom host.
    None,
}

/// Attributes derived from the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeAttributes {
    pub tool: Tool,
    pub cursor: Cursor,
    pub pointer_events: PointerEvents,
    pub autopan: bool,
}

impl ModeAttributes {
    const fn new(tool: Tool, cursor: Cursor, pointer_events: PointerEvents, autopan: bool) -> Self {
        Self {
            tool,
            cursor,
            pointer_events,
            autopan,
        }
    }
}

/// Looks up the attributes of `mode`.
pub fn mode_attributes(mode: Mode) -> ModeAttributes {
    use PointerEvents::{Auto as Receive, None as PassThrough};

    match mode {
        Mode::Idle => ModeAttributes::new(Tool::Auto, Cursor::Default, Receive, false),
        Mode::Pan => ModeAttributes::new(Tool::Pan, Cursor::Default, Receive, false),
        Mode::ZoomIn => ModeAttributes::new(Tool::ZoomIn, Cursor::Default, Receive, false),
        Mode::ZoomOut => ModeAttributes::new(Tool::ZoomOut, Cursor::Default, Receive, false),
        Mode::WaitingDrawingLine => ModeAttributes::new(Tool::None, Cursor::Crosshair, Receive, false),
        Mode::DrawingLine => ModeAttributes::new(Tool::None, Cursor::Crosshair, PassThrough, true),
        Mode::DrawingHole => ModeAttributes::new(Tool::None, Cursor::Default, PassThrough, true),
        Mode::DrawingItem => ModeAttributes::new(Tool::None, Cursor::Default, PassThrough, true),
        Mode::DraggingLine => ModeAttributes::new(Tool::None, Cursor::Move, PassThrough, true),
        Mode::DraggingHole => ModeAttributes::new(Tool::None, Cursor::Move, PassThrough, true),
        Mode::DraggingVertex => ModeAttributes::new(Tool::None, Cursor::Move, PassThrough, true),
        Mode::DraggingItem => ModeAttributes::new(Tool::None, Cursor::Move, PassThrough, true),
        Mode::RotatingItem => ModeAttributes::new(Tool::None, Cursor::EwResize, Receive, true),
    }
}
