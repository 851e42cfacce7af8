//! Toolbar contract: which buttons the host shows and what they request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode_table::Tool;

/// Toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarButtonKind {
    Edit,
    Pan,
    ZoomIn,
    ZoomOut,
    /// Fits the scene to the viewer.
    Fit,
}

impl ToolbarButtonKind {
    /// Tool selected by this button, or `None` for the fit trigger.
    pub fn tool(self) -> Option<Tool> {
        match self {
            ToolbarButtonKind::Edit => Some(Tool::None),
            ToolbarButtonKind::Pan => Some(Tool::Pan),
            ToolbarButtonKind::ZoomIn => Some(Tool::ZoomIn),
            ToolbarButtonKind::ZoomOut => Some(Tool::ZoomOut),
            ToolbarButtonKind::Fit => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ToolbarButtonKind::Edit => "Selection",
            ToolbarButtonKind::Pan => "Pan",
            ToolbarButtonKind::ZoomIn => "Zoom in",
            ToolbarButtonKind::ZoomOut => "Zoom out",
            ToolbarButtonKind::Fit => "Fit to viewer",
        }
    }
}

impl fmt::Display for ToolbarButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A button as presented to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarButton {
    pub kind: ToolbarButtonKind,
    /// Highlighted because its tool is the current one.
    pub active: bool,
}

/// Buttons for the current tool, in display order.
///
/// The edit button is hidden in view-only mode. In `Auto` (idle editing)
/// and `None` the edit button is the active one.
pub fn toolbar_buttons(current: Tool, view_only: bool) -> Vec<ToolbarButton> {
    let editing = matches!(current, Tool::None | Tool::Auto);
    let mut buttons = Vec::with_capacity(5);

    if !view_only {
        buttons.push(ToolbarButton {
            kind: ToolbarButtonKind::Edit,
            active: editing,
        });
    }

    for (kind, tool) in [
        (ToolbarButtonKind::Pan, Tool::Pan),
        (ToolbarButtonKind::ZoomIn, Tool::ZoomIn),
        (ToolbarButtonKind::ZoomOut, Tool::ZoomOut),
    ] {
        buttons.push(ToolbarButton {
            kind,
            active: current == tool,
        });
    }

    buttons.push(ToolbarButton {
        kind: ToolbarButtonKind::Fit,
        active: false,
    });
    buttons
}
