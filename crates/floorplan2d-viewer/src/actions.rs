//! Action-collaborator contracts.
//!
//! The viewer never edits the scene itself. It calls these interfaces, whose
//! implementations own the scene state, the current mode, persistence and
//! undo history. Coordinates are scene units; snap masks are forwarded as
//! received.

use floorplan2d_core::{CursorPoint, SnapMask};

use crate::viewport::ViewportTransform;

/// Line (wall) actions.
pub trait LinesActions {
    fn begin_drawing_line(&mut self, layer_id: &str, x: f64, y: f64, snap_mask: SnapMask);
    fn update_drawing_line(&mut self, x: f64, y: f64, snap_mask: SnapMask);
    fn end_drawing_line(&mut self, x: f64, y: f64, snap_mask: SnapMask);
    fn begin_dragging_line(&mut self, layer_id: &str, line_id: &str, x: f64, y: f64, snap_mask: SnapMask);
    fn update_dragging_line(&mut self, x: f64, y: f64, snap_mask: SnapMask);
    fn end_dragging_line(&mut self, x: f64, y: f64, snap_mask: SnapMask);
    fn select_line(&mut self, layer_id: &str, line_id: &str);
}

/// Hole (door/window) actions.
pub trait HolesActions {
    fn begin_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64);
    fn update_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64);
    fn end_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64);
    fn begin_dragging_hole(&mut self, layer_id: &str, hole_id: &str, x: f64, y: f64);
    fn update_dragging_hole(&mut self, x: f64, y: f64);
    fn end_dragging_hole(&mut self, x: f64, y: f64);
    fn select_hole(&mut self, layer_id: &str, hole_id: &str);
}

/// Item (furniture) actions.
pub trait ItemsActions {
    fn begin_drawing_item(&mut self, layer_id: &str, x: f64, y: f64);
    fn update_drawing_item(&mut self, layer_id: &str, x: f64, y: f64);
    fn end_drawing_item(&mut self, layer_id: &str, x: f64, y: f64);
    fn begin_dragging_item(&mut self, layer_id: &str, item_id: &str, x: f64, y: f64);
    fn update_dragging_item(&mut self, x: f64, y: f64);
    fn end_dragging_item(&mut self, x: f64, y: f64);
    fn begin_rotating_item(&mut self, layer_id: &str, item_id: &str, x: f64, y: f64);
    fn update_rotating_item(&mut self, x: f64, y: f64);
    fn end_rotating_item(&mut self, x: f64, y: f64);
    fn select_item(&mut self, layer_id: &str, item_id: &str);
}

/// Vertex actions.
pub trait VerticesActions {
    fn begin_dragging_vertex(&mut self, layer_id: &str, vertex_id: &str, x: f64, y: f64, snap_mask: SnapMask);
    fn update_dragging_vertex(&mut self, x: f64, y: f64, snap_mask: SnapMask);
    fn end_dragging_vertex(&mut self, x: f64, y: f64, snap_mask: SnapMask);
}

/// Area (room) actions.
pub trait AreaActions {
    fn select_area(&mut self, layer_id: &str, area_id: &str);
}

/// Project-wide actions.
pub trait ProjectActions {
    fn update_mouse_coord(&mut self, point: CursorPoint);
    fn unselect_all(&mut self);
    fn update_zoom_scale(&mut self, scale: f64);
    fn select_tool_edit(&mut self);
    fn select_tool_pan(&mut self);
    fn select_tool_zoom_in(&mut self);
    fn select_tool_zoom_out(&mut self);
    /// Discards the speculative, uncommitted scene edit.
    fn rollback(&mut self);
}

/// Camera actions of the 2D viewer.
pub trait ViewerActions {
    fn update_camera_view(&mut self, transform: &ViewportTransform);
}

/// Access to every collaborator family the dispatcher calls.
pub trait Collaborators {
    fn lines(&mut self) -> &mut dyn LinesActions;
    fn holes(&mut self) -> &mut dyn HolesActions;
    fn items(&mut self) -> &mut dyn ItemsActions;
    fn vertices(&mut self) -> &mut dyn VerticesActions;
    fn areas(&mut self) -> &mut dyn AreaActions;
    fn project(&mut self) -> &mut dyn ProjectActions;
    fn viewer(&mut self) -> &mut dyn ViewerActions;
}

/// Collaborators assembled from separate handlers.
pub struct ActionSet<'a> {
    pub lines: &'a mut dyn LinesActions,
    pub holes: &'a mut dyn HolesActions,
    pub items: &'a mut dyn ItemsActions,
    pub vertices: &'a mut dyn VerticesActions,
    pub areas: &'a mut dyn AreaActions,
    pub project: &'a mut dyn ProjectActions,
    pub viewer: &'a mut dyn ViewerActions,
}

impl<'a> Collaborators for ActionSet<'a> {
    fn lines(&mut self) -> &mut dyn LinesActions {
        &mut *self.lines
    }

    fn holes(&mut self) -> &mut dyn HolesActions {
        &mut *self.holes
    }

    fn items(&mut self) -> &mut dyn ItemsActions {
        &mut *self.items
    }

    fn vertices(&mut self) -> &mut dyn VerticesActions {
        &mut *self.vertices
    }

    fn areas(&mut self) -> &mut dyn AreaActions {
        &mut *self.areas
    }

    fn project(&mut self) -> &mut dyn ProjectActions {
        &mut *self.project
    }

    fn viewer(&mut self) -> &mut dyn ViewerActions {
        &mut *self.viewer
    }
}
