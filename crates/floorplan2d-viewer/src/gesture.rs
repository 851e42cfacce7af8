//! Drag and rotate gestures.
//!
//! The begin/update/end families of the line, vertex, item and hole actions
//! are selected by [`Gesture`]. The gesture is chosen from the pressed element
//! when it begins; afterwards the project mode it entered is the only record
//! of it, and [`Gesture::for_mode`] recovers the same gesture from that mode.

use floorplan2d_core::{CursorPoint, ElementKind, Mode, SnapMask};

use crate::actions::Collaborators;
use crate::picker::ElementData;

/// Element kind moved by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Line,
    Vertex,
    Item,
    Hole,
}

/// A pointer gesture that moves or rotates one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag(DragTarget),
    RotateItem,
}

impl Gesture {
    /// Gesture started by pressing on `element`. Areas cannot be dragged.
    pub fn for_element(element: &ElementData) -> Option<Gesture> {
        match element.kind {
            ElementKind::Lines => Some(Gesture::Drag(DragTarget::Line)),
            ElementKind::Vertices => Some(Gesture::Drag(DragTarget::Vertex)),
            ElementKind::Items if element.is_rotation_anchor() => Some(Gesture::RotateItem),
            ElementKind::Items => Some(Gesture::Drag(DragTarget::Item)),
            ElementKind::Holes => Some(Gesture::Drag(DragTarget::Hole)),
            ElementKind::Areas => None,
        }
    }

    /// Gesture in progress while the project is in `mode`.
    pub fn for_mode(mode: Mode) -> Option<Gesture> {
        match mode {
            Mode::DraggingLine => Some(Gesture::Drag(DragTarget::Line)),
            Mode::DraggingVertex => Some(Gesture::Drag(DragTarget::Vertex)),
            Mode::DraggingItem => Some(Gesture::Drag(DragTarget::Item)),
            Mode::DraggingHole => Some(Gesture::Drag(DragTarget::Hole)),
            Mode::RotatingItem => Some(Gesture::RotateItem),
            _ => None,
        }
    }

    /// Mode the project enters once the gesture has begun.
    pub fn mode(self) -> Mode {
        match self {
            Gesture::Drag(DragTarget::Line) => Mode::DraggingLine,
            Gesture::Drag(DragTarget::Vertex) => Mode::DraggingVertex,
            Gesture::Drag(DragTarget::Item) => Mode::DraggingItem,
            Gesture::Drag(DragTarget::Hole) => Mode::DraggingHole,
            Gesture::RotateItem => Mode::RotatingItem,
        }
    }

    pub fn begin(
        self,
        actions: &mut dyn Collaborators,
        layer_id: &str,
        element_id: &str,
        at: CursorPoint,
        snap_mask: SnapMask,
    ) {
        let CursorPoint { x, y } = at;
        match self {
            Gesture::Drag(DragTarget::Line) => {
                actions.lines().begin_dragging_line(layer_id, element_id, x, y, snap_mask)
            }
            Gesture::Drag(DragTarget::Vertex) => {
                actions.vertices().begin_dragging_vertex(layer_id, element_id, x, y, snap_mask)
            }
            Gesture::Drag(DragTarget::Item) => {
                actions.items().begin_dragging_item(layer_id, element_id, x, y)
            }
            Gesture::Drag(DragTarget::Hole) => {
                actions.holes().begin_dragging_hole(layer_id, element_id, x, y)
            }
            Gesture::RotateItem => actions.items().begin_rotating_item(layer_id, element_id, x, y),
        }
    }

    pub fn update(self, actions: &mut dyn Collaborators, at: CursorPoint, snap_mask: SnapMask) {
        let CursorPoint { x, y } = at;
        match self {
            Gesture::Drag(DragTarget::Line) => actions.lines().update_dragging_line(x, y, snap_mask),
            Gesture::Drag(DragTarget::Vertex) => {
                actions.vertices().update_dragging_vertex(x, y, snap_mask)
            }
            Gesture::Drag(DragTarget::Item) => actions.items().update_dragging_item(x, y),
            Gesture::Drag(DragTarget::Hole) => actions.holes().update_dragging_hole(x, y),
            Gesture::RotateItem => actions.items().update_rotating_item(x, y),
        }
    }

    pub fn end(self, actions: &mut dyn Collaborators, at: CursorPoint, snap_mask: SnapMask) {
        let CursorPoint { x, y } = at;
        match self {
            Gesture::Drag(DragTarget::Line) => actions.lines().end_dragging_line(x, y, snap_mask),
            Gesture::Drag(DragTarget::Vertex) => {
                actions.vertices().end_dragging_vertex(x, y, snap_mask)
            }
            Gesture::Drag(DragTarget::Item) => actions.items().end_dragging_item(x, y),
            Gesture::Drag(DragTarget::Hole) => actions.holes().end_dragging_hole(x, y),
            Gesture::RotateItem => actions.items().end_rotating_item(x, y),
        }
    }
}
