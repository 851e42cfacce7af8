//! In-memory reference collaborator.
//!
//! [`SessionRecorder`] implements every action interface by logging the
//! call and applying the mode transitions the project state would make. It
//! backs the replay binary and the dispatcher scenario tests.

use floorplan2d_core::{CursorPoint, ElementKind, Mode, SnapMask};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::actions::{
    AreaActions, Collaborators, HolesActions, ItemsActions, LinesActions, ProjectActions,
    VerticesActions, ViewerActions,
};
use crate::options::ViewerSnapshot;
use crate::viewport::ViewportTransform;

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionCall {
    BeginDrawingLine { layer_id: String, x: f64, y: f64, snap_mask: SnapMask },
    UpdateDrawingLine { x: f64, y: f64, snap_mask: SnapMask },
    EndDrawingLine { x: f64, y: f64, snap_mask: SnapMask },
    BeginDraggingLine { layer_id: String, line_id: String, x: f64, y: f64, snap_mask: SnapMask },
    UpdateDraggingLine { x: f64, y: f64, snap_mask: SnapMask },
    EndDraggingLine { x: f64, y: f64, snap_mask: SnapMask },
    SelectLine { layer_id: String, line_id: String },

    BeginDrawingHole { layer_id: String, x: f64, y: f64 },
    UpdateDrawingHole { layer_id: String, x: f64, y: f64 },
    EndDrawingHole { layer_id: String, x: f64, y: f64 },
    BeginDraggingHole { layer_id: String, hole_id: String, x: f64, y: f64 },
    UpdateDraggingHole { x: f64, y: f64 },
    EndDraggingHole { x: f64, y: f64 },
    SelectHole { layer_id: String, hole_id: String },

    BeginDrawingItem { layer_id: String, x: f64, y: f64 },
    UpdateDrawingItem { layer_id: String, x: f64, y: f64 },
    EndDrawingItem { layer_id: String, x: f64, y: f64 },
    BeginDraggingItem { layer_id: String, item_id: String, x: f64, y: f64 },
    UpdateDraggingItem { x: f64, y: f64 },
    EndDraggingItem { x: f64, y: f64 },
    BeginRotatingItem { layer_id: String, item_id: String, x: f64, y: f64 },
    UpdateRotatingItem { x: f64, y: f64 },
    EndRotatingItem { x: f64, y: f64 },
    SelectItem { layer_id: String, item_id: String },

    BeginDraggingVertex { layer_id: String, vertex_id: String, x: f64, y: f64, snap_mask: SnapMask },
    UpdateDraggingVertex { x: f64, y: f64, snap_mask: SnapMask },
    EndDraggingVertex { x: f64, y: f64, snap_mask: SnapMask },

    SelectArea { layer_id: String, area_id: String },

    UpdateMouseCoord { x: f64, y: f64 },
    UnselectAll,
    UpdateZoomScale { scale: f64 },
    SelectToolEdit,
    SelectToolPan,
    SelectToolZoomIn,
    SelectToolZoomOut,
    Rollback,

    UpdateCameraView { scale_factor: f64, translation_x: f64, translation_y: f64 },
}

impl ActionCall {
    /// True for the per-move mouse report, which most assertions ignore.
    pub fn is_mouse_report(&self) -> bool {
        matches!(self, ActionCall::UpdateMouseCoord { .. })
    }
}

/// Element currently selected in the recorded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: ElementKind,
    pub layer_id: String,
    pub element_id: String,
}

/// Logging collaborator with the project's mode transitions.
#[derive(Debug, Clone)]
pub struct SessionRecorder {
    mode: Mode,
    scene_width: f64,
    scene_height: f64,
    selected_layer: String,
    snap_mask: SnapMask,
    mouse: CursorPoint,
    zoom: f64,
    camera: Option<ViewportTransform>,
    selection: Option<Selection>,
    calls: Vec<ActionCall>,
    transitions: Vec<(Mode, Mode)>,
}

impl SessionRecorder {
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
            selection: None,
            calls: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn with_snap_mask(mut self, snap_mask: SnapMask) -> Self {
        self.snap_mask = snap_mask;
        self
    }

    pub fn with_camera(mut self, camera: ViewportTransform) -> Self {
        self.zoom = camera.scale_factor();
        self.camera = Some(camera);
        self
    }

    /// Snapshot to hand to the next viewer handler.
    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            mode: self.mode,
            scene_width: self.scene_width,
            scene_height: self.scene_height,
            selected_layer: self.selected_layer.clone(),
            snap_mask: self.snap_mask,
            mouse: self.mouse,
            zoom: self.zoom,
            camera: self.camera.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Forces the mode, as a catalog or toolbar outside the viewer would.
    pub fn set_mode(&mut self, mode: Mode) {
        self.transition(mode);
    }

    pub fn mouse(&self) -> CursorPoint {
        self.mouse
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn camera(&self) -> Option<&ViewportTransform> {
        self.camera.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Every call, in order.
    pub fn calls(&self) -> &[ActionCall] {
        &self.calls
    }

    /// Calls other than mouse reports.
    pub fn scene_calls(&self) -> Vec<ActionCall> {
        self.calls.iter().filter(|c| !c.is_mouse_report()).cloned().collect()
    }

    /// `(from, to)` pairs for every mode change.
    pub fn transitions(&self) -> &[(Mode, Mode)] {
        &self.transitions
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.transitions.clear();
    }

    fn record(&mut self, call: ActionCall) {
        trace!(?call, "action");
        self.calls.push(call);
    }

    fn transition(&mut self, to: Mode) {
        if self.mode != to {
            self.transitions.push((self.mode, to));
            self.mode = to;
        }
    }

    fn select(&mut self, kind: ElementKind, layer_id: &str, element_id: &str) {
        self.selection = Some(Selection {
            kind,
            layer_id: layer_id.to_string(),
            element_id: element_id.to_string(),
        });
    }
}

impl LinesActions for SessionRecorder {
    fn begin_drawing_line(&mut self, layer_id: &str, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::BeginDrawingLine { layer_id: layer_id.into(), x, y, snap_mask });
        self.transition(Mode::DrawingLine);
    }

    fn update_drawing_line(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::UpdateDrawingLine { x, y, snap_mask });
    }

    fn end_drawing_line(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::EndDrawingLine { x, y, snap_mask });
        self.transition(Mode::WaitingDrawingLine);
    }

    fn begin_dragging_line(&mut self, layer_id: &str, line_id: &str, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::BeginDraggingLine {
            layer_id: layer_id.into(),
            line_id: line_id.into(),
            x,
            y,
            snap_mask,
        });
        self.transition(Mode::DraggingLine);
    }

    fn update_dragging_line(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::UpdateDraggingLine { x, y, snap_mask });
    }

    fn end_dragging_line(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::EndDraggingLine { x, y, snap_mask });
        self.transition(Mode::Idle);
    }

    fn select_line(&mut self, layer_id: &str, line_id: &str) {
        self.record(ActionCall::SelectLine { layer_id: layer_id.into(), line_id: line_id.into() });
        self.select(ElementKind::Lines, layer_id, line_id);
    }
}

impl HolesActions for SessionRecorder {
    fn begin_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::BeginDrawingHole { layer_id: layer_id.into(), x, y });
        self.transition(Mode::DrawingHole);
    }

    fn update_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::UpdateDrawingHole { layer_id: layer_id.into(), x, y });
    }

    fn end_drawing_hole(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::EndDrawingHole { layer_id: layer_id.into(), x, y });
        self.transition(Mode::Idle);
    }

    fn begin_dragging_hole(&mut self, layer_id: &str, hole_id: &str, x: f64, y: f64) {
        self.record(ActionCall::BeginDraggingHole {
            layer_id: layer_id.into(),
            hole_id: hole_id.into(),
            x,
            y,
        });
        self.transition(Mode::DraggingHole);
    }

    fn update_dragging_hole(&mut self, x: f64, y: f64) {
        self.record(ActionCall::UpdateDraggingHole { x, y });
    }

    fn end_dragging_hole(&mut self, x: f64, y: f64) {
        self.record(ActionCall::EndDraggingHole { x, y });
        self.transition(Mode::Idle);
    }

    fn select_hole(&mut self, layer_id: &str, hole_id: &str) {
        self.record(ActionCall::SelectHole { layer_id: layer_id.into(), hole_id: hole_id.into() });
        self.select(ElementKind::Holes, layer_id, hole_id);
    }
}

impl ItemsActions for SessionRecorder {
    fn begin_drawing_item(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::BeginDrawingItem { layer_id: layer_id.into(), x, y });
        self.transition(Mode::DrawingItem);
    }

    fn update_drawing_item(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::UpdateDrawingItem { layer_id: layer_id.into(), x, y });
    }

    fn end_drawing_item(&mut self, layer_id: &str, x: f64, y: f64) {
        self.record(ActionCall::EndDrawingItem { layer_id: layer_id.into(), x, y });
        self.transition(Mode::Idle);
    }

    fn begin_dragging_item(&mut self, layer_id: &str, item_id: &str, x: f64, y: f64) {
        self.record(ActionCall::BeginDraggingItem {
            layer_id: layer_id.into(),
            item_id: item_id.into(),
            x,
            y,
        });
        self.transition(Mode::DraggingItem);
    }

    fn update_dragging_item(&mut self, x: f64, y: f64) {
        self.record(ActionCall::UpdateDraggingItem { x, y });
    }

    fn end_dragging_item(&mut self, x: f64, y: f64) {
        self.record(ActionCall::EndDraggingItem { x, y });
        self.transition(Mode::Idle);
    }

    fn begin_rotating_item(&mut self, layer_id: &str, item_id: &str, x: f64, y: f64) {
        self.record(ActionCall::BeginRotatingItem {
            layer_id: layer_id.into(),
            item_id: item_id.into(),
            x,
            y,
        });
        self.transition(Mode::RotatingItem);
    }

    fn update_rotating_item(&mut self, x: f64, y: f64) {
        self.record(ActionCall::UpdateRotatingItem { x, y });
    }

    fn end_rotating_item(&mut self, x: f64, y: f64) {
        self.record(ActionCall::EndRotatingItem { x, y });
        self.transition(Mode::Idle);
    }

    fn select_item(&mut self, layer_id: &str, item_id: &str) {
        self.record(ActionCall::SelectItem { layer_id: layer_id.into(), item_id: item_id.into() });
        self.select(ElementKind::Items, layer_id, item_id);
    }
}

impl VerticesActions for SessionRecorder {
    fn begin_dragging_vertex(&mut self, layer_id: &str, vertex_id: &str, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::BeginDraggingVertex {
            layer_id: layer_id.into(),
            vertex_id: vertex_id.into(),
            x,
            y,
            snap_mask,
        });
        self.transition(Mode::DraggingVertex);
    }

    fn update_dragging_vertex(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::UpdateDraggingVertex { x, y, snap_mask });
    }

    fn end_dragging_vertex(&mut self, x: f64, y: f64, snap_mask: SnapMask) {
        self.record(ActionCall::EndDraggingVertex { x, y, snap_mask });
        self.transition(Mode::Idle);
    }
}

impl AreaActions for SessionRecorder {
    fn select_area(&mut self, layer_id: &str, area_id: &str) {
        self.record(ActionCall::SelectArea { layer_id: layer_id.into(), area_id: area_id.into() });
        self.select(ElementKind::Areas, layer_id, area_id);
    }
}

impl ProjectActions for SessionRecorder {
    fn update_mouse_coord(&mut self, point: CursorPoint) {
        self.record(ActionCall::UpdateMouseCoord { x: point.x, y: point.y });
        self.mouse = point;
    }

    fn unselect_all(&mut self) {
        self.record(ActionCall::UnselectAll);
        self.selection = None;
    }

    fn update_zoom_scale(&mut self, scale: f64) {
        self.record(ActionCall::UpdateZoomScale { scale });
        self.zoom = scale;
    }

    fn select_tool_edit(&mut self) {
        self.record(ActionCall::SelectToolEdit);
        self.transition(Mode::Idle);
    }

    fn select_tool_pan(&mut self) {
        self.record(ActionCall::SelectToolPan);
        self.transition(Mode::Pan);
    }

    fn select_tool_zoom_in(&mut self) {
        self.record(ActionCall::SelectToolZoomIn);
        self.transition(Mode::ZoomIn);
    }

    fn select_tool_zoom_out(&mut self) {
        self.record(ActionCall::SelectToolZoomOut);
        self.transition(Mode::ZoomOut);
    }

    fn rollback(&mut self) {
        self.record(ActionCall::Rollback);
        self.transition(Mode::Idle);
    }
}

impl ViewerActions for SessionRecorder {
    fn update_camera_view(&mut self, transform: &ViewportTransform) {
        let parts = transform.decompose();
        self.record(ActionCall::UpdateCameraView {
            scale_factor: parts.scale_factor,
            translation_x: parts.translation_x,
            translation_y: parts.translation_y,
        });
        self.camera = Some(transform.clone());
    }
}

impl Collaborators for SessionRecorder {
    fn lines(&mut self) -> &mut dyn LinesActions {
        self
    }

    fn holes(&mut self) -> &mut dyn HolesActions {
        self
    }

    fn items(&mut self) -> &mut dyn ItemsActions {
        self
    }

    fn vertices(&mut self) -> &mut dyn VerticesActions {
        self
    }

    fn areas(&mut self) -> &mut dyn AreaActions {
        self
    }

    fn project(&mut self) -> &mut dyn ProjectActions {
        self
    }

    fn viewer(&mut self) -> &mut dyn ViewerActions {
        self
    }
}
