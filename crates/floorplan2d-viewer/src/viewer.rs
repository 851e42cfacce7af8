//! Interaction mode dispatcher.
//!
//! [`Viewer2D`] receives the pointer events of the drawing surface, maps
//! them into scene coordinates and, depending on the current [`Mode`],
//! turns them into calls on the action collaborators. The mode itself is
//! never written here: it changes as a side effect of those calls.

use std::fmt;

use floorplan2d_core::{CursorPoint, ElementKind, Mode, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::actions::Collaborators;
use crate::coords::map_cursor_position;
use crate::frame::{RulerFrame, ViewerFrame};
use crate::gesture::Gesture;
use crate::mode_table::{mode_attributes, Tool};
use crate::options::{ViewerOptions, ViewerSnapshot};
use crate::picker::{pick_element, ElementData, ElementTree};
use crate::toolbar::{toolbar_buttons, ToolbarButtonKind};
use crate::viewport::ViewportTransform;

/// Phase of the pointer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Pointer event as delivered by the pan/zoom host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent<N> {
    kind: PointerEventKind,
    /// Position on the drawing surface (origin top-left).
    pub surface_point: CursorPoint,
    /// Node under the pointer, if any.
    pub target: Option<N>,
    propagation_stopped: bool,
}

impl<N> PointerEvent<N> {
    pub fn new(kind: PointerEventKind, surface_point: CursorPoint, target: Option<N>) -> Self {
        Self {
            kind,
            surface_point,
            target,
            propagation_stopped: false,
        }
    }

    pub fn down(surface_point: CursorPoint, target: Option<N>) -> Self {
        Self::new(PointerEventKind::Down, surface_point, target)
    }

    pub fn moved(surface_point: CursorPoint) -> Self {
        Self::new(PointerEventKind::Move, surface_point, None)
    }

    pub fn up(surface_point: CursorPoint, target: Option<N>) -> Self {
        Self::new(PointerEventKind::Up, surface_point, target)
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    /// Keeps ancestor handlers from processing this event again.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Raw pointer event re-broadcast to observers before dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerNotice {
    pub kind: PointerEventKind,
    pub surface_point: CursorPoint,
}

/// Subscription handle for removing a pointer observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

type PointerObserver = Box<dyn Fn(&PointerNotice)>;
type ItemClickHandler = Box<dyn FnMut(&str)>;

/// 2D floor-plan viewer: pointer dispatch, camera control and the frame
/// handed to the host for rendering.
pub struct Viewer2D {
    options: ViewerOptions,
    on_item_click: Option<ItemClickHandler>,
    observers: Vec<(SubscriptionId, PointerObserver)>,
}

impl Viewer2D {
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            options,
            on_item_click: None,
            observers: Vec::new(),
        }
    }

    /// Registers the read-only callback invoked with an item id when an
    /// item is clicked in view-only mode.
    pub fn with_item_click(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_item_click = Some(Box::new(handler));
        self
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    pub fn is_view_only(&self) -> bool {
        self.options.view_only
    }

    /// Registers an observer that sees every raw pointer event.
    pub fn subscribe(&mut self, observer: impl Fn(&PointerNotice) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.observers.push((id, Box::new(observer)));
        debug!(%id, "pointer observer registered");
        id
    }

    /// Removes an observer. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Pointer pressed. In idle mode, pressing on a selected line, vertex,
    /// item or hole begins dragging it (or rotating, on an item's rotation
    /// anchor).
    pub fn on_pointer_down<T: ElementTree>(
        &mut self,
        state: &ViewerSnapshot,
        tree: &T,
        event: &mut PointerEvent<T::Node>,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        self.notify(event);
        let result = self.dispatch_down(state, tree, event, actions);
        event.stop_propagation();
        result
    }

    /// Pointer moved. Reports the mouse position and advances the gesture of
    /// the current mode.
    pub fn on_pointer_move<N>(
        &mut self,
        state: &ViewerSnapshot,
        event: &mut PointerEvent<N>,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        self.notify(event);
        let point = map_cursor_position(event.surface_point, state.scene_height);
        let CursorPoint { x, y } = point;
        let layer = state.selected_layer.as_str();

        actions.project().update_mouse_coord(point);

        match Gesture::for_mode(state.mode) {
            Some(gesture) => gesture.update(actions, point, state.snap_mask),
            None => match state.mode {
                Mode::DrawingLine => actions.lines().update_drawing_line(x, y, state.snap_mask),
                Mode::DrawingHole => actions.holes().update_drawing_hole(layer, x, y),
                Mode::DrawingItem => actions.items().update_drawing_item(layer, x, y),
                _ => {}
            },
        }

        event.stop_propagation();
        Ok(())
    }

    /// Pointer released. Finishes gestures, chains line drawing, and
    /// handles selection clicks in idle mode.
    pub fn on_pointer_up<T: ElementTree>(
        &mut self,
        state: &ViewerSnapshot,
        tree: &T,
        event: &mut PointerEvent<T::Node>,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        self.notify(event);
        let result = self.dispatch_up(state, tree, event, actions);
        event.stop_propagation();
        result
    }

    /// Escape: ends a line chain or abandons the gesture in progress.
    ///
    /// Drawing modes roll back the speculative element; drag and rotate
    /// gestures end at the last reported mouse position.
    pub fn on_cancel(&mut self, state: &ViewerSnapshot, actions: &mut dyn Collaborators) {
        if state.mode.is_drawing() || state.mode == Mode::WaitingDrawingLine {
            debug!(mode = %state.mode, "rolling back drawing");
            actions.project().rollback();
        } else if let Some(gesture) = Gesture::for_mode(state.mode) {
            debug!(mode = %state.mode, mouse = %state.mouse, "force-ending gesture");
            gesture.end(actions, state.mouse, state.snap_mask);
        }
    }

    /// Toolbar tool change. Any gesture in progress is settled first, as by
    /// [`Viewer2D::on_cancel`].
    pub fn on_change_tool(&mut self, state: &ViewerSnapshot, tool: Tool, actions: &mut dyn Collaborators) {
        self.on_cancel(state, actions);

        match tool {
            Tool::None => actions.project().select_tool_edit(),
            Tool::Pan => actions.project().select_tool_pan(),
            Tool::ZoomIn => actions.project().select_tool_zoom_in(),
            Tool::ZoomOut => actions.project().select_tool_zoom_out(),
            Tool::Auto => debug!("auto tool is host-driven, ignoring"),
        }
    }

    /// Publishes a new camera transform.
    pub fn on_change_value(&mut self, value: &ViewportTransform, actions: &mut dyn Collaborators) {
        actions.project().update_zoom_scale(value.scale_factor());
        actions.viewer().update_camera_view(value);
    }

    /// Initial fit of the scene into the viewer, anchored at the origin.
    pub fn mount(
        &mut self,
        state: &ViewerSnapshot,
        viewer_width: f64,
        viewer_height: f64,
        actions: &mut dyn Collaborators,
    ) -> Result<ViewportTransform> {
        let camera = ViewportTransform::new(viewer_width, viewer_height, state.scene_width, state.scene_height)
            .with_scale_bounds(self.options.scale_factor_min, self.options.scale_factor_max);
        self.fit(&camera, actions)
    }

    /// Fits `camera` to the viewer, zeroes the translation and publishes
    /// the result.
    pub fn fit(&mut self, camera: &ViewportTransform, actions: &mut dyn Collaborators) -> Result<ViewportTransform> {
        let fitted = camera
            .fit_to_viewer(self.options.align_x, self.options.align_y)?
            .reset_translation();
        self.on_change_value(&fitted, actions);
        Ok(fitted)
    }

    /// Host pan gesture: moves `camera` by a drawing-surface delta, honouring
    /// the configured pan limit, and publishes the result.
    pub fn pan(
        &mut self,
        camera: &ViewportTransform,
        delta_x: f64,
        delta_y: f64,
        actions: &mut dyn Collaborators,
    ) -> ViewportTransform {
        let panned = camera.pan(delta_x, delta_y, self.options.pan_limit);
        self.on_change_value(&panned, actions);
        panned
    }

    /// Host wheel zoom about the viewer center.
    pub fn zoom_on_center(
        &mut self,
        camera: &ViewportTransform,
        factor: f64,
        actions: &mut dyn Collaborators,
    ) -> Result<ViewportTransform> {
        let zoomed = camera.zoom_on_viewer_center(factor)?;
        self.on_change_value(&zoomed, actions);
        Ok(zoomed)
    }

    /// Toolbar button click.
    pub fn on_toolbar_click(
        &mut self,
        state: &ViewerSnapshot,
        button: ToolbarButtonKind,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        match button.tool() {
            Some(tool) => self.on_change_tool(state, tool, actions),
            None => match &state.camera {
                Some(camera) => {
                    self.fit(camera, actions)?;
                }
                None => warn!("fit requested before the viewer was mounted"),
            },
        }
        Ok(())
    }

    /// Builds the frame the host renders for the current state.
    pub fn render(&self, state: &ViewerSnapshot, width: f64, height: f64) -> ViewerFrame {
        let attributes = mode_attributes(state.mode);
        let (scene_width, scene_height) = state
            .camera
            .as_ref()
            .map(|c| (c.scene_width(), c.scene_height()))
            .unwrap_or((state.scene_width, state.scene_height));

        let zoom = if state.zoom > 0.0 { state.zoom } else { 1.0 };
        let (e, f) = state
            .camera
            .as_ref()
            .map(|c| (c.matrix().e, c.matrix().f))
            .unwrap_or((0.0, 0.0));
        let unit = self.options.ruler_unit_pixel_size;

        ViewerFrame {
            width,
            height,
            tool: attributes.tool,
            detect_autopan: attributes.autopan,
            cursor: attributes.cursor,
            pointer_events: attributes.pointer_events,
            value: state.camera.clone(),
            scene_width,
            scene_height,
            rulers: RulerFrame {
                unit_pixel_size: unit,
                zoom,
                mouse_x: state.mouse.x,
                mouse_y: state.mouse.y,
                zero_left_position: e,
                zero_top_position: scene_height * zoom + f,
                x_units: ruler_units(scene_width, unit),
                y_units: ruler_units(scene_height, unit),
            },
            toolbar: toolbar_buttons(attributes.tool, self.options.view_only),
            view_only: self.options.view_only,
        }
    }

    fn notify<N>(&self, event: &PointerEvent<N>) {
        let notice = PointerNotice {
            kind: event.kind,
            surface_point: event.surface_point,
        };
        for (_, observer) in &self.observers {
            observer(&notice);
        }
    }

    fn dispatch_down<T: ElementTree>(
        &mut self,
        state: &ViewerSnapshot,
        tree: &T,
        event: &PointerEvent<T::Node>,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        if state.mode != Mode::Idle {
            return Ok(());
        }

        let Some(element) = Self::pick(tree, event)? else {
            return Ok(());
        };
        if !element.selected {
            return Ok(());
        }
        if self.options.view_only {
            debug!(kind = %element.kind, id = %element.element_id, "view-only, not dragging");
            return Ok(());
        }

        let point = map_cursor_position(event.surface_point, state.scene_height);
        match Gesture::for_element(&element) {
            Some(gesture) => {
                debug!(?gesture, id = %element.element_id, at = %point, "begin gesture");
                gesture.begin(actions, &element.layer_id, &element.element_id, point, state.snap_mask);
            }
            None => debug!(kind = %element.kind, "element kind is not draggable"),
        }
        Ok(())
    }

    fn dispatch_up<T: ElementTree>(
        &mut self,
        state: &ViewerSnapshot,
        tree: &T,
        event: &PointerEvent<T::Node>,
        actions: &mut dyn Collaborators,
    ) -> Result<()> {
        let point = map_cursor_position(event.surface_point, state.scene_height);
        let CursorPoint { x, y } = point;
        let layer = state.selected_layer.as_str();
        let snap = state.snap_mask;

        if let Some(gesture) = Gesture::for_mode(state.mode) {
            gesture.end(actions, point, snap);
            return Ok(());
        }

        match state.mode {
            Mode::Idle => {
                let element = Self::pick(tree, event)?;
                self.select_clicked(element, actions);
            }
            Mode::ZoomIn | Mode::ZoomOut => {
                let factor = if state.mode == Mode::ZoomIn {
                    self.options.zoom_step
                } else {
                    1.0 / self.options.zoom_step
                };
                match &state.camera {
                    Some(camera) => {
                        let zoomed = camera.zoom(event.surface_point.x, event.surface_point.y, factor)?;
                        self.on_change_value(&zoomed, actions);
                    }
                    None => warn!("zoom click before the viewer was mounted"),
                }
            }
            Mode::WaitingDrawingLine => actions.lines().begin_drawing_line(layer, x, y, snap),
            Mode::DrawingLine => {
                actions.lines().end_drawing_line(x, y, snap);
                actions.lines().begin_drawing_line(layer, x, y, snap);
            }
            Mode::DrawingHole => actions.holes().end_drawing_hole(layer, x, y),
            Mode::DrawingItem => {
                actions.items().end_drawing_item(layer, x, y);
                actions.project().rollback();
            }
            _ => {}
        }
        Ok(())
    }

    fn select_clicked(&mut self, element: Option<ElementData>, actions: &mut dyn Collaborators) {
        if element.as_ref().is_some_and(|e| e.selected) {
            return;
        }

        if self.options.view_only {
            actions.project().unselect_all();
            if let Some(item) = element.filter(|e| e.kind == ElementKind::Items) {
                match self.on_item_click.as_mut() {
                    Some(handler) => handler(&item.element_id),
                    None => debug!(id = %item.element_id, "item clicked, no handler registered"),
                }
            }
            return;
        }

        let Some(element) = element else {
            actions.project().unselect_all();
            return;
        };
        let (layer, id) = (element.layer_id.as_str(), element.element_id.as_str());
        match element.kind {
            ElementKind::Areas => actions.areas().select_area(layer, id),
            ElementKind::Lines => actions.lines().select_line(layer, id),
            ElementKind::Holes => actions.holes().select_hole(layer, id),
            ElementKind::Items => actions.items().select_item(layer, id),
            ElementKind::Vertices => {}
        }
    }

    fn pick<T: ElementTree>(tree: &T, event: &PointerEvent<T::Node>) -> Result<Option<ElementData>> {
        match event.target {
            Some(target) => Ok(pick_element(tree, target)?),
            None => Ok(None),
        }
    }
}

/// Ruler ticks needed to cover `extent`. No rulers without a positive unit.
fn ruler_units(extent: f64, unit: f64) -> u32 {
    if !unit.is_finite() || unit <= 0.0 {
        return 0;
    }
    ((extent / unit).ceil() as u32).saturating_add(1)
}

impl Default for Viewer2D {
    fn default() -> Self {
        Self::new(ViewerOptions::default())
    }
}

impl fmt::Debug for Viewer2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer2D")
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .field("on_item_click", &self.on_item_click.is_some())
            .finish()
    }
}
