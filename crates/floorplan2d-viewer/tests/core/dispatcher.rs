use floorplan2d_core::constants::attr;
use floorplan2d_core::{CursorPoint, ElementKind, Error, Mode, PickError, SnapMask};
use floorplan2d_viewer::{
    ActionCall, NodeId, PointerEvent, SessionRecorder, SurfaceTree, Viewer2D, ViewerOptions,
};

const HEIGHT: f64 = 1000.0;
const LAYER: &str = "layer-1";

struct Scene {
    tree: SurfaceTree,
    viewer: Viewer2D,
    session: SessionRecorder,
}

impl Scene {
    fn new() -> Self {
        Self {
            tree: SurfaceTree::new(),
            viewer: Viewer2D::new(ViewerOptions::default()),
            session: SessionRecorder::new(2000.0, HEIGHT, LAYER).with_snap_mask(SnapMask::ALL),
        }
    }

    /// Element root with one child shape; returns the shape.
    fn element(&mut self, kind: ElementKind, id: &str, selected: bool) -> NodeId {
        let root = self.tree.root();
        let element = self.tree.add_element(root, kind, LAYER, id, selected);
        self.tree.add_child(element)
    }

    fn down(&mut self, x: f64, y: f64, target: Option<NodeId>) -> PointerEvent<NodeId> {
        let mut event = PointerEvent::down(CursorPoint::new(x, y), target);
        let state = self.session.snapshot();
        self.viewer
            .on_pointer_down(&state, &self.tree, &mut event, &mut self.session)
            .unwrap();
        event
    }

    fn moved(&mut self, x: f64, y: f64) -> PointerEvent<NodeId> {
        let mut event = PointerEvent::moved(CursorPoint::new(x, y));
        let state = self.session.snapshot();
        self.viewer.on_pointer_move(&state, &mut event, &mut self.session).unwrap();
        event
    }

    fn up(&mut self, x: f64, y: f64, target: Option<NodeId>) -> PointerEvent<NodeId> {
        let mut event = PointerEvent::up(CursorPoint::new(x, y), target);
        let state = self.session.snapshot();
        self.viewer
            .on_pointer_up(&state, &self.tree, &mut event, &mut self.session)
            .unwrap();
        event
    }
}

#[test]
fn test_drag_selected_line() {
    let mut scene = Scene::new();
    let wall = scene.element(ElementKind::Lines, "E1", true);

    // Surface y is flipped into scene y against the scene height.
    scene.down(3.0, HEIGHT - 4.0, Some(wall));
    scene.moved(10.0, HEIGHT - 20.0);
    scene.up(10.0, HEIGHT - 20.0, Some(wall));

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::BeginDraggingLine {
                layer_id: LAYER.into(),
                line_id: "E1".into(),
                x: 3.0,
                y: 4.0,
                snap_mask: SnapMask::ALL,
            },
            ActionCall::UpdateDraggingLine { x: 10.0, y: 20.0, snap_mask: SnapMask::ALL },
            ActionCall::EndDraggingLine { x: 10.0, y: 20.0, snap_mask: SnapMask::ALL },
        ]
    );
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_move_reports_mouse_first() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::DrawingLine);
    scene.moved(7.0, HEIGHT - 8.0);

    assert_eq!(
        scene.session.calls(),
        &[
            ActionCall::UpdateMouseCoord { x: 7.0, y: 8.0 },
            ActionCall::UpdateDrawingLine { x: 7.0, y: 8.0, snap_mask: SnapMask::ALL },
        ]
    );
}

#[test]
fn test_idle_move_only_reports_mouse() {
    let mut scene = Scene::new();
    scene.moved(1.0, 2.0);
    assert_eq!(scene.session.calls().len(), 1);
    assert!(scene.session.calls()[0].is_mouse_report());
}

#[test]
fn test_line_chain_on_up() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::DrawingLine);
    scene.session.clear_calls();

    scene.up(5.0, HEIGHT - 5.0, None);

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::EndDrawingLine { x: 5.0, y: 5.0, snap_mask: SnapMask::ALL },
            ActionCall::BeginDrawingLine {
                layer_id: LAYER.into(),
                x: 5.0,
                y: 5.0,
                snap_mask: SnapMask::ALL,
            },
        ]
    );
    assert_eq!(scene.session.mode(), Mode::DrawingLine);
}

#[test]
fn test_waiting_line_begins_on_up() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::WaitingDrawingLine);
    scene.session.clear_calls();

    scene.up(40.0, HEIGHT - 60.0, None);
    assert_eq!(
        scene.session.scene_calls(),
        vec![ActionCall::BeginDrawingLine {
            layer_id: LAYER.into(),
            x: 40.0,
            y: 60.0,
            snap_mask: SnapMask::ALL,
        }]
    );
    assert_eq!(scene.session.mode(), Mode::DrawingLine);
}

#[test]
fn test_drawing_hole_move_and_up() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::DrawingHole);
    scene.session.clear_calls();

    scene.moved(1.0, HEIGHT - 2.0);
    scene.up(3.0, HEIGHT - 4.0, None);

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::UpdateDrawingHole { layer_id: LAYER.into(), x: 1.0, y: 2.0 },
            ActionCall::EndDrawingHole { layer_id: LAYER.into(), x: 3.0, y: 4.0 },
        ]
    );
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_drawing_item_up_rolls_back() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::DrawingItem);
    scene.session.clear_calls();

    scene.moved(1.0, HEIGHT - 2.0);
    scene.up(1.0, HEIGHT - 2.0, None);

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::UpdateDrawingItem { layer_id: LAYER.into(), x: 1.0, y: 2.0 },
            ActionCall::EndDrawingItem { layer_id: LAYER.into(), x: 1.0, y: 2.0 },
            ActionCall::Rollback,
        ]
    );
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_drag_vertex_forwards_snap() {
    let mut scene = Scene::new();
    scene.session = SessionRecorder::new(2000.0, HEIGHT, LAYER).with_snap_mask(SnapMask::GRID);
    let vertex = scene.element(ElementKind::Vertices, "V1", true);

    scene.down(0.0, HEIGHT, Some(vertex));
    scene.moved(5.0, HEIGHT - 5.0);
    scene.up(6.0, HEIGHT - 6.0, None);

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::BeginDraggingVertex {
                layer_id: LAYER.into(),
                vertex_id: "V1".into(),
                x: 0.0,
                y: 0.0,
                snap_mask: SnapMask::GRID,
            },
            ActionCall::UpdateDraggingVertex { x: 5.0, y: 5.0, snap_mask: SnapMask::GRID },
            ActionCall::EndDraggingVertex { x: 6.0, y: 6.0, snap_mask: SnapMask::GRID },
        ]
    );
}

#[test]
fn test_drag_hole() {
    let mut scene = Scene::new();
    let window = scene.element(ElementKind::Holes, "H1", true);

    scene.down(10.0, HEIGHT - 10.0, Some(window));
    assert_eq!(scene.session.mode(), Mode::DraggingHole);
    scene.moved(11.0, HEIGHT - 10.0);
    scene.up(12.0, HEIGHT - 10.0, Some(window));

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::BeginDraggingHole {
                layer_id: LAYER.into(),
                hole_id: "H1".into(),
                x: 10.0,
                y: 10.0,
            },
            ActionCall::UpdateDraggingHole { x: 11.0, y: 10.0 },
            ActionCall::EndDraggingHole { x: 12.0, y: 10.0 },
        ]
    );
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_drag_item_body() {
    let mut scene = Scene::new();
    let sofa = scene.element(ElementKind::Items, "sofa", true);

    scene.down(1.0, HEIGHT - 1.0, Some(sofa));
    assert_eq!(scene.session.mode(), Mode::DraggingItem);
    scene.moved(2.0, HEIGHT - 2.0);
    scene.up(2.0, HEIGHT - 2.0, None);

    let calls = scene.session.scene_calls();
    assert!(matches!(calls[0], ActionCall::BeginDraggingItem { .. }));
    assert_eq!(calls[1], ActionCall::UpdateDraggingItem { x: 2.0, y: 2.0 });
    assert_eq!(calls[2], ActionCall::EndDraggingItem { x: 2.0, y: 2.0 });
}

#[test]
fn test_rotate_item_by_anchor() {
    let mut scene = Scene::new();
    let root = scene.tree.root();
    let sofa = scene.tree.add_element(root, ElementKind::Items, LAYER, "sofa", true);
    scene.tree.set_attribute(sofa, attr::PART, "rotation-anchor");
    let handle = scene.tree.add_child(sofa);

    scene.down(50.0, HEIGHT - 50.0, Some(handle));
    assert_eq!(scene.session.mode(), Mode::RotatingItem);
    scene.moved(60.0, HEIGHT - 50.0);
    scene.up(60.0, HEIGHT - 55.0, Some(handle));

    assert_eq!(
        scene.session.scene_calls(),
        vec![
            ActionCall::BeginRotatingItem {
                layer_id: LAYER.into(),
                item_id: "sofa".into(),
                x: 50.0,
                y: 50.0,
            },
            ActionCall::UpdateRotatingItem { x: 60.0, y: 50.0 },
            ActionCall::EndRotatingItem { x: 60.0, y: 55.0 },
        ]
    );
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_down_on_unselected_is_noop() {
    let mut scene = Scene::new();
    let wall = scene.element(ElementKind::Lines, "E1", false);

    scene.down(0.0, 0.0, Some(wall));
    scene.down(0.0, 0.0, None);
    assert!(scene.session.calls().is_empty());
    assert_eq!(scene.session.mode(), Mode::Idle);
}

#[test]
fn test_down_on_selected_area_is_noop() {
    let mut scene = Scene::new();
    let room = scene.element(ElementKind::Areas, "room", true);
    scene.down(0.0, 0.0, Some(room));
    assert!(scene.session.calls().is_empty());
}

#[test]
fn test_down_outside_idle_ignores_target() {
    let mut scene = Scene::new();
    let wall = scene.element(ElementKind::Lines, "E1", true);
    scene.session.set_mode(Mode::Pan);
    scene.session.clear_calls();

    scene.down(0.0, 0.0, Some(wall));
    assert!(scene.session.calls().is_empty());
}

#[test]
fn test_up_selects_by_kind() {
    let cases = [
        (ElementKind::Lines, ActionCall::SelectLine { layer_id: LAYER.into(), line_id: "x".into() }),
        (ElementKind::Holes, ActionCall::SelectHole { layer_id: LAYER.into(), hole_id: "x".into() }),
        (ElementKind::Items, ActionCall::SelectItem { layer_id: LAYER.into(), item_id: "x".into() }),
        (ElementKind::Areas, ActionCall::SelectArea { layer_id: LAYER.into(), area_id: "x".into() }),
    ];

    for (kind, expected) in cases {
        let mut scene = Scene::new();
        let node = scene.element(kind, "x", false);
        scene.up(0.0, 0.0, Some(node));
        assert_eq!(scene.session.scene_calls(), vec![expected], "{kind}");
        assert_eq!(scene.session.selection().map(|s| s.kind), Some(kind));
    }
}

#[test]
fn test_up_on_unselected_vertex_selects_nothing() {
    let mut scene = Scene::new();
    let vertex = scene.element(ElementKind::Vertices, "V1", false);
    scene.up(0.0, 0.0, Some(vertex));
    assert!(scene.session.calls().is_empty());
}

#[test]
fn test_up_on_empty_space_unselects() {
    let mut scene = Scene::new();
    let root = scene.tree.root();
    scene.up(0.0, 0.0, Some(root));
    scene.up(0.0, 0.0, None);
    assert_eq!(
        scene.session.scene_calls(),
        vec![ActionCall::UnselectAll, ActionCall::UnselectAll]
    );
}

#[test]
fn test_up_on_selected_element_keeps_selection() {
    let mut scene = Scene::new();
    let wall = scene.element(ElementKind::Lines, "E1", true);
    scene.up(0.0, 0.0, Some(wall));
    assert!(scene.session.calls().is_empty());
}

#[test]
fn test_handlers_always_stop_propagation() {
    let mut scene = Scene::new();
    let wall = scene.element(ElementKind::Lines, "E1", false);

    assert!(scene.down(0.0, 0.0, Some(wall)).is_propagation_stopped());
    assert!(scene.moved(0.0, 0.0).is_propagation_stopped());
    assert!(scene.up(0.0, 0.0, None).is_propagation_stopped());
}

#[test]
fn test_malformed_element_is_error_and_stops_propagation() {
    let mut scene = Scene::new();
    let root = scene.tree.root();
    let broken = scene.tree.add_element(root, ElementKind::Lines, LAYER, "E1", false);
    scene.tree.remove_attribute(broken, attr::LAYER);

    let mut event = PointerEvent::up(CursorPoint::new(0.0, 0.0), Some(broken));
    let state = scene.session.snapshot();
    let err = scene
        .viewer
        .on_pointer_up(&state, &scene.tree, &mut event, &mut scene.session)
        .unwrap_err();

    assert_eq!(err, Error::Pick(PickError::MissingAttribute { attribute: attr::LAYER }));
    assert!(err.is_pick_error());
    assert!(event.is_propagation_stopped());
    assert!(scene.session.calls().is_empty());
}

#[test]
fn test_dispatcher_never_sets_mode_directly() {
    let mut scene = Scene::new();
    scene.session.set_mode(Mode::DraggingItem);
    scene.session.clear_calls();

    // Move in a drag mode only updates; the mode changes on the end call.
    scene.moved(1.0, 1.0);
    assert!(scene.session.transitions().is_empty());
    scene.up(1.0, 1.0, None);
    assert_eq!(scene.session.transitions(), &[(Mode::DraggingItem, Mode::Idle)]);
}
