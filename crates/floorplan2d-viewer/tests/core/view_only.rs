use std::cell::RefCell;
use std::rc::Rc;

use floorplan2d_core::{CursorPoint, ElementKind, Mode};
use floorplan2d_viewer::{
    ActionCall, NodeId, PointerEvent, SessionRecorder, SurfaceTree, Viewer2D, ViewerOptions,
};

fn view_only_viewer(clicks: Rc<RefCell<Vec<String>>>) -> Viewer2D {
    let options = ViewerOptions {
        view_only: true,
        ..ViewerOptions::default()
    };
    Viewer2D::new(options).with_item_click(move |id| clicks.borrow_mut().push(id.to_string()))
}

fn up(
    viewer: &mut Viewer2D,
    tree: &SurfaceTree,
    session: &mut SessionRecorder,
    target: Option<NodeId>,
) -> PointerEvent<NodeId> {
    let mut event = PointerEvent::up(CursorPoint::new(10.0, 10.0), target);
    let state = session.snapshot();
    viewer.on_pointer_up(&state, tree, &mut event, session).unwrap();
    event
}

#[test]
fn test_item_click_unselects_and_notifies() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = view_only_viewer(clicks.clone());
    let mut tree = SurfaceTree::new();
    let root = tree.root();
    let item = tree.add_element(root, ElementKind::Items, "layer-1", "lamp", false);
    let mut session = SessionRecorder::new(500.0, 500.0, "layer-1");

    let event = up(&mut viewer, &tree, &mut session, Some(item));

    assert_eq!(*clicks.borrow(), vec!["lamp".to_string()]);
    assert_eq!(session.scene_calls(), vec![ActionCall::UnselectAll]);
    assert!(event.is_propagation_stopped());
}

#[test]
fn test_non_item_click_only_unselects() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = view_only_viewer(clicks.clone());
    let mut tree = SurfaceTree::new();
    let root = tree.root();
    let wall = tree.add_element(root, ElementKind::Lines, "layer-1", "wall", false);
    let mut session = SessionRecorder::new(500.0, 500.0, "layer-1");

    up(&mut viewer, &tree, &mut session, Some(wall));
    up(&mut viewer, &tree, &mut session, None);

    assert!(clicks.borrow().is_empty());
    assert_eq!(
        session.scene_calls(),
        vec![ActionCall::UnselectAll, ActionCall::UnselectAll]
    );
}

#[test]
fn test_selected_element_click_is_ignored() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = view_only_viewer(clicks.clone());
    let mut tree = SurfaceTree::new();
    let root = tree.root();
    let item = tree.add_element(root, ElementKind::Items, "layer-1", "lamp", true);
    let mut session = SessionRecorder::new(500.0, 500.0, "layer-1");

    up(&mut viewer, &tree, &mut session, Some(item));

    assert!(clicks.borrow().is_empty());
    assert!(session.calls().is_empty());
}

#[test]
fn test_view_only_never_begins_drag() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = view_only_viewer(clicks);
    let mut tree = SurfaceTree::new();
    let root = tree.root();
    let item = tree.add_element(root, ElementKind::Items, "layer-1", "lamp", true);
    let mut session = SessionRecorder::new(500.0, 500.0, "layer-1");

    let mut event = PointerEvent::down(CursorPoint::new(1.0, 1.0), Some(item));
    let state = session.snapshot();
    viewer.on_pointer_down(&state, &tree, &mut event, &mut session).unwrap();

    assert!(session.calls().is_empty());
    assert_eq!(session.mode(), Mode::Idle);
    assert!(event.is_propagation_stopped());
}

#[test]
fn test_view_only_without_handler() {
    let mut viewer = Viewer2D::new(ViewerOptions {
        view_only: true,
        ..ViewerOptions::default()
    });
    let mut tree = SurfaceTree::new();
    let root = tree.root();
    let item = tree.add_element(root, ElementKind::Items, "layer-1", "lamp", false);
    let mut session = SessionRecorder::new(500.0, 500.0, "layer-1");

    up(&mut viewer, &tree, &mut session, Some(item));
    assert_eq!(session.scene_calls(), vec![ActionCall::UnselectAll]);
}
