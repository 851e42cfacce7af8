use floorplan2d_core::{CursorPoint, ElementKind, Mode, SnapMask};
use floorplan2d_viewer::coords::map_cursor_position;
use floorplan2d_viewer::viewport::{AlignX, AlignY, Matrix, ViewportTransform};
use floorplan2d_viewer::{ActionCall, NodeId, PointerEvent, SessionRecorder, SurfaceTree, Viewer2D};
use proptest::prelude::*;

fn align_x() -> impl Strategy<Value = AlignX> {
    prop_oneof![
        Just(AlignX::Left),
        Just(AlignX::Center),
        Just(AlignX::Right),
        Just(AlignX::Cover),
    ]
}

fn align_y() -> impl Strategy<Value = AlignY> {
    prop_oneof![
        Just(AlignY::Top),
        Just(AlignY::Center),
        Just(AlignY::Bottom),
        Just(AlignY::Cover),
    ]
}

fn any_mode() -> impl Strategy<Value = Mode> {
    (0..Mode::ALL.len()).prop_map(|i| Mode::ALL[i])
}

proptest! {
    #[test]
    fn map_is_its_own_inverse(x in -10_000i32..10_000, y in -10_000i32..10_000, h in 1i32..10_000) {
        let p = CursorPoint::new(f64::from(x), f64::from(y));
        let h = f64::from(h);
        prop_assert_eq!(map_cursor_position(map_cursor_position(p, h), h), p);
    }

    #[test]
    fn fit_matching_aspect_has_no_translation(
        w in 1u32..5_000,
        h in 1u32..5_000,
        k in prop_oneof![Just(0.25), Just(0.5), Just(1.0), Just(2.0), Just(4.0)],
    ) {
        let (sw, sh) = (f64::from(w), f64::from(h));
        let value = ViewportTransform::new(sw * k, sh * k, sw, sh);
        let fitted = value.fit_to_viewer(AlignX::Cover, AlignY::Cover).unwrap();
        let m = fitted.matrix();
        prop_assert_eq!(m.e, 0.0);
        prop_assert_eq!(m.f, 0.0);
        prop_assert_eq!(m.a, (sw * k) / sw);
        prop_assert_eq!(m.a, m.d);
    }

    #[test]
    fn fit_is_bit_identical(
        vw in 1.0f64..4_000.0,
        vh in 1.0f64..4_000.0,
        sw in 1.0f64..10_000.0,
        sh in 1.0f64..10_000.0,
        ax in align_x(),
        ay in align_y(),
    ) {
        let value = ViewportTransform::new(vw, vh, sw, sh);
        let a = value.fit_to_viewer(ax, ay).unwrap().matrix();
        let b = value.fit_to_viewer(ax, ay).unwrap().matrix();
        for (l, r) in [(a.a, b.a), (a.d, b.d), (a.e, b.e), (a.f, b.f)] {
            prop_assert_eq!(l.to_bits(), r.to_bits());
        }
    }

    #[test]
    fn fit_keeps_uniform_scale(
        vw in 1.0f64..4_000.0,
        vh in 1.0f64..4_000.0,
        sw in 1.0f64..10_000.0,
        sh in 1.0f64..10_000.0,
        ax in align_x(),
        ay in align_y(),
    ) {
        let fitted = ViewportTransform::new(vw, vh, sw, sh).fit_to_viewer(ax, ay).unwrap();
        prop_assert_eq!(fitted.matrix().a, fitted.matrix().d);
    }

    #[test]
    fn limit_stays_within_bounds(
        scale in 0.001f64..1_000.0,
        min in 0.01f64..1.0,
        max in 1.0f64..100.0,
        e in -1_000.0f64..1_000.0,
    ) {
        let value = ViewportTransform::new(800.0, 600.0, 800.0, 600.0)
            .with_matrix(Matrix { a: scale, d: scale, e, ..Matrix::IDENTITY })
            .with_scale_bounds(Some(min), Some(max));
        let limited = value.limit_zoom_level().matrix();
        prop_assert!(limited.a >= min && limited.a <= max);
        prop_assert_eq!(limited.a, limited.d);
        prop_assert_eq!(limited.e, e);
    }

    #[test]
    fn zoom_never_lands_out_of_bounds(
        factor in 0.05f64..20.0,
        min in 0.1f64..1.0,
        max in 1.0f64..10.0,
    ) {
        let value = ViewportTransform::new(800.0, 600.0, 800.0, 600.0)
            .with_scale_bounds(Some(min), Some(max));
        let zoomed = value.zoom(400.0, 300.0, factor).unwrap();
        prop_assert!(zoomed.scale_factor() >= min && zoomed.scale_factor() <= max);
    }

    #[test]
    fn line_drag_forwards_mapped_points(
        x0 in 0i32..2_000, y0 in 0i32..1_000,
        x1 in 0i32..2_000, y1 in 0i32..1_000,
        mask in 0u32..32,
    ) {
        let height = 1_000.0;
        let mask = SnapMask(mask);
        let mut tree = SurfaceTree::new();
        let root = tree.root();
        let wall = tree.add_element(root, ElementKind::Lines, "L1", "E1", true);
        let mut session = SessionRecorder::new(2_000.0, height, "L1").with_snap_mask(mask);
        let mut viewer = Viewer2D::default();

        let start = CursorPoint::new(f64::from(x0), f64::from(y0));
        let end = CursorPoint::new(f64::from(x1), f64::from(y1));

        let mut down = PointerEvent::down(start, Some(wall));
        viewer.on_pointer_down(&session.snapshot(), &tree, &mut down, &mut session).unwrap();
        let mut moved = PointerEvent::<NodeId>::moved(end);
        viewer.on_pointer_move(&session.snapshot(), &mut moved, &mut session).unwrap();
        let mut up = PointerEvent::up(end, Some(wall));
        viewer.on_pointer_up(&session.snapshot(), &tree, &mut up, &mut session).unwrap();

        let s = map_cursor_position(start, height);
        let e = map_cursor_position(end, height);
        prop_assert_eq!(
            session.scene_calls(),
            vec![
                ActionCall::BeginDraggingLine {
                    layer_id: "L1".into(),
                    line_id: "E1".into(),
                    x: s.x,
                    y: s.y,
                    snap_mask: mask,
                },
                ActionCall::UpdateDraggingLine { x: e.x, y: e.y, snap_mask: mask },
                ActionCall::EndDraggingLine { x: e.x, y: e.y, snap_mask: mask },
            ]
        );
        prop_assert_eq!(session.mode(), Mode::Idle);
    }

    #[test]
    fn every_handler_stops_propagation(mode in any_mode(), x in 0.0f64..500.0, y in 0.0f64..500.0) {
        let tree = SurfaceTree::new();
        let mut session = SessionRecorder::new(500.0, 500.0, "L1");
        session.set_mode(mode);
        let mut viewer = Viewer2D::default();
        let state = session.snapshot();
        let point = CursorPoint::new(x, y);

        let mut down = PointerEvent::down(point, None);
        viewer.on_pointer_down(&state, &tree, &mut down, &mut session).unwrap();
        let mut moved = PointerEvent::<NodeId>::moved(point);
        viewer.on_pointer_move(&state, &mut moved, &mut session).unwrap();
        let mut up = PointerEvent::up(point, None);
        viewer.on_pointer_up(&state, &tree, &mut up, &mut session).unwrap();

        prop_assert!(down.is_propagation_stopped());
        prop_assert!(moved.is_propagation_stopped());
        prop_assert!(up.is_propagation_stopped());
    }
}
