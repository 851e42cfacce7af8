//! # floorplan2d Viewer
//!
//! The interactive core of a 2D floor-plan canvas. It turns raw pointer
//! events on a pannable, zoomable drawing surface into scene-editing calls
//! on external action handlers.
//!
//! ## Components
//!
//! - **Viewport**: pan/zoom matrix math, fit-to-viewer and zoom bounds
//!   ([`ViewportTransform`])
//! - **Coordinates**: drawing-surface to scene mapping ([`map_cursor_position`])
//! - **Picker**: pointer target to scene element ([`pick_element`])
//! - **Dispatcher**: the per-mode pointer state machine ([`Viewer2D`])
//!
//! Scene state, the current [`Mode`](floorplan2d_core::Mode) and undo history
//! belong to the collaborators behind [`Collaborators`]. The viewer reads a
//! [`ViewerSnapshot`] at the start of each event and never writes the mode.
//!
//! ## Usage
//!
//! ```rust
//! use floorplan2d_core::{CursorPoint, ElementKind};
//! use floorplan2d_viewer::{PointerEvent, SessionRecorder, SurfaceTree, Viewer2D};
//!
//! let mut tree = SurfaceTree::new();
//! let root = tree.root();
//! let wall = tree.add_element(root, ElementKind::Lines, "layer-1", "wall-1", false);
//!
//! let mut session = SessionRecorder::new(1000.0, 800.0, "layer-1");
//! let mut viewer = Viewer2D::default();
//!
//! let mut up = PointerEvent::up(CursorPoint::new(10.0, 10.0), Some(wall));
//! viewer
//!     .on_pointer_up(&session.snapshot(), &tree, &mut up, &mut session)
//!     .unwrap();
//! assert!(up.is_propagation_stopped());
//! assert_eq!(session.selection().map(|s| s.element_id.as_str()), Some("wall-1"));
//! ```

pub mod actions;
pub mod coords;
pub mod frame;
pub mod gesture;
pub mod mode_table;
pub mod options;
pub mod picker;
pub mod session;
pub mod toolbar;
pub mod viewer;
pub mod viewport;

pub use actions::{
    ActionSet, AreaActions, Collaborators, HolesActions, ItemsActions, LinesActions,
    ProjectActions, VerticesActions, ViewerActions,
};
pub use coords::{map_cursor_position, unmap_cursor_position};
pub use frame::{RulerFrame, ViewerFrame};
pub use gesture::{DragTarget, Gesture};
pub use mode_table::{mode_attributes, Cursor, ModeAttributes, PointerEvents, Tool};
pub use options::{ViewerOptions, ViewerSnapshot};
pub use picker::{pick_element, ElementData, ElementTree, NodeId, SurfaceTree};
pub use session::{ActionCall, Selection, SessionRecorder};
pub use toolbar::{toolbar_buttons, ToolbarButton, ToolbarButtonKind};
pub use viewer::{PointerEvent, PointerEventKind, PointerNotice, SubscriptionId, Viewer2D};
pub use viewport::{
    AlignX, AlignY, Decomposition, Matrix, ViewerAction, ViewerMode, ViewportTransform,
};
