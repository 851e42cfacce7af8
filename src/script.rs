//! Pointer-session scripts.
//!
//! A script describes a scene (its size and the elements on the drawing
//! surface) and a sequence of pointer and toolbar steps. [`replay`] feeds the
//! steps through a [`Viewer2D`] against a [`SessionRecorder`] and returns
//! what the collaborators were asked to do.

use std::collections::HashMap;

use floorplan2d_core::constants::attr;
use floorplan2d_core::{CursorPoint, ElementKind, Error, Mode, Result, SnapMask};
use floorplan2d_viewer::{
    ActionCall, NodeId, PointerEvent, SessionRecorder, SurfaceTree, Tool, ToolbarButtonKind,
    Viewer2D, ViewerFrame, ViewerOptions,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Element placed on the scripted drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptElement {
    pub kind: ElementKind,
    pub id: String,
    /// Defaults to the script's selected layer.
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub part: Option<String>,
}

/// One scripted step. Coordinates are drawing-surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<String>,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<String>,
    },
    /// Toolbar tool change.
    Tool { tool: Tool },
    Toolbar { button: ToolbarButtonKind },
    Cancel,
    /// Mode change made outside the viewer, e.g. picking a catalog item.
    SetMode { mode: Mode },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    pub scene: Size,
    pub viewer: Size,
    #[serde(default = "default_layer")]
    pub layer: String,
    #[serde(default)]
    pub snap_mask: SnapMask,
    #[serde(default)]
    pub elements: Vec<ScriptElement>,
    pub steps: Vec<ScriptStep>,
}

fn default_layer() -> String {
    "layer-1".to_string()
}

impl SessionScript {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    pub calls: Vec<ActionCall>,
    pub transitions: Vec<(Mode, Mode)>,
    pub final_mode: Mode,
    /// Items clicked in view-only mode, in order.
    pub item_clicks: Vec<String>,
    /// Frame rendered after the last step.
    pub frame: ViewerFrame,
}

/// Replays `script`, mounting the viewer first.
pub fn replay(script: &SessionScript, options: ViewerOptions) -> Result<Replay> {
    let (tree, targets) = build_surface(script);
    let clicks = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = clicks.clone();

    let mut viewer = Viewer2D::new(options)
        .with_item_click(move |id| sink.borrow_mut().push(id.to_string()));
    let mut session = SessionRecorder::new(script.scene.width, script.scene.height, script.layer.as_str())
        .with_snap_mask(script.snap_mask);

    let state = session.snapshot();
    viewer.mount(&state, script.viewer.width, script.viewer.height, &mut session)?;
    info!(steps = script.steps.len(), elements = script.elements.len(), "replaying session");

    for (index, step) in script.steps.iter().enumerate() {
        debug!(index, ?step, mode = %session.mode(), "step");
        let state = session.snapshot();
        match step {
            ScriptStep::Down { x, y, target } => {
                let mut event = PointerEvent::down(CursorPoint::new(*x, *y), resolve(&targets, target)?);
                viewer.on_pointer_down(&state, &tree, &mut event, &mut session)?;
            }
            ScriptStep::Move { x, y } => {
                let mut event = PointerEvent::<NodeId>::moved(CursorPoint::new(*x, *y));
                viewer.on_pointer_move(&state, &mut event, &mut session)?;
            }
            ScriptStep::Up { x, y, target } => {
                let mut event = PointerEvent::up(CursorPoint::new(*x, *y), resolve(&targets, target)?);
                viewer.on_pointer_up(&state, &tree, &mut event, &mut session)?;
            }
            ScriptStep::Tool { tool } => viewer.on_change_tool(&state, *tool, &mut session),
            ScriptStep::Toolbar { button } => viewer.on_toolbar_click(&state, *button, &mut session)?,
            ScriptStep::Cancel => viewer.on_cancel(&state, &mut session),
            ScriptStep::SetMode { mode } => session.set_mode(*mode),
        }
    }

    let frame = viewer.render(&session.snapshot(), script.viewer.width, script.viewer.height);
    let item_clicks = clicks.borrow().clone();
    Ok(Replay {
        calls: session.calls().to_vec(),
        transitions: session.transitions().to_vec(),
        final_mode: session.mode(),
        item_clicks,
        frame,
    })
}

/// Builds the surface: each element root gets one child shape, which is
/// what scripted targets point at.
fn build_surface(script: &SessionScript) -> (SurfaceTree, HashMap<String, NodeId>) {
    let mut tree = SurfaceTree::new();
    let mut targets = HashMap::new();
    let root = tree.root();

    for element in &script.elements {
        let layer = element.layer.as_deref().unwrap_or(&script.layer);
        let node = tree.add_element(root, element.kind, layer, &element.id, element.selected);
        if let Some(part) = &element.part {
            tree.set_attribute(node, attr::PART, part);
        }
        targets.insert(element.id.clone(), tree.add_child(node));
    }

    (tree, targets)
}

fn resolve(targets: &HashMap<String, NodeId>, target: &Option<String>) -> Result<Option<NodeId>> {
    match target {
        None => Ok(None),
        Some(id) => targets
            .get(id)
            .copied()
            .map(Some)
            .ok_or_else(|| Error::other(format!("script targets unknown element '{id}'"))),
    }
}
