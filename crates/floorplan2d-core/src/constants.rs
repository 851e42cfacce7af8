//! Shared constants for the viewer.

/// Value of the `part` attribute carried by an item's rotation handle.
pub const ROTATION_ANCHOR_PART: &str = "rotation-anchor";

/// Zoom multiplier applied by a single click of the zoom-in tool.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Scene units covered by one ruler segment.
pub const RULER_UNIT_PIXEL_SIZE: f64 = 100.0;

/// Attribute names read from an element root by the picker.
pub mod attr {
    pub const ELEMENT_ROOT: &str = "data-element-root";
    pub const LAYER: &str = "data-layer";
    pub const PROTOTYPE: &str = "data-prototype";
    pub const SELECTED: &str = "data-selected";
    pub const ID: &str = "data-id";
    pub const PART: &str = "data-part";
}
