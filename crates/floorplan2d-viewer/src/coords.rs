//! Pointer-to-scene coordinate mapping.
//!
//! The drawing surface has its origin at the top-left with +Y pointing down,
//! while scene coordinates have their origin at the bottom-left with +Y
//! pointing up. Every pointer-derived position is flipped here before it
//! reaches an action collaborator.

use floorplan2d_core::CursorPoint;

/// Maps a drawing-surface point into scene coordinates.
///
/// ```text
/// scene_x = surface_x
/// scene_y = scene_height - surface_y
/// ```
pub fn map_cursor_position(surface: CursorPoint, scene_height: f64) -> CursorPoint {
    CursorPoint::new(surface.x, scene_height - surface.y)
}

/// Maps a scene point back onto the drawing surface.
///
/// The flip is an involution, so this is the same formula as
/// [`map_cursor_position`].
pub fn unmap_cursor_position(scene: CursorPoint, scene_height: f64) -> CursorPoint {
    map_cursor_position(scene, scene_height)
}
