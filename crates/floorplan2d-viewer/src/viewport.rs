//! Viewport transform engine.
//!
//! A [`ViewportTransform`] is the pan/zoom state of the viewer: an affine
//! matrix mapping drawing-surface coordinates (origin top-left, +Y down) to
//! viewer pixels, plus the viewer and scene extents and optional zoom bounds.
//!
//! Transforms are values. Every operation returns a new transform tagged with
//! the [`ViewerAction`] that produced it (`None` for programmatic resets) so
//! observers can tell gesture-driven changes apart from resets.

use std::fmt;

use floorplan2d_core::{CursorPoint, ViewportError};
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coefficients of the 2D affine map `x' = a·x + c·y + e`,
/// `y' = b·x + d·y + f`, in the order used by SVG and [`Affine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Pure translation.
    pub fn translate(tx: f64, ty: f64) -> Self {
        Affine::translate((tx, ty)).into()
    }

    /// Pure scale about the origin.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Affine::scale_non_uniform(sx, sy).into()
    }

    pub fn to_affine(self) -> Affine {
        Affine::new([self.a, self.b, self.c, self.d, self.e, self.f])
    }

    /// Applies the matrix to a point.
    pub fn apply(&self, point: CursorPoint) -> CursorPoint {
        let mapped = self.to_affine() * Point::new(point.x, point.y);
        CursorPoint::new(mapped.x, mapped.y)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Matrix {
    fn from(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self { a, b, c, d, e, f }
    }
}

impl From<Matrix> for Affine {
    fn from(matrix: Matrix) -> Self {
        matrix.to_affine()
    }
}

/// Horizontal alignment policy used when the fitted scene leaves
/// horizontal slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignX {
    Left,
    Center,
    Right,
    #[default]
    Cover,
}

/// Vertical alignment policy used when the fitted scene leaves vertical
/// slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignY {
    Top,
    Center,
    Bottom,
    #[default]
    Cover,
}

/// Gesture that produced a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerAction {
    Zoom,
    Pan,
}

/// Internal state of the pan/zoom host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerMode {
    #[default]
    Idle,
    /// A zoom rectangle is being dragged.
    Zooming,
}

/// Projection of a transform onto its uniform scale and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub scale_factor: f64,
    pub translation_x: f64,
    pub translation_y: f64,
}

/// Pan/zoom state of the 2D viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    matrix: Matrix,
    viewer_width: f64,
    viewer_height: f64,
    scene_min_x: f64,
    scene_min_y: f64,
    scene_width: f64,
    scene_height: f64,
    scale_factor_min: Option<f64>,
    scale_factor_max: Option<f64>,
    mode: ViewerMode,
    start_x: Option<f64>,
    start_y: Option<f64>,
    end_x: Option<f64>,
    end_y: Option<f64>,
    last_action: Option<ViewerAction>,
}

impl ViewportTransform {
    /// Creates an identity transform for a viewer and a scene anchored at
    /// the surface origin.
    pub fn new(viewer_width: f64, viewer_height: f64, scene_width: f64, scene_height: f64) -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            viewer_width,
            viewer_height,
            scene_min_x: 0.0,
            scene_min_y: 0.0,
            scene_width,
            scene_height,
            scale_factor_min: None,
            scale_factor_max: None,
            mode: ViewerMode::Idle,
            start_x: None,
            start_y: None,
            end_x: None,
            end_y: None,
            last_action: None,
        }
    }

    /// Returns a copy with the scene's top-left corner moved.
    pub fn with_scene_origin(&self, min_x: f64, min_y: f64) -> Self {
        self.replaced(self.last_action, |next| {
            next.scene_min_x = min_x;
            next.scene_min_y = min_y;
        })
    }

    /// Returns a copy with new zoom bounds. `None` leaves that side open.
    pub fn with_scale_bounds(&self, min: Option<f64>, max: Option<f64>) -> Self {
        self.replaced(self.last_action, |next| {
            next.scale_factor_min = min;
            next.scale_factor_max = max;
        })
    }

    /// Returns a copy carrying `matrix`, untagged.
    pub fn with_matrix(&self, matrix: Matrix) -> Self {
        self.replaced(None, |next| next.matrix = matrix)
    }

    /// Returns a copy with a pending zoom rectangle, as left behind by a
    /// rectangle-zoom drag.
    pub fn with_pending_rect(&self, start: CursorPoint, end: CursorPoint) -> Self {
        self.replaced(self.last_action, |next| {
            next.mode = ViewerMode::Zooming;
            next.start_x = Some(start.x);
            next.start_y = Some(start.y);
            next.end_x = Some(end.x);
            next.end_y = Some(end.y);
        })
    }

    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Uniform scale factor (`a`).
    pub fn scale_factor(&self) -> f64 {
        self.matrix.a
    }

    pub fn viewer_width(&self) -> f64 {
        self.viewer_width
    }

    pub fn viewer_height(&self) -> f64 {
        self.viewer_height
    }

    pub fn scene_width(&self) -> f64 {
        self.scene_width
    }

    pub fn scene_height(&self) -> f64 {
        self.scene_height
    }

    pub fn scale_factor_min(&self) -> Option<f64> {
        self.scale_factor_min
    }

    pub fn scale_factor_max(&self) -> Option<f64> {
        self.scale_factor_max
    }

    pub fn mode(&self) -> ViewerMode {
        self.mode
    }

    pub fn last_action(&self) -> Option<ViewerAction> {
        self.last_action
    }

    /// Start corner of the pending zoom rectangle.
    pub fn rect_start(&self) -> Option<CursorPoint> {
        Some(CursorPoint::new(self.start_x?, self.start_y?))
    }

    /// End corner of the pending zoom rectangle.
    pub fn rect_end(&self) -> Option<CursorPoint> {
        Some(CursorPoint::new(self.end_x?, self.end_y?))
    }

    /// True when any of the zoom-rectangle fields is set.
    pub fn has_pending_rect(&self) -> bool {
        self.start_x.is_some() || self.start_y.is_some() || self.end_x.is_some() || self.end_y.is_some()
    }

    /// Projects the matrix onto `{scale_factor, translation_x, translation_y}`.
    pub fn decompose(&self) -> Decomposition {
        Decomposition {
            scale_factor: self.matrix.a,
            translation_x: self.matrix.e,
            translation_y: self.matrix.f,
        }
    }

    /// Whether multiplying the current scale by `factor` would leave the
    /// zoom bounds in the direction of the zoom.
    pub fn is_zoom_level_going_out_of_bounds(&self, factor: f64) -> bool {
        let target = factor * self.matrix.a;
        let below_min = self.scale_factor_min.is_some_and(|min| target < min);
        let above_max = self.scale_factor_max.is_some_and(|max| target > max);
        (below_min && factor < 1.0) || (above_max && factor > 1.0)
    }

    /// Clamps the uniform scale into the zoom bounds, keeping translation.
    pub fn limit_zoom_level(&self) -> Self {
        let matrix = self.limit_matrix(self.matrix);
        self.replaced(None, |next| next.matrix = matrix)
    }

    /// Fits the scene into the viewer under the given alignment policies.
    ///
    /// When the required zoom would cross the zoom bounds the scale and
    /// translation are kept and only the pending rectangle is cleared.
    pub fn fit_to_viewer(&self, align_x: AlignX, align_y: AlignY) -> Result<Self, ViewportError> {
        self.check_geometry()?;

        let (min_x, min_y) = (self.scene_min_x, self.scene_min_y);
        let scale_x = self.viewer_width / self.scene_width;
        let scale_y = self.viewer_height / self.scene_height;
        let scale_level = scale_x.min(scale_y);

        let mut scale_matrix = Affine::scale(scale_level);
        let mut translate_x = -min_x * scale_x;
        let mut translate_y = -min_y * scale_y;

        if scale_x < scale_y {
            // Widths match; vertical slack.
            let remainder_y = self.viewer_height - scale_x * self.scene_height;
            match align_y {
                AlignY::Top => translate_y = -min_y * scale_level,
                AlignY::Center => translate_y = (remainder_y / 2.0).round() - min_y * scale_level,
                AlignY::Bottom => translate_y = remainder_y - min_y * scale_level,
                AlignY::Cover => {
                    scale_matrix = Affine::scale(scale_y);
                    let remainder_x = self.viewer_width - scale_y * self.scene_width;
                    translate_x = min_x + (remainder_x / 2.0).round();
                }
            }
        } else {
            // Heights match; horizontal slack.
            let remainder_x = self.viewer_width - scale_y * self.scene_width;
            match align_x {
                AlignX::Left => translate_x = -min_x * scale_level,
                AlignX::Center => translate_x = (remainder_x / 2.0).round() - min_x * scale_level,
                AlignX::Right => translate_x = remainder_x - min_x * scale_level,
                AlignX::Cover => {
                    scale_matrix = Affine::scale(scale_x);
                    let remainder_y = self.viewer_height - scale_x * self.scene_height;
                    translate_y = min_y + (remainder_y / 2.0).round();
                }
            }
        }

        let matrix = Matrix::from(Affine::translate((translate_x, translate_y)) * scale_matrix);

        if self.is_zoom_level_going_out_of_bounds(scale_level / self.matrix.d) {
            debug!(scale_level, "fit rejected by zoom bounds");
            return Ok(self.settled(None));
        }

        let matrix = self.limit_matrix(matrix);
        let mut next = self.settled(Some(ViewerAction::Zoom));
        next.matrix = matrix;
        Ok(next)
    }

    /// Zooms by `factor` about a drawing-surface point, keeping that point
    /// fixed on screen. Requests that would cross the zoom bounds are
    /// rejected and only clear the pending rectangle.
    pub fn zoom(&self, surface_x: f64, surface_y: f64, factor: f64) -> Result<Self, ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidFactor { factor });
        }

        if self.is_zoom_level_going_out_of_bounds(factor) {
            debug!(factor, scale = self.matrix.a, "zoom rejected by zoom bounds");
            return Ok(self.settled(None));
        }

        let matrix = Matrix::from(
            self.matrix.to_affine()
                * Affine::translate((surface_x, surface_y))
                * Affine::scale(factor)
                * Affine::translate((-surface_x, -surface_y)),
        );

        let matrix = self.limit_matrix(matrix);
        let mut next = self.settled(Some(ViewerAction::Zoom));
        next.matrix = matrix;
        Ok(next)
    }

    /// Zooms by `factor` about the point under the viewer's center.
    pub fn zoom_on_viewer_center(&self, factor: f64) -> Result<Self, ViewportError> {
        let center = self.viewer_to_surface(CursorPoint::new(
            self.viewer_width / 2.0,
            self.viewer_height / 2.0,
        ))?;
        self.zoom(center.x, center.y, factor)
    }

    /// Pans by a delta in drawing-surface units.
    ///
    /// With a `pan_limit`, at least that many surface units of the scene stay
    /// inside the viewer on every side. The correction is in viewer pixels.
    pub fn pan(&self, delta_x: f64, delta_y: f64, pan_limit: Option<f64>) -> Self {
        let mut affine = self.matrix.to_affine() * Affine::translate((delta_x, delta_y));

        if let Some(limit) = pan_limit {
            let p1 = affine * Point::new(self.scene_min_x + limit, self.scene_min_y + limit);
            let p2 = affine
                * Point::new(
                    self.scene_min_x + self.scene_width - limit,
                    self.scene_min_y + self.scene_height - limit,
                );

            let move_x = if self.viewer_width - p1.x < 0.0 {
                self.viewer_width - p1.x
            } else if p2.x < 0.0 {
                -p2.x
            } else {
                0.0
            };
            let move_y = if self.viewer_height - p1.y < 0.0 {
                self.viewer_height - p1.y
            } else if p2.y < 0.0 {
                -p2.y
            } else {
                0.0
            };

            affine = Affine::translate((move_x, move_y)) * affine;
        }

        let mut next = self.settled(Some(ViewerAction::Pan));
        next.matrix = affine.into();
        next
    }

    /// Zeroes the translation. The action tag is kept so a fit followed by a
    /// reset still reads as a zoom.
    pub fn reset_translation(&self) -> Self {
        self.replaced(self.last_action, |next| {
            next.matrix.e = 0.0;
            next.matrix.f = 0.0;
        })
    }

    /// Maps a drawing-surface point to viewer pixels.
    pub fn surface_to_viewer(&self, point: CursorPoint) -> CursorPoint {
        self.matrix.apply(point)
    }

    /// Maps viewer pixels back to a drawing-surface point.
    pub fn viewer_to_surface(&self, point: CursorPoint) -> Result<CursorPoint, ViewportError> {
        let affine = self.matrix.to_affine();
        let det = affine.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ViewportError::Singular);
        }
        let surface = affine.inverse() * Point::new(point.x, point.y);
        Ok(CursorPoint::new(surface.x, surface.y))
    }

    fn check_geometry(&self) -> Result<(), ViewportError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.scene_width) || !positive(self.scene_height) {
            return Err(ViewportError::DegenerateScene {
                width: self.scene_width,
                height: self.scene_height,
            });
        }
        if !positive(self.viewer_width) || !positive(self.viewer_height) {
            return Err(ViewportError::DegenerateViewer {
                width: self.viewer_width,
                height: self.viewer_height,
            });
        }
        Ok(())
    }

    fn limit_matrix(&self, matrix: Matrix) -> Matrix {
        let mut scale_level = matrix.a;
        if let Some(min) = self.scale_factor_min {
            scale_level = scale_level.max(min);
        }
        if let Some(max) = self.scale_factor_max {
            scale_level = scale_level.min(max);
        }
        Matrix {
            a: scale_level,
            d: scale_level,
            ..matrix
        }
    }

    /// Copy with the host idle and the zoom rectangle cleared.
    fn settled(&self, action: Option<ViewerAction>) -> Self {
        self.replaced(action, |next| {
            next.mode = ViewerMode::Idle;
            next.start_x = None;
            next.start_y = None;
            next.end_x = None;
            next.end_y = None;
        })
    }

    fn replaced(&self, action: Option<ViewerAction>, patch: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        patch(&mut next);
        next.last_action = action;
        next
    }
}

impl fmt::Display for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.matrix.a, self.matrix.e, self.matrix.f
        )
    }
}
