//! Value types shared by the viewer components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PickError;

/// A point in scene units (origin bottom-left, +Y up).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorPoint {
    pub x: f64,
    pub y: f64,
}

impl CursorPoint {
    /// Creates a new cursor point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for CursorPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for CursorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Bitfield of enabled snapping targets.
///
/// The viewer forwards the mask untouched to the line and vertex actions;
/// only the scene collaborators interpret the bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapMask(pub u32);

impl SnapMask {
    pub const NONE: SnapMask = SnapMask(0);
    pub const POINT: SnapMask = SnapMask(1 << 0);
    pub const LINE: SnapMask = SnapMask(1 << 1);
    pub const SEGMENT: SnapMask = SnapMask(1 << 2);
    pub const GRID: SnapMask = SnapMask(1 << 3);
    pub const GUIDE: SnapMask = SnapMask(1 << 4);
    pub const ALL: SnapMask = SnapMask(0b1_1111);

    /// Raw bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub fn contains(self, other: SnapMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for SnapMask {
    type Output = SnapMask;

    fn bitor(self, rhs: SnapMask) -> SnapMask {
        SnapMask(self.0 | rhs.0)
    }
}

/// Kind of scene element a pointer target belongs to.
///
/// The string forms match the `prototype` metadata written on element roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Lines,
    Vertices,
    Items,
    Holes,
    Areas,
}

impl ElementKind {
    /// Prototype string as written on the drawing surface.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Vertices => "vertices",
            Self::Items => "items",
            Self::Holes => "holes",
            Self::Areas => "areas",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(Self::Lines),
            "vertices" => Ok(Self::Vertices),
            "items" => Ok(Self::Items),
            "holes" => Ok(Self::Holes),
            "areas" => Ok(Self::Areas),
            other => Err(PickError::UnknownPrototype {
                prototype: other.to_string(),
            }),
        }
    }
}
