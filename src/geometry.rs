//! Geometric primitives for rasterization.

/// A 2D point in integer raster coordinates.
///
/// Coordinates are not clamped to any canvas: a point may be negative
/// or exceed the canvas dimensions, and every rasterizer accepts such
/// points (out-of-range pixel writes clip silently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate (column, 0 at the left).
    pub x: i32,
    /// Y coordinate (row, 0 at the top).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
