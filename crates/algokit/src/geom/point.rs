use std::fmt;

use super::Vector2;

/// A position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Vector from `(src_x, src_y)` to this point.
    #[inline]
    pub fn create_vector(&self, src_x: f64, src_y: f64) -> Vector2 {
        Vector2::new(self.x - src_x, self.y - src_y)
    }

    /// Vector from the origin to this point.
    #[inline]
    pub fn to_vector(&self) -> Vector2 {
        self.create_vector(0.0, 0.0)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x, y]: {}, {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for nalgebra::Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        nalgebra::Vector2::new(p.x, p.y)
    }
}
