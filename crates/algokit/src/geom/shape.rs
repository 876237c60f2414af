//! Polygon factory.
//!
//! Model
//! - `create_polygon`: `sides` vertices on a circle of radius `size` around
//!   `offset`, vertex `i` at angle `orientation + i·(2π/sides)`.
//! - `create_triangle`: unrolled three-vertex case whose vertices sit at
//!   `orientation + k·(2π/3)` for `k = 1, 2, 3`, i.e. one segment ahead of
//!   `create_polygon(3, ..)` for the same orientation.
//! - `create_rectangle` / `create_square`: axis-aligned, orientation 0. The
//!   offset is measured in units of the shape's own width/height, so corner
//!   `x` is `width·(offset.x ± 0.5)`.
//!
//! All factories emit vertices counterclockwise.

use tracing::debug;

use super::{Point2, Vector2};
use crate::error::{Error, Result};
use crate::math::PI2;

/// An ordered vertex list plus the parameters it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<Point2>,
    width: f64,
    height: f64,
    offset: Point2,
    orientation: f64,
    sides: usize,
}

impl Shape {
    /// Regular polygon with `sides` vertices at radius `size`.
    ///
    /// Errors with `InvalidArgument` when `sides == 0`.
    pub fn create_polygon(
        sides: usize,
        size: f64,
        offset: Point2,
        orientation: f64,
    ) -> Result<Shape> {
        if sides == 0 {
            return Err(Error::invalid("polygon needs at least one side"));
        }
        debug!(sides, size, orientation, "create polygon");
        let segment = PI2 / sides as f64;
        let points = (0..sides)
            .map(|i| radial_point(segment * i as f64 + orientation, size, offset))
            .collect();
        Ok(Shape {
            points,
            width: size,
            height: size,
            offset,
            orientation,
            sides,
        })
    }

    pub fn create_triangle(size: f64, offset: Point2, orientation: f64) -> Shape {
        debug!(size, orientation, "create triangle");
        let segment = PI2 / 3.0;
        let points = vec![
            radial_point(segment + orientation, size, offset),
            radial_point(segment * 2.0 + orientation, size, offset),
            radial_point(segment * 3.0 + orientation, size, offset),
        ];
        Shape {
            points,
            width: size,
            height: size,
            offset,
            orientation,
            sides: 3,
        }
    }

    pub fn create_square(size: f64, offset: Point2) -> Shape {
        Self::create_rectangle(size, size, offset)
    }

    pub fn create_rectangle(width: f64, height: f64, offset: Point2) -> Shape {
        debug!(width, height, "create rectangle");
        let points = vec![
            Point2::new(width * (offset.x + 0.5), height * (offset.y + 0.5)),
            Point2::new(width * (offset.x - 0.5), height * (offset.y + 0.5)),
            Point2::new(width * (offset.x - 0.5), height * (offset.y - 0.5)),
            Point2::new(width * (offset.x + 0.5), height * (offset.y - 0.5)),
        ];
        Shape {
            points,
            width,
            height,
            offset,
            orientation: 0.0,
            sides: 4,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn offset(&self) -> Point2 {
        self.offset
    }

    /// Rotation in radians applied before translation.
    #[inline]
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Vertices as `nalgebra` column vectors.
    pub fn vertices(&self) -> Vec<nalgebra::Vector2<f64>> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Edge vectors from each vertex to the next, wrapping to the first.
    pub fn edges(&self) -> Vec<Vector2> {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let q = self.points[(i + 1) % n];
                q.create_vector(self.points[i].x, self.points[i].y)
            })
            .collect()
    }

    /// Shoelace area; positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut a = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// Area centroid. `None` for (near) zero-area shapes.
    pub fn centroid(&self) -> Option<Point2> {
        let n = self.points.len();
        if n < 3 {
            return None;
        }
        let mut a: f64 = 0.0;
        let mut cx: f64 = 0.0;
        let mut cy: f64 = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let cross = p.x * q.y - q.x * p.y;
            a += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        a *= 0.5;
        if a.abs() < 1e-18 {
            return None;
        }
        Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }
}

#[inline]
fn radial_point(angle: f64, size: f64, offset: Point2) -> Point2 {
    Point2::new(angle.cos() * size + offset.x, angle.sin() * size + offset.y)
}
