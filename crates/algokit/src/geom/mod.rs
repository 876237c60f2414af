//! Immutable 2D/3D value types and a polygon factory.
//!
//! - `Point2`: a position; `create_vector` turns it into a displacement.
//! - `Vector2`, `Vector3`: displacement arithmetic. Every operation returns a
//!   new value; nothing mutates in place.
//! - `Shape`: ordered vertex list built from sides/size/offset/orientation.
//!   Vertices run in increasing angle (counterclockwise).
//! - `GeomCfg`: tolerances for degeneracy checks and approximate comparison.
//!
//! Conversions to and from `nalgebra` vectors are provided for callers that
//! do heavier linear algebra elsewhere.

mod cfg;
mod point;
pub mod shape;
mod vector;

pub use cfg::GeomCfg;
pub use point::Point2;
pub use shape::Shape;
pub use vector::{Vector2, Vector3};
