//! Small algorithms and geometry toolkit.
//!
//! - `math`: constants and fast scalar helpers.
//! - `algorithms`: comparator-driven quicksort and a linear congruential generator.
//! - `geom`: immutable 2D/3D points and vectors plus a polygon factory (`Shape`).
//! - `datatypes`: a sparse index table and an adjacency matrix built on top of it.
//!
//! Everything is synchronous and allocation-light. Events are emitted through
//! `tracing`; installing a subscriber is left to the caller.

pub mod algorithms;
pub mod datatypes;
pub mod error;
pub mod geom;
pub mod math;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithms::{ascending, descending, LcgRandom, QuickSort};
    pub use crate::datatypes::{AdjacencyMatrix, Hashtable};
    pub use crate::error::{Error, Result};
    pub use crate::geom::{GeomCfg, Point2, Shape, Vector2, Vector3};
}
