//! Sparse containers.
//!
//! - `Hashtable`: index → value with array-like length semantics.
//! - `AdjacencyMatrix`: `(x, y)` → value built from lazily created row tables.

mod adjacency;
mod hashtable;

pub use adjacency::AdjacencyMatrix;
pub use hashtable::{Hashtable, MAX_KEY};
