//! Sorting and pseudo-random generation.
//!
//! - `sort`: in-place Hoare quicksort driven by a caller-supplied comparator.
//! - `lcg`: deterministic linear congruential generator (`a = 214013`,
//!   `c = 2531011`, `m = 2^32`), usable as a `rand::RngCore`.

pub mod lcg;
pub mod sort;

pub use lcg::LcgRandom;
pub use sort::{ascending, descending, quick_sort, quick_sort_by, QuickSort};
