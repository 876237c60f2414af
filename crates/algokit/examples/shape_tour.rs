//! Seeded polygon tour.
//!
//! Purpose
//! - Show the pieces working together: the LCG picks side counts and
//!   orientations, the factory builds polygons, quicksort orders them by area,
//!   and an adjacency matrix records which shapes share a side count.
//! - Output is identical for identical seeds.
//!
//! Run with `cargo run -p algokit --example shape_tour -- 42`.

use algokit::math::{to_degrees, PI2};
use algokit::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);
    let mut rng = LcgRandom::new(seed);

    let mut shapes = Vec::with_capacity(8);
    for _ in 0..8 {
        let sides = 3 + (rng.random() % 6) as usize;
        let orientation = rng.next_f64() * PI2;
        shapes.push(Shape::create_polygon(sides, 1.0, Point2::origin(), orientation)?);
    }

    QuickSort::new(|a: &Shape, b: &Shape| descending(&a.signed_area(), &b.signed_area()))
        .sort(&mut shapes);

    let mut same_sides: AdjacencyMatrix<()> = AdjacencyMatrix::new();
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate() {
            if i != j && a.sides() == b.sides() {
                same_sides.add(j, i, ())?;
            }
        }
    }

    for (i, s) in shapes.iter().enumerate() {
        let first = s.points()[0].to_vector();
        let twins = same_sides.row(i).map_or(0, |row| row.len_populated());
        println!(
            "#{i} sides={} area={:.4} first_vertex_deg={:.1} twins={twins}",
            s.sides(),
            s.signed_area(),
            to_degrees(first.theta()),
        );
    }
    Ok(())
}
