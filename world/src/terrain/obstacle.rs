// src/terrain/obstacle.rs

//! Deterministic tree placement. The oracle hashes the column coordinates
//! instead of drawing from a shared random stream, so geometry generation and
//! creature navigation agree on the forest without talking to each other.

use super::heightfield::{height_at, river_distance};

/// Hash values above this grow a tree on an eligible column.
const TREE_CHANCE: f64 = 0.90;
/// Trees only grow between the valley floor and the rock line.
const TREE_LINE: i32 = 8;
/// Columns this close to the river stay clear.
const RIVER_CLEARANCE: f64 = 3.0;

/// Deterministic per-column pseudo-random value in `[0, 1)`.
///
/// The classic shader hash. The fractional part is taken as `s - floor(s)`,
/// which stays non-negative for negative `s`; `f64::fract` does not.
pub fn coord_hash(x: i32, z: i32) -> f64 {
    let s = (x as f64 * 12.9898 + z as f64 * 78.233).sin() * 43758.5453;
    s - s.floor()
}

/// Whether the column at `(x, z)` holds a tree.
pub fn has_obstacle_at(x: i32, z: i32) -> bool {
    let height = height_at(x, z);
    (0..TREE_LINE).contains(&height)
        && coord_hash(x, z) > TREE_CHANCE
        && river_distance(x, z) > RIVER_CLEARANCE
}
