//! Constructive heuristics for building initial open paths.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk from a fixed start, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
