//! Exact solvers for small instances.
//!
//! - [`exact_path`] — Bitmask DP over visited subsets (Held & Karp, 1962), O(2^n · n²)
//!
//! The exact solver exists to validate and benchmark the heuristics. Its
//! memory grows as `2^n · n`, so callers decide which sizes to allow with
//! [`check_exact_feasible`].

mod held_karp;

pub use held_karp::{check_exact_feasible, dp_table_cells, exact_path, max_addressable_size};
