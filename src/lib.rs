//! # u-pathfind
//!
//! Shortest open Hamiltonian paths over points in the plane, starting from a
//! fixed point. No edge returns to the start.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Tour)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`local_search`] — Local search (time-budgeted 2-opt)
//! - [`exact`] — Exact bitmask DP for small instances
//! - [`pipeline`] — All stages over one shared distance matrix
//! - [`error`] — Error taxonomy

pub mod constructive;
pub mod distance;
pub mod error;
pub mod exact;
pub mod local_search;
pub mod models;
pub mod pipeline;

pub use error::{Error, Result};
