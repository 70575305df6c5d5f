//! Domain model types for open-path routing.
//!
//! Provides the core abstractions: points and the immutable point set that
//! assigns each point its index, and the tour produced by every solver.

mod point;
mod tour;

pub use point::{Point, PointSet};
pub use tour::Tour;
