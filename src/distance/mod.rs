//! Distance matrices.
//!
//! Provides the dense Euclidean distance matrix shared by every solver.

mod matrix;

pub use matrix::DistanceMatrix;
