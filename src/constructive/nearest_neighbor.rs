//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from the chosen point, always move
//! to the nearest unvisited point. Ties go to the lowest index.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP-like problems. It
//! never backtracks, so the result is only locally greedy; it serves as the
//! starting point for 2-opt.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Constructs an open path using the nearest-neighbor heuristic.
///
/// # Arguments
///
/// * `distances` — Distance matrix of the instance
/// * `start` — Index of the first point to visit
///
/// # Errors
///
/// * [`Error::InvalidInput`] if the instance has no points
/// * [`Error::OutOfRange`] if `start` is not a point index
///
/// # Examples
///
/// ```
/// use u_pathfind::models::PointSet;
/// use u_pathfind::distance::DistanceMatrix;
/// use u_pathfind::constructive::nearest_neighbor;
///
/// let points = PointSet::from_coords([(0, 0), (0, 10), (10, 10), (10, 0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.path(), &[0, 1, 2, 3]);
/// assert!((tour.length() - 30.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::invalid_input(
            "cannot construct a tour over zero points",
        ));
    }
    if start >= n {
        return Err(Error::OutOfRange { start, size: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut path = Vec::with_capacity(n);
    path.push(start);
    let mut length = 0.0;
    let mut current = start;

    while let Some((next, d)) = distances.nearest_unvisited(current, &visited) {
        visited[next] = true;
        path.push(next);
        length += d;
        current = next;
    }

    log::debug!("nearest neighbor from {start}: length {length:.3} over {n} points");
    Ok(Tour::from_parts(path, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointSet;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&PointSet::from_coords([(0, 0), (0, 10), (10, 10), (10, 0)]))
    }

    #[test]
    fn test_nn_square_tie_goes_low() {
        let dm = square();
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        // 1 and 3 are both 10 away; 1 wins on index.
        assert_eq!(tour.path(), &[0, 1, 2, 3]);
        assert!((tour.length() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let points = PointSet::from_coords([(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
        let dm = DistanceMatrix::from_points(&points);
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        // 2 first (distance 1), then 1 (distance 9)
        assert_eq!(tour.path(), &[0, 2, 1]);
        assert!((tour.length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_other_start() {
        let dm = square();
        let tour = nearest_neighbor(&dm, 2).expect("valid start");
        assert_eq!(tour.start(), Some(2));
        assert_eq!(tour.path(), &[2, 1, 0, 3]);
    }

    #[test]
    fn test_nn_length_matches_path() {
        let points = PointSet::from_coords([(5, 5), (0, 0), (10, 0), (0, 10), (10, 10), (3, 7)]);
        let dm = DistanceMatrix::from_points(&points);
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        assert!((tour.length() - dm.path_length(tour.path())).abs() < 1e-10);
    }

    #[test]
    fn test_nn_single_point() {
        let dm = DistanceMatrix::from_points(&PointSet::from_coords([(4, 4)]));
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        assert_eq!(tour.path(), &[0]);
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_nn_two_points() {
        let dm = DistanceMatrix::from_points(&PointSet::from_coords([(0, 0), (3, 4)]));
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        assert_eq!(tour.path(), &[0, 1]);
        assert!((tour.length() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_out_of_range() {
        let dm = square();
        assert_eq!(
            nearest_neighbor(&dm, 4).unwrap_err(),
            Error::OutOfRange { start: 4, size: 4 }
        );
    }

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::from_points(&PointSet::default());
        assert!(matches!(
            nearest_neighbor(&dm, 0),
            Err(Error::InvalidInput(_))
        ));
    }
}
