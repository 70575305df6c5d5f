//! Tour type shared by every solver stage.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// An open visiting order over all points together with its length.
///
/// The path is a permutation of `0..n`. Its length is the sum of the `n-1`
/// edges between consecutive entries; there is no edge from the last point
/// back to the first.
///
/// # Examples
///
/// ```
/// use u_pathfind::models::{PointSet, Tour};
/// use u_pathfind::distance::DistanceMatrix;
///
/// let points = PointSet::from_coords([(0, 0), (0, 10), (10, 10), (10, 0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = Tour::from_path(vec![0, 1, 2, 3], &dm).unwrap();
/// assert!((tour.length() - 30.0).abs() < 1e-10);
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.end(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    path: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Validates `path` against `distances` and computes its length.
    ///
    /// Fails with [`Error::InvalidTour`] unless `path` holds every index of
    /// the matrix exactly once.
    pub fn from_path(path: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        let n = distances.size();
        if path.len() != n {
            return Err(Error::invalid_tour(format!(
                "path has {} entries, expected {n}",
                path.len()
            )));
        }
        let mut seen = vec![false; n];
        for &city in &path {
            if city >= n {
                return Err(Error::invalid_tour(format!(
                    "index {city} is out of range for {n} points"
                )));
            }
            if seen[city] {
                return Err(Error::invalid_tour(format!("index {city} appears twice")));
            }
            seen[city] = true;
        }
        let length = distances.path_length(&path);
        Ok(Self { path, length })
    }

    /// Builds a tour whose path and length are already known to be consistent.
    pub(crate) fn from_parts(path: Vec<usize>, length: f64) -> Self {
        Self { path, length }
    }

    /// The empty tour over zero points.
    pub(crate) fn empty() -> Self {
        Self::from_parts(Vec::new(), 0.0)
    }

    /// Visiting order as point indices.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Total open-path length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First point visited.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Last point visited.
    pub fn end(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointSet;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_points(&PointSet::from_coords([(0, 0), (1, 0), (2, 0), (3, 0)]))
    }

    #[test]
    fn test_from_path_length() {
        let dm = line();
        let tour = Tour::from_path(vec![0, 2, 1, 3], &dm).expect("valid");
        // 2 + 1 + 2, no return edge
        assert!((tour.length() - 5.0).abs() < 1e-10);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_from_path_wrong_size() {
        let dm = line();
        let err = Tour::from_path(vec![0, 1, 2], &dm).unwrap_err();
        assert!(matches!(err, Error::InvalidTour(_)));
    }

    #[test]
    fn test_from_path_duplicate() {
        let dm = line();
        let err = Tour::from_path(vec![0, 1, 1, 3], &dm).unwrap_err();
        assert_eq!(err, Error::invalid_tour("index 1 appears twice"));
    }

    #[test]
    fn test_from_path_out_of_range() {
        let dm = line();
        assert!(Tour::from_path(vec![0, 1, 2, 4], &dm).is_err());
    }

    #[test]
    fn test_empty() {
        let tour = Tour::empty();
        assert!(tour.is_empty());
        assert_eq!(tour.length(), 0.0);
        assert_eq!(tour.start(), None);
        assert_eq!(tour.end(), None);
    }

    #[test]
    fn test_serialize_shape() {
        let dm = line();
        let tour = Tour::from_path(vec![0, 1, 2, 3], &dm).expect("valid");
        let json = serde_json::to_value(&tour).expect("serializable");
        assert_eq!(json["path"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(json["length"], serde_json::json!(3.0));
    }
}
