//! Dense distance matrix.

use crate::models::PointSet;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and shared by reference with every solver.
///
/// # Examples
///
/// ```
/// use u_pathfind::models::PointSet;
/// use u_pathfind::distance::DistanceMatrix;
///
/// let points = PointSet::from_coords([(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of a point set.
    ///
    /// Each unordered pair is computed once and mirrored. An empty point set
    /// yields an empty matrix.
    pub fn from_points(points: &PointSet) -> Self {
        let pts = points.points();
        let n = pts.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = pts[i].distance_to(&pts[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        log::debug!("distance matrix built for {n} points");
        Self { data, size: n }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every location, in index order.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every distance is finite.
    ///
    /// Finite coordinates far enough apart can still overflow to infinity.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|d| d.is_finite())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the closest location to `from` not yet marked in `visited`.
    ///
    /// Ties go to the lowest index: a later candidate replaces the running
    /// best only when strictly closer. Returns `None` once every location
    /// is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (j, &d) in self.row(from).iter().enumerate() {
            if visited[j] {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((j, d)),
            }
        }
        best
    }

    /// Length of the open walk `path[0] → path[1] → … → path[k-1]`.
    ///
    /// No closing edge back to `path[0]` is counted.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
