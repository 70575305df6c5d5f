//! Open-path 2-opt improvement under a wall-clock budget.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent edges (i, i+1) and (j, j+1) of the path,
//! scanned in ascending i and then ascending j, compute
//!
//! ```text
//! current   = d(p[i], p[i+1]) + d(p[j], p[j+1])
//! candidate = d(p[i], p[j])   + d(p[i+1], p[j+1])
//! ```
//!
//! If `candidate < current`, reverse the segment [i+1..=j], subtract the gain
//! from the running length and restart the scan from the first pair
//! (first-improvement strategy). A scan that finds no improving pair ends the
//! search at a local optimum.
//!
//! The path is open, so there is no wrap-around edge. Both endpoints stay in
//! place: `i >= 0` keeps `p[0]` fixed and `j + 1 <= n - 1` keeps `p[n-1]`
//! fixed.
//!
//! The budget is checked once per completed scan, never inside the pair loop,
//! so the overrun is bounded by one O(n²) scan.
//!
//! # Complexity
//!
//! O(n²) per scan, one improvement per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Budget for [`two_opt_improve`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_pathfind::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default()
///     .with_time_limit(Duration::from_millis(500))
///     .with_max_scans(1_000);
/// assert_eq!(config.time_limit, Duration::from_millis(500));
/// assert_eq!(config.max_scans, Some(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoOptConfig {
    /// Wall-clock budget, measured from the start of the search.
    pub time_limit: Duration,
    /// Maximum number of completed scans, if any.
    pub max_scans: Option<usize>,
}

impl TwoOptConfig {
    /// Default wall-clock budget.
    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Caps the number of completed scans.
    pub fn with_max_scans(mut self, scans: usize) -> Self {
        self.max_scans = Some(scans);
        self
    }

    /// Removes every budget; the search runs until a local optimum.
    pub fn unbounded() -> Self {
        Self {
            time_limit: Duration::MAX,
            max_scans: None,
        }
    }
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            time_limit: Self::DEFAULT_TIME_LIMIT,
            max_scans: None,
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// A full scan found no improving pair.
    LocalOptimum,
    /// The budget ran out first; the tour may still be improvable.
    BudgetExceeded,
}

/// Result of [`two_opt_improve`].
#[derive(Debug, Clone, Serialize)]
pub struct TwoOptOutcome {
    /// Best tour found.
    pub tour: Tour,
    /// Why the search stopped.
    pub termination: Termination,
    /// Number of completed scans.
    pub scans: usize,
    /// Number of applied swaps.
    pub improvements: usize,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl TwoOptOutcome {
    /// Returns `true` if the tour is guaranteed 2-opt locally optimal.
    pub fn is_local_optimum(&self) -> bool {
        self.termination == Termination::LocalOptimum
    }
}

/// Applies first-improvement 2-opt to an open path.
///
/// Never fails and never lengthens the tour. The first and last points of
/// the path keep their positions.
///
/// # Arguments
///
/// * `tour` — Starting tour; any valid permutation
/// * `distances` — Distance matrix of the same instance
/// * `config` — Time and scan budget
///
/// # Panics
///
/// Panics if `tour` holds an index outside `distances`.
///
/// # Examples
///
/// ```
/// use u_pathfind::models::{PointSet, Tour};
/// use u_pathfind::distance::DistanceMatrix;
/// use u_pathfind::local_search::{two_opt_improve, Termination, TwoOptConfig};
///
/// let points = PointSet::from_coords([(0, 0), (2, 0), (1, 0), (3, 0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// // Path 0 → 1 → 2 → 3 visits x = 0, 2, 1, 3 and doubles back
/// let tour = Tour::from_path(vec![0, 1, 2, 3], &dm).unwrap();
/// let outcome = two_opt_improve(&tour, &dm, &TwoOptConfig::default());
///
/// assert_eq!(outcome.tour.path(), &[0, 2, 1, 3]);
/// assert!((outcome.tour.length() - 3.0).abs() < 1e-10);
/// assert_eq!(outcome.termination, Termination::LocalOptimum);
/// ```
pub fn two_opt_improve(
    tour: &Tour,
    distances: &DistanceMatrix,
    config: &TwoOptConfig,
) -> TwoOptOutcome {
    let start_time = Instant::now();
    let mut path = tour.path().to_vec();
    let mut length = tour.length();
    let mut scans = 0;
    let mut improvements = 0;

    let termination = loop {
        let gain = first_improvement(&mut path, distances);
        scans += 1;

        match gain {
            Some(g) => {
                length -= g;
                improvements += 1;
            }
            None => break Termination::LocalOptimum,
        }

        let out_of_scans = config.max_scans.is_some_and(|max| scans >= max);
        if out_of_scans || start_time.elapsed() >= config.time_limit {
            break Termination::BudgetExceeded;
        }
    };

    let elapsed = start_time.elapsed();
    debug_assert!((length - distances.path_length(&path)).abs() < 1e-6 * length.max(1.0));

    match termination {
        Termination::LocalOptimum => log::info!(
            "2-opt reached a local optimum: {:.3} -> {length:.3} after {improvements} swaps in {elapsed:?}",
            tour.length()
        ),
        Termination::BudgetExceeded => log::info!(
            "2-opt budget exceeded after {scans} scans: {:.3} -> {length:.3} in {elapsed:?}",
            tour.length()
        ),
    }

    TwoOptOutcome {
        tour: Tour::from_parts(path, length),
        termination,
        scans,
        improvements,
        elapsed,
    }
}

/// Runs one scan and applies the first improving swap found.
///
/// Returns the length reduction, or `None` if no pair improves.
fn first_improvement(path: &mut [usize], distances: &DistanceMatrix) -> Option<f64> {
    let n = path.len();
    if n < 4 {
        return None;
    }

    for i in 0..n - 3 {
        for j in (i + 2)..(n - 1) {
            let (a, b) = (path[i], path[i + 1]);
            let (c, d) = (path[j], path[j + 1]);
            let current = distances.get(a, b) + distances.get(c, d);
            let candidate = distances.get(a, c) + distances.get(b, d);
            if candidate < current {
                path[i + 1..=j].reverse();
                return Some(current - candidate);
            }
        }
    }
    None
}
