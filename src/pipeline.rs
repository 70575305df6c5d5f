//! End-to-end solve: construct, improve, and optionally solve exactly.
//!
//! The distance matrix is built once and shared by every stage. The
//! nearest-neighbor tour is handed directly to 2-opt. The exact solver runs
//! only when the caller sets a size limit and the instance fits under it.

use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::exact::{check_exact_feasible, exact_path};
use crate::local_search::{two_opt_improve, TwoOptConfig, TwoOptOutcome};
use crate::models::{PointSet, Tour};

/// Settings for [`solve`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_pathfind::pipeline::PipelineConfig;
/// use u_pathfind::local_search::TwoOptConfig;
///
/// let config = PipelineConfig::default()
///     .with_start(3)
///     .with_two_opt(TwoOptConfig::default().with_time_limit(Duration::from_secs(1)))
///     .with_exact_size_limit(16);
/// assert_eq!(config.start, 3);
/// assert_eq!(config.exact_size_limit, Some(16));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Index of the first point of every tour.
    pub start: usize,
    /// Budget for the 2-opt stage.
    pub two_opt: TwoOptConfig,
    /// Largest instance the exact solver may run on. `None` skips it.
    pub exact_size_limit: Option<usize>,
}

impl PipelineConfig {
    /// Sets the start index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the 2-opt budget.
    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Enables the exact solver for instances of at most `limit` points.
    pub fn with_exact_size_limit(mut self, limit: usize) -> Self {
        self.exact_size_limit = Some(limit);
        self
    }
}

/// Output of every stage of [`solve`].
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Nearest-neighbor tour.
    pub constructed: Tour,
    /// 2-opt result, seeded with `constructed`.
    pub improved: TwoOptOutcome,
    /// Exact optimum, when the exact stage ran.
    pub exact: Option<Tour>,
    /// Why the exact stage did not run, when it was enabled but refused.
    pub exact_skipped: Option<Error>,
}

impl PipelineReport {
    /// The shortest tour produced by any stage.
    pub fn best(&self) -> &Tour {
        match &self.exact {
            Some(exact) if exact.length() <= self.improved.tour.length() => exact,
            _ => &self.improved.tour,
        }
    }
}

/// Runs every stage on `points`.
///
/// # Errors
///
/// Construction errors ([`Error::InvalidInput`], [`Error::OutOfRange`])
/// abort the run. An instance above the exact size limit is not an error; it
/// is reported in [`PipelineReport::exact_skipped`].
///
/// # Examples
///
/// ```
/// use u_pathfind::models::PointSet;
/// use u_pathfind::pipeline::{solve, PipelineConfig};
///
/// let points = PointSet::from_coords([(0, 0), (0, 10), (10, 10), (10, 0)]);
/// let report = solve(&points, &PipelineConfig::default().with_exact_size_limit(20)).unwrap();
///
/// assert_eq!(report.constructed.path(), &[0, 1, 2, 3]);
/// assert!((report.improved.tour.length() - 30.0).abs() < 1e-10);
/// assert!((report.exact.unwrap().length() - 30.0).abs() < 1e-10);
/// ```
pub fn solve(points: &PointSet, config: &PipelineConfig) -> Result<PipelineReport> {
    let distances = DistanceMatrix::from_points(points);
    solve_with_matrix(&distances, config)
}

/// Runs every stage on a prebuilt distance matrix.
pub fn solve_with_matrix(
    distances: &DistanceMatrix,
    config: &PipelineConfig,
) -> Result<PipelineReport> {
    let constructed = nearest_neighbor(distances, config.start)?;
    log::info!(
        "nearest neighbor from {}: length {:.3}",
        config.start,
        constructed.length()
    );

    let improved = two_opt_improve(&constructed, distances, &config.two_opt);

    let (exact, exact_skipped) = match config.exact_size_limit {
        None => (None, None),
        Some(limit) => match check_exact_feasible(distances.size(), limit) {
            Ok(()) => (Some(exact_path(distances, config.start)?), None),
            Err(e) => {
                log::info!("skipping exact solver: {e}");
                (None, Some(e))
            }
        },
    };

    Ok(PipelineReport {
        constructed,
        improved,
        exact,
        exact_skipped,
    })
}
