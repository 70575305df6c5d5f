//! Exact shortest open Hamiltonian path by bitmask dynamic programming.
//!
//! # Algorithm
//!
//! `dp[mask][v]` is the length of the shortest path that starts at the fixed
//! start point, visits exactly the points in `mask` and ends at `v`.
//!
//! ```text
//! dp[{s}][s]  = 0
//! dp[mask][v] = min over u in mask\{v} of dp[mask\{v}][u] + d(u, v)
//! ```
//!
//! Masks are filled in ascending integer order, so `mask\{v}` (always a
//! smaller integer) is final before `mask` reads it. The predecessor that
//! achieved each minimum is kept in a parallel table; the path is recovered
//! by walking it backward from the best end point of the full mask.
//!
//! Both tables are flat `2^n × n` arrays indexed by `mask * n + v`.
//!
//! # Complexity
//!
//! O(2^n · n²) time, O(2^n · n) space. Callers gate invocation with
//! [`check_exact_feasible`].
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

const NO_PARENT: usize = usize::MAX;

/// Number of cells in each DP table for `n` points (`2^n · n`).
///
/// Returns `None` if the count does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use u_pathfind::exact::dp_table_cells;
///
/// assert_eq!(dp_table_cells(4), Some(64));
/// assert_eq!(dp_table_cells(0), Some(0));
/// assert_eq!(dp_table_cells(200), None);
/// ```
pub fn dp_table_cells(n: usize) -> Option<usize> {
    let shift = u32::try_from(n).ok()?;
    1usize.checked_shl(shift)?.checked_mul(n)
}

/// Largest instance size whose DP tables can be indexed at all.
pub fn max_addressable_size() -> usize {
    (0..usize::BITS as usize)
        .rev()
        .find(|&n| dp_table_cells(n).is_some())
        .unwrap_or(0)
}

/// Checks an instance size against the caller's exact-solver limit.
///
/// # Errors
///
/// [`Error::InfeasibleSize`] if `n > limit` or the DP tables for `n` points
/// cannot be indexed.
///
/// # Examples
///
/// ```
/// use u_pathfind::exact::check_exact_feasible;
///
/// assert!(check_exact_feasible(12, 20).is_ok());
/// assert!(check_exact_feasible(25, 20).is_err());
/// ```
pub fn check_exact_feasible(n: usize, limit: usize) -> Result<()> {
    if n > limit || dp_table_cells(n).is_none() {
        return Err(Error::InfeasibleSize {
            size: n,
            limit: limit.min(max_addressable_size()),
        });
    }
    Ok(())
}

/// Computes the shortest open path that starts at `start` and visits every point.
///
/// The solver does not limit instance size itself; see
/// [`check_exact_feasible`].
///
/// # Errors
///
/// * [`Error::OutOfRange`] if `start` is not a point index
/// * [`Error::InvalidInput`] if any distance is infinite or NaN
/// * [`Error::InfeasibleSize`] if the DP tables cannot be indexed
///
/// An instance with zero points yields the empty tour.
///
/// # Examples
///
/// ```
/// use u_pathfind::models::PointSet;
/// use u_pathfind::distance::DistanceMatrix;
/// use u_pathfind::exact::exact_path;
///
/// let points = PointSet::from_coords([(0, 0), (0, 10), (10, 10), (10, 0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = exact_path(&dm, 0).unwrap();
/// assert_eq!(tour.start(), Some(0));
/// assert!((tour.length() - 30.0).abs() < 1e-10);
/// ```
pub fn exact_path(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Ok(Tour::empty());
    }
    if start >= n {
        return Err(Error::OutOfRange { start, size: n });
    }
    if n == 1 {
        return Ok(Tour::from_parts(vec![start], 0.0));
    }
    if !distances.is_finite() {
        return Err(Error::invalid_input(
            "distance matrix holds non-finite distances",
        ));
    }

    let cells = dp_table_cells(n).ok_or(Error::InfeasibleSize {
        size: n,
        limit: max_addressable_size(),
    })?;
    log::debug!("exact solver: {n} points, {cells} cells per table");

    let mut dp = vec![f64::INFINITY; cells];
    let mut parent = vec![NO_PARENT; cells];

    let start_bit = 1usize << start;
    let full = (1usize << n) - 1;
    dp[start_bit * n + start] = 0.0;

    for mask in 1..=full {
        if mask & start_bit == 0 {
            continue;
        }
        for v in 0..n {
            let v_bit = 1usize << v;
            if mask & v_bit == 0 {
                continue;
            }
            let prev = mask ^ v_bit;
            if prev == 0 {
                continue;
            }

            let mut best = f64::INFINITY;
            let mut best_u = NO_PARENT;
            for u in 0..n {
                if prev & (1usize << u) == 0 {
                    continue;
                }
                let base = dp[prev * n + u];
                if base == f64::INFINITY {
                    continue;
                }
                let candidate = base + distances.get(u, v);
                if candidate < best {
                    best = candidate;
                    best_u = u;
                }
            }

            if best_u != NO_PARENT {
                dp[mask * n + v] = best;
                parent[mask * n + v] = best_u;
            }
        }
    }

    let mut last = start;
    let mut length = f64::INFINITY;
    for v in 0..n {
        let d = dp[full * n + v];
        if d < length {
            length = d;
            last = v;
        }
    }

    let path = reconstruct(&parent, n, full, last);
    debug_assert_eq!(path.first(), Some(&start));
    debug_assert_eq!(path.len(), n);

    log::info!("exact solver from {start}: length {length:.3} over {n} points");
    Ok(Tour::from_parts(path, length))
}

/// Walks predecessor links back from `(mask, last)` and returns the path in
/// visiting order.
fn reconstruct(parent: &[usize], n: usize, mut mask: usize, last: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(n);
    let mut v = last;
    loop {
        path.push(v);
        let p = parent[mask * n + v];
        mask ^= 1usize << v;
        if p == NO_PARENT {
            break;
        }
        v = p;
    }
    path.reverse();
    path
}
