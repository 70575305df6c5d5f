//! Error types shared by every solver stage.

use thiserror::Error as ThisError;

/// Failure of a construction or exact-solver stage.
///
/// The 2-opt improver never fails; running out of its time budget is
/// reported through [`Termination`](crate::local_search::Termination).
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The start index does not name a point of the instance.
    #[error("start index {start} is out of range for {size} points")]
    OutOfRange {
        /// Requested start index.
        start: usize,
        /// Number of points in the instance.
        size: usize,
    },
    /// The instance is too large for the exact solver.
    #[error("{size} points exceed the exact solver limit of {limit}")]
    InfeasibleSize {
        /// Number of points in the instance.
        size: usize,
        /// Largest size allowed by the caller's policy.
        limit: usize,
    },
    /// The instance cannot produce the requested tour.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A path is not a permutation of the instance's point indices.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidInput`] from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Builds an [`Error::InvalidTour`] from a message.
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let e = Error::OutOfRange { start: 5, size: 3 };
        assert_eq!(e.to_string(), "start index 5 is out of range for 3 points");
    }

    #[test]
    fn test_display_infeasible() {
        let e = Error::InfeasibleSize {
            size: 30,
            limit: 20,
        };
        assert_eq!(e.to_string(), "30 points exceed the exact solver limit of 20");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(
            Error::invalid_input("empty"),
            Error::InvalidInput("empty".to_string())
        );
        assert_eq!(
            Error::invalid_tour("dup").to_string(),
            "invalid tour: dup"
        );
    }
}
