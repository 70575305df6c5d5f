//! Local search operators for improving open paths.
//!
//! - [`two_opt_improve`] — First-improvement 2-opt segment reversal under a time budget

mod two_opt;

pub use two_opt::{two_opt_improve, Termination, TwoOptConfig, TwoOptOutcome};
