pub mod classify;
pub mod distance;
pub mod solve;
pub mod solve_points;

pub use classify::{classify, Classification, SolveCase};
pub use distance::{distance, Distance};
pub use solve::{solve, SolveTriangle};
pub use solve_points::{solve_points, SolvePoints};

use crate::math::{CONSISTENCY_TOLERANCE, TOLERANCE};

/// Settings shared by the solving operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Largest absolute difference at which a redundant input still agrees
    /// with the solved value.
    pub consistency_tolerance: f64,
    /// Distance below which two vertices count as the same point.
    pub degenerate_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            consistency_tolerance: CONSISTENCY_TOLERANCE,
            degenerate_tolerance: TOLERANCE,
        }
    }
}
