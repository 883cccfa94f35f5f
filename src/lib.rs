//! Solves triangles from any sufficient mix of sides and angles, or from
//! three vertex coordinates.
//!
//! ```
//! use trigon::{solve, TriangleSpec};
//!
//! let outcome = solve(&TriangleSpec::new().a(3.0).b(4.0).gamma(90.0));
//! let triangle = outcome.first().unwrap();
//! assert!((triangle.c - 5.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TrigonError};
pub use geometry::{PointInput, PointSolution, PointsOutcome, SolveOutcome, Solution, TriangleSpec};
pub use math::AngleUnit;
pub use operations::{distance, solve, solve_points, SolverConfig};
