pub mod angle;
pub mod barycentric;
pub mod distance_2d;
pub mod triangle_2d;

pub use angle::AngleUnit;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute tolerance used when comparing redundant inputs against solved values.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-3;

/// Returns `true` if `x` and `y` differ by at most `tolerance`.
#[must_use]
pub fn approx_eq(x: f64, y: f64, tolerance: f64) -> bool {
    (x - y).abs() <= tolerance
}
