use super::{Point2, Vector2, TOLERANCE};

/// Converts barycentric weights over a triangle's vertices to a cartesian point.
///
/// The weights need not be normalized. Returns `None` when they sum to (almost) zero.
#[must_use]
pub fn barycentric_to_cartesian(vertices: &[Point2; 3], weights: [f64; 3]) -> Option<Point2> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total.abs() < TOLERANCE {
        return None;
    }

    let sum = vertices
        .iter()
        .zip(weights)
        .fold(Vector2::zeros(), |acc, (v, w)| acc + v.coords * w);

    Some(Point2::from(sum / total))
}
