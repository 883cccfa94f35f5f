use super::{Point2, TOLERANCE};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(p: &Point2, q: &Point2) -> f64 {
    (q - p).norm()
}

/// Returns the perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// For a degenerate line (`a == b`) this falls back to the point-to-point distance.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dir = b - a;
    let len = dir.norm();

    if len < TOLERANCE {
        return distance(p, a);
    }

    // |cross(dir, p - a)| / |dir|
    let ap = p - a;
    (dir.x * ap.y - dir.y * ap.x).abs() / len
}

/// Returns `true` if the two points are closer than `tol`.
#[must_use]
pub fn coincident(p: &Point2, q: &Point2, tol: f64) -> bool {
    distance(p, q) < tol
}
