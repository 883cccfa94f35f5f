//! Scalar triangle formulas shared by the side/angle solver and the point solver.
//!
//! None of these functions clamp their inputs: an impossible configuration
//! shows up as `NaN` or a non-positive result and is rejected by the caller.

/// Side opposite `included`, given the two sides enclosing it (law of cosines).
#[must_use]
pub fn side_from_sas(s1: f64, s2: f64, included: f64) -> f64 {
    (s1 * s1 + s2 * s2 - 2.0 * s1 * s2 * included.cos()).sqrt()
}

/// Angle opposite `opposite`, given the two sides enclosing it (law of cosines).
///
/// Returns `NaN` when the three lengths violate the triangle inequality.
#[must_use]
pub fn angle_from_sss(opposite: f64, s1: f64, s2: f64) -> f64 {
    ((s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2)).acos()
}

/// Side opposite `target_angle`, given any side and its opposite angle (law of sines).
#[must_use]
pub fn side_from_sines(known_side: f64, known_angle: f64, target_angle: f64) -> f64 {
    known_side * target_angle.sin() / known_angle.sin()
}

/// Area from two sides and the angle between them.
#[must_use]
pub fn area_from_sas(s1: f64, s2: f64, included: f64) -> f64 {
    0.5 * s1 * s2 * included.sin()
}

/// Half the perimeter.
#[must_use]
pub fn semiperimeter(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) * 0.5
}

/// Radius of the inscribed circle, `sqrt((s-a)(s-b)(s-c)/s)`.
#[must_use]
pub fn incircle_radius(a: f64, b: f64, c: f64) -> f64 {
    let s = semiperimeter(a, b, c);
    ((s - a) * (s - b) * (s - c) / s).sqrt()
}

/// Radius of the circumscribed circle from any side and its opposite angle.
#[must_use]
pub fn circumradius(side: f64, opposite: f64) -> f64 {
    side / (2.0 * opposite.sin())
}

/// Altitude onto a side, from the two other sides and the circumradius.
#[must_use]
pub fn altitude(other1: f64, other2: f64, circumradius: f64) -> f64 {
    other1 * other2 / (2.0 * circumradius)
}
