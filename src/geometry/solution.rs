use serde::Serialize;

use crate::math::{approx_eq, Point2, CONSISTENCY_TOLERANCE};

/// Radius of an inscribed or circumscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleInfo {
    pub radius: f64,
}

/// A circle with a known center, available when vertex coordinates are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenteredCircle {
    pub radius: f64,
    pub center: Point2,
}

/// Classification of a triangle by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification of a triangle by its largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngleClass {
    Acute,
    Right,
    Obtuse,
}

/// Combined side and angle classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriangleShape {
    pub by_sides: SideClass,
    pub by_angles: AngleClass,
}

impl TriangleShape {
    /// Classifies a triangle from its three side lengths.
    ///
    /// Lengths are compared with [`CONSISTENCY_TOLERANCE`]; the right-angle
    /// test is scaled by the square of the longest side.
    #[must_use]
    pub fn from_sides(a: f64, b: f64, c: f64) -> Self {
        let by_sides = if approx_eq(a, b, CONSISTENCY_TOLERANCE)
            && approx_eq(b, c, CONSISTENCY_TOLERANCE)
        {
            SideClass::Equilateral
        } else if approx_eq(a, b, CONSISTENCY_TOLERANCE)
            || approx_eq(b, c, CONSISTENCY_TOLERANCE)
            || approx_eq(a, c, CONSISTENCY_TOLERANCE)
        {
            SideClass::Isosceles
        } else {
            SideClass::Scalene
        };

        let mut sorted = [a, b, c];
        sorted.sort_by(f64::total_cmp);
        let [p, q, longest] = sorted;
        let excess = p * p + q * q - longest * longest;
        let by_angles = if excess.abs() <= CONSISTENCY_TOLERANCE * longest * longest {
            AngleClass::Right
        } else if excess < 0.0 {
            AngleClass::Obtuse
        } else {
            AngleClass::Acute
        };

        Self {
            by_sides,
            by_angles,
        }
    }
}

/// A fully solved triangle. Angles are expressed in the outcome's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub area: f64,
    pub ha: f64,
    pub hb: f64,
    pub hc: f64,
    pub incircle: CircleInfo,
    pub circumcircle: CircleInfo,
}

impl Solution {
    /// Side lengths `[a, b, c]`.
    #[must_use]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the side lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    /// Side and angle classification.
    #[must_use]
    pub fn shape(&self) -> TriangleShape {
        let [a, b, c] = self.sides();
        TriangleShape::from_sides(a, b, c)
    }
}

/// A triangle solved from vertex coordinates.
///
/// Carries both naming schemes: `alpha` is the angle at vertex A
/// (`angle_a`) and `a` is the side BC (`side_bc`), and so on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    #[serde(rename = "sideBC")]
    pub side_bc: f64,
    #[serde(rename = "sideCA")]
    pub side_ca: f64,
    #[serde(rename = "sideAB")]
    pub side_ab: f64,
    #[serde(rename = "angleA")]
    pub angle_a: f64,
    #[serde(rename = "angleB")]
    pub angle_b: f64,
    #[serde(rename = "angleC")]
    pub angle_c: f64,
    pub area: f64,
    pub ha: f64,
    pub hb: f64,
    pub hc: f64,
    pub centroid: Point2,
    pub incircle: CenteredCircle,
    pub circumcircle: CenteredCircle,
}

impl PointSolution {
    /// Extends a side/angle solution with the centers known from coordinates.
    #[must_use]
    pub fn new(
        solution: &Solution,
        centroid: Point2,
        incenter: Point2,
        circumcenter: Point2,
    ) -> Self {
        Self {
            a: solution.a,
            b: solution.b,
            c: solution.c,
            alpha: solution.alpha,
            beta: solution.beta,
            gamma: solution.gamma,
            side_bc: solution.a,
            side_ca: solution.b,
            side_ab: solution.c,
            angle_a: solution.alpha,
            angle_b: solution.beta,
            angle_c: solution.gamma,
            area: solution.area,
            ha: solution.ha,
            hb: solution.hb,
            hc: solution.hc,
            centroid,
            incircle: CenteredCircle {
                radius: solution.incircle.radius,
                center: incenter,
            },
            circumcircle: CenteredCircle {
                radius: solution.circumcircle.radius,
                center: circumcenter,
            },
        }
    }

    /// The side/angle part of this solution.
    #[must_use]
    pub fn solution(&self) -> Solution {
        Solution {
            a: self.a,
            b: self.b,
            c: self.c,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            area: self.area,
            ha: self.ha,
            hb: self.hb,
            hc: self.hc,
            incircle: CircleInfo {
                radius: self.incircle.radius,
            },
            circumcircle: CircleInfo {
                radius: self.circumcircle.radius,
            },
        }
    }
}
