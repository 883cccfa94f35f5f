use std::f64::consts::PI;

use tracing::debug;

use super::solve::enrich;
use super::SolverConfig;
use crate::error::{InputError, Result, SolveError};
use crate::geometry::{PointInput, PointSolution, PointsOutcome, SlotRing};
use crate::math::barycentric::barycentric_to_cartesian;
use crate::math::distance_2d::{coincident, distance, point_to_line_dist};
use crate::math::triangle_2d::angle_from_sss;
use crate::math::{AngleUnit, Point2};

const NAMES: [&str; 3] = ["A", "B", "C"];

/// Solves the triangle spanned by three vertices.
///
/// Besides the side/angle solution this yields the centroid and the centers
/// of the inscribed and circumscribed circles.
pub struct SolvePoints {
    points: [PointInput; 3],
    unit: AngleUnit,
    config: SolverConfig,
}

impl SolvePoints {
    /// Creates a new `SolvePoints` operation reporting angles in degrees.
    #[must_use]
    pub fn new(
        a: impl Into<PointInput>,
        b: impl Into<PointInput>,
        c: impl Into<PointInput>,
    ) -> Self {
        Self {
            points: [a.into(), b.into(), c.into()],
            unit: AngleUnit::default(),
            config: SolverConfig::default(),
        }
    }

    /// Sets the unit angles are reported in.
    #[must_use]
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets custom solver settings.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the operation. Failures are recorded in the outcome's `error`.
    #[must_use]
    pub fn execute(&self) -> PointsOutcome {
        let (solutions, error) = match self.solution() {
            Ok(solution) => (vec![solution], None),
            Err(e) => {
                debug!(error = %e, "points do not form a triangle");
                (Vec::new(), Some(e))
            }
        };
        PointsOutcome {
            points: self.points.clone(),
            unit: self.unit,
            solutions,
            error,
        }
    }

    fn vertices(&self) -> Result<[Point2; 3]> {
        let vertices = [
            self.points[0].to_point(NAMES[0])?,
            self.points[1].to_point(NAMES[1])?,
            self.points[2].to_point(NAMES[2])?,
        ];

        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            if coincident(&vertices[i], &vertices[j], self.config.degenerate_tolerance) {
                return Err(InputError::DuplicateCoordinate {
                    first: NAMES[i],
                    first_raw: self.points[i].to_string(),
                    second: NAMES[j],
                    second_raw: self.points[j].to_string(),
                }
                .into());
            }
        }
        Ok(vertices)
    }

    fn solution(&self) -> Result<PointSolution> {
        let vertices = self.vertices()?;
        let [pa, pb, pc] = vertices;

        let a = distance(&pb, &pc);
        let b = distance(&pc, &pa);
        let c = distance(&pa, &pb);

        let alpha = angle_from_sss(a, b, c);
        let beta = angle_from_sss(b, a, c);
        let gamma = PI - alpha - beta;
        // Rounding in acos leaves collinear points with small positive angles,
        // so flatness is measured on the coordinates.
        let longest = a.max(b).max(c);
        let flat = point_to_line_dist(&pc, &pa, &pb) <= self.config.degenerate_tolerance * longest;
        if flat
            || [alpha, beta, gamma]
                .iter()
                .any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(SolveError::Unsolvable(format!(
                "Impossible combination of points {}, {}, {}",
                self.points[0], self.points[1], self.points[2]
            ))
            .into());
        }

        let ring = SlotRing::from_sides_angles([a, b, c], [alpha, beta, gamma]);
        let solution = enrich(&ring, self.unit)?;

        let center = |weights: [f64; 3]| {
            barycentric_to_cartesian(&vertices, weights)
                .ok_or_else(|| SolveError::Unsolvable("degenerate triangle".into()))
        };
        let centroid = center([1.0 / 3.0; 3])?;
        let incenter = center([a, b, c])?;
        let circumcenter = center([
            (2.0 * alpha).sin(),
            (2.0 * beta).sin(),
            (2.0 * gamma).sin(),
        ])?;

        Ok(PointSolution::new(&solution, centroid, incenter, circumcenter))
    }
}

/// Solves three vertices with angles in `unit`. See [`SolvePoints`].
#[must_use]
pub fn solve_points(
    a: impl Into<PointInput>,
    b: impl Into<PointInput>,
    c: impl Into<PointInput>,
    unit: AngleUnit,
) -> PointsOutcome {
    SolvePoints::new(a, b, c).with_unit(unit).execute()
}
