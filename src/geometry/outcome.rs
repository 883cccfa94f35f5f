use serde::{Serialize, Serializer};

use super::point::PointInput;
use super::solution::{PointSolution, Solution};
use super::spec::TriangleSpec;
use crate::error::{Result, SolveError, TrigonError};
use crate::math::AngleUnit;

#[allow(clippy::ref_option)]
fn serialize_error<S: Serializer>(
    error: &Option<TrigonError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Result envelope of solving a triangle from sides and angles.
///
/// `solutions` holds zero, one or two triangles. When `error` is set the
/// list is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveOutcome {
    /// The supplied parameters, unset ones omitted.
    pub params: TriangleSpec,
    /// The resolved angle unit, `None` when the literal was not recognized.
    pub unit: Option<AngleUnit>,
    pub solutions: Vec<Solution>,
    #[serde(
        serialize_with = "serialize_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<TrigonError>,
}

impl SolveOutcome {
    /// Returns `true` if at least one solution was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && !self.solutions.is_empty()
    }

    /// The first solution, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Converts the envelope into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns the recorded error, or [`SolveError::Unsolvable`] if there is
    /// neither an error nor a solution.
    pub fn into_result(self) -> Result<Vec<Solution>> {
        match self.error {
            Some(e) => Err(e),
            None if self.solutions.is_empty() => {
                Err(SolveError::Unsolvable("No solution".into()).into())
            }
            None => Ok(self.solutions),
        }
    }
}

/// Result envelope of solving a triangle from three vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsOutcome {
    /// The points as supplied.
    pub points: [PointInput; 3],
    pub unit: AngleUnit,
    /// Zero or one solution.
    pub solutions: Vec<PointSolution>,
    #[serde(
        serialize_with = "serialize_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<TrigonError>,
}

impl PointsOutcome {
    /// Returns `true` if the points formed a triangle.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && !self.solutions.is_empty()
    }

    /// Converts the envelope into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns the recorded error, or [`SolveError::Unsolvable`] if there is
    /// neither an error nor a solution.
    pub fn into_result(self) -> Result<PointSolution> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.solutions
            .into_iter()
            .next()
            .ok_or_else(|| SolveError::Unsolvable("No solution".into()).into())
    }
}
