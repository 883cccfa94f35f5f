mod cases;
mod enricher;

pub use cases::solve_case;
pub use enricher::{check_consistency, enrich};

use tracing::debug;

use super::classify::classify;
use super::SolverConfig;
use crate::error::{Result, SolveError};
use crate::geometry::{SolveOutcome, Solution, TriangleSpec};

/// Solves a triangle from a mix of known sides and angles.
///
/// At least three quantities including one side are needed. Extra quantities
/// are checked against the solution; any mismatch discards all solutions.
pub struct SolveTriangle<'a> {
    spec: &'a TriangleSpec,
    config: SolverConfig,
}

impl<'a> SolveTriangle<'a> {
    /// Creates a new `SolveTriangle` operation with default settings.
    #[must_use]
    pub fn new(spec: &'a TriangleSpec) -> Self {
        Self {
            spec,
            config: SolverConfig::default(),
        }
    }

    /// Sets custom solver settings.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the operation. Failures are recorded in the outcome's `error`.
    #[must_use]
    pub fn execute(&self) -> SolveOutcome {
        let (solutions, error) = match self.solutions() {
            Ok(solutions) => (solutions, None),
            Err(e) => {
                debug!(error = %e, "triangle has no solution");
                (Vec::new(), Some(e))
            }
        };
        SolveOutcome {
            params: self.spec.clone(),
            unit: self.spec.resolve_unit().ok(),
            solutions,
            error,
        }
    }

    fn solutions(&self) -> Result<Vec<Solution>> {
        let resolved = self.spec.resolve()?;
        let classification = classify(&resolved.ring)?;
        let candidates = solve_case(&resolved.ring, classification)?;

        let mut solutions = Vec::with_capacity(candidates.len());
        let mut rejection = None;
        for candidate in &candidates {
            check_consistency(
                candidate,
                &resolved.supplied,
                resolved.unit,
                self.config.consistency_tolerance,
            )?;
            match enrich(candidate, resolved.unit) {
                Ok(solution) => solutions.push(solution),
                Err(e) => rejection = Some(e),
            }
        }

        if solutions.is_empty() {
            let e = rejection.unwrap_or_else(|| SolveError::Unsolvable("No solution".into()));
            return Err(e.into());
        }
        Ok(solutions)
    }
}

/// Solves a triangle with default settings. See [`SolveTriangle`].
#[must_use]
pub fn solve(spec: &TriangleSpec) -> SolveOutcome {
    SolveTriangle::new(spec).execute()
}
