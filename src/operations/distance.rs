use crate::error::Result;
use crate::geometry::PointInput;
use crate::math::distance_2d;

/// Measures the Euclidean distance between two points in any accepted form.
pub struct Distance {
    from: PointInput,
    to: PointInput,
}

impl Distance {
    /// Creates a new `Distance` query.
    #[must_use]
    pub fn new(from: impl Into<PointInput>, to: impl Into<PointInput>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InputError::InvalidCoordinate`] if either point
    /// is not a recognized representation.
    pub fn execute(&self) -> Result<f64> {
        let p = self.from.to_point("p1")?;
        let q = self.to.to_point("p2")?;
        Ok(distance_2d::distance(&p, &q))
    }
}

/// Distance between two points. See [`Distance`].
///
/// # Errors
///
/// Returns an error if either point is not a recognized representation.
pub fn distance(from: impl Into<PointInput>, to: impl Into<PointInput>) -> Result<f64> {
    Distance::new(from, to).execute()
}
