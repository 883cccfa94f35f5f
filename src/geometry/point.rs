use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::math::Point2;

/// `{x, y}` point form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LowerXy {
    pub x: f64,
    pub y: f64,
}

/// `{X, Y}` point form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpperXy {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

/// A vertex as supplied by the caller.
///
/// Accepted forms are an `[x, y]` pair, an `{x, y}` object or an `{X, Y}`
/// object. Anything else deserializes into [`PointInput::Unrecognized`] and is
/// rejected by [`PointInput::to_point`], so the raw value can be echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointInput {
    Pair([f64; 2]),
    Lower(LowerXy),
    Upper(UpperXy),
    Unrecognized(serde_json::Value),
}

impl PointInput {
    /// Creates an `{x, y}` point.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Lower(LowerXy { x, y })
    }

    /// Creates an `{X, Y}` point.
    #[must_use]
    pub fn upper_xy(x: f64, y: f64) -> Self {
        Self::Upper(UpperXy { x, y })
    }

    /// Normalizes the representation into a [`Point2`].
    ///
    /// `name` identifies the point in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidCoordinate`] for an unrecognized form or a
    /// non-finite coordinate.
    pub fn to_point(&self, name: &'static str) -> Result<Point2, InputError> {
        let (x, y) = match self {
            Self::Pair([x, y]) => (*x, *y),
            Self::Lower(LowerXy { x, y }) | Self::Upper(UpperXy { x, y }) => (*x, *y),
            Self::Unrecognized(_) => (f64::NAN, f64::NAN),
        };
        if x.is_finite() && y.is_finite() {
            Ok(Point2::new(x, y))
        } else {
            Err(InputError::InvalidCoordinate {
                point: name,
                raw: self.to_string(),
            })
        }
    }
}

impl fmt::Display for PointInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair([x, y]) => write!(f, "[{x}, {y}]"),
            Self::Lower(LowerXy { x, y }) => write!(f, "{{x: {x}, y: {y}}}"),
            Self::Upper(UpperXy { x, y }) => write!(f, "{{X: {x}, Y: {y}}}"),
            Self::Unrecognized(value) => write!(f, "{value}"),
        }
    }
}

impl From<[f64; 2]> for PointInput {
    fn from(pair: [f64; 2]) -> Self {
        Self::Pair(pair)
    }
}

impl From<(f64, f64)> for PointInput {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Pair([x, y])
    }
}

impl From<Point2> for PointInput {
    fn from(p: Point2) -> Self {
        Self::Pair([p.x, p.y])
    }
}
