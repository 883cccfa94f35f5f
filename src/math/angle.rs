use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Unit in which angles are read from and reported to the caller.
///
/// Internally every angle is stored in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "rad")]
    Radians,
}

impl AngleUnit {
    /// Literal used on the wire for this unit.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }

    /// Converts an angle expressed in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn express_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_degrees(),
            Self::Radians => value,
        }
    }

    /// The sum of a triangle's angles in this unit (180 or pi).
    #[must_use]
    pub fn straight_angle(self) -> f64 {
        self.express_radians(PI)
    }
}

impl FromStr for AngleUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" => Ok(Self::Degrees),
            "rad" => Ok(Self::Radians),
            other => Err(InputError::UnknownUnit(other.to_owned())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
