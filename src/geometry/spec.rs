use std::fmt;

use serde::{Deserialize, Serialize};

use super::ring::{Slot, SlotRing};
use crate::error::InputError;
use crate::math::AngleUnit;

/// A caller-supplied quantity: a number, or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    /// Coerces the value to a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::IllegalValue`] if the value is not numeric.
    pub fn coerce(&self, property: &'static str) -> Result<f64, InputError> {
        let value = match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::IllegalValue {
                property,
                value: self.to_string(),
            })
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A sparse description of a triangle: any of the six quantities plus an angle unit.
///
/// `mode` holds the unit literal (`"deg"` or `"rad"`); when absent, degrees are assumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl TriangleSpec {
    /// Creates an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets side `a`.
    #[must_use]
    pub fn a(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::A, value)
    }

    /// Sets side `b`.
    #[must_use]
    pub fn b(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::B, value)
    }

    /// Sets side `c`.
    #[must_use]
    pub fn c(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::C, value)
    }

    /// Sets angle `alpha` (opposite `a`).
    #[must_use]
    pub fn alpha(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::Alpha, value)
    }

    /// Sets angle `beta` (opposite `b`).
    #[must_use]
    pub fn beta(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::Beta, value)
    }

    /// Sets angle `gamma` (opposite `c`).
    #[must_use]
    pub fn gamma(self, value: impl Into<InputValue>) -> Self {
        self.with(Slot::Gamma, value)
    }

    /// Sets the angle unit.
    #[must_use]
    pub fn unit(self, unit: AngleUnit) -> Self {
        self.mode(unit.as_str())
    }

    /// Sets the raw unit literal, which is validated when the spec is solved.
    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets the quantity for `slot`.
    #[must_use]
    pub fn with(mut self, slot: Slot, value: impl Into<InputValue>) -> Self {
        *self.field_mut(slot) = Some(value.into());
        self
    }

    /// Returns the raw quantity for `slot`, if supplied.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&InputValue> {
        match slot {
            Slot::A => self.a.as_ref(),
            Slot::B => self.b.as_ref(),
            Slot::C => self.c.as_ref(),
            Slot::Alpha => self.alpha.as_ref(),
            Slot::Beta => self.beta.as_ref(),
            Slot::Gamma => self.gamma.as_ref(),
        }
    }

    fn field_mut(&mut self, slot: Slot) -> &mut Option<InputValue> {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
            Slot::C => &mut self.c,
            Slot::Alpha => &mut self.alpha,
            Slot::Beta => &mut self.beta,
            Slot::Gamma => &mut self.gamma,
        }
    }

    /// Resolves the unit literal, defaulting to degrees.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownUnit`] for any literal other than `"deg"` or `"rad"`.
    pub fn resolve_unit(&self) -> Result<AngleUnit, InputError> {
        self.mode
            .as_deref()
            .map_or(Ok(AngleUnit::default()), |m| m.parse::<AngleUnit>())
    }

    /// Validates every supplied quantity and loads it into a ring (angles in radians).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownUnit`] for a bad unit literal, and
    /// [`InputError::IllegalValue`] for a non-numeric value, a non-positive
    /// side, or an angle outside the open interval `(0, 180)` degrees.
    pub fn resolve(&self) -> Result<ResolvedSpec, InputError> {
        let unit = self.resolve_unit()?;
        let mut ring = SlotRing::new();
        let mut supplied = Vec::new();

        for slot in Slot::ALL {
            let Some(raw) = self.get(slot) else {
                continue;
            };
            let value = raw.coerce(slot.name())?;
            let in_range = if slot.is_side() {
                value > 0.0
            } else {
                value > 0.0 && value < unit.straight_angle()
            };
            if !in_range {
                return Err(InputError::IllegalValue {
                    property: slot.name(),
                    value: raw.to_string(),
                });
            }

            let stored = if slot.is_side() {
                value
            } else {
                unit.to_radians(value)
            };
            ring.set(slot, stored);
            supplied.push(Supplied { slot, value });
        }

        Ok(ResolvedSpec {
            unit,
            ring,
            supplied,
        })
    }
}

/// A supplied quantity after coercion, in the caller's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Supplied {
    pub slot: Slot,
    pub value: f64,
}

/// A validated specification ready for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpec {
    /// Unit the caller's angles are expressed in.
    pub unit: AngleUnit,
    /// Known quantities, angles in radians.
    pub ring: SlotRing,
    /// Supplied quantities in ring order, used for consistency checks.
    pub supplied: Vec<Supplied>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn numeric_strings_are_coerced() {
        assert_relative_eq!(InputValue::from(" 2.5 ").coerce("a").unwrap(), 2.5);
        assert_relative_eq!(InputValue::from(3.0).coerce("a").unwrap(), 3.0);
    }

    #[test]
    fn garbage_is_illegal() {
        let err = InputValue::from("three").coerce("b").unwrap_err();
        assert_eq!(
            err,
            InputError::IllegalValue {
                property: "b",
                value: "\"three\"".into()
            }
        );
        assert!(InputValue::from(f64::INFINITY).coerce("b").is_err());
    }

    #[test]
    fn resolve_converts_degrees() {
        let spec = TriangleSpec::new().a(3.0).b(4.0).gamma(90.0);
        let resolved = spec.resolve().unwrap();
        assert_eq!(resolved.unit, AngleUnit::Degrees);
        assert_relative_eq!(resolved.ring.get(Slot::Gamma).unwrap(), FRAC_PI_2);
        assert_eq!(resolved.supplied.len(), 3);
        // Supplied values stay in the caller's unit.
        let gamma = resolved
            .supplied
            .iter()
            .find(|s| s.slot == Slot::Gamma)
            .unwrap();
        assert_relative_eq!(gamma.value, 90.0);
    }

    #[test]
    fn resolve_keeps_radians() {
        let spec = TriangleSpec::new()
            .a(3.0)
            .b(4.0)
            .gamma(FRAC_PI_2)
            .unit(AngleUnit::Radians);
        let resolved = spec.resolve().unwrap();
        assert_relative_eq!(resolved.ring.get(Slot::Gamma).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn unknown_unit() {
        let err = TriangleSpec::new().a(1.0).mode("grad").resolve().unwrap_err();
        assert_eq!(err, InputError::UnknownUnit("grad".into()));
    }

    #[test]
    fn out_of_range_values() {
        assert!(TriangleSpec::new().a(0.0).resolve().is_err());
        assert!(TriangleSpec::new().b(-2.0).resolve().is_err());
        assert!(TriangleSpec::new().alpha(180.0).resolve().is_err());
        assert!(TriangleSpec::new()
            .alpha(3.5)
            .unit(AngleUnit::Radians)
            .resolve()
            .is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let spec: TriangleSpec =
            serde_json::from_str(r#"{"a": 7, "alpha": "30", "b": 10, "mode": "deg"}"#).unwrap();
        assert_eq!(spec.a, Some(InputValue::Number(7.0)));
        assert_eq!(spec.alpha, Some(InputValue::Text("30".into())));
        assert_eq!(spec.c, None);
        assert_eq!(spec.resolve_unit().unwrap(), AngleUnit::Degrees);
    }
}
