use tracing::debug;

use crate::error::SolveError;
use crate::geometry::{CircleInfo, Slot, SlotRing, Solution, Supplied};
use crate::math::triangle_2d::{altitude, area_from_sas, circumradius, incircle_radius};
use crate::math::{approx_eq, AngleUnit};

/// Number of quantities that determine a triangle; anything beyond is redundant.
const DETERMINING: usize = 3;

/// Compares every supplied quantity with its solved value.
///
/// Only runs when more than three quantities were supplied. Angles are
/// compared in the caller's unit.
///
/// # Errors
///
/// Returns [`SolveError::InputConflict`] for the first quantity (in ring
/// order) that differs by more than `tolerance`.
pub fn check_consistency(
    ring: &SlotRing,
    supplied: &[Supplied],
    unit: AngleUnit,
    tolerance: f64,
) -> Result<(), SolveError> {
    if supplied.len() <= DETERMINING {
        return Ok(());
    }
    for s in supplied {
        let solved = ring.get(s.slot).unwrap_or(f64::NAN);
        let calculated = if s.slot.is_side() {
            solved
        } else {
            unit.express_radians(solved)
        };
        if !approx_eq(s.value, calculated, tolerance) {
            debug!(property = s.slot.name(), input = s.value, calculated, "input conflict");
            return Err(SolveError::InputConflict {
                property: s.slot.name(),
                input: s.value,
                calculated,
            });
        }
    }
    Ok(())
}

/// Builds the solution for a complete ring: area, altitudes and circle radii.
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] if a slot is unset, non-finite, or out
/// of range (sides must be positive, angles strictly between 0 and pi).
pub fn enrich(ring: &SlotRing, unit: AngleUnit) -> Result<Solution, SolveError> {
    if let Some(slot) = ring.first_invalid() {
        debug!(%slot, value = ?ring.get(slot), "rejected candidate triangle");
        return Err(SolveError::Unsolvable("No solution".into()));
    }
    let (Some(a), Some(b), Some(c), Some(alpha), Some(beta), Some(gamma)) = (
        ring.get(Slot::A),
        ring.get(Slot::B),
        ring.get(Slot::C),
        ring.get(Slot::Alpha),
        ring.get(Slot::Beta),
        ring.get(Slot::Gamma),
    ) else {
        return Err(SolveError::Unsolvable("No solution".into()));
    };

    let r = circumradius(a, alpha);
    Ok(Solution {
        a,
        b,
        c,
        alpha: unit.express_radians(alpha),
        beta: unit.express_radians(beta),
        gamma: unit.express_radians(gamma),
        area: area_from_sas(a, b, gamma),
        ha: altitude(b, c, r),
        hb: altitude(a, c, r),
        hc: altitude(a, b, r),
        incircle: CircleInfo {
            radius: incircle_radius(a, b, c),
        },
        circumcircle: CircleInfo { radius: r },
    })
}
