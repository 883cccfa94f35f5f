//! Formula sets for each solving case.
//!
//! Every formula is written relative to the classification's reference index
//! so one implementation serves all rotations of the ring. The returned rings
//! are freshly derived from the anchoring quantities only; redundant inputs
//! are left out so they can be checked against the result.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::trace;

use crate::error::SolveError;
use crate::geometry::{Slot, SlotRing, RING_LEN};
use crate::math::triangle_2d::{angle_from_sss, side_from_sas, side_from_sines};
use crate::operations::classify::{Classification, SolveCase, NEXT, OPPOSITE, PREV};

/// Derives every slot of the triangle for the classified case.
///
/// Returns one candidate ring, or two for the ambiguous case. Candidates are
/// not range-checked here.
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] when the side lengths of an SSS input
/// cannot form a triangle, or when the ambiguous case admits no triangle.
pub fn solve_case(
    ring: &SlotRing,
    classification: Classification,
) -> Result<Vec<SlotRing>, SolveError> {
    let r = classification.reference;
    let candidates = match classification.case {
        SolveCase::Sss => vec![solve_sss(ring)?],
        SolveCase::Asa => vec![solve_asa(ring, r)?],
        SolveCase::Sas => vec![solve_sas(ring, r)?],
        SolveCase::Saa => vec![solve_saa(ring, r, NEXT)?],
        SolveCase::Aas => vec![solve_saa(ring, r, PREV)?],
        SolveCase::Ssa => solve_ssa(ring, r, NEXT)?,
        SolveCase::Ass => solve_ssa(ring, r, PREV)?,
    };
    trace!(
        case = %classification.case,
        candidates = candidates.len(),
        "derived candidate triangles"
    );
    Ok(candidates)
}

fn known(ring: &SlotRing, index: usize) -> Result<f64, SolveError> {
    ring.at(index).ok_or_else(|| {
        SolveError::Unsolvable(format!("{} is not known", Slot::from_index(index)))
    })
}

/// Fills the two unknown sides by the law of sines once all angles and the
/// side at `side` are known.
fn fill_sides_by_sines(out: &mut SlotRing, side: usize) -> Result<(), SolveError> {
    let s = known(out, side)?;
    let opposite = known(out, side + OPPOSITE)?;
    for k in [2, 4] {
        let angle = known(out, side + k + OPPOSITE)?;
        out.set_at(side + k, side_from_sines(s, opposite, angle));
    }
    Ok(())
}

fn solve_sss(ring: &SlotRing) -> Result<SlotRing, SolveError> {
    let a = known(ring, Slot::A.index())?;
    let b = known(ring, Slot::B.index())?;
    let c = known(ring, Slot::C.index())?;

    let alpha = angle_from_sss(a, b, c);
    let beta = angle_from_sss(b, a, c);
    let gamma = PI - alpha - beta;

    if [alpha, beta, gamma]
        .iter()
        .any(|v| !v.is_finite() || *v <= 0.0)
    {
        return Err(SolveError::Unsolvable(format!(
            "Impossible combination of side lengths {a}, {b}, {c}"
        )));
    }

    Ok(SlotRing::from_sides_angles([a, b, c], [alpha, beta, gamma]))
}

/// Side at `r` with both adjacent angles known.
fn solve_asa(ring: &SlotRing, r: usize) -> Result<SlotRing, SolveError> {
    let mut out = SlotRing::new();
    let before = known(ring, r + PREV)?;
    let after = known(ring, r + NEXT)?;
    out.set_at(r, known(ring, r)?);
    out.set_at(r + PREV, before);
    out.set_at(r + NEXT, after);
    out.set_at(r + OPPOSITE, PI - before - after);
    fill_sides_by_sines(&mut out, r)?;
    Ok(out)
}

/// Angle at `r` enclosed by two known sides.
fn solve_sas(ring: &SlotRing, r: usize) -> Result<SlotRing, SolveError> {
    let mut out = SlotRing::new();
    let angle = known(ring, r)?;
    let s_before = known(ring, r + PREV)?;
    let s_after = known(ring, r + NEXT)?;
    let s_opposite = side_from_sas(s_before, s_after, angle);

    // The angle opposite `s_before` sits between `s_after` and the new side.
    let opposite_before = angle_from_sss(s_before, s_after, s_opposite);

    out.set_at(r, angle);
    out.set_at(r + PREV, s_before);
    out.set_at(r + NEXT, s_after);
    out.set_at(r + OPPOSITE, s_opposite);
    out.set_at(r + PREV + OPPOSITE, opposite_before);
    out.set_at(r + NEXT + OPPOSITE, PI - angle - opposite_before);
    Ok(out)
}

/// Side at `r`, the adjacent angle at `r + adjacent` and the opposite angle.
fn solve_saa(ring: &SlotRing, r: usize, adjacent: usize) -> Result<SlotRing, SolveError> {
    let mut out = SlotRing::new();
    let near = known(ring, r + adjacent)?;
    let far = known(ring, r + OPPOSITE)?;
    out.set_at(r, known(ring, r)?);
    out.set_at(r + adjacent, near);
    out.set_at(r + OPPOSITE, far);
    // The other adjacent angle.
    out.set_at(r + RING_LEN - adjacent, PI - near - far);
    fill_sides_by_sines(&mut out, r)?;
    Ok(out)
}

/// Angle at `r`, the side at `r + adjacent` next to it and the side opposite it.
fn solve_ssa(ring: &SlotRing, r: usize, adjacent: usize) -> Result<Vec<SlotRing>, SolveError> {
    let angle = known(ring, r)?;
    let s_near = known(ring, r + adjacent)?;
    let s_far = known(ring, r + OPPOSITE)?;

    let d = s_near / s_far * angle.sin();
    if d > 1.0 {
        return Err(SolveError::Unsolvable("No solution".into()));
    }

    #[allow(clippy::float_cmp)]
    let unknown_angles = if d == 1.0 {
        vec![FRAC_PI_2]
    } else if s_far >= s_near {
        // The larger side faces the larger angle, so the obtuse
        // alternative cannot fit.
        vec![d.asin()]
    } else {
        vec![d.asin(), PI - d.asin()]
    };

    let remaining_angle = r + OPPOSITE + RING_LEN - adjacent;
    let candidates = unknown_angles
        .into_iter()
        .map(|opposite_near| {
            let third = PI - angle - opposite_near;
            let mut out = SlotRing::new();
            out.set_at(r, angle);
            out.set_at(r + adjacent, s_near);
            out.set_at(r + OPPOSITE, s_far);
            out.set_at(r + adjacent + OPPOSITE, opposite_near);
            out.set_at(remaining_angle, third);
            out.set_at(remaining_angle + OPPOSITE, side_from_sines(s_far, angle, third));
            out
        })
        .collect();
    Ok(candidates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::classify::classify;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_3;

    fn solve(ring: &SlotRing) -> Result<Vec<SlotRing>, SolveError> {
        solve_case(ring, classify(ring).unwrap())
    }

    fn get(ring: &SlotRing, slot: Slot) -> f64 {
        ring.get(slot).unwrap()
    }

    fn assert_345(ring: &SlotRing) {
        assert_relative_eq!(get(ring, Slot::A), 3.0, epsilon = 1e-9);
        assert_relative_eq!(get(ring, Slot::B), 4.0, epsilon = 1e-9);
        assert_relative_eq!(get(ring, Slot::C), 5.0, epsilon = 1e-9);
        assert_relative_eq!(get(ring, Slot::Alpha), (0.6_f64).asin(), epsilon = 1e-9);
        assert_relative_eq!(get(ring, Slot::Beta), (0.8_f64).asin(), epsilon = 1e-9);
        assert_relative_eq!(get(ring, Slot::Gamma), FRAC_PI_2, epsilon = 1e-9);
    }

    fn alpha345() -> f64 {
        (0.6_f64).asin()
    }

    fn beta345() -> f64 {
        (0.8_f64).asin()
    }

    #[test]
    fn sss_right_triangle() {
        let ring = SlotRing::new()
            .with(Slot::A, 3.0)
            .with(Slot::B, 4.0)
            .with(Slot::C, 5.0);
        let out = solve(&ring).unwrap();
        assert_eq!(out.len(), 1);
        assert_345(&out[0]);
    }

    #[test]
    fn sss_triangle_inequality() {
        let ring = SlotRing::new()
            .with(Slot::A, 1.0)
            .with(Slot::B, 2.0)
            .with(Slot::C, 10.0);
        let err = solve(&ring).unwrap_err();
        let SolveError::Unsolvable(msg) = err else {
            panic!("expected unsolvable");
        };
        assert!(msg.contains('1') && msg.contains('2') && msg.contains("10"), "{msg}");
    }

    #[test]
    fn sss_degenerate() {
        let ring = SlotRing::new()
            .with(Slot::A, 1.0)
            .with(Slot::B, 2.0)
            .with(Slot::C, 3.0);
        assert!(matches!(solve(&ring), Err(SolveError::Unsolvable(_))));
    }

    #[test]
    fn asa() {
        let ring = SlotRing::new()
            .with(Slot::C, 5.0)
            .with(Slot::Alpha, alpha345())
            .with(Slot::Beta, beta345());
        assert_345(&solve(&ring).unwrap()[0]);
    }

    #[test]
    fn sas() {
        let ring = SlotRing::new()
            .with(Slot::A, 3.0)
            .with(Slot::B, 4.0)
            .with(Slot::Gamma, FRAC_PI_2);
        assert_345(&solve(&ring).unwrap()[0]);

        let ring = SlotRing::new()
            .with(Slot::B, 4.0)
            .with(Slot::C, 5.0)
            .with(Slot::Alpha, alpha345());
        assert_345(&solve(&ring).unwrap()[0]);
    }

    #[test]
    fn saa_and_aas() {
        let saa = SlotRing::new()
            .with(Slot::A, 3.0)
            .with(Slot::Gamma, FRAC_PI_2)
            .with(Slot::Alpha, alpha345());
        assert_345(&solve(&saa).unwrap()[0]);

        let aas = SlotRing::new()
            .with(Slot::A, 3.0)
            .with(Slot::Beta, beta345())
            .with(Slot::Alpha, alpha345());
        assert_345(&solve(&aas).unwrap()[0]);
    }

    #[test]
    fn ssa_single_solution_when_far_side_is_longer() {
        // gamma = 90 with c = 5 opposite, b = 4 adjacent.
        let ring = SlotRing::new()
            .with(Slot::Gamma, FRAC_PI_2)
            .with(Slot::B, 4.0)
            .with(Slot::C, 5.0);
        let out = solve(&ring).unwrap();
        assert_eq!(out.len(), 1);
        assert_345(&out[0]);
    }

    #[test]
    fn ssa_two_solutions() {
        let ring = SlotRing::new()
            .with(Slot::A, 7.0)
            .with(Slot::Alpha, 30_f64.to_radians())
            .with(Slot::B, 10.0);
        let out = solve(&ring).unwrap();
        assert_eq!(out.len(), 2);

        let beta1 = get(&out[0], Slot::Beta);
        let beta2 = get(&out[1], Slot::Beta);
        assert!(beta1 < FRAC_PI_2 && beta2 > FRAC_PI_2);
        assert_relative_eq!(beta1 + beta2, PI, epsilon = 1e-12);
        assert_relative_eq!(beta1.sin(), 10.0 * 0.5 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn ssa_near_right_angle() {
        // sin(pi / 6) rounds just below 0.5, so the ratio misses exactly 1 and
        // both the acute and the obtuse candidate are emitted, each within
        // rounding of a right angle.
        let ring = SlotRing::new()
            .with(Slot::A, 1.0)
            .with(Slot::Alpha, FRAC_PI_2 / 3.0)
            .with(Slot::B, 2.0);
        let out = solve(&ring).unwrap();
        assert_eq!(out.len(), 2);
        let (beta1, beta2) = (get(&out[0], Slot::Beta), get(&out[1], Slot::Beta));
        assert!(beta1 < FRAC_PI_2 && beta2 > FRAC_PI_2);
        assert_relative_eq!(beta1, FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(beta2, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn ssa_no_solution() {
        let ring = SlotRing::new()
            .with(Slot::A, 2.0)
            .with(Slot::Alpha, FRAC_PI_3)
            .with(Slot::B, 10.0);
        assert_eq!(
            solve(&ring).unwrap_err(),
            SolveError::Unsolvable("No solution".into())
        );
    }

    #[test]
    fn mirrored_ambiguous_cases_agree() {
        // alpha with c after it (SSA) vs alpha with b before it (ASS),
        // describing the same triangle from both sides.
        let ssa = SlotRing::new()
            .with(Slot::Alpha, 0.5)
            .with(Slot::C, 4.0)
            .with(Slot::A, 3.0);
        let ass = SlotRing::new()
            .with(Slot::Alpha, 0.5)
            .with(Slot::B, 4.0)
            .with(Slot::A, 3.0);
        let ssa = solve(&ssa).unwrap();
        let ass = solve(&ass).unwrap();
        assert_eq!(ssa.len(), ass.len());
        for (x, y) in ssa.iter().zip(&ass) {
            assert_relative_eq!(get(x, Slot::C), get(y, Slot::B), epsilon = 1e-12);
            assert_relative_eq!(get(x, Slot::B), get(y, Slot::C), epsilon = 1e-12);
            assert_relative_eq!(get(x, Slot::Gamma), get(y, Slot::Beta), epsilon = 1e-12);
        }
    }

    #[test]
    fn redundant_inputs_are_recomputed() {
        // A wrong alpha is carried along but not used by the SSS path.
        let ring = SlotRing::new()
            .with(Slot::A, 1.0)
            .with(Slot::B, 1.0)
            .with(Slot::C, 1.0)
            .with(Slot::Alpha, 10_f64.to_radians());
        let out = solve(&ring).unwrap();
        assert_relative_eq!(get(&out[0], Slot::Alpha), FRAC_PI_3, epsilon = 1e-12);
    }
}
