use std::fmt;

use tracing::debug;

use crate::error::ClassifyError;
use crate::geometry::{Slot, SlotRing, RING_LEN};

/// Ring offset of the next slot clockwise.
pub(crate) const NEXT: usize = 1;
/// Ring offset of the next slot counter-clockwise (`-1 mod 6`).
pub(crate) const PREV: usize = 5;
/// Ring offset of the opposite slot.
pub(crate) const OPPOSITE: usize = 3;

/// The classical triangle-solving cases.
///
/// The letters read around the triangle from the anchor: `Saa` is a side,
/// the angle after it and the angle opposite it; `Aas` is its mirror image.
/// `Ssa` and `Ass` are the two mirror images of the ambiguous case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveCase {
    Sss,
    Asa,
    Sas,
    Saa,
    Aas,
    Ssa,
    Ass,
}

impl SolveCase {
    /// Cases tried after SSS, in priority order.
    const PRIORITY: [SolveCase; 6] = [
        SolveCase::Asa,
        SolveCase::Sas,
        SolveCase::Saa,
        SolveCase::Aas,
        SolveCase::Ssa,
        SolveCase::Ass,
    ];

    /// Whether the anchor is a side (`true`) or an angle, and the two ring
    /// offsets from the anchor that must also be known.
    fn pattern(self) -> (bool, [usize; 2]) {
        match self {
            Self::Sss => (true, [2, 4]),
            Self::Asa => (true, [PREV, NEXT]),
            Self::Sas => (false, [PREV, NEXT]),
            Self::Saa => (true, [NEXT, OPPOSITE]),
            Self::Aas => (true, [PREV, OPPOSITE]),
            Self::Ssa => (false, [NEXT, OPPOSITE]),
            Self::Ass => (false, [PREV, OPPOSITE]),
        }
    }

    /// Returns `true` if the case can produce two triangles.
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        matches!(self, Self::Ssa | Self::Ass)
    }

    fn matches_at(self, ring: &SlotRing, anchor: usize) -> bool {
        let (_, offsets) = self.pattern();
        ring.is_known_at(anchor) && offsets.iter().all(|&k| ring.is_known_at(anchor + k))
    }
}

impl fmt::Display for SolveCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sss => "SSS",
            Self::Asa => "ASA",
            Self::Sas => "SAS",
            Self::Saa => "SAA",
            Self::Aas => "AAS",
            Self::Ssa => "SSA",
            Self::Ass => "ASS",
        };
        f.write_str(name)
    }
}

/// Which case applies, anchored at a ring index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub case: SolveCase,
    /// Ring index every case formula is expressed relative to.
    pub reference: usize,
}

impl Classification {
    /// The slot the case is anchored at.
    #[must_use]
    pub fn anchor(&self) -> Slot {
        Slot::from_index(self.reference)
    }
}

/// Determines the solving case from which ring slots are populated.
///
/// Three known sides always give SSS. Otherwise the cases are tried in the
/// order ASA, SAS, SAA, AAS, SSA, ASS. Side-anchored cases are only tested at
/// the first known side and angle-anchored cases only at the first known
/// angle, so extra known slots never move the anchor; they are only checked
/// against the result later.
///
/// # Errors
///
/// Returns [`ClassifyError::InsufficientParameters`] for fewer than three
/// known slots and [`ClassifyError::MissingSideLength`] when no side is known.
pub fn classify(ring: &SlotRing) -> Result<Classification, ClassifyError> {
    let supplied = ring.known_count();
    if supplied < 3 {
        return Err(ClassifyError::InsufficientParameters { supplied });
    }
    if ring.side_count() == 0 {
        return Err(ClassifyError::MissingSideLength);
    }
    if ring.side_count() == 3 {
        return Ok(Classification {
            case: SolveCase::Sss,
            reference: Slot::A.index(),
        });
    }

    let first_side = (0..RING_LEN).step_by(2).find(|&i| ring.is_known_at(i));
    let first_angle = (1..RING_LEN).step_by(2).find(|&i| ring.is_known_at(i));

    for case in SolveCase::PRIORITY {
        let (side_anchor, _) = case.pattern();
        let anchor = if side_anchor { first_side } else { first_angle };
        if let Some(reference) = anchor.filter(|&r| case.matches_at(ring, r)) {
            debug!(%case, anchor = %Slot::from_index(reference), "classified triangle");
            return Ok(Classification { case, reference });
        }
    }

    // Three known slots including a side always match one of the patterns.
    Err(ClassifyError::InsufficientParameters { supplied })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ring(slots: &[Slot]) -> SlotRing {
        slots
            .iter()
            .fold(SlotRing::new(), |ring, &slot| ring.with(slot, 1.0))
    }

    fn case_of(slots: &[Slot]) -> Classification {
        classify(&ring(slots)).unwrap()
    }

    #[test]
    fn too_few_parameters() {
        let err = classify(&ring(&[Slot::A, Slot::B])).unwrap_err();
        assert_eq!(err, ClassifyError::InsufficientParameters { supplied: 2 });
    }

    #[test]
    fn angles_only() {
        let err = classify(&ring(&[Slot::Alpha, Slot::Beta, Slot::Gamma])).unwrap_err();
        assert_eq!(err, ClassifyError::MissingSideLength);
    }

    #[test]
    fn three_sides() {
        let c = case_of(&[Slot::A, Slot::B, Slot::C]);
        assert_eq!(c.case, SolveCase::Sss);
    }

    #[test]
    fn side_between_two_angles() {
        // c lies between alpha and beta.
        let c = case_of(&[Slot::C, Slot::Alpha, Slot::Beta]);
        assert_eq!(c.case, SolveCase::Asa);
        assert_eq!(c.anchor(), Slot::C);
    }

    #[test]
    fn angle_between_two_sides() {
        let c = case_of(&[Slot::A, Slot::B, Slot::Gamma]);
        assert_eq!(c.case, SolveCase::Sas);
        assert_eq!(c.anchor(), Slot::Gamma);
    }

    #[test]
    fn side_adjacent_and_opposite_angles() {
        // a, gamma (after a) and alpha (opposite a).
        let c = case_of(&[Slot::A, Slot::Gamma, Slot::Alpha]);
        assert_eq!(c.case, SolveCase::Saa);
        assert_eq!(c.anchor(), Slot::A);

        // a, beta (before a) and alpha (opposite a).
        let c = case_of(&[Slot::A, Slot::Beta, Slot::Alpha]);
        assert_eq!(c.case, SolveCase::Aas);
        assert_eq!(c.anchor(), Slot::A);
    }

    #[test]
    fn ambiguous_cases() {
        // alpha, c (after alpha) and a (opposite alpha).
        let c = case_of(&[Slot::Alpha, Slot::C, Slot::A]);
        assert_eq!(c.case, SolveCase::Ssa);
        assert_eq!(c.anchor(), Slot::Alpha);
        assert!(c.case.is_ambiguous());

        // alpha, b (before alpha) and a (opposite alpha).
        let c = case_of(&[Slot::Alpha, Slot::B, Slot::A]);
        assert_eq!(c.case, SolveCase::Ass);
        assert_eq!(c.anchor(), Slot::Alpha);
    }

    #[test]
    fn every_three_slot_combination_with_a_side_classifies() {
        for i in 0..6 {
            for j in (i + 1)..6 {
                for k in (j + 1)..6 {
                    let slots = [Slot::from_index(i), Slot::from_index(j), Slot::from_index(k)];
                    let r = ring(&slots);
                    let result = classify(&r);
                    if r.side_count() == 0 {
                        assert_eq!(result, Err(ClassifyError::MissingSideLength));
                    } else {
                        assert!(result.is_ok(), "{slots:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn redundant_inputs_keep_priority() {
        // Three sides win over everything.
        let c = case_of(&[Slot::A, Slot::B, Slot::C, Slot::Alpha]);
        assert_eq!(c.case, SolveCase::Sss);

        // All six known: the first side anchor with both flanking angles.
        let c = case_of(&Slot::ALL);
        assert_eq!(c.case, SolveCase::Sss);

        // Two sides and two angles: ASA is tried first.
        let c = case_of(&[Slot::A, Slot::Beta, Slot::Gamma, Slot::B]);
        assert_eq!(c.case, SolveCase::Asa);
        assert_eq!(c.anchor(), Slot::A);
    }

    #[test]
    fn redundant_angle_keeps_anchor() {
        // b would anchor an ASA between gamma and alpha, but a is the first side.
        let base = case_of(&[Slot::A, Slot::B, Slot::Gamma]);
        let extra = case_of(&[Slot::A, Slot::B, Slot::Gamma, Slot::Alpha]);
        assert_eq!(base, extra);
        assert_eq!(extra.case, SolveCase::Sas);
        assert_eq!(extra.anchor(), Slot::Gamma);
    }

    #[test]
    fn every_redundant_combination_classifies() {
        for mask in 0_u32..64 {
            let slots: Vec<Slot> = Slot::ALL
                .into_iter()
                .filter(|s| mask & (1 << s.index()) != 0)
                .collect();
            let r = ring(&slots);
            if r.known_count() >= 3 && r.side_count() > 0 {
                assert!(classify(&r).is_ok(), "{slots:?}");
            }
        }
    }
}
