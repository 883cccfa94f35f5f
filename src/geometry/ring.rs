use std::f64::consts::PI;
use std::fmt;

/// Number of slots around the ring.
pub const RING_LEN: usize = 6;

/// One of the six quantities describing a triangle.
///
/// The declaration order is the ring order: sides at even indices, angles at
/// odd indices, each side flanked by its two adjacent angles. The quantity
/// opposite slot `i` sits at `i + 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    Gamma,
    B,
    Alpha,
    C,
    Beta,
}

impl Slot {
    /// All slots in ring order.
    pub const ALL: [Slot; RING_LEN] = [
        Slot::A,
        Slot::Gamma,
        Slot::B,
        Slot::Alpha,
        Slot::C,
        Slot::Beta,
    ];

    /// Position of this slot in the ring.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot at `index`, wrapping around the ring.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % RING_LEN]
    }

    /// The side opposite an angle, or the angle opposite a side.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Returns `true` for the three side-length slots.
    #[must_use]
    pub fn is_side(self) -> bool {
        self.index() % 2 == 0
    }

    /// Field name used for this quantity in inputs and outputs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Gamma => "gamma",
            Self::B => "b",
            Self::Alpha => "alpha",
            Self::C => "c",
            Self::Beta => "beta",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six triangle quantities arranged as a ring of optional values.
///
/// Angles are stored in radians. `None` marks a quantity that is not known
/// (yet); a stored value is never used as an "unset" marker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotRing {
    slots: [Option<f64>; RING_LEN],
}

impl SlotRing {
    /// Creates an empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete ring from sides and angles (radians).
    #[must_use]
    pub fn from_sides_angles(sides: [f64; 3], angles: [f64; 3]) -> Self {
        let [a, b, c] = sides;
        let [alpha, beta, gamma] = angles;
        Self {
            slots: [
                Some(a),
                Some(gamma),
                Some(b),
                Some(alpha),
                Some(c),
                Some(beta),
            ],
        }
    }

    /// Returns the value of a named slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<f64> {
        self.slots[slot.index()]
    }

    /// Sets a named slot.
    pub fn set(&mut self, slot: Slot, value: f64) {
        self.slots[slot.index()] = Some(value);
    }

    /// Returns a copy with `slot` set to `value`.
    #[must_use]
    pub fn with(mut self, slot: Slot, value: f64) -> Self {
        self.set(slot, value);
        self
    }

    /// Returns the value at `index`, wrapping around the ring.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<f64> {
        self.slots[index % RING_LEN]
    }

    /// Sets the value at `index`, wrapping around the ring.
    pub fn set_at(&mut self, index: usize, value: f64) {
        self.slots[index % RING_LEN] = Some(value);
    }

    /// Returns `true` if the slot at `index` (wrapping) holds a value.
    #[must_use]
    pub fn is_known_at(&self, index: usize) -> bool {
        self.at(index).is_some()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of populated side slots.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.slots.iter().step_by(2).filter(|s| s.is_some()).count()
    }

    /// Returns the first slot whose value cannot belong to a real triangle.
    ///
    /// Sides must be finite and positive; angles must lie strictly inside
    /// `(0, pi)`. Unset slots are reported as well. `NaN` fails every check.
    #[must_use]
    pub fn first_invalid(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&slot| match self.get(slot) {
            None => true,
            Some(v) if !v.is_finite() => true,
            Some(v) if slot.is_side() => v <= 0.0,
            Some(v) => v <= 0.0 || v >= PI,
        })
    }
}
