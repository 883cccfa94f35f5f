pub mod outcome;
pub mod point;
pub mod ring;
pub mod solution;
pub mod spec;

pub use outcome::{PointsOutcome, SolveOutcome};
pub use point::{LowerXy, PointInput, UpperXy};
pub use ring::{Slot, SlotRing, RING_LEN};
pub use solution::{
    AngleClass, CenteredCircle, CircleInfo, PointSolution, SideClass, Solution, TriangleShape,
};
pub use spec::{InputValue, ResolvedSpec, Supplied, TriangleSpec};
