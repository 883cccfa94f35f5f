use thiserror::Error;

/// Top-level error type for the trigon triangle solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Errors raised while reading and normalizing caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("unknown angle unit \"{0}\" (expected \"deg\" or \"rad\")")]
    UnknownUnit(String),

    #[error("illegal value for {property}: {value}")]
    IllegalValue {
        property: &'static str,
        value: String,
    },

    #[error("invalid coordinate for point {point}: {raw}")]
    InvalidCoordinate { point: &'static str, raw: String },

    #[error("points {first} {first_raw} and {second} {second_raw} are identical")]
    DuplicateCoordinate {
        first: &'static str,
        first_raw: String,
        second: &'static str,
        second_raw: String,
    },
}

/// Errors raised while deciding which solving case applies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("at least 3 parameters are required, {supplied} given")]
    InsufficientParameters { supplied: usize },

    #[error("at least one side length is required")]
    MissingSideLength,
}

/// Errors raised by the trigonometric solver itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("unsolvable: {0}")]
    Unsolvable(String),

    #[error("input conflict: {property} was given as {input} but calculated as {calculated}")]
    InputConflict {
        property: &'static str,
        input: f64,
        calculated: f64,
    },
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_both_values() {
        let err: TrigonError = SolveError::InputConflict {
            property: "alpha",
            input: 10.0,
            calculated: 60.0,
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("alpha"), "{msg}");
        assert!(msg.contains("10") && msg.contains("60"), "{msg}");
    }

    #[test]
    fn duplicate_message_echoes_raw_points() {
        let err = InputError::DuplicateCoordinate {
            first: "A",
            first_raw: "[0, 0]".into(),
            second: "B",
            second_raw: "{x: 0, y: 0}".into(),
        };
        assert_eq!(
            err.to_string(),
            "points A [0, 0] and B {x: 0, y: 0} are identical"
        );
    }
}
