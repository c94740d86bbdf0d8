//! Errors raised at the crate boundary. The generator itself never fails.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown muscle group: {0}")]
    MuscleGroup(String),
    #[error("unknown experience level: {0}")]
    Level(String),
    #[error("unknown exercise preference: {0}")]
    Preference(String),
    #[error("unknown movement pattern: {0}")]
    Pattern(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one muscle group is required")]
    NoMuscleGroups,
    #[error("at most {max} muscle groups are allowed, got {got}")]
    TooManyMuscleGroups { max: usize, got: usize },
    #[error("time budget must be positive")]
    ZeroTimeBudget,
}
