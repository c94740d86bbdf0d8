//! routine_forge - workout routine generator
//!
//! Picks a time- and volume-bounded sequence of exercises from a static
//! catalog, then wraps it in warm-up, finishers and cool-down.

pub mod error;
pub mod exercises;
pub mod generator;

pub use error::{ConfigError, ParseError};
pub use exercises::{Catalog, StaticCatalog};
pub use generator::{GenerationConfig, Routine, RoutineGenerator};
