//! Workout history resolution, assembly and mutations.

pub mod assembler;
pub mod exercises;
pub mod history;
pub mod mutations;
pub mod validation;

pub use assembler::{assemble_workout, load_workout, load_workouts};
pub use history::{resolve_many, resolve_one, VisibilityGroup};
