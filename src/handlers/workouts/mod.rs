pub mod exercises;
pub mod manage_workout;
pub mod workout_detail;
pub mod workout_history;
