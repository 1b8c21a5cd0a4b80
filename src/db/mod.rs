pub mod exercises;
pub mod helpers;
pub mod templates;
pub mod users;
pub mod workouts;
