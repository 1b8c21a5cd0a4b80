//! Helpers that turn raw `sqlx` results into [`WorkoutError`]s.
//!
//! ```ignore
//! let workout = require_record(
//!     workouts::find_workout(&mut *conn, workout_id).await,
//!     "Workout not found",
//! )?;
//! ```

use crate::error::WorkoutError;

/// PostgreSQL error code for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL error code for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> Result<T, WorkoutError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(WorkoutError::not_found(not_found_message)),
        Err(e) => Err(WorkoutError::Database(e)),
    }
}

fn has_code(error: &sqlx::Error, code: &str) -> bool {
    match error {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

/// Whether the error is a primary key or unique index collision.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    has_code(error, UNIQUE_VIOLATION)
}

/// Whether the error is a reference to a row that no longer exists.
pub fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    has_code(error, FOREIGN_KEY_VIOLATION)
}
