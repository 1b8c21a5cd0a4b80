use sqlx::PgPool;

use crate::db::helpers::{is_foreign_key_violation, is_unique_violation, require_record};
use crate::db::{exercises, workouts};
use crate::error::WorkoutError;
use crate::models::workout::{ExerciseLogEntry, ExerciseSetValues, NewExerciseSetRequest};
use crate::workout::validation::validate_exercise_set;

#[tracing::instrument(name = "Add exercise set", skip(pool))]
pub async fn add_exercise_set(
    pool: &PgPool,
    workout_id: i32,
    request: &NewExerciseSetRequest,
) -> Result<ExerciseLogEntry, WorkoutError> {
    let input = validate_exercise_set(&request.values)?;

    require_record(
        workouts::find_workout(pool, workout_id).await,
        "Workout not found",
    )?;

    exercises::insert_exercise_set(pool, workout_id, request.exercise_id, &input)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                WorkoutError::Conflict(format!(
                    "Set {} of exercise {} is already logged",
                    input.exercise_set, request.exercise_id
                ))
            } else if is_foreign_key_violation(&e) {
                // Workout removed after the existence check
                WorkoutError::not_found("Workout not found")
            } else {
                WorkoutError::Database(e)
            }
        })
}

#[tracing::instrument(name = "Update exercise set", skip(pool))]
pub async fn update_exercise_set(
    pool: &PgPool,
    workout_id: i32,
    exercise_id: i32,
    values: &ExerciseSetValues,
) -> Result<ExerciseLogEntry, WorkoutError> {
    let input = validate_exercise_set(values)?;

    require_record(
        exercises::update_exercise_set(pool, workout_id, exercise_id, &input).await,
        "Exercise set not found",
    )
}

#[tracing::instrument(name = "Remove exercise set", skip(pool))]
pub async fn delete_exercise_set(
    pool: &PgPool,
    workout_id: i32,
    exercise_id: i32,
    exercise_set: i32,
) -> Result<ExerciseLogEntry, WorkoutError> {
    require_record(
        exercises::delete_exercise_set(pool, workout_id, exercise_id, exercise_set).await,
        "Exercise set not found",
    )
}

/// Remove every set of an exercise. NotFound when the workout had none.
#[tracing::instrument(name = "Remove exercise", skip(pool))]
pub async fn delete_exercise(
    pool: &PgPool,
    workout_id: i32,
    exercise_id: i32,
) -> Result<Vec<ExerciseLogEntry>, WorkoutError> {
    let deleted = exercises::delete_exercise(pool, workout_id, exercise_id).await?;
    if deleted.is_empty() {
        return Err(WorkoutError::not_found("Exercise not found"));
    }
    Ok(deleted)
}
