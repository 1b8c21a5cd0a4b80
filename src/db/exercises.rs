use sqlx::PgExecutor;

use crate::models::workout::ExerciseLogEntry;
use crate::workout::validation::ExerciseSetInput;

const ENTRY_COLUMNS: &str = "workout_id, exercise_id, exercise_set, reps, weight, time_in_seconds";

#[tracing::instrument(name = "Fetch workout exercises", skip(executor))]
pub async fn list_for_workout<'e, E>(
    executor: E,
    workout_id: i32,
) -> Result<Vec<ExerciseLogEntry>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "SELECT {ENTRY_COLUMNS} FROM workout_exercises \
         WHERE workout_id = $1 \
         ORDER BY exercise_id, exercise_set"
    );
    sqlx::query_as::<_, ExerciseLogEntry>(&query)
        .bind(workout_id)
        .fetch_all(executor)
        .await
}

#[tracing::instrument(name = "Insert exercise set", skip(executor))]
pub async fn insert_exercise_set<'e, E>(
    executor: E,
    workout_id: i32,
    exercise_id: i32,
    input: &ExerciseSetInput,
) -> Result<ExerciseLogEntry, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "INSERT INTO workout_exercises ({ENTRY_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {ENTRY_COLUMNS}"
    );
    sqlx::query_as::<_, ExerciseLogEntry>(&query)
        .bind(workout_id)
        .bind(exercise_id)
        .bind(input.exercise_set)
        .bind(input.reps)
        .bind(input.weight)
        .bind(input.time_in_seconds)
        .fetch_one(executor)
        .await
}

/// Update the values of one set. Fields absent from `input` keep their stored value.
#[tracing::instrument(name = "Update exercise set", skip(executor))]
pub async fn update_exercise_set<'e, E>(
    executor: E,
    workout_id: i32,
    exercise_id: i32,
    input: &ExerciseSetInput,
) -> Result<Option<ExerciseLogEntry>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "UPDATE workout_exercises SET \
             reps = COALESCE($4, reps), \
             weight = COALESCE($5, weight), \
             time_in_seconds = COALESCE($6, time_in_seconds) \
         WHERE workout_id = $1 AND exercise_id = $2 AND exercise_set = $3 \
         RETURNING {ENTRY_COLUMNS}"
    );
    sqlx::query_as::<_, ExerciseLogEntry>(&query)
        .bind(workout_id)
        .bind(exercise_id)
        .bind(input.exercise_set)
        .bind(input.reps)
        .bind(input.weight)
        .bind(input.time_in_seconds)
        .fetch_optional(executor)
        .await
}

#[tracing::instrument(name = "Delete exercise set", skip(executor))]
pub async fn delete_exercise_set<'e, E>(
    executor: E,
    workout_id: i32,
    exercise_id: i32,
    exercise_set: i32,
) -> Result<Option<ExerciseLogEntry>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "DELETE FROM workout_exercises \
         WHERE workout_id = $1 AND exercise_id = $2 AND exercise_set = $3 \
         RETURNING {ENTRY_COLUMNS}"
    );
    sqlx::query_as::<_, ExerciseLogEntry>(&query)
        .bind(workout_id)
        .bind(exercise_id)
        .bind(exercise_set)
        .fetch_optional(executor)
        .await
}

/// Delete every set of one exercise within a workout.
#[tracing::instrument(name = "Delete exercise", skip(executor))]
pub async fn delete_exercise<'e, E>(
    executor: E,
    workout_id: i32,
    exercise_id: i32,
) -> Result<Vec<ExerciseLogEntry>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "DELETE FROM workout_exercises \
         WHERE workout_id = $1 AND exercise_id = $2 \
         RETURNING {ENTRY_COLUMNS}"
    );
    let mut deleted = sqlx::query_as::<_, ExerciseLogEntry>(&query)
        .bind(workout_id)
        .bind(exercise_id)
        .fetch_all(executor)
        .await?;
    deleted.sort_by_key(|entry| entry.exercise_set);
    Ok(deleted)
}

#[tracing::instrument(name = "Delete workout exercises", skip(executor))]
pub async fn delete_for_workout<'e, E>(executor: E, workout_id: i32) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM workout_exercises WHERE workout_id = $1")
        .bind(workout_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
