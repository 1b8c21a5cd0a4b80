use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::{exercises, templates, users, workouts};
use crate::error::WorkoutError;
use crate::models::workout::WorkoutView;
use crate::workout::assembler::assemble_workout;

/// Create a workout and link it to `user_id`, starting now. Both rows commit together.
#[tracing::instrument(name = "Create workout", skip(pool, description))]
pub async fn create_workout(
    pool: &PgPool,
    user_id: Uuid,
    template_id: i32,
    description: Option<&str>,
) -> Result<WorkoutView, WorkoutError> {
    let mut tx = pool.begin().await?;

    if !users::user_exists(&mut *tx, user_id).await? {
        return Err(WorkoutError::not_found("User not found"));
    }
    require_record(
        templates::find_template(&mut *tx, template_id).await,
        "Workout template not found",
    )?;

    let workout = workouts::insert_workout(&mut *tx, template_id, description).await?;
    workouts::insert_user_workout(&mut *tx, user_id, workout.id, Utc::now()).await?;
    let view = assemble_workout(&mut *tx, workout.id).await?;

    tx.commit().await?;
    tracing::info!("Created workout {} for user {}", workout.id, user_id);
    Ok(view)
}

#[tracing::instrument(name = "Update workout", skip(pool, description))]
pub async fn update_workout_description(
    pool: &PgPool,
    workout_id: i32,
    description: Option<&str>,
) -> Result<WorkoutView, WorkoutError> {
    let mut conn = pool.acquire().await?;
    require_record(
        workouts::update_workout_description(&mut *conn, workout_id, description).await,
        "Workout not found",
    )?;
    assemble_workout(&mut *conn, workout_id).await
}

/// Mark the user's session of a workout as finished.
#[tracing::instrument(name = "Complete workout", skip(pool))]
pub async fn complete_workout(
    pool: &PgPool,
    workout_id: i32,
    user_id: Uuid,
) -> Result<WorkoutView, WorkoutError> {
    let mut conn = pool.acquire().await?;
    require_record(
        workouts::complete_user_workout(&mut *conn, workout_id, user_id, Utc::now()).await,
        "Workout not found for user",
    )?;
    assemble_workout(&mut *conn, workout_id).await
}

/// Delete a workout with its links and exercise sets, returning the view as it was.
///
/// All deletions share one transaction; an error in any step drops it uncommitted.
#[tracing::instrument(name = "Delete workout", skip(pool))]
pub async fn delete_workout(pool: &PgPool, workout_id: i32) -> Result<WorkoutView, WorkoutError> {
    let mut tx = pool.begin().await?;
    let snapshot = assemble_workout(&mut *tx, workout_id).await?;

    delete_workout_rows(&mut tx, workout_id).await?;

    tx.commit().await?;
    tracing::info!(
        "Deleted workout {} with {} exercise sets",
        workout_id,
        snapshot.exercises.len()
    );
    Ok(snapshot)
}

async fn delete_workout_rows(
    tx: &mut Transaction<'_, Postgres>,
    workout_id: i32,
) -> Result<(), WorkoutError> {
    workouts::delete_user_workouts(&mut **tx, workout_id).await?;
    exercises::delete_for_workout(&mut **tx, workout_id).await?;
    if workouts::delete_workout(&mut **tx, workout_id).await? == 0 {
        return Err(WorkoutError::not_found("Workout not found"));
    }
    Ok(())
}
