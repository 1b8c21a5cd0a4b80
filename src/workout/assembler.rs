use sqlx::{PgConnection, PgPool};

use crate::db::helpers::require_record;
use crate::db::{exercises, templates, workouts};
use crate::error::WorkoutError;
use crate::models::workout::{ExerciseView, WorkoutView};

/// Build the view of one workout: instance, template metadata and exercise sets.
///
/// Runs on a plain connection so that mutations can assemble inside their transaction.
#[tracing::instrument(name = "Assemble workout", skip(conn))]
pub async fn assemble_workout(
    conn: &mut PgConnection,
    workout_id: i32,
) -> Result<WorkoutView, WorkoutError> {
    let workout = require_record(
        workouts::find_workout(&mut *conn, workout_id).await,
        "Workout not found",
    )?;
    let template = require_record(
        templates::find_template(&mut *conn, workout.template_id).await,
        "Workout template not found",
    )?;
    let exercises = exercises::list_for_workout(&mut *conn, workout_id).await?;

    Ok(WorkoutView {
        id: workout.id,
        template_id: template.id,
        template_name: template.name,
        description: workout.description,
        exercises: exercises.into_iter().map(ExerciseView::from).collect(),
    })
}

pub async fn load_workout(pool: &PgPool, workout_id: i32) -> Result<WorkoutView, WorkoutError> {
    let mut conn = pool.acquire().await?;
    assemble_workout(&mut *conn, workout_id).await
}

/// Assemble several workouts, keeping the order of `workout_ids`.
///
/// Ids that no longer resolve to a workout are skipped.
pub async fn load_workouts(
    pool: &PgPool,
    workout_ids: &[i32],
) -> Result<Vec<WorkoutView>, WorkoutError> {
    let mut conn = pool.acquire().await?;
    let mut views = Vec::with_capacity(workout_ids.len());
    for &workout_id in workout_ids {
        match assemble_workout(&mut *conn, workout_id).await {
            Ok(view) => views.push(view),
            Err(WorkoutError::NotFound(_)) => {
                tracing::warn!("Workout {} disappeared before it could be assembled", workout_id);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(views)
}
