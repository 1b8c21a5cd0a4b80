use chrono::{DateTime, Utc};
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::workout::{UserWorkoutLink, WorkoutInstance};

#[tracing::instrument(name = "Fetch workout", skip(executor))]
pub async fn find_workout<'e, E>(
    executor: E,
    workout_id: i32,
) -> Result<Option<WorkoutInstance>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutInstance>(
        "SELECT id, template_id, description FROM workouts WHERE id = $1",
    )
    .bind(workout_id)
    .fetch_optional(executor)
    .await
}

/// Most recent workout ids of `template_id` linked to any of `owners`.
///
/// A workout linked to several owners is returned once, ranked by its latest
/// start date. Equal start dates are ordered by workout id, newest first.
#[tracing::instrument(name = "Fetch recent workout ids", skip(executor))]
pub async fn find_recent_workout_ids<'e, E>(
    executor: E,
    owners: &[Uuid],
    template_id: i32,
    limit: i64,
) -> Result<Vec<i32>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT uw.workout_id
        FROM user_workouts uw
        JOIN workouts w ON w.id = uw.workout_id
        WHERE uw.user_id = ANY($1)
        AND w.template_id = $2
        GROUP BY uw.workout_id
        ORDER BY MAX(uw.start_date) DESC, uw.workout_id DESC
        LIMIT $3
        "#,
    )
    .bind(owners)
    .bind(template_id)
    .bind(limit)
    .fetch_all(executor)
    .await
}

#[tracing::instrument(name = "Insert workout", skip(executor, description))]
pub async fn insert_workout<'e, E>(
    executor: E,
    template_id: i32,
    description: Option<&str>,
) -> Result<WorkoutInstance, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutInstance>(
        r#"
        INSERT INTO workouts (template_id, description)
        VALUES ($1, $2)
        RETURNING id, template_id, description
        "#,
    )
    .bind(template_id)
    .bind(description)
    .fetch_one(executor)
    .await
}

#[tracing::instrument(name = "Link user to workout", skip(executor))]
pub async fn insert_user_workout<'e, E>(
    executor: E,
    user_id: Uuid,
    workout_id: i32,
    start_date: DateTime<Utc>,
) -> Result<UserWorkoutLink, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserWorkoutLink>(
        r#"
        INSERT INTO user_workouts (user_id, workout_id, start_date)
        VALUES ($1, $2, $3)
        RETURNING user_id, workout_id, start_date, end_date
        "#,
    )
    .bind(user_id)
    .bind(workout_id)
    .bind(start_date)
    .fetch_one(executor)
    .await
}

#[tracing::instrument(name = "Update workout description", skip(executor, description))]
pub async fn update_workout_description<'e, E>(
    executor: E,
    workout_id: i32,
    description: Option<&str>,
) -> Result<Option<WorkoutInstance>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutInstance>(
        r#"
        UPDATE workouts SET description = $2
        WHERE id = $1
        RETURNING id, template_id, description
        "#,
    )
    .bind(workout_id)
    .bind(description)
    .fetch_optional(executor)
    .await
}

/// Set the end date of a user's workout link. An existing end date is kept.
#[tracing::instrument(name = "Complete user workout", skip(executor))]
pub async fn complete_user_workout<'e, E>(
    executor: E,
    workout_id: i32,
    user_id: Uuid,
    end_date: DateTime<Utc>,
) -> Result<Option<UserWorkoutLink>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserWorkoutLink>(
        r#"
        UPDATE user_workouts SET end_date = COALESCE(end_date, $3)
        WHERE workout_id = $1 AND user_id = $2
        RETURNING user_id, workout_id, start_date, end_date
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .bind(end_date)
    .fetch_optional(executor)
    .await
}

#[tracing::instrument(name = "Delete user workout links", skip(executor))]
pub async fn delete_user_workouts<'e, E>(executor: E, workout_id: i32) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM user_workouts WHERE workout_id = $1")
        .bind(workout_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Delete workout", skip(executor))]
pub async fn delete_workout<'e, E>(executor: E, workout_id: i32) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
        .bind(workout_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
