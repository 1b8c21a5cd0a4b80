use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::HistorySettings;
use crate::error::WorkoutError;
use crate::workout::validation::parse_workout_count;
use crate::workout::{load_workout, load_workouts, resolve_many, resolve_one};

#[tracing::instrument(name = "Get recent workouts", skip(pool, settings))]
pub async fn get_recent_workouts(
    pool: web::Data<PgPool>,
    settings: web::Data<HistorySettings>,
    template_id: i32,
    user_id: Uuid,
    number_of_workouts: &str,
) -> Result<HttpResponse, WorkoutError> {
    let count = parse_workout_count(number_of_workouts, settings.max_workouts)?;
    let workout_ids = resolve_many(&pool, &settings, template_id, user_id, count).await?;
    let workouts = load_workouts(&pool, &workout_ids).await?;

    Ok(HttpResponse::Ok().json(workouts))
}

#[tracing::instrument(name = "Get last workout", skip(pool, settings))]
pub async fn get_last_workout(
    pool: web::Data<PgPool>,
    settings: web::Data<HistorySettings>,
    template_id: i32,
    user_id: Uuid,
) -> Result<HttpResponse, WorkoutError> {
    let workout_id = resolve_one(&pool, &settings, template_id, user_id)
        .await?
        .ok_or_else(|| WorkoutError::not_found("No workout found for this template"))?;
    let workout = load_workout(&pool, workout_id).await?;

    Ok(HttpResponse::Ok().json(workout))
}
