use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::WorkoutError;
use crate::workout::load_workout;

#[tracing::instrument(name = "Get workout detail", skip(pool))]
pub async fn get_workout_detail(
    pool: web::Data<PgPool>,
    workout_id: i32,
) -> Result<HttpResponse, WorkoutError> {
    let workout = load_workout(&pool, workout_id).await?;
    Ok(HttpResponse::Ok().json(workout))
}
