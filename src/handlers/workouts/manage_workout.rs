use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::WorkoutError;
use crate::models::workout::{CompleteWorkoutRequest, CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::workout::mutations;

#[tracing::instrument(
    name = "Create workout request",
    skip(pool, request),
    fields(user_id = %request.user_id, template_id = %request.template_id)
)]
pub async fn create_workout(
    pool: web::Data<PgPool>,
    request: web::Json<CreateWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    let workout = mutations::create_workout(
        &pool,
        request.user_id,
        request.template_id,
        request.description.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Created().json(workout))
}

#[tracing::instrument(name = "Update workout request", skip(pool, request))]
pub async fn update_workout(
    pool: web::Data<PgPool>,
    workout_id: i32,
    request: web::Json<UpdateWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    let workout =
        mutations::update_workout_description(&pool, workout_id, request.description.as_deref())
            .await?;
    Ok(HttpResponse::Ok().json(workout))
}

#[tracing::instrument(name = "Complete workout request", skip(pool, request))]
pub async fn complete_workout(
    pool: web::Data<PgPool>,
    workout_id: i32,
    request: web::Json<CompleteWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    let workout = mutations::complete_workout(&pool, workout_id, request.user_id).await?;
    Ok(HttpResponse::Ok().json(workout))
}

#[tracing::instrument(name = "Delete workout request", skip(pool))]
pub async fn delete_workout(
    pool: web::Data<PgPool>,
    workout_id: i32,
) -> Result<HttpResponse, WorkoutError> {
    let snapshot = mutations::delete_workout(&pool, workout_id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}
