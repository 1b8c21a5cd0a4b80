use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::WorkoutError;
use crate::models::workout::{ExerciseSetValues, NewExerciseSetRequest};
use crate::workout::exercises;

#[tracing::instrument(name = "Add exercise set request", skip(pool, request))]
pub async fn add_exercise_set(
    pool: web::Data<PgPool>,
    workout_id: i32,
    request: web::Json<NewExerciseSetRequest>,
) -> Result<HttpResponse, WorkoutError> {
    let entry = exercises::add_exercise_set(&pool, workout_id, &request).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[tracing::instrument(name = "Update exercise set request", skip(pool, values))]
pub async fn update_exercise_set(
    pool: web::Data<PgPool>,
    workout_id: i32,
    exercise_id: i32,
    values: web::Json<ExerciseSetValues>,
) -> Result<HttpResponse, WorkoutError> {
    let entry = exercises::update_exercise_set(&pool, workout_id, exercise_id, &values).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[tracing::instrument(name = "Delete exercise request", skip(pool))]
pub async fn delete_exercise(
    pool: web::Data<PgPool>,
    workout_id: i32,
    exercise_id: i32,
) -> Result<HttpResponse, WorkoutError> {
    let deleted = exercises::delete_exercise(&pool, workout_id, exercise_id).await?;
    Ok(HttpResponse::Ok().json(deleted))
}

#[tracing::instrument(name = "Delete exercise set request", skip(pool))]
pub async fn delete_exercise_set(
    pool: web::Data<PgPool>,
    workout_id: i32,
    exercise_id: i32,
    exercise_set: i32,
) -> Result<HttpResponse, WorkoutError> {
    let deleted = exercises::delete_exercise_set(&pool, workout_id, exercise_id, exercise_set).await?;
    Ok(HttpResponse::Ok().json(deleted))
}
