use actix_web::{delete, get, patch, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::HistorySettings;
use crate::error::WorkoutError;
use crate::handlers::workouts::{exercises, manage_workout, workout_detail, workout_history};
use crate::models::workout::{
    CompleteWorkoutRequest, CreateWorkoutRequest, ExerciseSetValues, NewExerciseSetRequest,
    UpdateWorkoutRequest,
};

#[get("/workouts/{workout_id}")]
pub async fn get_workout(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, WorkoutError> {
    workout_detail::get_workout_detail(pool, path.into_inner()).await
}

// Must be registered before `get_recent_workouts`, which would otherwise capture "last".
#[get("/templates/{template_id}/users/{user_id}/workouts/last")]
pub async fn get_last_workout(
    pool: web::Data<PgPool>,
    settings: web::Data<HistorySettings>,
    path: web::Path<(i32, Uuid)>,
) -> Result<HttpResponse, WorkoutError> {
    let (template_id, user_id) = path.into_inner();
    workout_history::get_last_workout(pool, settings, template_id, user_id).await
}

#[get("/templates/{template_id}/users/{user_id}/workouts/{number_of_workouts}")]
pub async fn get_recent_workouts(
    pool: web::Data<PgPool>,
    settings: web::Data<HistorySettings>,
    path: web::Path<(i32, Uuid, String)>,
) -> Result<HttpResponse, WorkoutError> {
    let (template_id, user_id, number_of_workouts) = path.into_inner();
    workout_history::get_recent_workouts(pool, settings, template_id, user_id, &number_of_workouts)
        .await
}

#[post("/workouts")]
pub async fn create_workout(
    pool: web::Data<PgPool>,
    request: web::Json<CreateWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    manage_workout::create_workout(pool, request).await
}

#[patch("/workouts/{workout_id}")]
pub async fn update_workout(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    request: web::Json<UpdateWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    manage_workout::update_workout(pool, path.into_inner(), request).await
}

#[post("/workouts/{workout_id}/complete")]
pub async fn complete_workout(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    request: web::Json<CompleteWorkoutRequest>,
) -> Result<HttpResponse, WorkoutError> {
    manage_workout::complete_workout(pool, path.into_inner(), request).await
}

#[delete("/workouts/{workout_id}")]
pub async fn delete_workout(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, WorkoutError> {
    manage_workout::delete_workout(pool, path.into_inner()).await
}

#[post("/workouts/{workout_id}/exercises")]
pub async fn add_exercise_set(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    request: web::Json<NewExerciseSetRequest>,
) -> Result<HttpResponse, WorkoutError> {
    exercises::add_exercise_set(pool, path.into_inner(), request).await
}

#[patch("/workouts/{workout_id}/exercises/{exercise_id}")]
pub async fn update_exercise_set(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    values: web::Json<ExerciseSetValues>,
) -> Result<HttpResponse, WorkoutError> {
    let (workout_id, exercise_id) = path.into_inner();
    exercises::update_exercise_set(pool, workout_id, exercise_id, values).await
}

#[delete("/workouts/{workout_id}/exercises/{exercise_id}")]
pub async fn delete_exercise(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, WorkoutError> {
    let (workout_id, exercise_id) = path.into_inner();
    exercises::delete_exercise(pool, workout_id, exercise_id).await
}

#[delete("/workouts/{workout_id}/exercises/{exercise_id}/{exercise_set}")]
pub async fn delete_exercise_set(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32, i32)>,
) -> Result<HttpResponse, WorkoutError> {
    let (workout_id, exercise_id, exercise_set) = path.into_inner();
    exercises::delete_exercise_set(pool, workout_id, exercise_id, exercise_set).await
}
