use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use super::utils::TestApp;

pub async fn create_user(pool: &PgPool, email: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, username) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(email)
        .bind(format!("user_{}", &user_id.to_string()[..8]))
        .execute(pool)
        .await
        .expect("Failed to insert user");
    user_id
}

pub async fn create_random_user(pool: &PgPool) -> Uuid {
    create_user(pool, &format!("{}@example.com", Uuid::new_v4())).await
}

pub async fn create_demo_user(app: &TestApp) -> Uuid {
    create_user(&app.db_pool, &app.demo_email).await
}

pub async fn create_template(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO workout_templates (name, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(format!("{} template", name))
    .fetch_one(pool)
    .await
    .expect("Failed to insert template")
}

pub async fn create_template_with_id(pool: &PgPool, id: i32, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO workout_templates (id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to insert template")
}

/// Insert a workout and link it to `user_id` with an explicit start date.
pub async fn insert_workout_for(
    pool: &PgPool,
    user_id: Uuid,
    template_id: i32,
    start_date: DateTime<Utc>,
) -> i32 {
    let workout_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO workouts (template_id, description) VALUES ($1, 'seeded') RETURNING id",
    )
    .bind(template_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert workout");
    link_user(pool, user_id, workout_id, start_date).await;
    workout_id
}

pub async fn link_user(pool: &PgPool, user_id: Uuid, workout_id: i32, start_date: DateTime<Utc>) {
    sqlx::query("INSERT INTO user_workouts (user_id, workout_id, start_date) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(workout_id)
        .bind(start_date)
        .execute(pool)
        .await
        .expect("Failed to link user to workout");
}

pub async fn insert_exercise_set(pool: &PgPool, workout_id: i32, exercise_id: i32, exercise_set: i32) {
    sqlx::query(
        "INSERT INTO workout_exercises (workout_id, exercise_id, exercise_set, reps, weight) \
         VALUES ($1, $2, $3, 8, 60.0)",
    )
    .bind(workout_id)
    .bind(exercise_id)
    .bind(exercise_set)
    .execute(pool)
    .await
    .expect("Failed to insert exercise set");
}

pub async fn count_rows(pool: &PgPool, table: &str, workout_id: i32) -> i64 {
    let column = if table == "workouts" { "id" } else { "workout_id" };
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {} WHERE {} = $1", table, column))
        .bind(workout_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

pub async fn create_workout_via_api(
    client: &Client,
    app: &TestApp,
    user_id: Uuid,
    template_id: i32,
    description: &str,
) -> Value {
    let response = client
        .post(&format!("{}/workouts", &app.address))
        .json(&json!({
            "user_id": user_id,
            "template_id": template_id,
            "description": description
        }))
        .send()
        .await
        .expect("Failed to execute create workout request.");

    assert_eq!(response.status().as_u16(), 201, "Workout creation should succeed");
    response.json().await.expect("Failed to parse created workout")
}

pub fn ids_of(workouts: &Value) -> Vec<i64> {
    workouts
        .as_array()
        .expect("Expected an array of workouts")
        .iter()
        .map(|w| w["id"].as_i64().expect("Workout without id"))
        .collect()
}
