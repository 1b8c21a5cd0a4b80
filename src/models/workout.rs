use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutTemplate {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// One performed session of a template.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutInstance {
    pub id: i32,
    pub template_id: i32,
    pub description: Option<String>,
}

/// Join row between a user and a workout they performed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserWorkoutLink {
    pub user_id: Uuid,
    pub workout_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// One set of one exercise within a workout.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    #[serde(rename = "workoutId")]
    pub workout_id: i32,
    #[serde(rename = "exerciseId")]
    pub exercise_id: i32,
    #[serde(rename = "exerciseSet")]
    pub exercise_set: i32,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub time_in_seconds: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseView {
    #[serde(rename = "exerciseId")]
    pub exercise_id: i32,
    #[serde(rename = "exerciseSet")]
    pub exercise_set: i32,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub time_in_seconds: Option<i32>,
}

impl From<ExerciseLogEntry> for ExerciseView {
    fn from(entry: ExerciseLogEntry) -> Self {
        Self {
            exercise_id: entry.exercise_id,
            exercise_set: entry.exercise_set,
            reps: entry.reps,
            weight: entry.weight,
            time_in_seconds: entry.time_in_seconds,
        }
    }
}

/// Denormalized workout returned by every workout endpoint.
///
/// `description` is the workout's own description. The template contributes
/// only its name; a template description never replaces a missing workout one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutView {
    pub id: i32,
    #[serde(rename = "templateId")]
    pub template_id: i32,
    #[serde(rename = "templateName")]
    pub template_name: String,
    pub description: Option<String>,
    pub exercises: Vec<ExerciseView>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub user_id: Uuid,
    pub template_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteWorkoutRequest {
    pub user_id: Uuid,
}

/// Raw numeric fields of an exercise set as sent by clients, before validation.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExerciseSetValues {
    #[serde(rename = "exerciseSet")]
    pub exercise_set: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub time_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExerciseSetRequest {
    #[serde(rename = "exerciseId")]
    pub exercise_id: i32,
    #[serde(flatten)]
    pub values: ExerciseSetValues,
}
