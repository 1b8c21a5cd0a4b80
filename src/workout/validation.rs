use crate::error::WorkoutError;
use crate::models::workout::ExerciseSetValues;

/// Exercise set values that passed validation and fit the database columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSetInput {
    pub exercise_set: i32,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub time_in_seconds: Option<i32>,
}

impl TryFrom<&ExerciseSetValues> for ExerciseSetInput {
    type Error = WorkoutError;

    fn try_from(values: &ExerciseSetValues) -> Result<Self, Self::Error> {
        let exercise_set = match values.exercise_set {
            Some(set) if set > 0 => to_column("exerciseSet", set)?,
            Some(_) => {
                return Err(WorkoutError::validation("exerciseSet must be a positive integer"))
            }
            None => return Err(WorkoutError::validation("exerciseSet is required")),
        };

        Ok(Self {
            exercise_set,
            reps: non_negative("reps", values.reps)?,
            weight: non_negative_weight(values.weight)?,
            time_in_seconds: non_negative("time_in_seconds", values.time_in_seconds)?,
        })
    }
}

pub fn validate_exercise_set(values: &ExerciseSetValues) -> Result<ExerciseSetInput, WorkoutError> {
    ExerciseSetInput::try_from(values)
}

fn non_negative(field: &str, value: Option<i64>) -> Result<Option<i32>, WorkoutError> {
    match value {
        Some(v) if v < 0 => Err(WorkoutError::validation(format!(
            "{} must be a non-negative integer",
            field
        ))),
        Some(v) => to_column(field, v).map(Some),
        None => Ok(None),
    }
}

fn non_negative_weight(value: Option<f64>) -> Result<Option<f64>, WorkoutError> {
    match value {
        Some(w) if !w.is_finite() || w < 0.0 => Err(WorkoutError::validation(
            "weight must be a non-negative number",
        )),
        other => Ok(other),
    }
}

fn to_column(field: &str, value: i64) -> Result<i32, WorkoutError> {
    i32::try_from(value)
        .map_err(|_| WorkoutError::validation(format!("{} is too large", field)))
}

/// Parse the `numberOfWorkouts` path segment.
///
/// Anything that is not a positive integer is rejected; values above `max` are clamped.
pub fn parse_workout_count(raw: &str, max: u32) -> Result<i64, WorkoutError> {
    let count: i64 = raw.trim().parse().map_err(|_| {
        WorkoutError::validation("numberOfWorkouts must be a positive integer")
    })?;
    if count < 1 {
        return Err(WorkoutError::validation(
            "numberOfWorkouts must be a positive integer",
        ));
    }
    Ok(count.min(i64::from(max.max(1))))
}
