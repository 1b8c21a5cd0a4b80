use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Error type shared by the workout core and the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl WorkoutError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl ResponseError for WorkoutError {
    fn status_code(&self) -> StatusCode {
        match self {
            WorkoutError::Validation(_) => StatusCode::BAD_REQUEST,
            WorkoutError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkoutError::Conflict(_) => StatusCode::CONFLICT,
            WorkoutError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            WorkoutError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": message
        }))
    }
}
