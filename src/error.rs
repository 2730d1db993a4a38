use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::database::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error(transparent)]
    Store(#[from] StoreError),

    // A name that does not even decode cannot match any activity.
    #[error("Activity not found")]
    ActivityPath(#[from] PathRejection),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound) | AppError::ActivityPath(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_client_errors() {
        assert_eq!(AppError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(StoreError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(StoreError::Full).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(StoreError::Full).to_string(),
            "Activity is at maximum capacity"
        );
    }
}
