use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ApiErrorResponse;
use tracing::error;

use crate::domain::GardenError;

impl GardenError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GardenError::Validation(_) => StatusCode::BAD_REQUEST,
            GardenError::NotFound { .. } => StatusCode::NOT_FOUND,
            GardenError::ActiveLimitReached { .. } => StatusCode::CONFLICT,
            GardenError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GardenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }

        let body = ApiErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
