use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use querystats_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::SourceNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidDate(_)
            | DomainError::InvalidDateRange { .. }
            | DomainError::InvalidGranularity(_)
            | DomainError::InvalidTimezone(_)
            | DomainError::InvalidBoundary(_)
            | DomainError::ConfigError(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            _ => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
