use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use svcmarket_core::DomainError;

/// Handler error: a domain failure rendered as `{success: false, message}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        domain_error_to_response(self.0)
    }
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::DuplicateEmail => StatusCode::BAD_REQUEST,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::MissingToken => StatusCode::UNAUTHORIZED,
        DomainError::InvalidToken => StatusCode::FORBIDDEN,
        DomainError::AccountNotFound => StatusCode::NOT_FOUND,
        DomainError::ProfileAlreadyExists => StatusCode::BAD_REQUEST,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = status_for(&err);
    match err {
        DomainError::Internal(detail) => {
            tracing::error!(%detail, "request failed");
            json_error(status, "Internal server error")
        }
        other => json_error(status, other.to_string()),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}
