use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::dto::{ApiJson, AuthResponse, LoginRequest, RegisterRequest};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = services.register(body)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Registration successful",
        token: session.token,
        user: session.account,
        needs_profile_completion: None,
    }))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (session, needs_profile_completion) = services.login(body)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful",
        token: session.token,
        user: session.account,
        needs_profile_completion: Some(needs_profile_completion),
    }))
}
