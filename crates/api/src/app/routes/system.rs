use axum::Json;
use chrono::Utc;

use crate::app::dto::{HealthResponse, RolesResponse};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running",
        timestamp: Utc::now(),
    })
}

pub async fn roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        success: true,
        data: svcmarket_auth::catalogue(),
    })
}
