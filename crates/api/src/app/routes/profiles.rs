use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::dto::{ApiJson, CompleteProfileRequest, CompleteProfileResponse, ProfileResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AccountContext;

pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let view = services.profile(ctx.account_id())?;

    Ok(Json(ProfileResponse {
        success: true,
        user: view.account,
        profile: view.profile,
    }))
}

pub async fn complete_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
    ApiJson(body): ApiJson<CompleteProfileRequest>,
) -> Result<Json<CompleteProfileResponse>, ApiError> {
    let done = services.complete_profile(ctx.account_id(), body)?;

    Ok(Json(CompleteProfileResponse {
        success: true,
        message: "Profile completed successfully",
        token: ctx.token().clone(),
        user: done.account,
        profile: done.profile,
    }))
}
