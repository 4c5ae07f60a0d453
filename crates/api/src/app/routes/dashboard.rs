use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::dto::DashboardResponse;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AccountContext;

pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let dashboard_data = services.dashboard(ctx.account_id())?;

    Ok(Json(DashboardResponse {
        success: true,
        dashboard_data,
    }))
}
