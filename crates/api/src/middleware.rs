use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AccountContext;

/// Resolve the bearer token to an account and attach an [`AccountContext`].
///
/// No header (or an empty bearer value) is `401`; an unknown token is `403`.
pub async fn auth_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (account_id, token) = services
        .authenticate(extract_bearer(req.headers()))
        .inspect_err(|e| {
            tracing::warn!(reason = e.code(), path = %req.uri().path(), "rejected request");
        })?;

    req.extensions_mut().insert(AccountContext::new(account_id, token));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
