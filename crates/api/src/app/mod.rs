//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the operations handlers call
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent `{success: false, message}` error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with fresh in-memory stores (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_router(Arc::new(services::AppServices::in_memory()), config)
}

/// Build the router around existing services.
pub fn build_router(services: Arc<services::AppServices>, config: &ApiConfig) -> Router {
    // Protected routes: require a bearer session.
    let protected = routes::protected_router().route_layer(axum::middleware::from_fn_with_state(
        services.clone(),
        middleware::auth_middleware,
    ));

    let api = routes::public_router().merge(protected);

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config))
                .layer(Extension(services)),
        )
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    // Credentialed CORS cannot use wildcards, so methods/headers mirror the request.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
