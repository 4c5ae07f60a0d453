use axum::{
    routing::{get, post},
    Router,
};

pub mod accounts;
pub mod dashboard;
pub mod profiles;
pub mod system;

/// Routes anyone may call.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/roles", get(system::roles))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
}

/// Routes that require a bearer session (wrapped by the auth middleware).
pub fn protected_router() -> Router {
    Router::new()
        .route("/profile", get(profiles::get_profile))
        .route("/complete-profile", post(profiles::complete_profile))
        .route("/dashboard", get(dashboard::dashboard))
}
