use axum::{routing::get, Router};

pub mod blogs;
pub mod system;

/// Router for the public endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::hello))
        .route("/health", get(system::health))
        .merge(blogs::router())
}
