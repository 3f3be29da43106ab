//! HTTP API application wiring (Axum router + store injection).
//!
//! - `services.rs`: store selection and bootstrap
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: translation of storage outcomes into responses

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::BlogStoreHandle;

/// Build the full HTTP router around an already bootstrapped store.
pub fn build_app(store: BlogStoreHandle) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_tracing))
            .layer(Extension(store)),
    )
}
