use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use blogsvc_core::{BlogError, BlogId};
use blogsvc_infra::StoreError;

use crate::app::errors;
use crate::app::services::BlogStoreHandle;

pub fn router() -> Router {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blogs/:id", get(get_blog))
}

/// All records, in store order. Failures are not translated.
pub async fn list_blogs(Extension(store): Extension<BlogStoreHandle>) -> axum::response::Response {
    match store.list_blogs().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::unhandled(&e),
    }
}

pub async fn get_blog(
    Extension(store): Extension<BlogStoreHandle>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // No record is stored under an empty id.
    let id = match BlogId::new(id) {
        Ok(v) => v,
        Err(_) => return errors::blog_error_to_response(BlogError::NotFound),
    };

    match store.fetch_blog(&id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(StoreError::Blog(e)) => {
            tracing::debug!(blog_id = %id, error = %e, "blog lookup refused");
            errors::blog_error_to_response(e)
        }
        Err(e) => errors::unhandled(&e),
    }
}
