//! Translation of storage outcomes into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use blogsvc_core::BlogError;
use blogsvc_infra::StoreError;

pub const NOT_FOUND_DESCRIPTION: &str = "Resource not found.";
pub const ACCESS_DENIED_DESCRIPTION: &str = "Access denied.";

/// Map a domain failure signal to its status and description.
pub fn blog_error_to_response(err: BlogError) -> Response {
    match err {
        BlogError::NotFound => described(StatusCode::NOT_FOUND, NOT_FOUND_DESCRIPTION),
        BlogError::NotAuthorized => described(StatusCode::FORBIDDEN, ACCESS_DENIED_DESCRIPTION),
    }
}

/// A response whose only body content is a `description` field.
pub fn described(status: StatusCode, description: &'static str) -> Response {
    (status, axum::Json(json!({ "description": description }))).into_response()
}

/// Default handling for errors this layer does not translate: log, then a bare 500.
pub fn unhandled(err: &StoreError) -> Response {
    tracing::error!(error = %err, "unhandled storage error");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn parts(res: Response) -> (StatusCode, Vec<u8>) {
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_description() {
        let (status, body) = parts(blog_error_to_response(BlogError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, br#"{"description":"Resource not found."}"#);
    }

    #[tokio::test]
    async fn not_authorized_maps_to_403_with_description() {
        let (status, body) = parts(blog_error_to_response(BlogError::NotAuthorized)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, br#"{"description":"Access denied."}"#);
    }

    #[tokio::test]
    async fn unhandled_errors_expose_no_details() {
        let (status, body) = parts(unhandled(&StoreError::backend("disk on fire"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }
}
