use axum::http::StatusCode;

pub async fn hello() -> &'static str {
    "Hello"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
