use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the public API.
///
/// Any origin, the methods the frontend uses, and the
/// `Content-Type`/`Authorization` headers.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
