use axum::Router;

use crate::{category, error::ApiError, question, quiz, state::ApiState};

pub fn router() -> Router<ApiState> {
    Router::new()
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
        .fallback(handler_404)
        .method_not_allowed_fallback(handler_405)
}

async fn handler_404() -> ApiError {
    ApiError::NotFound
}

async fn handler_405() -> ApiError {
    ApiError::MethodNotAllowed
}
