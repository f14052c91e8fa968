use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;

use trivia_db::repositories::categories;

use crate::{ApiState, error::ApiError};

use super::model::category_map;

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/categories", get(list_categories))
}

/// All categories as an id-to-name map.
async fn list_categories(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let categories = categories::get_all(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}
