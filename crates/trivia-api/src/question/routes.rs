use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::Deserialize;
use serde_json::json;

use trivia_db::repositories::{categories, questions};

use crate::{
    ApiState, category::model::category_map, error::ApiError, pagination::page_window,
};

use super::model::{NewQuestion, SearchRequest};

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions_search", post(search_questions))
        .route("/categories/{id}/questions", get(questions_by_category))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
}

impl ListParams {
    /// Lenient query coercion: anything non-numeric falls back to page 1.
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1)
    }
}

/// One 10-question page of the full bank, plus the category map for the
/// sidebar. An empty page is 404.
async fn list_questions(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let all = questions::get_all(&state.pool).await?;

    let page = page_window(&all, params.page());
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = categories::get_all(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": all.len(),
        "current_category": null,
        "categories": category_map(categories),
    })))
}

/// Remove a question for good. No soft delete.
async fn delete_question(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A non-integer id behaves like an unknown one.
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let deleted = questions::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({ "success": true })))
}

async fn create_question(
    State(state): State<ApiState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new_question) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected question payload");
        ApiError::Unprocessable
    })?;

    questions::create(
        &state.pool,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}

/// Case-insensitive substring search over the question texts. No matches is
/// an empty 200, not an error.
async fn search_questions(
    State(state): State<ApiState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected search payload");
        ApiError::Unprocessable
    })?;

    let matches = questions::search(&state.pool, &request.search_term).await?;

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": matches.len(),
    })))
}

/// All questions of one category. Only an unknown category id is 404; a known
/// category with no questions returns an empty list.
async fn questions_by_category(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let category = categories::get_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let in_category = questions::get_by_category(&state.pool, id).await?;

    Ok(Json(json!({
        "success": true,
        "questions": in_category,
        "total_questions": in_category.len(),
        "current_category": category.name,
    })))
}
