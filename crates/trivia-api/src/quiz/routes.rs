use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;

use trivia_db::repositories::questions;

use crate::{ApiState, deserializers::i64_from_int_or_string, error::ApiError};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(next_question))
}

/// Payload for `POST /quizzes`. The client tracks the quiz session itself and
/// resubmits the ids it has already seen on every call.
#[derive(Debug, Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

/// The frontend sends the category as `{"type": ..., "id": "1"}`, id as a
/// string. Extra keys are ignored.
#[derive(Debug, Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "i64_from_int_or_string")]
    id: i64,
}

/// One random unseen question from the category.
///
/// `question` is null once the category is exhausted; the client treats that
/// as the end of the quiz.
async fn next_question(
    State(state): State<ApiState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected quiz payload");
        ApiError::BadRequest
    })?;

    let candidates: Vec<_> = questions::get_by_category(&state.pool, request.quiz_category.id)
        .await?
        .into_iter()
        .filter(|q| !request.previous_questions.contains(&q.id))
        .collect();

    let question = candidates.choose(&mut rand::thread_rng());

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
