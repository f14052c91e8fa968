use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the HTTP layer.
///
/// Every variant corresponds to one of the status codes in the public
/// contract, and every variant renders the same fixed envelope
/// `{"success": false, "error": <code>, "message": <text>}`. The messages are
/// part of the contract and checked by the stock frontend's tests, down to
/// the emoticon.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing entity, empty page, or unknown path.
    #[error("Not Found :(")]
    NotFound,
    /// Malformed or missing input fields.
    #[error("Unprocessable :(")]
    Unprocessable,
    /// Malformed quiz request.
    #[error("Bad request :(")]
    BadRequest,
    /// Wrong verb on a defined path.
    #[error("Method not allowed :(")]
    MethodNotAllowed,
    /// Store fault. The cause is logged, the client sees only the envelope.
    #[error("Server Error :(")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(ref source) = self {
            tracing::error!(error = %source, "database operation failed");
        }

        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_contract_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unprocessable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_match_the_contract() {
        assert_eq!(ApiError::NotFound.to_string(), "Not Found :(");
        assert_eq!(ApiError::Unprocessable.to_string(), "Unprocessable :(");
        assert_eq!(ApiError::BadRequest.to_string(), "Bad request :(");
        assert_eq!(
            ApiError::MethodNotAllowed.to_string(),
            "Method not allowed :("
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).to_string(),
            "Server Error :("
        );
    }
}
