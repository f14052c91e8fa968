use serde::Deserialize;

use crate::deserializers::i64_from_int_or_string;

/// Payload for `POST /questions`.
///
/// `difficulty` and `category` accept a number or a numeric string. Nothing
/// else is validated: difficulty is unbounded and `category` may point at a
/// category that does not exist.
#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "i64_from_int_or_string")]
    pub difficulty: i64,
    #[serde(deserialize_with = "i64_from_int_or_string")]
    pub category: i64,
}

/// Payload for `POST /questions_search`. `searchTerm` must be a string.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
