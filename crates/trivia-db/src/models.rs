use serde::{Deserialize, Serialize};

/// A labeled grouping for questions, seeded once at setup and read-only for
/// the lifetime of the API.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display name ("Science", "Art", ...)
    pub name: String,
}

/// A single trivia item.
///
/// The field names double as the wire format, so a row serializes directly
/// into the shape the frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier
    pub id: i64,
    /// The question text
    pub question: String,
    /// The answer text
    pub answer: String,
    /// Id of the category this question belongs to (not enforced against
    /// `categories.id`)
    pub category: i64,
    /// Difficulty score submitted by the author
    pub difficulty: i64,
}
