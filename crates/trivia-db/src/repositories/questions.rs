use sqlx::{Executor, Sqlite};

use crate::models::Question;

/// The whole question bank in id order. The bank is small by design, so the
/// listing endpoints paginate in memory instead of pushing LIMIT/OFFSET down.
pub async fn get_all<'e, E>(executor: E) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_category<'e, E>(executor: E, category: i64) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(executor)
    .await
}

/// Case-insensitive substring match against the question text.
pub async fn search<'e, E>(executor: E, term: &str) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE lower(question) LIKE '%' || lower(?) || '%'
            ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(executor)
    .await
}

/// Insert a question and return its id.
pub async fn create<'e, E>(
    executor: E,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a question, returning the number of rows removed (0 or 1).
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM questions
            WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
