//! Seed and lookup helpers that talk to the store directly, bypassing the
//! HTTP layer, so tests can verify what a handler actually persisted.

use sqlx::SqlitePool;
use trivia_db::models::Question;
use trivia_db::repositories::questions;

/// Insert one question and return its id.
pub async fn seed_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> anyhow::Result<i64> {
    Ok(questions::create(pool, question, answer, category, difficulty).await?)
}

/// Insert `count` numbered questions in the given category, returning their ids.
pub async fn seed_questions(
    pool: &SqlitePool,
    count: usize,
    category: i64,
) -> anyhow::Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let id = seed_question(
            pool,
            &format!("Question {n}?"),
            &format!("Answer {n}"),
            category,
            1,
        )
        .await?;
        ids.push(id);
    }
    Ok(ids)
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<Question>> {
    Ok(questions::get_by_id(pool, id).await?)
}

pub async fn count_questions(pool: &SqlitePool) -> anyhow::Result<usize> {
    Ok(questions::get_all(pool).await?.len())
}
