use sqlx::SqlitePool;

/// Shared state for all handlers.
///
/// Deliberately just the pool: the category map is rebuilt from the store on
/// each request that needs it instead of being captured at startup, so it
/// cannot go stale if the seed data is ever edited out of band.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: SqlitePool,
}

impl ApiState {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
