use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use trivia_api::{ApiConfig, ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    trivia_api::tracing::init_tracing(&config.env);

    // Open the pool and bring the schema (and seed categories) up to date
    let pool = trivia_db::create_pool(&config.database_url, 10).await?;
    trivia_db::migrate(&pool).await?;

    let state = ApiState::new(pool);

    let cors = trivia_api::middleware::cors::create_cors_layer();
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let app = trivia_api::router::router()
        .with_state(state)
        .layer(cors)
        .layer(trace_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Server running on http://{}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
