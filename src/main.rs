//! Server binary: reads config, prepares the schema, optionally seeds demo rows, serves the API.

use campus_events::{build_app, connect, ensure_tables, seed_demo_data, AppConfig, AppState, Backend};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))?)
        .init();

    let backend = Backend::from_url(&config.database_url)?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool, backend).await?;
    if config.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let state = AppState::new(pool, config);
    let app = build_app(state);

    tracing::info!(?backend, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
