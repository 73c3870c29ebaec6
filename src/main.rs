//! Pokemon review API server

use anyhow::Result;
use tokio::net::TcpListener;

use pokereview::api::{AppState, build_router};
use pokereview::config::Config;
use pokereview::seed::seed_database;
use pokereview::store::Database;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokereview=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    let db = Database::new();
    if config.seed {
        seed_database(&db)?;
    }

    let app = build_router(AppState::new(db));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
