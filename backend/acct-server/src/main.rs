use acct_config::Config;
use acct_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;
use tower_sessions_sqlx_store::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting acct-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and schema
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = acct_db::connect(&database_path).await?;

    // Sessions share the account database
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;
    info!("Session store ready");

    let media_dir = config.media_dir()?;
    tokio::fs::create_dir_all(&media_dir).await?;
    info!("Media root: {}", media_dir.display());

    // Build application state and router
    let app_state = AppState::from_config(pool, &config)?;
    let app = build_router(app_state, session_store, &config.session);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
