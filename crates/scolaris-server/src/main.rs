//! SCOLARIS Server — application entry point.

use scolaris_server::config::ServerConfig;
use scolaris_server::routes;
use scolaris_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("scolaris=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = ServerConfig::from_env();

    let manager = scolaris_db::DbManager::connect(&config.db)
        .await
        .expect("Failed to connect to SurrealDB");
    scolaris_db::run_migrations(manager.client())
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(manager.client().clone());
    let app = routes::router(state);

    tracing::info!(addr = %config.listen_addr, "Starting SCOLARIS server");
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
