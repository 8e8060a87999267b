mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod models;
mod routes;
mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use config::Config;
use db::DBClient;
use dotenv::dotenv;
use routes::create_router;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_client: DBClient,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::init();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let db_client = DBClient::from_config(&config);

    if let Err(err) = db_client.bootstrap(config.admin_seed.as_ref()).await {
        tracing::error!(
            "🔥 Failed to prepare data directory {}: {}",
            config.data_dir.display(),
            err
        );
        std::process::exit(1);
    }

    let app_state = AppState { db_client };

    let app = create_router(Arc::new(app_state));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("🔥 Failed to bind port {}: {}", config.port, err);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Server is running on http://localhost:{}", config.port);
    tracing::info!("📁 Properties: {}", config.properties_file.display());
    tracing::info!("📁 Admin: {}", config.admin_file.display());

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
    tracing::info!("Shutting down");
}
