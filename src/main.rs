//! Truck Registry Server
//!
//! Main entry point that wires configuration, logging, the truck store and
//! the HTTP API together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use truckreg_core::config::AppConfig;
use truckreg_core::error::AppError;
use truckreg_database::TruckStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `TRUCKREG__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TRUCKREG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = %config.database.provider,
        "Starting truck registry"
    );

    let store = TruckStore::connect(&config.database).await?;
    tracing::info!("Truck store ready");

    truckreg_api::serve(config, store).await
}
