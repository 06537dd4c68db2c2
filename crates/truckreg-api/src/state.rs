//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use truckreg_core::config::AppConfig;
use truckreg_database::TruckStore;
use truckreg_service::TruckService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Truck store selected from configuration
    pub store: TruckStore,
}

impl AppState {
    /// Creates the state from loaded configuration and an open store.
    pub fn new(config: AppConfig, store: TruckStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Builds a truck service for the current request.
    pub fn truck_service(&self) -> TruckService {
        TruckService::new(self.store.trucks())
    }
}
