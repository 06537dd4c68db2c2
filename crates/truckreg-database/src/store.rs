//! Store selection: builds the truck repository the configuration asks for.

use std::sync::Arc;

use tracing::info;

use truckreg_core::config::DatabaseConfig;
use truckreg_core::config::database::{PROVIDER_MEMORY, PROVIDER_POSTGRES};
use truckreg_core::error::AppError;
use truckreg_core::result::AppResult;
use truckreg_core::Repository;
use truckreg_entity::truck::Truck;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{MemoryRepository, PgRepository};

/// The truck repository plus the pool behind it, when there is one.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct TruckStore {
    trucks: Arc<dyn Repository<Truck>>,
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for TruckStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruckStore")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl TruckStore {
    /// Open the configured store, applying migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            PROVIDER_POSTGRES => {
                info!("Initializing PostgreSQL truck store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            PROVIDER_MEMORY => {
                info!("Initializing in-memory truck store");
                Ok(Self::memory(MemoryRepository::new()))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Store backed by PostgreSQL.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            trucks: Arc::new(PgRepository::<Truck>::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Store backed by an in-memory repository.
    pub fn memory(repo: MemoryRepository<Truck>) -> Self {
        Self {
            trucks: Arc::new(repo),
            pool: None,
        }
    }

    /// Shared handle to the truck repository.
    pub fn trucks(&self) -> Arc<dyn Repository<Truck>> {
        Arc::clone(&self.trucks)
    }

    /// Check that the backing store answers.
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => self.trucks.exists(0).await.map(|_| ()),
        }
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
