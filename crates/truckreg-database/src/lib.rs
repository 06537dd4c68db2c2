//! # truckreg-database
//!
//! PostgreSQL connection management, schema migrations, and the concrete
//! repository implementations behind the registry's generic
//! [`Repository`](truckreg_core::Repository) trait.

pub mod connection;
pub mod migration;
pub mod record;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use record::Record;
pub use repositories::{MemoryRepository, PgRepository};
pub use store::TruckStore;
