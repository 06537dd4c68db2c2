//! Repository implementations behind the generic `Repository` trait.

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;
