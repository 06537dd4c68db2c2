//! Route handlers.

pub mod error;
pub mod health;
pub mod truck;
