//! Custom Axum extractors.

pub mod body;
pub mod path;

pub use body::TruckBody;
pub use path::TruckId;
