//! Truck domain entities.

pub mod model;
pub mod model_name;

pub use model::Truck;
pub use model_name::TruckModel;
