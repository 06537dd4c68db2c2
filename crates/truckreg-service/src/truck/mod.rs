//! Truck use cases.

pub mod input;
pub mod service;
pub mod validation;
pub mod view;

pub use input::TruckInput;
pub use service::TruckService;
pub use view::TruckView;
