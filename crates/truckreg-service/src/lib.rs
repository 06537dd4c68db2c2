//! # truckreg-service
//!
//! Business logic layer for the truck registry. Services sit between the
//! HTTP handlers and the generic repository: they check that records
//! exist, call the store, log every step, and translate store failures
//! into caller-facing error kinds.
//!
//! Services follow constructor injection: the repository is provided at
//! construction time as an `Arc` handle.

pub mod truck;

pub use truck::{TruckInput, TruckService, TruckView};
