//! # truckreg-core
//!
//! Core crate for the truck registry. Contains the generic entity and
//! repository traits, configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other registry crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind, FieldViolation};
pub use result::AppResult;
pub use traits::entity::EntityId;
pub use traits::{Entity, Repository};
