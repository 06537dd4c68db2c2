//! Truck representation returned to callers.

use serde::{Deserialize, Serialize};

use truckreg_core::{Entity, EntityId};
use truckreg_entity::truck::Truck;

/// A stored truck as it appears in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckView {
    /// Store-assigned id.
    pub id: EntityId,
    /// Model line.
    pub model: String,
    /// Year of production.
    pub production_year: i32,
    /// Model year.
    pub model_year: i32,
}

impl From<Truck> for TruckView {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id(),
            model: truck.model.to_string(),
            production_year: i32::from(truck.production_year),
            model_year: i32::from(truck.model_year),
        }
    }
}
