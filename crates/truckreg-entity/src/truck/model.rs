//! Truck entity model.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

use truckreg_core::{Entity, EntityId};

use super::model_name::TruckModel;

/// A registered truck, as stored in the `trucks` table.
///
/// The id is assigned by the store. `Truck::new` builds a transient truck
/// (id `0`); only `Truck::with_id` and the store can produce one that
/// carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    id: EntityId,
    /// Model line.
    #[sqlx(try_from = "String")]
    pub model: TruckModel,
    /// Calendar year the truck was built.
    pub production_year: i16,
    /// Model year the truck is sold as.
    pub model_year: i16,
}

impl Truck {
    /// Build a transient truck. The model year defaults to the production
    /// year when omitted.
    pub fn new(model: TruckModel, production_year: i16, model_year: Option<i16>) -> Self {
        Self {
            id: 0,
            model,
            production_year,
            model_year: model_year.unwrap_or(production_year),
        }
    }
}

impl Entity for Truck {
    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck {}: {} {}/{}",
            self.id, self.model, self.production_year, self.model_year
        )
    }
}
