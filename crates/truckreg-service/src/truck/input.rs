//! Request body accepted when creating or editing a truck.

use serde::{Deserialize, Serialize};
use validator::Validate;

use truckreg_core::error::AppError;
use truckreg_core::result::AppResult;
use truckreg_entity::truck::{Truck, TruckModel};

/// Truck attributes as sent by clients.
///
/// Every field is optional at the wire level so that a missing value is
/// reported as a violation rather than a decoding failure. Any `id` in the
/// body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TruckInput {
    /// Model line, `"FH"` or `"FM"`.
    #[validate(required(message = "The Model field is required."))]
    pub model: Option<String>,
    /// Year of production.
    #[validate(
        required(message = "The ProductionYear field is required."),
        range(
            min = 2000,
            max = 2099,
            message = "The field ProductionYear must be between 2000 and 2099."
        )
    )]
    pub production_year: Option<i32>,
    /// Model year.
    #[validate(
        required(message = "The ModelYear field is required."),
        range(
            min = 2000,
            max = 2099,
            message = "The field ModelYear must be between 2000 and 2099."
        )
    )]
    pub model_year: Option<i32>,
}

impl TruckInput {
    /// Convenience constructor with every field present.
    pub fn new(model: impl Into<String>, production_year: i32, model_year: i32) -> Self {
        Self {
            model: Some(model.into()),
            production_year: Some(production_year),
            model_year: Some(model_year),
        }
    }

    /// Build a transient entity from the input.
    ///
    /// A missing model year falls back to the production year.
    pub fn to_truck(&self) -> AppResult<Truck> {
        let model: TruckModel = self
            .model
            .as_deref()
            .ok_or_else(|| AppError::validation("model is missing"))?
            .parse()?;
        let production_year = self
            .production_year
            .ok_or_else(|| AppError::validation("productionYear is missing"))
            .and_then(|year| to_column(year, "productionYear"))?;
        let model_year = self
            .model_year
            .map(|year| to_column(year, "modelYear"))
            .transpose()?;

        Ok(Truck::new(model, production_year, model_year))
    }
}

fn to_column(year: i32, field: &str) -> AppResult<i16> {
    i16::try_from(year)
        .map_err(|_| AppError::validation(format!("{field} {year} does not fit the column")))
}
