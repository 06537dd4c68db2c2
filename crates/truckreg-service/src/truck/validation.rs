//! Input rules for truck bodies.
//!
//! The static rules (presence, year bounds) are declared on [`TruckInput`]
//! with `validator`; the model whitelist and the calendar rules depend on
//! the current year and are checked here. Every rule runs, and the
//! violations come back grouped by field in body order.

use chrono::{Datelike, Local};
use validator::{Validate, ValidationError, ValidationErrors};

use truckreg_core::FieldViolation;
use truckreg_entity::truck::TruckModel;

use super::input::TruckInput;

/// Struct field name paired with its name in the JSON body.
const FIELDS: [(&str, &str); 3] = [
    ("model", "model"),
    ("production_year", "productionYear"),
    ("model_year", "modelYear"),
];

impl TruckInput {
    /// Check the input against the local calendar year.
    pub fn violations(&self) -> Vec<FieldViolation> {
        self.validate_at(Local::now().year())
    }

    /// Check the input as if the current year were `current_year`.
    ///
    /// An empty result means the input is valid.
    pub fn validate_at(&self, current_year: i32) -> Vec<FieldViolation> {
        let declared = Validate::validate(self).err().unwrap_or_else(ValidationErrors::new);
        let declared = declared.field_errors();

        let mut violations = Vec::new();
        for (field, json_name) in FIELDS {
            if let Some(errors) = declared.get(field) {
                violations.extend(
                    errors
                        .iter()
                        .map(|e| FieldViolation::new(json_name, message_of(e))),
                );
            }

            let extra = match field {
                "model" => check_model(self.model.as_deref()),
                "production_year" => check_production_year(self.production_year, current_year),
                _ => check_model_year(self.model_year, current_year),
            };
            violations.extend(extra.map(|message| FieldViolation::new(json_name, message)));
        }
        violations
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| error.code.to_string())
}

fn check_model(model: Option<&str>) -> Option<String> {
    let model = model?;
    if TruckModel::ALL.iter().any(|m| m.as_str() == model) {
        return None;
    }
    let accepted = TruckModel::ALL
        .iter()
        .map(TruckModel::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("The field Model must be one of: {accepted}."))
}

fn check_production_year(year: Option<i32>, current_year: i32) -> Option<String> {
    match year {
        Some(year) if year != current_year => Some(format!(
            "The field ProductionYear must be the current year ({current_year})."
        )),
        _ => None,
    }
}

fn check_model_year(year: Option<i32>, current_year: i32) -> Option<String> {
    match year {
        Some(year) if year < current_year || year > current_year + 1 => Some(format!(
            "The field ModelYear must be between {current_year} and {}.",
            current_year + 1
        )),
        _ => None,
    }
}
