//! Truck model line enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use truckreg_core::AppError;

/// The model lines the registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckModel {
    /// FH series.
    #[serde(rename = "FH")]
    Fh,
    /// FM series.
    #[serde(rename = "FM")]
    Fm,
}

impl TruckModel {
    /// Every accepted model line, in display order.
    pub const ALL: [TruckModel; 2] = [Self::Fh, Self::Fm];

    /// Return the model as it is stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fh => "FH",
            Self::Fm => "FM",
        }
    }
}

impl fmt::Display for TruckModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TruckModel {
    type Err = AppError;

    /// Parsing is exact: `"fh"` is not a valid model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FH" => Ok(Self::Fh),
            "FM" => Ok(Self::Fm),
            _ => Err(AppError::validation(format!(
                "Invalid truck model: '{s}'. Expected one of: FH, FM"
            ))),
        }
    }
}

impl TryFrom<String> for TruckModel {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
