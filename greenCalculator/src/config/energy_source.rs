// Energy Source module - the selectable supply options and their lookups
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::calculator::CalculationError;

/// Where a household's electricity comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergySource {
    #[default]
    Solar,
    Wind,
    Conventional, // Grid baseline every figure is measured against
}

impl EnergySource {
    pub const ALL: [EnergySource; 3] = [
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Conventional,
    ];

    /// Options offered as a green preference.
    pub const GREEN: [EnergySource; 2] = [EnergySource::Solar, EnergySource::Wind];

    /// Get the display name for the energy source
    pub fn display_name(&self) -> &'static str {
        match self {
            EnergySource::Solar => "Solar Energy",
            EnergySource::Wind => "Wind Energy",
            EnergySource::Conventional => "Conventional Grid",
        }
    }

    pub fn is_green(&self) -> bool {
        !matches!(self, EnergySource::Conventional)
    }
}

impl FromStr for EnergySource {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solar" => Ok(EnergySource::Solar),
            "wind" => Ok(EnergySource::Wind),
            "conventional" => Ok(EnergySource::Conventional),
            _ => Err(CalculationError::UnknownSource(s.to_string())),
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergySource::Solar => write!(f, "solar"),
            EnergySource::Wind => write!(f, "wind"),
            EnergySource::Conventional => write!(f, "conventional"),
        }
    }
}
