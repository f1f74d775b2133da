use serde::{Deserialize, Serialize};
use std::fmt;

/// Yearly impact of switching a household's supply, relative to the grid.
///
/// A fresh value is produced by every calculation and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(with = "finite_or_label")]
    pub yearly_savings: f64,   // Currency units per year
    #[serde(with = "finite_or_label")]
    pub co2_reduction: f64,    // kg per year
    pub tree_equivalent: i64,  // Trees absorbing the same CO2
}

/// JSON has no NaN or infinity, so non-finite floats are written as the
/// strings "NaN", "inf" and "-inf" and read back from either form.
pub mod finite_or_label {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FloatRepr {
        Number(f64),
        Label(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match FloatRepr::deserialize(deserializer)? {
            FloatRepr::Number(value) => Ok(value),
            FloatRepr::Label(label) => label.parse::<f64>().map_err(serde::de::Error::custom),
        }
    }
}

impl CalculationResult {
    pub fn formatted_savings(&self) -> String {
        format!("${:.2}", self.yearly_savings)
    }

    pub fn formatted_co2_reduction(&self) -> String {
        format!("{:.1} kg", self.co2_reduction)
    }

    pub fn formatted_trees(&self) -> String {
        format!("{} trees", self.tree_equivalent)
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Yearly Savings: {}, CO2 Reduction: {}, Equivalent to: {}",
            self.formatted_savings(),
            self.formatted_co2_reduction(),
            self.formatted_trees()
        )
    }
}
