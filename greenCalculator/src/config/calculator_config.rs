use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::constants::DEFAULT_MONTHLY_USAGE_KWH;
use crate::config::energy_source::EnergySource;

/// How usage figures are checked before calculating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject negative and non-finite usage.
    #[default]
    Strict,
    /// Let any usage value flow through the arithmetic unchanged.
    Lenient,
}

#[derive(Debug)]
pub enum ConfigLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for ConfigLoadError {
    fn from(err: std::io::Error) -> Self {
        ConfigLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigLoadError {
    fn from(err: serde_json::Error) -> Self {
        ConfigLoadError::JsonError(err)
    }
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::IoError(e) => Some(e),
            ConfigLoadError::JsonError(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub default_monthly_usage: f64,   // kWh per month
    pub default_source: EnergySource,
    pub validation: ValidationMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_monthly_usage: DEFAULT_MONTHLY_USAGE_KWH,
            default_source: EnergySource::Solar,
            validation: ValidationMode::Strict,
        }
    }
}

impl CalculatorConfig {
    /// Load a config from JSON. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Apply command line values on top of this config. `None` and
    /// `lenient == false` leave the current value in place.
    pub fn with_overrides(mut self, usage: Option<f64>, source: Option<EnergySource>, lenient: bool) -> Self {
        if let Some(usage) = usage {
            self.default_monthly_usage = usage;
        }
        if let Some(source) = source {
            self.default_source = source;
        }
        if lenient {
            self.validation = ValidationMode::Lenient;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_initial_state() {
        let config = CalculatorConfig::default();
        assert_eq!(config.default_monthly_usage, 1000.0);
        assert_eq!(config.default_source, EnergySource::Solar);
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: CalculatorConfig = serde_json::from_str(r#"{"default_source": "wind"}"#).unwrap();
        assert_eq!(config.default_source, EnergySource::Wind);
        assert_eq!(config.default_monthly_usage, 1000.0);
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let base: CalculatorConfig = serde_json::from_str(r#"{"default_source": "wind", "default_monthly_usage": 300.0}"#).unwrap();

        let unchanged = base.clone().with_overrides(None, None, false);
        assert_eq!(unchanged, base);

        let merged = base.with_overrides(Some(750.0), None, true);
        assert_eq!(merged.default_monthly_usage, 750.0);
        assert_eq!(merged.default_source, EnergySource::Wind);
        assert_eq!(merged.validation, ValidationMode::Lenient);
    }

    #[test]
    fn bad_json_is_a_json_error() {
        let err = serde_json::from_str::<CalculatorConfig>("{").map_err(ConfigLoadError::from).unwrap_err();
        assert!(matches!(err, ConfigLoadError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn lenient_mode_parses() {
        let config: CalculatorConfig = serde_json::from_str(r#"{"validation": "lenient"}"#).unwrap();
        assert_eq!(config.validation, ValidationMode::Lenient);
    }
}
