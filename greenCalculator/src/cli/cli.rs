use clap::Parser;

use crate::config::calculator_config::{CalculatorConfig, ConfigLoadError};
use crate::config::energy_source::EnergySource;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Parser)]
#[command(author, version, about = "Green energy impact calculator", long_about = None)]
pub struct Args {
    #[arg(short, long, allow_negative_numbers = true, help = "Monthly electricity usage in kWh")]
    usage: Option<f64>,

    #[arg(short, long, help = "Energy source: solar, wind or conventional")]
    source: Option<EnergySource>,

    #[arg(long, help = "Show results for every energy source", default_value_t = false)]
    compare: bool,

    #[arg(short, long, help = "CSV of households (id,monthly_usage,source) to calculate")]
    batch: Option<String>,

    #[arg(short, long, help = "Where to write batch results as CSV (a directory gets a timestamped file)")]
    output: Option<String>,

    #[arg(long, help = "Print results as JSON", default_value_t = false)]
    json: bool,

    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    #[arg(short, long, help = "JSON calculator config")]
    config: Option<String>,

    #[arg(long, help = "Accept negative or non-finite usage without rejecting it", default_value_t = false)]
    lenient: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn usage(&self) -> Option<f64> {
        self.usage
    }

    pub fn source(&self) -> Option<EnergySource> {
        self.source
    }

    pub fn compare(&self) -> bool {
        self.compare
    }

    pub fn batch(&self) -> Option<&str> {
        self.batch.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn lenient(&self) -> bool {
        self.lenient
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    /// Built-in defaults, then the config file, then command line flags.
    pub fn resolve_config(&self) -> Result<CalculatorConfig, ConfigLoadError> {
        let config = match self.config() {
            Some(path) => {
                let _timing = logging::start_timing("load_config",
                    OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });
                CalculatorConfig::from_json_file(path)?
            },
            None => CalculatorConfig::default(),
        };
        Ok(config.with_overrides(self.usage, self.source, self.lenient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::calculator_config::ValidationMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_single_calculation() {
        let args = Args::parse_from(["greencalc", "--usage", "750", "--source", "wind"]);
        assert_eq!(args.usage(), Some(750.0));
        assert_eq!(args.source(), Some(EnergySource::Wind));
        assert!(!args.compare());
        assert!(args.batch().is_none());
    }

    #[test]
    fn rejects_unknown_source() {
        assert!(Args::try_parse_from(["greencalc", "--source", "nuclear"]).is_err());
    }

    #[test]
    fn parses_batch_flags() {
        let args = Args::try_parse_from([
            "greencalc", "-b", "homes.csv", "-o", "out.csv", "--parallel", "--lenient",
        ]).unwrap();
        assert_eq!(args.batch(), Some("homes.csv"));
        assert_eq!(args.output(), Some("out.csv"));
        assert!(args.parallel());
        assert!(args.lenient());
    }

    #[test]
    fn defaults_apply_without_config_or_flags() {
        let args = Args::parse_from(["greencalc"]);
        assert_eq!(args.resolve_config().unwrap(), CalculatorConfig::default());
    }

    #[test]
    fn flags_override_config_file_which_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_source": "wind", "default_monthly_usage": 300.0}"#).unwrap();
        let path = path.to_string_lossy().to_string();

        let file_only = Args::parse_from(["greencalc", "--config", path.as_str()]).resolve_config().unwrap();
        assert_eq!(file_only.default_monthly_usage, 300.0);
        assert_eq!(file_only.default_source, EnergySource::Wind);
        assert_eq!(file_only.validation, ValidationMode::Strict);

        let layered = Args::parse_from(["greencalc", "--config", path.as_str(), "--usage", "750", "--lenient"])
            .resolve_config()
            .unwrap();
        assert_eq!(layered.default_monthly_usage, 750.0);
        assert_eq!(layered.default_source, EnergySource::Wind);
        assert_eq!(layered.validation, ValidationMode::Lenient);

        let source_flag = Args::parse_from(["greencalc", "-c", path.as_str(), "-s", "conventional"]).resolve_config().unwrap();
        assert_eq!(source_flag.default_source, EnergySource::Conventional);
        assert_eq!(source_flag.default_monthly_usage, 300.0);
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let args = Args::parse_from(["greencalc", "--config", "no/such/config.json"]);
        assert!(matches!(args.resolve_config(), Err(ConfigLoadError::IoError(_))));
    }
}
