use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::config::calculator_config::{CalculatorConfig, ValidationMode};
use crate::config::const_funcs::{calc_co2_per_kwh, calc_rate_per_kwh, calc_tree_equivalent, calc_yearly_usage};
use crate::config::energy_source::EnergySource;
use crate::models::calculation_result::CalculationResult;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    UnknownSource(String),
    NegativeUsage(f64),
    NonFiniteUsage(f64),
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::UnknownSource(s) => write!(f, "Unknown energy source: {}", s),
            CalculationError::NegativeUsage(v) => write!(f, "Monthly usage cannot be negative: {} kWh", v),
            CalculationError::NonFiniteUsage(v) => write!(f, "Monthly usage must be a finite number: {}", v),
        }
    }
}

impl std::error::Error for CalculationError {}

/// Yearly savings, CO2 avoided and tree equivalent for `monthly_usage` kWh
/// supplied by `source`, measured against conventional grid power.
///
/// No validation happens here; negative or non-finite usage propagates
/// through the arithmetic.
pub fn compute(monthly_usage: f64, source: EnergySource) -> CalculationResult {
    let yearly_usage = calc_yearly_usage(monthly_usage);

    let conventional_cost = yearly_usage * calc_rate_per_kwh(EnergySource::Conventional);
    let green_cost = yearly_usage * calc_rate_per_kwh(source);
    let yearly_savings = conventional_cost - green_cost;

    let conventional_yearly_co2 = yearly_usage * calc_co2_per_kwh(EnergySource::Conventional);
    let green_yearly_co2 = yearly_usage * calc_co2_per_kwh(source);
    let co2_reduction = conventional_yearly_co2 - green_yearly_co2;

    CalculationResult {
        yearly_savings,
        co2_reduction,
        tree_equivalent: calc_tree_equivalent(co2_reduction),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImpactCalculator {
    config: CalculatorConfig,
}

impl ImpactCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn validate_usage(&self, monthly_usage: f64) -> Result<(), CalculationError> {
        if self.config.validation == ValidationMode::Lenient {
            return Ok(());
        }
        if !monthly_usage.is_finite() {
            return Err(CalculationError::NonFiniteUsage(monthly_usage));
        }
        if monthly_usage < 0.0 {
            return Err(CalculationError::NegativeUsage(monthly_usage));
        }
        Ok(())
    }

    pub fn calculate(&self, monthly_usage: f64, source: EnergySource) -> Result<CalculationResult, CalculationError> {
        let _timing = logging::start_timing("calculate", OperationCategory::Calculation);

        self.validate_usage(monthly_usage)?;
        let result = compute(monthly_usage, source);

        debug!(
            monthly_usage,
            %source,
            yearly_savings = result.yearly_savings,
            co2_reduction = result.co2_reduction,
            tree_equivalent = result.tree_equivalent,
            "calculated impact"
        );
        Ok(result)
    }

    pub fn calculate_from_str(&self, monthly_usage: f64, source: &str) -> Result<CalculationResult, CalculationError> {
        let source = EnergySource::from_str(source)?;
        self.calculate(monthly_usage, source)
    }

    /// Results for every source at the same usage, in `EnergySource::ALL` order.
    pub fn compare_sources(&self, monthly_usage: f64) -> Result<Vec<(EnergySource, CalculationResult)>, CalculationError> {
        EnergySource::ALL
            .iter()
            .map(|&source| self.calculate(monthly_usage, source).map(|result| (source, result)))
            .collect()
    }
}
