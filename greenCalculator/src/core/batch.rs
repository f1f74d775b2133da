use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::calculator::{CalculationError, ImpactCalculator};
use crate::data::households_loader::HouseholdRecord;
use crate::models::calculation_result::{finite_or_label, CalculationResult};
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub record: HouseholdRecord,
    pub result: Result<CalculationResult, CalculationError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub households: usize,
    pub failed: usize,
    #[serde(serialize_with = "finite_or_label::serialize")]
    pub total_yearly_savings: f64,
    #[serde(serialize_with = "finite_or_label::serialize")]
    pub total_co2_reduction: f64,
    pub total_tree_equivalent: i64,
}

impl BatchSummary {
    /// Totals over the successful outcomes; failures are only counted.
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut summary = BatchSummary {
            households: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match &outcome.result {
                Ok(result) => {
                    summary.total_yearly_savings += result.yearly_savings;
                    summary.total_co2_reduction += result.co2_reduction;
                    summary.total_tree_equivalent = summary.total_tree_equivalent.saturating_add(result.tree_equivalent);
                },
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

fn evaluate(calculator: &ImpactCalculator, record: &HouseholdRecord) -> BatchOutcome {
    let result = calculator.calculate(record.monthly_usage, record.source);
    if let Err(e) = &result {
        warn!(id = %record.id, error = %e, "household skipped");
    }
    BatchOutcome {
        record: record.clone(),
        result,
    }
}

/// Calculate every record. Outcomes keep the input order either way.
pub fn run_batch(calculator: &ImpactCalculator, records: &[HouseholdRecord], parallel: bool) -> Vec<BatchOutcome> {
    let _timing = logging::start_timing("run_batch", OperationCategory::Batch);

    let outcomes: Vec<BatchOutcome> = if parallel {
        records.par_iter().map(|record| evaluate(calculator, record)).collect()
    } else {
        records.iter().map(|record| evaluate(calculator, record)).collect()
    };

    info!(
        households = outcomes.len(),
        failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
        parallel,
        "batch complete"
    );
    outcomes
}
