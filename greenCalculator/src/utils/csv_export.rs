use std::fs::{self, File};
use std::path::{Path, PathBuf};
use chrono::Local;
use csv::Writer;
use serde::Serialize;

use crate::config::energy_source::EnergySource;
use crate::core::batch::{BatchOutcome, BatchSummary};
use crate::models::calculation_result::{finite_or_label, CalculationResult};
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::CsvError(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::IoError(e) => Some(e),
            ExportError::CsvError(e) => Some(e),
        }
    }
}

const CSV_HEADER: [&str; 7] = [
    "id",
    "monthly_usage",
    "source",
    "yearly_savings",
    "co2_reduction",
    "tree_equivalent",
    "error",
];

/// `impact_<timestamp>.csv` inside `dir`.
pub fn default_export_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    dir.as_ref().join(format!("impact_{}.csv", timestamp))
}

/// An existing directory, or a path ending in a separator, gets a
/// timestamped file inside it. Anything else is used as the file path.
pub fn resolve_export_path(output: &str) -> PathBuf {
    let path = Path::new(output);
    if path.is_dir() || output.ends_with('/') || output.ends_with(std::path::MAIN_SEPARATOR) {
        default_export_path(path)
    } else {
        path.to_path_buf()
    }
}

fn outcome_fields(outcome: &BatchOutcome) -> [String; 7] {
    let record = &outcome.record;
    match &outcome.result {
        Ok(result) => [
            record.id.clone(),
            record.monthly_usage.to_string(),
            record.source.to_string(),
            format!("{:.2}", result.yearly_savings),
            format!("{:.1}", result.co2_reduction),
            result.tree_equivalent.to_string(),
            String::new(),
        ],
        Err(e) => [
            record.id.clone(),
            record.monthly_usage.to_string(),
            record.source.to_string(),
            String::new(),
            String::new(),
            String::new(),
            e.to_string(),
        ],
    }
}

pub fn write_batch_csv<W: std::io::Write>(outcomes: &[BatchOutcome], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for outcome in outcomes {
        csv_writer.write_record(outcome_fields(outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_batch_csv<P: AsRef<Path>>(outcomes: &[BatchOutcome], path: P) -> Result<(), ExportError> {
    let _timing = logging::start_timing("export_batch_csv",
        OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_batch_csv(outcomes, File::create(path)?)?;
    tracing::info!(path = %path.display(), rows = outcomes.len(), "exported batch results");
    Ok(())
}

#[derive(Serialize)]
struct ImpactReport<'a> {
    #[serde(serialize_with = "finite_or_label::serialize")]
    monthly_usage: f64,
    source: EnergySource,
    result: &'a CalculationResult,
}

pub fn result_to_json(monthly_usage: f64, source: EnergySource, result: &CalculationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ImpactReport { monthly_usage, source, result })
}

pub fn comparison_to_json(monthly_usage: f64, rows: &[(EnergySource, CalculationResult)]) -> Result<String, serde_json::Error> {
    let reports: Vec<_> = rows
        .iter()
        .map(|(source, result)| ImpactReport { monthly_usage, source: *source, result })
        .collect();
    serde_json::to_string_pretty(&reports)
}

pub fn batch_to_json(outcomes: &[BatchOutcome], summary: &BatchSummary) -> Result<String, serde_json::Error> {
    let rows: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(result) => serde_json::json!({
                "household": outcome.record,
                "result": result,
            }),
            Err(e) => serde_json::json!({
                "household": outcome.record,
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "generated_at": Local::now().to_rfc3339(),
        "summary": summary,
        "households": rows,
    }))
}
