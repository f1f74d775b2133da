use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::config::energy_source::EnergySource;
use crate::models::calculation_result::finite_or_label;

#[derive(Debug)]
pub enum HouseholdLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    InvalidUsage { row: usize, value: String },
    InvalidSource { row: usize, value: String },
}

impl From<std::io::Error> for HouseholdLoadError {
    fn from(err: std::io::Error) -> Self {
        HouseholdLoadError::IoError(err)
    }
}

impl From<csv::Error> for HouseholdLoadError {
    fn from(err: csv::Error) -> Self {
        HouseholdLoadError::CsvError(err)
    }
}

impl std::fmt::Display for HouseholdLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HouseholdLoadError::IoError(e) => write!(f, "IO error: {}", e),
            HouseholdLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            HouseholdLoadError::InvalidUsage { row, value } => write!(f, "Invalid monthly usage on row {}: {}", row, value),
            HouseholdLoadError::InvalidSource { row, value } => write!(f, "Invalid energy source on row {}: {}", row, value),
        }
    }
}

impl std::error::Error for HouseholdLoadError {}

/// One household to run through the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub id: String,
    #[serde(with = "finite_or_label")]
    pub monthly_usage: f64,
    pub source: EnergySource,
}

#[derive(Debug, Deserialize)]
struct HouseholdRow {
    #[serde(default)]
    id: String,
    monthly_usage: String,
    source: String,
}

fn parse_row(row: HouseholdRow, row_number: usize) -> Result<HouseholdRecord, HouseholdLoadError> {
    let monthly_usage = row.monthly_usage.trim().parse::<f64>()
        .map_err(|_| HouseholdLoadError::InvalidUsage { row: row_number, value: row.monthly_usage.clone() })?;

    let source = row.source.parse::<EnergySource>()
        .map_err(|_| HouseholdLoadError::InvalidSource { row: row_number, value: row.source.clone() })?;

    let id = match row.id.trim() {
        "" => format!("household-{}", row_number),
        id => id.to_string(),
    };

    Ok(HouseholdRecord { id, monthly_usage, source })
}

/// Parse household rows from CSV text with an `id,monthly_usage,source` header.
/// Rows are numbered from 1, excluding the header.
pub fn parse_households(contents: &str) -> Result<Vec<HouseholdRecord>, HouseholdLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut households = Vec::new();
    for (index, row) in reader.deserialize::<HouseholdRow>().enumerate() {
        households.push(parse_row(row?, index + 1)?);
    }
    Ok(households)
}

pub fn load_households<P: AsRef<Path>>(path: P) -> Result<Vec<HouseholdRecord>, HouseholdLoadError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let households = parse_households(&contents)?;
    tracing::info!(count = households.len(), "loaded households");
    Ok(households)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_rows() {
        let csv = "id,monthly_usage,source\nflat-1,1000,solar\nflat-2, 250.5 ,Wind\n";
        let households = parse_households(csv).unwrap();
        assert_eq!(households.len(), 2);
        assert_eq!(households[0], HouseholdRecord {
            id: "flat-1".to_string(),
            monthly_usage: 1000.0,
            source: EnergySource::Solar,
        });
        assert_eq!(households[1].monthly_usage, 250.5);
        assert_eq!(households[1].source, EnergySource::Wind);
    }

    #[test]
    fn blank_id_gets_row_number() {
        let csv = "id,monthly_usage,source\n,400,conventional\n";
        let households = parse_households(csv).unwrap();
        assert_eq!(households[0].id, "household-1");
    }

    #[test]
    fn bad_usage_reports_row() {
        let csv = "id,monthly_usage,source\na,100,solar\nb,lots,solar\n";
        match parse_households(csv) {
            Err(HouseholdLoadError::InvalidUsage { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "lots");
            },
            other => panic!("expected InvalidUsage, got {:?}", other),
        }
    }

    #[test]
    fn bad_source_reports_row() {
        let csv = "id,monthly_usage,source\na,100,geothermal\n";
        assert!(matches!(
            parse_households(csv),
            Err(HouseholdLoadError::InvalidSource { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_households("definitely/not/here.csv"),
            Err(HouseholdLoadError::IoError(_))
        ));
    }

    #[test]
    fn nan_usage_survives_json_round_trip() {
        let households = parse_households("id,monthly_usage,source\nx,NaN,wind\n").unwrap();
        let json = serde_json::to_string(&households[0]).unwrap();
        assert!(json.contains(r#""monthly_usage":"NaN""#));
        let back: HouseholdRecord = serde_json::from_str(&json).unwrap();
        assert!(back.monthly_usage.is_nan());
    }
}
