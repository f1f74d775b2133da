// Main module declarations for the green energy impact calculator

// Calculation core
pub mod core {
    pub mod calculator;
    pub mod batch;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
    pub mod calculator_config;
    pub mod energy_source;
}

// Model definitions
pub mod models {
    pub mod calculation_result;
}

// Data loaders
pub mod data {
    pub mod households_loader;
}

// Reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::calculator_config::{CalculatorConfig, ValidationMode};
pub use crate::config::energy_source::EnergySource;
pub use crate::core::calculator::{compute, CalculationError, ImpactCalculator};
pub use crate::models::calculation_result::CalculationResult;
