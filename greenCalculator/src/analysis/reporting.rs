use crate::config::energy_source::EnergySource;
use crate::core::batch::BatchSummary;
use crate::models::calculation_result::CalculationResult;

pub fn print_impact_summary(monthly_usage: f64, source: EnergySource, result: &CalculationResult) {
    println!("\nYour Impact");
    println!("----------------------------------------");
    println!("Monthly Usage: {:.2} kWh", monthly_usage);
    println!("Energy Source: {}", source.display_name());
    println!("  Yearly Savings: {}", result.formatted_savings());
    println!("  CO2 Reduction: {}", result.formatted_co2_reduction());
    println!("  Equivalent to Trees: {}", result.formatted_trees());
    println!("----------------------------------------");
}

pub fn print_comparison(monthly_usage: f64, rows: &[(EnergySource, CalculationResult)]) {
    println!("\nSource Comparison at {:.2} kWh/month", monthly_usage);
    println!("----------------------------------------");
    println!("{:<18} {:>14} {:>16} {:>8}", "Source", "Savings", "CO2 Reduction", "Trees");
    for (source, result) in rows {
        println!(
            "{:<18} {:>14} {:>16} {:>8}",
            source.display_name(),
            result.formatted_savings(),
            result.formatted_co2_reduction(),
            result.tree_equivalent
        );
    }
    println!("----------------------------------------");
}

pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\nBatch Summary");
    println!("----------------------------------------");
    println!("Households: {}", summary.households);
    if summary.failed > 0 {
        println!("Skipped (invalid input): {}", summary.failed);
    }
    println!("  Total Yearly Savings: ${:.2}", summary.total_yearly_savings);
    println!("  Total CO2 Reduction: {:.1} kg", summary.total_co2_reduction);
    println!("  Total Equivalent Trees: {}", summary.total_tree_equivalent);
    println!("----------------------------------------");
}
