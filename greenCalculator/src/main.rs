use anyhow::{Context, Result};
use clap::Parser;

use greencalc::analysis::reporting;
use greencalc::cli::cli::Args;
use greencalc::core::batch::{run_batch, BatchSummary};
use greencalc::core::calculator::ImpactCalculator;
use greencalc::data::households_loader;
use greencalc::utils::csv_export;
use greencalc::utils::logging::{self, FileIOType, OperationCategory};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    let config = args.resolve_config()
        .with_context(|| format!("Failed to load config from {}", args.config().unwrap_or_default()))?;
    let calculator = ImpactCalculator::new(config);

    match args.batch() {
        Some(batch_path) => run_batch_mode(&args, &calculator, batch_path)?,
        None => run_single(&args, &calculator)?,
    }

    logging::print_timing_report();
    Ok(())
}

fn run_single(args: &Args, calculator: &ImpactCalculator) -> Result<()> {
    let usage = calculator.config().default_monthly_usage;
    let source = calculator.config().default_source;

    if args.compare() {
        let rows = calculator.compare_sources(usage)?;
        if args.json() {
            println!("{}", csv_export::comparison_to_json(usage, &rows)?);
        } else {
            reporting::print_comparison(usage, &rows);
        }
        return Ok(());
    }

    let result = calculator.calculate(usage, source)?;
    if args.json() {
        println!("{}", csv_export::result_to_json(usage, source, &result)?);
    } else {
        reporting::print_impact_summary(usage, source, &result);
    }
    Ok(())
}

fn run_batch_mode(args: &Args, calculator: &ImpactCalculator, batch_path: &str) -> Result<()> {
    let households = {
        let _timing = logging::start_timing("load_households",
            OperationCategory::FileIO { subcategory: FileIOType::DataLoad });
        households_loader::load_households(batch_path)
            .with_context(|| format!("Failed to load households from {}", batch_path))?
    };

    let outcomes = run_batch(calculator, &households, args.parallel());
    let summary = BatchSummary::from_outcomes(&outcomes);

    if let Some(output) = args.output() {
        let path = csv_export::resolve_export_path(output);
        csv_export::export_batch_csv(&outcomes, &path)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }

    if args.json() {
        println!("{}", csv_export::batch_to_json(&outcomes, &summary)?);
    } else {
        reporting::print_batch_summary(&summary);
    }
    Ok(())
}
