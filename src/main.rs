// reset; cargo run -- --input-dir reference-data/uk-gov-conversion-factors
// reset; cargo run -- --input-dir data --output src/data/conversion_factors.json

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use factors_importer::{
    ERRORS_LOG_FILE, model::ConversionFactorDatabase, parser::workbook::build_database,
};

#[derive(Parser)]
#[command(name = "factors-importer")]
#[command(about = "Extracts GHG conversion factors from yearly government workbooks")]
#[command(version)]
struct Args {
    /// Directory containing the yearly conversion factor workbooks
    #[arg(short, long, default_value = "data")]
    input_dir: PathBuf,

    /// Path for the full database document
    #[arg(short, long, default_value = "conversion_factors.json")]
    output: PathBuf,

    /// Path for the summary document
    #[arg(long, default_value = "conversion_factors_summary.json")]
    summary: PathBuf,

    /// Optional CSV export of the flat factor list
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    let arguments = Args::parse();

    let database = build_database(&arguments.input_dir)?;

    database.save_to_json(&arguments.output)?;
    database.summary().save_to_json(&arguments.summary)?;

    if let Some(csv_path) = &arguments.csv {
        database.export_to_csv(csv_path)?;
        println!("✅ CSV export written to {}", csv_path.display());
    }

    print_run_summary(&database);
    println!("✅ Database written to {}", arguments.output.display());
    println!("✅ Summary written to {}", arguments.summary.display());

    if database.total_factors == 0 {
        eprintln!(
            "⚠️ No factors were extracted. Check {} for skipped files.",
            ERRORS_LOG_FILE
        );
    }

    Ok(())
}

fn print_run_summary(database: &ConversionFactorDatabase) {
    println!();
    println!("Conversion Factors - Batch Summary");
    println!("==================================");
    println!("Total factors: {}", database.total_factors);
    println!("Workbooks processed: {}", database.total_documents);

    println!();
    println!("Factors by year:");
    for (year, factors) in &database.factors_by_year {
        println!("  - {}: {} factors", year, factors.len());
    }

    println!();
    println!("Factors by category:");
    for (category, factors) in &database.factors_by_category {
        println!("  - {}: {} factors", category, factors.len());
    }
    println!();
}
