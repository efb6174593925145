// ============================================================
// COMMAND LINE INTERFACE
// ============================================================
// Presentation glue: argument parsing, file I/O, summary rendering
// No cleaning logic lives here

mod sample_data;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::use_cases::record_cleaner::RecordCleaner;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::CsvWriter;

pub use sample_data::sample_dataset;

#[derive(Debug, Parser)]
#[command(
    name = "placement-cleaner",
    version,
    about = "Clean tabular placement records and report summary statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Clean a raw placement CSV and write the normalized output
    Clean {
        /// Path to the raw CSV file
        input: PathBuf,

        /// Write the cleaned CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the summary report after cleaning
        #[arg(long)]
        summary: bool,

        /// Render the summary report as JSON
        #[arg(long, requires = "summary")]
        json: bool,
    },

    /// Write the bundled sample placement dataset
    Sample {
        /// Write the sample CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse arguments and dispatch
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            summary,
            json,
        } => clean(&input, output.as_deref(), summary, json),
        Commands::Sample { output } => sample(output.as_deref()),
    }
}

fn clean(input: &Path, output: Option<&Path>, summary: bool, json: bool) -> Result<()> {
    let dataset = RecordCleaner::default_config().clean_csv_file(input)?;
    let writer = CsvWriter::new();

    match output {
        Some(path) => {
            writer.write_file(&dataset.table, path)?;
            info!(
                path = %path.display(),
                rows = dataset.table.len(),
                dropped = dataset.dropped_rows,
                elapsed_ms = dataset.processing_time_ms,
                "Cleaned dataset written"
            );
        }
        None => print!("{}", writer.write_content(&dataset.table)?),
    }

    if summary {
        if json {
            let rendered = serde_json::to_string_pretty(&dataset.summary)
                .map_err(|e| AppError::Internal(format!("Failed to encode summary: {}", e)))?;
            println!("{}", rendered);
        } else {
            println!("{}", dataset.summary.summary());
        }
    }

    Ok(())
}

fn sample(output: Option<&Path>) -> Result<()> {
    let table = sample_dataset();
    let writer = CsvWriter::new();

    match output {
        Some(path) => writer.write_file(&table, path),
        None => {
            print!("{}", writer.write_content(&table)?);
            Ok(())
        }
    }
}
