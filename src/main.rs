use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use symptom_dx::config::{DEFAULT_OUTPUT_PATH, DEFAULT_PATIENT_PATH, DEFAULT_REFERENCE_PATH};
use symptom_dx::{
    BatchSummary, MatcherConfig, PipelineConfig, export_results, read_results, render_results,
    run_batch,
};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Match patient symptom records against an ICD/CPT reference table
#[derive(Debug, Parser)]
#[command(name = "symptom-dx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Diagnose every patient in a file and replace the result file
    Run {
        /// ICD/CPT reference table (CSV)
        #[arg(short = 'r', long, value_name = "FILE", default_value = DEFAULT_REFERENCE_PATH)]
        reference: PathBuf,

        /// Patient records (CSV or JSON vitals export)
        #[arg(short = 'p', long, value_name = "FILE", default_value = DEFAULT_PATIENT_PATH)]
        patients: PathBuf,

        /// Result file, overwritten on each run
        #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Minimum Jaccard score for a condition to be accepted
        #[arg(long = "threshold", default_value_t = 0.2)]
        threshold: f64,

        /// Reference tables with at least this many rows use the symptom index
        #[arg(long = "index-min-entries", default_value_t = 256)]
        index_min_entries: usize,

        /// Show a progress bar
        #[arg(long = "progress", default_value_t = false)]
        progress: bool,
    },

    /// Show the rows and summary of the last written result file
    Results {
        /// Result file to read
        #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Write the result file to stdout exactly as stored
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            reference,
            patients,
            output,
            threshold,
            index_min_entries,
            progress,
        } => {
            let matcher = MatcherConfig::builder()
                .acceptance_threshold(threshold)
                .index_min_entries(index_min_entries)
                .build()?;
            let config = PipelineConfig {
                reference_path: reference,
                patient_path: patients,
                output_path: output,
                matcher,
                show_progress: progress,
            };

            let report = run_batch(&config).context("Diagnosis run failed")?;
            info!(
                "Results saved to {} ({} records, {} processed, {} errors)",
                report.output_path.display(),
                report.outcome.total_records,
                report.outcome.processed_count,
                report.outcome.error_count
            );
            print!("{}", report.summary.render());
        }
        Command::Results { output, raw: true } => {
            let mut stdout = io::stdout().lock();
            export_results(&output, &mut stdout)
                .with_context(|| format!("No results available at {}", output.display()))?;
            stdout.flush()?;
        }
        Command::Results { output, raw: false } => {
            let results = read_results(&output)
                .with_context(|| format!("No results available at {}", output.display()))?;
            if results.is_empty() {
                anyhow::bail!("No results found in {}", output.display());
            }
            print!("{}", render_results(&results));
            print!("{}", BatchSummary::from_results(&results).render());
        }
    }

    Ok(())
}
