use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use study_sim::utils::logging::{log_operation_complete, log_operation_start};
use study_sim::{SimulationRunner, SimulationSummary, StudyParameters, StudyType};

#[derive(Parser)]
#[command(name = "study-sim")]
#[command(about = "Simulate an epidemiological study and compare its estimates with the truth")]
struct Cli {
    /// JSON file with study parameters (defaults are used when omitted)
    #[arg(value_name = "PARAMS")]
    params: Option<PathBuf>,

    /// Override the study design
    #[arg(long, value_parser = parse_study_type)]
    design: Option<StudyType>,

    /// Override the number of Monte Carlo runs
    #[arg(short, long)]
    runs: Option<usize>,

    /// Write the full simulation result as JSON to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Show a progress bar over Monte Carlo runs
    #[arg(long)]
    progress: bool,
}

fn parse_study_type(value: &str) -> Result<StudyType, String> {
    match value.to_ascii_lowercase().as_str() {
        "cohort" => Ok(StudyType::Cohort),
        "case-control" | "casecontrol" => Ok(StudyType::CaseControl),
        "rct" => Ok(StudyType::Rct),
        other => Err(format!(
            "unknown design `{other}`; expected cohort, case-control or rct"
        )),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut params = match &cli.params {
        Some(path) => {
            log_operation_start("Loading study parameters from", path);
            StudyParameters::from_json_file(path)?
        }
        None => StudyParameters::default(),
    };
    if let Some(design) = cli.design {
        params.study_type = design;
    }
    if let Some(runs) = cli.runs {
        params.monte_carlo_runs = runs;
    }

    let result = SimulationRunner::new(params)
        .show_progress(cli.progress)
        .run()?;

    info!("\n{}", SimulationSummary::new(&result));

    if let Some(path) = &cli.json {
        let start = Instant::now();
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize simulation result")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log_operation_complete("wrote simulation result to", path, Some(start.elapsed()));
    }

    Ok(())
}
