//! survey-core - validate survey documents and process answer submissions.
//!
//! ```text
//! survey-core survey.json                 # validate, print the normalized survey
//! survey-core survey.json answers.json    # process a submission, print the report
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;

use survey_core::application::SurveyRuntime;
use survey_core::config::AppConfig;
use survey_core::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "survey-core",
    about = "Validate survey documents and process answer submissions"
)]
struct Cli {
    /// Survey document (JSON object with `title` and `questions`)
    survey: PathBuf,

    /// Answers to process against the survey (JSON array)
    answers: Option<PathBuf>,

    /// Configuration file (TOML or JSON); environment variables still apply
    #[arg(long, env = "SURVEY_CORE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.logging)?;

    let runtime = SurveyRuntime::from_config(&config)?;

    let survey = runtime
        .load_survey(&read_json(&cli.survey)?)
        .with_context(|| format!("Invalid survey document {}", cli.survey.display()))?;
    info!(survey_id = %survey.id(), questions = survey.len(), "Survey loaded");

    let output = match &cli.answers {
        None => runtime.codec().encode_survey(&survey),
        Some(path) => {
            let report = runtime
                .process_submission(&survey, read_json(path)?)
                .with_context(|| format!("Invalid submission {}", path.display()))?;
            info!(
                survey_id = %survey.id(),
                unanswered = report.unanswered,
                complete = report.is_complete(),
                "Submission processed"
            );
            serde_json::to_value(&report)?
        }
    };

    println!("{}", runtime.codec().to_string(&output)?);
    Ok(())
}

fn read_json(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
