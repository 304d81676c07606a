//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for computing CGPA from letter grades, SGPA from raw
//! marks, and listing the grade scale.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gpa_calc::GpaError;
use gpa_calc::aggregator::{
    GradedSubject, MarkedSubject, PriorAcademicState, cgpa_report, sgpa_report,
};
use gpa_calc::config::Settings;
use gpa_calc::output::{self, Format};
use gpa_calc::parser::{load_graded_csv, load_marked_csv, parse_graded_pair, parse_marked_pair};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calc")]
#[command(about = "Compute CGPA and SGPA from grades, marks and credits", long_about = None)]
struct Cli {
    /// JSON settings file (defaults to $GPA_CALC_CONFIG, then built-in limits)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute semester and cumulative GPA from letter grades
    Cgpa {
        /// Subject as GRADE:CREDIT, e.g. "A+:4" (repeatable)
        #[arg(
            short,
            long = "subject",
            value_name = "GRADE:CREDIT",
            value_parser = parse_graded_pair
        )]
        subjects: Vec<GradedSubject>,

        /// CSV file with a `grade,credits` header instead of --subject
        #[arg(short, long, conflicts_with = "subjects")]
        file: Option<PathBuf>,

        /// CGPA up to the previous semester
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        prior_cgpa: f64,

        /// Total credits taken up to the previous semester
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        prior_credits: f64,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Compute SGPA directly from marks
    Sgpa {
        /// Subject as MARKS:CREDIT, e.g. "80:4" (repeatable)
        #[arg(
            short,
            long = "subject",
            value_name = "MARKS:CREDIT",
            value_parser = parse_marked_pair
        )]
        subjects: Vec<MarkedSubject>,

        /// CSV file with a `marks,credits` header instead of --subject
        #[arg(short, long, conflicts_with = "subjects")]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the grade scale
    Grades,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Cgpa {
            subjects,
            file,
            prior_cgpa,
            prior_credits,
            format,
        } => {
            let subjects = match file {
                Some(path) => load_graded_csv(&path)?,
                None => subjects,
            };
            let prior = (prior_cgpa != 0.0 || prior_credits != 0.0).then_some(
                PriorAcademicState {
                    cgpa: prior_cgpa,
                    credits: prior_credits,
                },
            );
            run_cgpa(&settings, &subjects, prior, format)?;
        }
        Commands::Sgpa {
            subjects,
            file,
            format,
        } => {
            let subjects = match file {
                Some(path) => load_marked_csv(&path)?,
                None => subjects,
            };
            run_sgpa(&settings, &subjects, format)?;
        }
        Commands::Grades => {
            print!("{}", output::render_grade_scale());
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// Returns the guard that flushes the file writer on drop.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

#[tracing::instrument(skip(settings, subjects), fields(subjects = subjects.len()))]
fn run_cgpa(
    settings: &Settings,
    subjects: &[GradedSubject],
    prior: Option<PriorAcademicState>,
    format: Format,
) -> Result<()> {
    let report = cgpa_report(subjects, prior, &settings.limits)
        .inspect_err(|e| log_declined("cgpa", e))
        .context("cannot compute CGPA")?;
    output::print_pretty(&report);

    match format {
        Format::Text => print!("{}", output::render_cgpa(&report, settings.decimals)),
        Format::Json => println!("{}", output::to_json("cgpa", &report, settings.decimals)?),
    }

    info!(
        semester = report.semester.value,
        cumulative = report.cumulative.value,
        "CGPA computed"
    );
    Ok(())
}

#[tracing::instrument(skip(settings, subjects), fields(subjects = subjects.len()))]
fn run_sgpa(settings: &Settings, subjects: &[MarkedSubject], format: Format) -> Result<()> {
    let report = sgpa_report(subjects, &settings.limits)
        .inspect_err(|e| log_declined("sgpa", e))
        .context("cannot compute SGPA")?;
    output::print_pretty(&report);

    match format {
        Format::Text => print!("{}", output::render_sgpa(&report, settings.decimals)),
        Format::Json => println!("{}", output::to_json("sgpa", &report, settings.decimals)?),
    }

    info!(sgpa = report.sgpa.value, "SGPA computed");
    Ok(())
}

/// Input errors log at WARN, arithmetic failures at ERROR.
fn log_declined(mode: &str, err: &GpaError) {
    if err.is_input_error() {
        warn!(mode, error = %err, "Calculation declined");
    } else {
        error!(mode, error = %err, "Calculation failed");
    }
}
