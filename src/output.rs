//! Output formatting for calculation results.
//!
//! Supports plain-text summaries, the marks-mode details table, and JSON.

use std::fmt::{Debug, Write};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{AggregationResult, CgpaReport, Grade, SgpaReport};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// JSON envelope around a report.
#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    mode: &'a str,
    computed_at: DateTime<Utc>,
    decimals: usize,
    #[serde(flatten)]
    report: &'a T,
}

/// Reports whose averages can be rounded to the display precision.
///
/// Only the averages are rounded; weighted totals and credit sums stay exact.
pub trait Rounded {
    fn rounded(&self, decimals: usize) -> Self;
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

impl Rounded for AggregationResult {
    fn rounded(&self, decimals: usize) -> Self {
        AggregationResult {
            value: round_to(self.value, decimals),
            ..*self
        }
    }
}

impl Rounded for CgpaReport {
    fn rounded(&self, decimals: usize) -> Self {
        CgpaReport {
            semester: self.semester.rounded(decimals),
            cumulative: self.cumulative.rounded(decimals),
            ..self.clone()
        }
    }
}

impl Rounded for SgpaReport {
    fn rounded(&self, decimals: usize) -> Self {
        SgpaReport {
            sgpa: self.sgpa.rounded(decimals),
            ..self.clone()
        }
    }
}

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Serializes a report as pretty-printed JSON tagged with its mode, with
/// averages rounded to `decimals` places to match the text output.
pub fn to_json<T>(mode: &str, report: &T, decimals: usize) -> Result<String>
where
    T: Serialize + Rounded,
{
    let rounded = report.rounded(decimals);
    let envelope = JsonReport {
        mode,
        computed_at: Utc::now(),
        decimals,
        report: &rounded,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Renders the semester and cumulative GPA lines for grade mode.
pub fn render_cgpa(report: &CgpaReport, decimals: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Your semester GPA is {:.*}",
        decimals, report.semester.value
    );
    if let Some(prior) = report.prior {
        let _ = writeln!(
            output,
            "Previous CGPA {:.*} over {:.1} credits",
            decimals, prior.cgpa, prior.credits
        );
    }
    let _ = writeln!(
        output,
        "Your Cumulative GPA is {:.*}",
        decimals, report.cumulative.value
    );

    output
}

/// Renders the marks-mode calculation details followed by the totals and SGPA.
pub fn render_sgpa(report: &SgpaReport, decimals: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Calculation Details");
    let _ = writeln!(
        output,
        "{:<12} {:>8} {:>8} {:>16}",
        "Subject", "Marks", "Credit", "Marks x Credit"
    );
    for row in &report.rows {
        let _ = writeln!(
            output,
            "{:<12} {:>8.1} {:>8.1} {:>16.1}",
            row.subject, row.marks, row.credits, row.weighted
        );
    }
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Total Weighted Marks: {:.1}",
        report.sgpa.weighted_total
    );
    let _ = writeln!(output, "Total Credits: {:.1}", report.sgpa.total_credits);
    let _ = writeln!(output, "Your SGPA is {:.*}", decimals, report.sgpa.value);

    output
}

/// Lists the grade scale, best grade first.
pub fn render_grade_scale() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:<6} {:>6}", "Grade", "Points");
    for grade in Grade::ALL {
        let _ = writeln!(output, "{:<6} {:>6}", grade.symbol(), grade.points());
    }
    output
}
