//! Subject input parsing: inline `VALUE:CREDIT` pairs and CSV files.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::aggregator::{Grade, GradedSubject, MarkedSubject};
use crate::error::GpaError;

/// Parses a grade-mode pair such as `A+:4` or `O:3.5`.
pub fn parse_graded_pair(s: &str) -> Result<GradedSubject, GpaError> {
    let (grade, credits) = split_pair(s)?;
    Ok(GradedSubject {
        grade: grade.parse::<Grade>()?,
        credits,
    })
}

/// Parses a marks-mode pair such as `80:4` or `72.5:3`.
pub fn parse_marked_pair(s: &str) -> Result<MarkedSubject, GpaError> {
    let (marks, credits) = split_pair(s)?;
    let marks = marks
        .trim()
        .parse::<f64>()
        .map_err(|_| GpaError::InvalidPair(s.to_string()))?;
    Ok(MarkedSubject { marks, credits })
}

fn split_pair(s: &str) -> Result<(&str, f64), GpaError> {
    let (value, credits) = s
        .split_once(':')
        .ok_or_else(|| GpaError::InvalidPair(s.to_string()))?;
    let credits = credits
        .trim()
        .parse::<f64>()
        .map_err(|_| GpaError::InvalidPair(s.to_string()))?;
    Ok((value, credits))
}

/// Reads grade-mode subjects from a CSV file with a `grade,credits` header.
pub fn load_graded_csv(path: &Path) -> Result<Vec<GradedSubject>> {
    load_rows(path)
}

/// Reads marks-mode subjects from a CSV file with a `marks,credits` header.
pub fn load_marked_csv(path: &Path) -> Result<Vec<MarkedSubject>> {
    load_rows(path)
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: T =
            result.with_context(|| format!("bad row {} in {}", i + 1, path.display()))?;
        rows.push(record);
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded subjects");
    Ok(rows)
}
