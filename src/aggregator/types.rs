//! Data types used by the aggregator.

use serde::{Deserialize, Serialize};

use crate::aggregator::grade::Grade;

/// One subject in grade mode, as read from the command line or a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedSubject {
    pub grade: Grade,
    pub credits: f64,
}

/// One subject in marks mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkedSubject {
    pub marks: f64,
    pub credits: f64,
}

/// Cumulative GPA and credit total carried over from earlier semesters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorAcademicState {
    pub cgpa: f64,
    pub credits: f64,
}

/// A weighted average together with the totals it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregationResult {
    pub value: f64,
    pub weighted_total: f64,
    pub total_credits: f64,
}

/// Grade-mode outcome: the semester GPA alone and folded with prior history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaReport {
    pub subjects: Vec<GradedSubject>,
    pub prior: Option<PriorAcademicState>,
    pub semester: AggregationResult,
    pub cumulative: AggregationResult,
}

/// One line of the marks-mode calculation details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionRow {
    pub subject: String,
    pub marks: f64,
    pub credits: f64,
    pub weighted: f64,
}

/// Marks-mode outcome with a per-subject breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SgpaReport {
    pub rows: Vec<ContributionRow>,
    pub sgpa: AggregationResult,
}
