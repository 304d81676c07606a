//! Credit-weighted grade aggregation.
//!
//! This module maps letter grades to points, computes credit-weighted
//! averages (optionally folding in prior cumulative history), and builds the
//! grade-mode and marks-mode reports shown by the CLI.

pub mod aggregate;
pub mod grade;
pub mod types;

pub use aggregate::{aggregate, cgpa_report, sgpa_report, weighted_average};
pub use grade::Grade;
pub use types::{
    AggregationResult, CgpaReport, ContributionRow, GradedSubject, MarkedSubject,
    PriorAcademicState, SgpaReport,
};
