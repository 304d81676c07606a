use tracing::debug;

use crate::aggregator::types::{
    AggregationResult, CgpaReport, ContributionRow, GradedSubject, MarkedSubject,
    PriorAcademicState, SgpaReport,
};
use crate::config::Limits;
use crate::error::{GpaError, Result};

/// Credit-weighted mean of `values`, optionally folding in a prior
/// `(prior_value, prior_weight)` pair.
///
/// ```text
/// (Σ values[i] * credits[i] + prior_value * prior_weight) / (Σ credits[i] + prior_weight)
/// ```
///
/// Credits are not range-checked here; the mode entry points
/// ([`cgpa_report`], [`sgpa_report`]) do that.
///
/// # Errors
///
/// - [`GpaError::LengthMismatch`] if the slices differ in length
/// - [`GpaError::NonFinite`] if any input or the result is NaN or infinite
/// - [`GpaError::Negative`] if `prior_weight` is below zero
/// - [`GpaError::DivisionByZero`] if the total weight is zero
pub fn weighted_average(
    values: &[f64],
    credits: &[f64],
    prior_value: f64,
    prior_weight: f64,
) -> Result<f64> {
    aggregate(values, credits, prior_value, prior_weight).map(|r| r.value)
}

/// Same as [`weighted_average`] but keeps the numerator and denominator.
pub fn aggregate(
    values: &[f64],
    credits: &[f64],
    prior_value: f64,
    prior_weight: f64,
) -> Result<AggregationResult> {
    if values.len() != credits.len() {
        return Err(GpaError::LengthMismatch {
            values: values.len(),
            credits: credits.len(),
        });
    }

    for &value in values {
        check_finite("value", value)?;
    }
    for &credit in credits {
        check_finite("credit", credit)?;
    }
    check_finite("prior value", prior_value)?;
    check_non_negative("prior weight", prior_weight)?;

    let weighted_total = values
        .iter()
        .zip(credits)
        .map(|(value, credit)| value * credit)
        .sum::<f64>()
        + prior_value * prior_weight;
    let total_credits = credits.iter().sum::<f64>() + prior_weight;

    if total_credits == 0.0 {
        return Err(GpaError::DivisionByZero);
    }

    let value = weighted_total / total_credits;
    check_finite("result", value)?;

    Ok(AggregationResult {
        value,
        weighted_total,
        total_credits,
    })
}

/// Grade mode: semester GPA from the listed subjects, plus the cumulative GPA
/// once `prior` history is folded in. Without history both are the same.
pub fn cgpa_report(
    subjects: &[GradedSubject],
    prior: Option<PriorAcademicState>,
    limits: &Limits,
) -> Result<CgpaReport> {
    check_count(subjects.len(), limits)?;
    for subject in subjects {
        check_credit(subject.credits, limits)?;
    }
    if let Some(prior) = prior {
        check_non_negative("previous CGPA", prior.cgpa)?;
        check_non_negative("previous credit", prior.credits)?;
    }

    let points: Vec<f64> = subjects.iter().map(|s| f64::from(s.grade.points())).collect();
    let credits: Vec<f64> = subjects.iter().map(|s| s.credits).collect();

    let semester = aggregate(&points, &credits, 0.0, 0.0)?;
    let cumulative = match prior {
        Some(p) => aggregate(&points, &credits, p.cgpa, p.credits)?,
        None => semester,
    };

    debug!(
        subjects = subjects.len(),
        semester = semester.value,
        cumulative = cumulative.value,
        "Computed CGPA"
    );

    Ok(CgpaReport {
        subjects: subjects.to_vec(),
        prior,
        semester,
        cumulative,
    })
}

/// Marks mode: SGPA straight from raw marks, with the per-subject breakdown.
pub fn sgpa_report(subjects: &[MarkedSubject], limits: &Limits) -> Result<SgpaReport> {
    check_count(subjects.len(), limits)?;
    for subject in subjects {
        check_range("marks", subject.marks, limits.min_marks, limits.max_marks)?;
        check_credit(subject.credits, limits)?;
    }

    let rows: Vec<ContributionRow> = subjects
        .iter()
        .enumerate()
        .map(|(i, s)| ContributionRow {
            subject: format!("Subject #{}", i + 1),
            marks: s.marks,
            credits: s.credits,
            weighted: s.marks * s.credits,
        })
        .collect();

    let marks: Vec<f64> = subjects.iter().map(|s| s.marks).collect();
    let credits: Vec<f64> = subjects.iter().map(|s| s.credits).collect();
    let sgpa = aggregate(&marks, &credits, 0.0, 0.0)?;

    debug!(subjects = subjects.len(), sgpa = sgpa.value, "Computed SGPA");

    Ok(SgpaReport { rows, sgpa })
}

fn check_count(count: usize, limits: &Limits) -> Result<()> {
    if count == 0 || count > limits.max_subjects {
        return Err(GpaError::SubjectCount {
            count,
            max: limits.max_subjects,
        });
    }
    Ok(())
}

fn check_credit(credit: f64, limits: &Limits) -> Result<()> {
    check_range("credit", credit, limits.min_credit, limits.max_credit)
}

// NaN fails both checks below.
fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(GpaError::InvalidRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GpaError::NonFinite { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(GpaError::Negative { field, value });
    }
    Ok(())
}
