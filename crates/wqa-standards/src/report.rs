//! Report model for standards evaluation
//!
//! Presentation-agnostic results: per-standard classifications, grouped per
//! measurement, grouped per batch. Renderers only ever read these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one measurement against one standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Within every enforceable bound
    Pass,
    /// A bound was crossed
    Fail,
    /// The standard has no enforceable bound
    Info,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Info => "INFO",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the limit was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    Above,
    #[serde(rename = "<")]
    Below,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Above => ">",
            Comparator::Below => "<",
        }
    }
}

/// Details of a crossed bound, present only on FAIL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub comparator: Comparator,
    /// The bound that was crossed
    pub bound: f64,
    /// Human-readable comparison, e.g. "> 8.5"
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// Result of classifying one measurement against one standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub authority: String,
    pub status: Status,
    /// Formatted bound, e.g. "6.5-8.5" or "Max 50"
    pub limit_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl EvaluationResult {
    pub fn is_fail(&self) -> bool {
        self.status == Status::Fail
    }

    pub fn violation_text(&self) -> Option<&str> {
        self.violation.as_ref().map(|v| v.text.as_str())
    }

    pub fn consequence(&self) -> Option<&str> {
        self.violation.as_ref().and_then(|v| v.consequence.as_deref())
    }

    pub fn solution(&self) -> Option<&str> {
        self.violation.as_ref().and_then(|v| v.solution.as_deref())
    }
}

/// All standard results for a single measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterReport {
    parameter_name: String,
    value: f64,
    unit: String,
    display_value: String,
    results: Vec<EvaluationResult>,
    is_safe: bool,
}

impl ParameterReport {
    /// Build a report; results must be in the parameter's standard order
    pub fn new(
        parameter_name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        results: Vec<EvaluationResult>,
    ) -> Self {
        let unit = unit.into();
        let display_value = if unit.is_empty() {
            value.to_string()
        } else {
            format!("{} {}", value, unit)
        };
        let is_safe = !results.iter().any(EvaluationResult::is_fail);

        Self {
            parameter_name: parameter_name.into(),
            value,
            unit,
            display_value,
            results,
            is_safe,
        }
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Value followed by its unit, e.g. "9 mg/L"
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn results(&self) -> &[EvaluationResult] {
        &self.results
    }

    /// True iff no standard failed
    pub fn is_safe(&self) -> bool {
        self.is_safe
    }

    /// Results with status FAIL
    pub fn failures(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| r.is_fail())
    }
}

/// Aggregate counts over a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub safe: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
}

/// Complete outcome of evaluating one batch of measurements
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchReport {
    entries: Vec<ParameterReport>,
    summary: BatchSummary,
}

impl BatchReport {
    /// Build a report from entries in measurement order
    pub fn new(entries: Vec<ParameterReport>) -> Self {
        let safe = entries.iter().filter(|e| e.is_safe()).count();
        let summary = BatchSummary {
            total: entries.len(),
            safe,
            unsafe_count: entries.len() - safe,
        };
        Self { entries, summary }
    }

    pub fn entries(&self) -> &[ParameterReport] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterReport> {
        self.entries.iter()
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    pub fn total_count(&self) -> usize {
        self.summary.total
    }

    pub fn safe_count(&self) -> usize {
        self.summary.safe
    }

    pub fn unsafe_count(&self) -> usize {
        self.summary.unsafe_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff every entry is safe (vacuously true when empty)
    pub fn all_safe(&self) -> bool {
        self.summary.unsafe_count == 0
    }
}

impl FromIterator<ParameterReport> for BatchReport {
    fn from_iter<I: IntoIterator<Item = ParameterReport>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BatchReport {
    type Item = &'a ParameterReport;
    type IntoIter = std::slice::Iter<'a, ParameterReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
