//! Evaluation engine
//!
//! Classifies measurements against every standard of their parameter and
//! aggregates the results into a [`BatchReport`].
//!
//! Classification rules for one value against one standard:
//! - no bound at all → INFO
//! - `value > max` or `value < min` → FAIL; when both fire (inverted
//!   range data) the min violation is the one recorded
//! - otherwise → PASS

use wqa_core::{Limit, Measurement, Parameter, ReferenceCatalog, Standard};

use crate::outcome::{EvaluationTrace, ItemOutcome};
use crate::report::{BatchReport, Comparator, EvaluationResult, ParameterReport, Status, Violation};

/// Placeholder printed for a bound missing from a range display
pub const ABSENT_BOUND: &str = "None";

/// Engine evaluating batches against one reference catalog
pub struct EvaluationEngine<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> EvaluationEngine<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate a batch, silently skipping measurements that cannot be evaluated
    pub fn evaluate(&self, batch: &[Measurement]) -> BatchReport {
        self.evaluate_traced(batch).report
    }

    /// Evaluate a batch and record what happened to every measurement
    pub fn evaluate_traced(&self, batch: &[Measurement]) -> EvaluationTrace {
        let mut entries = Vec::with_capacity(batch.len());
        let mut outcomes = Vec::with_capacity(batch.len());

        for measurement in batch {
            let name = &measurement.parameter_name;

            let Some(parameter) = self.catalog.lookup(name) else {
                tracing::debug!(parameter = %name, "unknown parameter, skipped");
                outcomes.push(ItemOutcome::UnknownParameter {
                    parameter_name: name.clone(),
                });
                continue;
            };

            if !measurement.value.is_finite() {
                tracing::debug!(
                    parameter = %name,
                    value = measurement.value,
                    "non-finite value, skipped"
                );
                outcomes.push(ItemOutcome::InvalidValue {
                    parameter_name: name.clone(),
                });
                continue;
            }

            outcomes.push(ItemOutcome::Evaluated {
                report_index: entries.len(),
            });
            entries.push(evaluate_parameter(measurement.value, parameter));
        }

        let report = BatchReport::new(entries);
        tracing::info!(
            submitted = batch.len(),
            total = report.total_count(),
            safe = report.safe_count(),
            unsafe_count = report.unsafe_count(),
            "batch evaluated"
        );

        EvaluationTrace { report, outcomes }
    }
}

/// Evaluate one value against every standard of a parameter, in order
pub fn evaluate_parameter(value: f64, parameter: &Parameter) -> ParameterReport {
    let results = parameter
        .standards
        .iter()
        .map(|standard| classify(value, standard))
        .collect();

    ParameterReport::new(&parameter.name, value, &parameter.unit, results)
}

/// Classify one value against one standard
pub fn classify(value: f64, standard: &Standard) -> EvaluationResult {
    let limit_display = limit_display(&standard.limit);

    if !standard.limit.is_bounded() {
        return EvaluationResult {
            authority: standard.authority.clone(),
            status: Status::Info,
            limit_display,
            violation: None,
        };
    }

    let above = standard
        .limit
        .max()
        .filter(|&max| value > max)
        .map(|max| (Comparator::Above, max));
    let below = standard
        .limit
        .min()
        .filter(|&min| value < min)
        .map(|min| (Comparator::Below, min));

    // min takes precedence when an inverted range trips both checks
    let violation = below.or(above).map(|(comparator, bound)| Violation {
        comparator,
        bound,
        text: format!("{} {}", comparator.symbol(), bound),
        consequence: standard.consequence.clone(),
        solution: standard.solution.clone(),
    });

    EvaluationResult {
        authority: standard.authority.clone(),
        status: if violation.is_some() { Status::Fail } else { Status::Pass },
        limit_display,
        violation,
    }
}

/// Format a limit for display.
///
/// Limits with a lower bound render as a range "min-max" (the missing upper
/// bound printed as [`ABSENT_BOUND`]); everything else renders as "Max max".
pub fn limit_display(limit: &Limit) -> String {
    let max = limit
        .max()
        .map(|m| m.to_string())
        .unwrap_or_else(|| ABSENT_BOUND.to_string());

    match limit.min() {
        Some(min) => format!("{}-{}", min, max),
        None => format!("Max {}", max),
    }
}
