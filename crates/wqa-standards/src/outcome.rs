//! Per-measurement outcomes
//!
//! `evaluate` drops measurements it cannot evaluate. The trace keeps one
//! outcome per submitted measurement so callers can tell the user.

use serde::Serialize;

use crate::report::BatchReport;

/// What happened to one submitted measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Evaluated; index into `BatchReport::entries`
    Evaluated { report_index: usize },
    /// Name not present in the catalog
    UnknownParameter { parameter_name: String },
    /// NaN or infinite value
    InvalidValue { parameter_name: String },
}

impl ItemOutcome {
    pub fn is_evaluated(&self) -> bool {
        matches!(self, ItemOutcome::Evaluated { .. })
    }
}

/// A batch report together with per-measurement outcomes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationTrace {
    pub report: BatchReport,
    /// One entry per submitted measurement, in submission order
    pub outcomes: Vec<ItemOutcome>,
}

impl EvaluationTrace {
    /// Names that were not found in the catalog, in submission order
    pub fn unknown_parameters(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ItemOutcome::UnknownParameter { parameter_name } => Some(parameter_name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of measurements that contributed nothing to the report
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_evaluated()).count()
    }

    /// True when every submitted measurement made it into the report
    pub fn is_complete(&self) -> bool {
        self.skipped_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trace() -> EvaluationTrace {
        EvaluationTrace {
            report: BatchReport::default(),
            outcomes: vec![
                ItemOutcome::UnknownParameter { parameter_name: "Lead".to_string() },
                ItemOutcome::InvalidValue { parameter_name: "pH".to_string() },
                ItemOutcome::UnknownParameter { parameter_name: "Arsenic".to_string() },
            ],
        }
    }

    #[test]
    fn test_unknown_parameters() {
        let trace = trace();
        assert_eq!(trace.unknown_parameters(), vec!["Lead", "Arsenic"]);
        assert_eq!(trace.skipped_count(), 3);
        assert!(!trace.is_complete());
    }

    #[test]
    fn test_outcome_serialization() {
        let value = serde_json::to_value(&trace().outcomes).unwrap();
        assert_eq!(value[0], json!({ "outcome": "unknown_parameter", "parameter_name": "Lead" }));
        assert_eq!(
            serde_json::to_value(ItemOutcome::Evaluated { report_index: 2 }).unwrap(),
            json!({ "outcome": "evaluated", "report_index": 2 })
        );
    }
}
