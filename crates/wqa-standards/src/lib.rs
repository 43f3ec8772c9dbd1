//! WQA Standards: evaluation of lab measurements against authority limits
//!
//! # Architecture
//!
//! ```text
//! Measurements → Catalog Lookup → Classify per Standard → ParameterReport → BatchReport
//!                     ↓                    ↓
//!              unknown: skipped      PASS / FAIL / INFO
//! ```
//!
//! # Example
//!
//! ```
//! use wqa_core::{Limit, Measurement, Parameter, ReferenceCatalog, Standard};
//! use wqa_standards::{evaluate, Status};
//!
//! let catalog = ReferenceCatalog::from_parameters(vec![
//!     Parameter::new("pH", "").with_standard(
//!         Standard::new("WHO", Limit::Between { min: 6.5, max: 8.5 })
//!             .with_remedy("Corrosion/irritation", "pH correction"),
//!     ),
//! ]);
//!
//! let report = evaluate(&[Measurement::new("pH", 9.0)], &catalog);
//!
//! assert_eq!(report.unsafe_count(), 1);
//! let result = &report.entries()[0].results()[0];
//! assert_eq!(result.status, Status::Fail);
//! assert_eq!(result.violation_text(), Some("> 8.5"));
//! ```

pub mod audit;
pub mod engine;
pub mod outcome;
pub mod report;

pub use audit::{audit_catalog, CatalogFinding, FindingKind};
pub use engine::{classify, evaluate_parameter, limit_display, EvaluationEngine, ABSENT_BOUND};
pub use outcome::{EvaluationTrace, ItemOutcome};
pub use report::{
    BatchReport, BatchSummary, Comparator, EvaluationResult, ParameterReport, Status, Violation,
};

use wqa_core::{Measurement, ReferenceCatalog};

/// Evaluate a batch of measurements against a catalog
pub fn evaluate(batch: &[Measurement], catalog: &ReferenceCatalog) -> BatchReport {
    EvaluationEngine::new(catalog).evaluate(batch)
}

/// Evaluate a batch and keep per-measurement outcomes
pub fn evaluate_traced(batch: &[Measurement], catalog: &ReferenceCatalog) -> EvaluationTrace {
    EvaluationEngine::new(catalog).evaluate_traced(batch)
}

/// Quick check of a single reading.
///
/// Returns `None` if the parameter is unknown, otherwise whether no
/// standard failed.
pub fn would_pass(catalog: &ReferenceCatalog, parameter_name: &str, value: f64) -> Option<bool> {
    catalog
        .lookup(parameter_name)
        .map(|parameter| evaluate_parameter(value, parameter).is_safe())
}
