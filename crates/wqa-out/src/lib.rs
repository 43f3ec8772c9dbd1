//! WQA-OUT: rendering collaborators for water-quality reports
//!
//! Everything here consumes a [`BatchReport`] and never reaches back into
//! the engine:
//! - [`display_lines`] for interactive views
//! - [`ReportRenderer`] for Handlebars-templated text
//! - [`DocumentSink`] implementations producing downloadable documents
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wqa_core::{Limit, Measurement, Parameter, ReferenceCatalog, Standard};
//! use wqa_out::{DocumentSink, ReportRenderer, TextDocumentSink};
//!
//! let catalog = ReferenceCatalog::from_parameters(vec![
//!     Parameter::new("Turbidity", "NTU").with_standard(Standard::new("WHO", Limit::AtMost(5.0))),
//! ]);
//! let report = wqa_standards::evaluate(&[Measurement::new("Turbidity", 2.0)], &catalog);
//!
//! let renderer = Arc::new(ReportRenderer::builtin().unwrap());
//! let document = TextDocumentSink::new(renderer).write(&report).unwrap();
//! assert!(document.filename.starts_with("Analysis_Report_"));
//! ```

pub mod document;
pub mod interactive;
pub mod renderer;
pub mod style;
pub mod templates;

pub use document::{
    proposal_filename, to_latin1, Document, DocumentSink, FileSink, ProposalDocumentSink,
    TextDocumentSink,
};
pub use interactive::{display_lines, DisplayLine, LineKind};
pub use renderer::{
    proposal_context, report_context, ReportRenderer, ANALYSIS_REPORT, BATCH_SUMMARY, PROPOSAL,
};
pub use style::StatusStyle;
pub use templates::TemplatesFile;

use chrono::Local;
use wqa_core::WqaResult;
use wqa_standards::BatchReport;

/// Render a batch with the built-in templates, stamped with the current time
pub fn render_report(report: &BatchReport) -> WqaResult<String> {
    ReportRenderer::builtin()?.render_report(report, Local::now().naive_local())
}

/// Quick helpers for one-off messages
pub mod quick {
    use super::*;

    /// One-line verdict, e.g. "3 parameters analysed: 2 passed, 1 flagged"
    pub fn summary_line(report: &BatchReport) -> String {
        ReportRenderer::builtin()
            .and_then(|r| r.render_summary(report))
            .unwrap_or_else(|_| {
                format!(
                    "{} parameters analysed: {} passed, {} flagged",
                    report.total_count(),
                    report.safe_count(),
                    report.unsafe_count()
                )
            })
    }

    /// Names of the parameters that failed at least one standard
    pub fn flagged_parameters(report: &BatchReport) -> Vec<&str> {
        report
            .iter()
            .filter(|e| !e.is_safe())
            .map(|e| e.parameter_name())
            .collect()
    }
}
