//! Template rendering for WQA reports.
//!
//! Uses Handlebars with output escaping disabled (the output is plain text)
//! and a few helpers:
//! - pad: left-align a string in a fixed-width column
//! - default: fall back to a literal when a value is null

use chrono::{NaiveDate, NaiveDateTime};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{json, Value};
use std::path::Path;

use wqa_core::{WqaError, WqaResult};
use wqa_proposal::Proposal;
use wqa_standards::BatchReport;

use crate::style::StatusStyle;
use crate::templates::TemplatesFile;

/// Name of the full analysis report template
pub const ANALYSIS_REPORT: &str = "analysis_report";
/// Name of the one-line summary template
pub const BATCH_SUMMARY: &str = "batch_summary";
/// Name of the proposal template
pub const PROPOSAL: &str = "proposal";

/// Timestamp format used in rendered reports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

handlebars_helper!(pad: |text: str, width: u64| {
    format!("{:<width$}", text, width = width as usize)
});

handlebars_helper!(or_default: |value: Json, fallback: str| match value {
    Value::Null => fallback.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
});

/// Compiled renderer with registered helpers
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl ReportRenderer {
    /// Create a renderer from a templates file
    pub fn new(templates: TemplatesFile) -> WqaResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("pad", Box::new(pad));
        handlebars.register_helper("default", Box::new(or_default));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| WqaError::RenderError(format!("template '{}': {}", name, e)))?;
        }

        Ok(Self { handlebars, templates })
    }

    /// Renderer over the built-in templates
    pub fn builtin() -> WqaResult<Self> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Built-in templates overridden by the entries of a YAML file
    pub fn load(path: impl AsRef<Path>) -> WqaResult<Self> {
        Self::new(TemplatesFile::builtin_with_overrides(path)?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> WqaResult<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| WqaError::RenderError(format!("{}: {}", template_name, e)))
    }

    /// Render a template string directly
    pub fn render_string(&self, template: &str, data: &Value) -> WqaResult<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| WqaError::RenderError(e.to_string()))
    }

    /// Render the full analysis report for a batch
    pub fn render_report(
        &self,
        report: &BatchReport,
        generated_at: NaiveDateTime,
    ) -> WqaResult<String> {
        self.render(ANALYSIS_REPORT, &report_context(report, generated_at))
    }

    /// Render the scheme proposal, dated `date`
    pub fn render_proposal(&self, proposal: &Proposal, date: NaiveDate) -> WqaResult<String> {
        self.render(PROPOSAL, &proposal_context(proposal, date)?)
    }

    /// Render the one-line batch summary
    pub fn render_summary(&self, report: &BatchReport) -> WqaResult<String> {
        self.render(BATCH_SUMMARY, &json!({ "summary": report.summary() }))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

/// Template data for a batch report
pub fn report_context(report: &BatchReport, generated_at: NaiveDateTime) -> Value {
    let entries: Vec<Value> = report
        .iter()
        .map(|entry| {
            let standards: Vec<Value> = entry
                .results()
                .iter()
                .map(|result| {
                    let style = StatusStyle::for_status(result.status);
                    json!({
                        "authority": result.authority,
                        "status": result.status.as_str(),
                        "limit": result.limit_display,
                        "mark": style.mark,
                        "color": style.hex(),
                        "violation": result.violation_text(),
                        "consequence": result.consequence(),
                        "solution": result.solution(),
                    })
                })
                .collect();

            json!({
                "parameter": entry.parameter_name(),
                "value": entry.display_value(),
                "is_safe": entry.is_safe(),
                "overall": if entry.is_safe() { "PASSED" } else { "FLAGGED ISSUES" },
                "standards": standards,
            })
        })
        .collect();

    json!({
        "generated_at": generated_at.format(TIMESTAMP_FORMAT).to_string(),
        "summary": report.summary(),
        "entries": entries,
    })
}

/// Template data for a proposal: its serialized form plus the date
pub fn proposal_context(proposal: &Proposal, date: NaiveDate) -> WqaResult<Value> {
    let mut context =
        serde_json::to_value(proposal).map_err(|e| WqaError::RenderError(e.to_string()))?;
    context["date"] = json!(date.format("%Y-%m-%d").to_string());
    Ok(context)
}
