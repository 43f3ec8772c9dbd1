//! Tagged display lines for interactive views.
//!
//! Each line carries a kind so a front end can pick its own styling.

use chrono::NaiveDateTime;
use serde::Serialize;
use wqa_standards::{BatchReport, Status};

use crate::renderer::TIMESTAMP_FORMAT;
use crate::style::StatusStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Header,
    Subheader,
    Normal,
    Pass,
    Fail,
    Info,
}

impl From<Status> for LineKind {
    fn from(status: Status) -> Self {
        match status {
            Status::Pass => LineKind::Pass,
            Status::Fail => LineKind::Fail,
            Status::Info => LineKind::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub kind: LineKind,
    pub text: String,
}

impl DisplayLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Lay out a batch report as tagged lines
pub fn display_lines(report: &BatchReport, generated_at: NaiveDateTime) -> Vec<DisplayLine> {
    let mut lines = vec![
        DisplayLine::new(LineKind::Header, "COMPREHENSIVE ANALYSIS REPORT"),
        DisplayLine::new(
            LineKind::Normal,
            format!("Date: {}", generated_at.format(TIMESTAMP_FORMAT)),
        ),
        DisplayLine::new(LineKind::Normal, "=".repeat(60)),
    ];

    for entry in report {
        lines.push(DisplayLine::new(
            LineKind::Subheader,
            format!("► {} (Result: {})", entry.parameter_name(), entry.display_value()),
        ));

        for result in entry.results() {
            let glyph = StatusStyle::for_status(result.status).glyph;
            let kind = LineKind::from(result.status);

            match result.status {
                Status::Fail => {
                    lines.push(DisplayLine::new(
                        kind,
                        format!(
                            "   {} [{}] FAIL: {}",
                            glyph,
                            result.authority,
                            result.violation_text().unwrap_or_default()
                        ),
                    ));
                    lines.push(DisplayLine::new(
                        LineKind::Normal,
                        format!(
                            "      Consequence: {}",
                            result.consequence().unwrap_or("not specified")
                        ),
                    ));
                    lines.push(DisplayLine::new(
                        LineKind::Normal,
                        format!("      Solution: {}", result.solution().unwrap_or("not specified")),
                    ));
                }
                Status::Info => {
                    lines.push(DisplayLine::new(
                        kind,
                        format!("   {} [{}] INFO: No Limit", glyph, result.authority),
                    ));
                }
                Status::Pass => {
                    lines.push(DisplayLine::new(
                        kind,
                        format!("   {} [{}] PASS", glyph, result.authority),
                    ));
                }
            }
        }

        lines.push(DisplayLine::new(LineKind::Normal, "-".repeat(40)));
    }

    lines
}
