//! Presentation of evaluation statuses.
//!
//! The engine only knows PASS/FAIL/INFO; how each looks is decided here.

use serde::Serialize;
use wqa_standards::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    /// Glyph for interactive display
    pub glyph: &'static str,
    /// Latin-1 safe marker for documents
    pub mark: &'static str,
    /// RGB colour
    pub rgb: (u8, u8, u8),
}

impl StatusStyle {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Pass => StatusStyle { glyph: "✅", mark: "OK", rgb: (0, 150, 0) },
            Status::Fail => StatusStyle { glyph: "❌", mark: "X", rgb: (200, 0, 0) },
            Status::Info => StatusStyle { glyph: "ℹ️", mark: "i", rgb: (0, 0, 200) },
        }
    }

    /// Colour as "#rrggbb"
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
