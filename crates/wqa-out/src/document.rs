//! Document sinks: turn a batch report into a downloadable artifact.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use wqa_core::{WqaError, WqaResult};
use wqa_proposal::Proposal;
use wqa_standards::BatchReport;

use crate::renderer::ReportRenderer;

/// A rendered artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub filename: String,
    pub mime: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Consumer of a batch report (or another input) producing a document
pub trait DocumentSink<T: ?Sized = BatchReport> {
    fn write(&self, input: &T) -> WqaResult<Document>;
}

/// Drop every character outside Latin-1 (U+0000..=U+00FF)
pub fn to_latin1(text: &str) -> String {
    text.chars().filter(|&c| (c as u32) <= 0xFF).collect()
}

fn latin1_bytes(text: &str) -> Vec<u8> {
    // one byte per char
    to_latin1(text).chars().map(|c| c as u8).collect()
}

const TEXT_MIME: &str = "text/plain; charset=iso-8859-1";

/// Renders the analysis report template into a Latin-1 plain-text document
pub struct TextDocumentSink {
    renderer: Arc<ReportRenderer>,
    generated_at: Option<NaiveDateTime>,
}

impl TextDocumentSink {
    pub fn new(renderer: Arc<ReportRenderer>) -> Self {
        Self { renderer, generated_at: None }
    }

    /// Pin the generation time instead of reading the clock
    pub fn at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.generated_at.unwrap_or_else(|| Local::now().naive_local())
    }
}

impl DocumentSink for TextDocumentSink {
    fn write(&self, report: &BatchReport) -> WqaResult<Document> {
        let generated_at = self.timestamp();
        let text = self.renderer.render_report(report, generated_at)?;

        Ok(Document {
            filename: format!("Analysis_Report_{}.txt", generated_at.format("%M%S")),
            mime: TEXT_MIME.to_string(),
            bytes: latin1_bytes(&text),
        })
    }
}

/// Renders the proposal template into `Proposal_<project name>.txt`
pub struct ProposalDocumentSink {
    renderer: Arc<ReportRenderer>,
    date: Option<NaiveDate>,
}

impl ProposalDocumentSink {
    pub fn new(renderer: Arc<ReportRenderer>) -> Self {
        Self { renderer, date: None }
    }

    /// Pin the proposal date instead of reading the clock
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Spaces become underscores; path separators too, so the file stays in its directory
pub fn proposal_filename(project_name: &str) -> String {
    let stem: String = project_name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("Proposal_{}.txt", stem)
}

impl DocumentSink<Proposal> for ProposalDocumentSink {
    fn write(&self, proposal: &Proposal) -> WqaResult<Document> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let text = self.renderer.render_proposal(proposal, date)?;

        Ok(Document {
            filename: proposal_filename(&proposal.project_name),
            mime: TEXT_MIME.to_string(),
            bytes: latin1_bytes(&text),
        })
    }
}

/// Wraps a sink and persists each document into a directory
pub struct FileSink<S> {
    inner: S,
    dir: PathBuf,
}

impl<S> FileSink<S> {
    pub fn new(inner: S, dir: impl Into<PathBuf>) -> Self {
        Self { inner, dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render and write a document, returning the written path
    pub fn persist<T: ?Sized>(&self, input: &T) -> WqaResult<PathBuf>
    where
        S: DocumentSink<T>,
    {
        let document = self.inner.write(input)?;
        self.store(&document)
    }

    fn store(&self, document: &Document) -> WqaResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            WqaError::DocumentError(format!("cannot create {}: {}", self.dir.display(), e))
        })?;
        let path = self.dir.join(&document.filename);
        std::fs::write(&path, &document.bytes).map_err(|e| {
            WqaError::DocumentError(format!("cannot write {}: {}", path.display(), e))
        })?;
        tracing::info!(path = %path.display(), bytes = document.bytes.len(), "document written");
        Ok(path)
    }
}

impl<T: ?Sized, S: DocumentSink<T>> DocumentSink<T> for FileSink<S> {
    fn write(&self, input: &T) -> WqaResult<Document> {
        let document = self.inner.write(input)?;
        self.store(&document)?;
        Ok(document)
    }
}
