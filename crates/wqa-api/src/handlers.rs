//! API Handlers
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use wqa_core::{Measurement, WqaError};
use wqa_out::{
    display_lines, proposal_filename, DisplayLine, DocumentSink, FileSink, ProposalDocumentSink,
    TextDocumentSink,
};
use wqa_proposal::{Proposal, ProposalInputs};
use wqa_standards::{BatchReport, ItemOutcome};

use crate::AppState;

/// Error body `{ "error": "AREA/detail" }`
pub struct ApiError(WqaError);

impl From<WqaError> for ApiError {
    fn from(err: WqaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            WqaError::ProposalError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self.0, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub measurements: Vec<Measurement>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub report: BatchReport,
    pub outcomes: Vec<ItemOutcome>,
    pub lines: Vec<DisplayLine>,
}

#[derive(Debug, Serialize)]
pub struct ProposalResponse {
    pub proposal: Proposal,
    pub text: String,
    /// Document name; the file is also written when a report directory is configured
    pub filename: String,
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": wqa_core::WQA_VERSION })),
    )
}

pub async fn parameters(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.list_names())
}

pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let trace = wqa_standards::evaluate_traced(&request.measurements, &state.catalog);
    state.metrics.record(&trace);

    let lines = display_lines(&trace.report, Local::now().naive_local());
    Json(EvaluateResponse {
        report: trace.report,
        outcomes: trace.outcomes,
        lines,
    })
}

/// Render the analysis report as a Latin-1 text download
pub async fn report(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Response, ApiError> {
    let trace = wqa_standards::evaluate_traced(&request.measurements, &state.catalog);
    state.metrics.record(&trace);

    let sink = TextDocumentSink::new(state.renderer.clone());
    let document = match &state.report_dir {
        Some(dir) => FileSink::new(sink, dir).write(&trace.report)?,
        None => sink.write(&trace.report)?,
    };

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.mime),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}

pub async fn proposal(
    State(state): State<AppState>,
    Json(inputs): Json<ProposalInputs>,
) -> Result<Json<ProposalResponse>, ApiError> {
    let proposal = wqa_proposal::draft(&inputs)?;
    let date = Local::now().date_naive();

    let text = state.renderer.render_proposal(&proposal, date)?;
    if let Some(dir) = &state.report_dir {
        let sink = ProposalDocumentSink::new(state.renderer.clone()).on(date);
        FileSink::new(sink, dir).persist(&proposal)?;
    }

    Ok(Json(ProposalResponse {
        filename: proposal_filename(&proposal.project_name),
        proposal,
        text,
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = state
        .metrics
        .encode()
        .map_err(|e| WqaError::RenderError(format!("metrics: {}", e)))?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}
