//! WQA API /v1: REST endpoints
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use wqa_core::{ReferenceCatalog, ServiceConfig, WqaError, WqaResult};
use wqa_out::ReportRenderer;

use crate::metrics::Metrics;

/// Shared state: the catalog is loaded once and read-only afterwards
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ReferenceCatalog>,
    pub renderer: Arc<ReportRenderer>,
    pub metrics: Arc<Metrics>,
    /// Generated reports are also written here when set
    pub report_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: ReferenceCatalog, renderer: ReportRenderer) -> WqaResult<Self> {
        let metrics =
            Metrics::new().map_err(|e| WqaError::ConfigError(format!("metrics: {}", e)))?;
        Ok(Self {
            catalog: Arc::new(catalog),
            renderer: Arc::new(renderer),
            metrics: Arc::new(metrics),
            report_dir: None,
        })
    }

    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Load catalog and templates as configured.
    ///
    /// An unreadable catalog yields an empty one; bad templates are an error.
    pub fn from_config(config: &ServiceConfig) -> WqaResult<Self> {
        let catalog = ReferenceCatalog::load(&config.catalog_path);
        for finding in wqa_standards::audit_catalog(&catalog) {
            tracing::warn!(%finding, "catalog audit");
        }

        let renderer = match &config.templates_path {
            Some(path) => ReportRenderer::load(path)?,
            None => ReportRenderer::builtin()?,
        };

        Ok(Self::new(catalog, renderer)?.with_report_dir(&config.report_dir))
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/parameters", get(handlers::parameters))
        .route("/v1/evaluate", post(handlers::evaluate))
        .route("/v1/report", post(handlers::report))
        .route("/v1/proposal", post(handlers::proposal))
        .route("/metrics", get(handlers::metrics))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(middleware::cors()),
        )
        .with_state(state)
}

pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    tracing::info!(
        parameters = state.catalog.len(),
        templates = ?state.renderer.list_templates(),
        "state ready"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("WQA API listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
