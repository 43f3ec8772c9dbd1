//! Binary entrypoint for the WQA API server.
use tracing_subscriber::EnvFilter;
use wqa_api::run;
use wqa_core::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Defaults, then WQA_CONFIG (YAML), then the WQA_* overrides
    let config = ServiceConfig::from_env()?;
    tracing::info!(?config, version = wqa_core::WQA_VERSION, "starting");
    run(config).await
}
