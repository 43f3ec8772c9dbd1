//! Prometheus counters for the evaluation endpoints.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use wqa_standards::EvaluationTrace;

pub struct Metrics {
    registry: Registry,
    evaluations: IntCounter,
    measurements: IntCounter,
    unknown_parameters: IntCounter,
    unsafe_parameters: IntCounter,
}

impl Metrics {
    /// Counters registered on a fresh registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations = IntCounter::new("wqa_evaluations_total", "Batches evaluated")?;
        let measurements = IntCounter::new("wqa_measurements_total", "Measurements submitted")?;
        let unknown_parameters = IntCounter::new(
            "wqa_unknown_parameters_total",
            "Measurements skipped because the parameter is not in the catalog",
        )?;
        let unsafe_parameters = IntCounter::new(
            "wqa_unsafe_parameters_total",
            "Evaluated parameters that failed at least one standard",
        )?;

        registry.register(Box::new(evaluations.clone()))?;
        registry.register(Box::new(measurements.clone()))?;
        registry.register(Box::new(unknown_parameters.clone()))?;
        registry.register(Box::new(unsafe_parameters.clone()))?;

        Ok(Self {
            registry,
            evaluations,
            measurements,
            unknown_parameters,
            unsafe_parameters,
        })
    }

    pub fn record(&self, trace: &EvaluationTrace) {
        self.evaluations.inc();
        self.measurements.inc_by(trace.outcomes.len() as u64);
        self.unknown_parameters.inc_by(trace.unknown_parameters().len() as u64);
        self.unsafe_parameters.inc_by(trace.report.unsafe_count() as u64);
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
