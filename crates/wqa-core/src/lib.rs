//! WQA Core: reference catalog, data model and shared plumbing
//!
//! Everything the evaluation engine and its collaborators agree on lives
//! here: the parameter/standard model, the read-only catalog, the error
//! type and the service configuration.

pub mod catalog;
pub mod config;
pub mod data_model;
pub mod error;

pub use catalog::ReferenceCatalog;
pub use config::ServiceConfig;
pub use data_model::{Limit, Measurement, Parameter, Standard};
pub use error::{WqaError, WqaResult};

/// Version of the analysis engine
pub const WQA_VERSION: &str = env!("CARGO_PKG_VERSION");
