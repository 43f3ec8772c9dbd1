//! Service configuration
//!
//! Defaults, then an optional YAML file named by `WQA_CONFIG`, then
//! individual environment overrides.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{WqaError, WqaResult};

pub const ENV_CONFIG: &str = "WQA_CONFIG";
pub const ENV_ADDR: &str = "WQA_ADDR";
pub const ENV_CATALOG: &str = "WQA_CATALOG";
pub const ENV_TEMPLATES: &str = "WQA_TEMPLATES";
pub const ENV_REPORT_DIR: &str = "WQA_REPORT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP surface binds to
    pub listen_addr: String,
    /// Reference database (JSON array of parameters)
    pub catalog_path: PathBuf,
    /// Optional YAML templates overriding the built-in set
    pub templates_path: Option<PathBuf>,
    /// Where generated documents are written
    pub report_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8787".to_string(),
            catalog_path: PathBuf::from("data/database.json"),
            templates_path: None,
            report_dir: PathBuf::from("reports"),
        }
    }
}

impl ServiceConfig {
    /// Parse configuration from YAML; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> WqaResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| WqaError::ConfigError(e.to_string()))
    }

    /// Build the effective configuration from the process environment
    pub fn from_env() -> WqaResult<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Build the effective configuration from an arbitrary variable source
    pub fn resolve<F>(lookup: F) -> WqaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| WqaError::ConfigError(format!("failed to read {}: {}", path, e)))?;
                Self::from_yaml(&content)?
            }
            None => Self::default(),
        };

        if let Some(addr) = lookup(ENV_ADDR) {
            config.listen_addr = addr;
        }
        if let Some(path) = lookup(ENV_CATALOG) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_TEMPLATES) {
            config.templates_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup(ENV_REPORT_DIR) {
            config.report_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
