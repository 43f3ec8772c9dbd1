//! Reference catalog of parameters and their standards.
//!
//! The catalog is read-only once built. Loading is deliberately forgiving:
//! a missing or corrupt source yields an empty catalog, and evaluation
//! against an empty catalog simply produces an empty report.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::data_model::Parameter;
use crate::error::{WqaError, WqaResult};

/// Named parameters with their standards, indexed by name
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    parameters: Vec<Parameter>,
    index: HashMap<String, usize>,
}

impl ReferenceCatalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from parameters. The first record wins on duplicate names.
    pub fn from_parameters(parameters: Vec<Parameter>) -> Self {
        let mut index = HashMap::with_capacity(parameters.len());
        for (position, parameter) in parameters.iter().enumerate() {
            index.entry(parameter.name.clone()).or_insert(position);
        }
        Self { parameters, index }
    }

    /// Parse a JSON array of parameter records
    pub fn from_json(json: &str) -> WqaResult<Self> {
        let parameters: Vec<Parameter> =
            serde_json::from_str(json).map_err(|e| WqaError::CatalogError(e.to_string()))?;
        Ok(Self::from_parameters(parameters))
    }

    /// Load a catalog, surfacing read or parse failures
    pub fn try_load(path: impl AsRef<Path>) -> WqaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WqaError::CatalogError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content).map_err(|e| match e {
            WqaError::CatalogError(msg) => {
                WqaError::CatalogError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load a catalog, falling back to an empty one if the source is unavailable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    parameters = catalog.len(),
                    "reference catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "reference catalog unavailable, using empty catalog"
                );
                Self::empty()
            }
        }
    }

    /// Find a parameter by exact, case-sensitive name
    pub fn lookup(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.parameters[i])
    }

    /// Distinct parameter names in alphabetical order
    pub fn list_names(&self) -> Vec<String> {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
