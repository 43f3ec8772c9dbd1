//! Template loading and management for WQA reports.
//!
//! Templates live in a YAML file with named Handlebars templates. A built-in
//! set ships with the crate; a file on disk can override individual entries.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use wqa_core::{WqaError, WqaResult};

/// Built-in templates compiled into the crate
const BUILTIN_TEMPLATES: &str = include_str!("../templates/report-templates.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// The built-in template set
    pub fn builtin() -> WqaResult<Self> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Load templates from a YAML file
    pub fn load(path: impl AsRef<Path>) -> WqaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WqaError::RenderError(format!(
                "failed to read templates file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> WqaResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| WqaError::RenderError(format!("failed to parse templates YAML: {}", e)))
    }

    /// Built-in templates with the entries of `path` layered on top
    pub fn builtin_with_overrides(path: impl AsRef<Path>) -> WqaResult<Self> {
        let mut templates = Self::builtin()?;
        templates.merge(Self::load(path)?);
        Ok(templates)
    }

    /// Replace or add every template from `other`
    pub fn merge(&mut self, other: TemplatesFile) {
        self.version = other.version;
        self.templates.extend(other.templates);
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
