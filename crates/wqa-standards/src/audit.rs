//! Catalog audit
//!
//! Flags reference data the engine will still process but that is probably
//! wrong. Nothing here changes evaluation output.

use serde::Serialize;
use std::fmt;
use wqa_core::{Limit, ReferenceCatalog};

/// Kind of suspicious record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    /// min > max; every value fails and the min violation is recorded
    InvertedRange { min: f64, max: f64 },
    /// No bound, but consequence/solution text that can never be shown
    UnboundedWithRemedy,
    /// Bounded standard that would fail without consequence or solution
    MissingRemedy,
    /// Parameter without any standard
    NoStandards,
}

/// One audit finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFinding {
    pub parameter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl fmt::Display for CatalogFinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.parameter)?;
        if let Some(authority) = &self.authority {
            write!(f, " [{}]", authority)?;
        }
        match &self.kind {
            FindingKind::InvertedRange { min, max } => {
                write!(f, ": min {} exceeds max {}", min, max)
            }
            FindingKind::UnboundedWithRemedy => {
                write!(f, ": remedy text on a standard without bounds")
            }
            FindingKind::MissingRemedy => {
                write!(f, ": bounded standard lacks consequence or solution")
            }
            FindingKind::NoStandards => write!(f, ": no standards defined"),
        }
    }
}

/// Inspect every parameter and standard of a catalog
pub fn audit_catalog(catalog: &ReferenceCatalog) -> Vec<CatalogFinding> {
    let mut findings = Vec::new();

    for parameter in catalog.iter() {
        if parameter.standards.is_empty() {
            findings.push(CatalogFinding {
                parameter: parameter.name.clone(),
                authority: None,
                kind: FindingKind::NoStandards,
            });
            continue;
        }

        for standard in &parameter.standards {
            let has_any_remedy = standard.consequence.is_some() || standard.solution.is_some();
            let has_full_remedy = standard.consequence.is_some() && standard.solution.is_some();

            let kind = match standard.limit {
                Limit::Between { min, max } if min > max => {
                    Some(FindingKind::InvertedRange { min, max })
                }
                Limit::Unbounded if has_any_remedy => Some(FindingKind::UnboundedWithRemedy),
                Limit::Unbounded => None,
                _ if !has_full_remedy => Some(FindingKind::MissingRemedy),
                _ => None,
            };

            if let Some(kind) = kind {
                findings.push(CatalogFinding {
                    parameter: parameter.name.clone(),
                    authority: Some(standard.authority.clone()),
                    kind,
                });
            }
        }
    }

    findings
}
