//! Data Model: Parameter, Standard, Limit, Measurement
use serde::{Deserialize, Serialize};

/// Enforceable bounds of a standard.
///
/// A standard without any bound is informational; it is represented as
/// [`Limit::Unbounded`] so no code path can compare a value against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// No enforceable bound (INFO only)
    Unbounded,
    /// Lower bound only
    AtLeast(f64),
    /// Upper bound only
    AtMost(f64),
    /// Both bounds. `min > max` is representable; see the catalog audit.
    Between { min: f64, max: f64 },
}

impl Limit {
    /// Build a limit from the optional bounds of a reference record
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        match (min, max) {
            (None, None) => Limit::Unbounded,
            (Some(min), None) => Limit::AtLeast(min),
            (None, Some(max)) => Limit::AtMost(max),
            (Some(min), Some(max)) => Limit::Between { min, max },
        }
    }

    pub fn min(&self) -> Option<f64> {
        match self {
            Limit::AtLeast(min) | Limit::Between { min, .. } => Some(*min),
            _ => None,
        }
    }

    pub fn max(&self) -> Option<f64> {
        match self {
            Limit::AtMost(max) | Limit::Between { max, .. } => Some(*max),
            _ => None,
        }
    }

    /// Whether the limit carries at least one bound
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Limit::Unbounded)
    }
}

/// One authority's limit rule for one parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StandardRecord", into = "StandardRecord")]
pub struct Standard {
    /// Issuing body (e.g. "WHO", "NAFDAC")
    pub authority: String,
    /// Enforceable bounds
    pub limit: Limit,
    /// Risk if the limit is violated
    pub consequence: Option<String>,
    /// Remediation guidance
    pub solution: Option<String>,
}

impl Standard {
    /// Create a standard with the given limit and no remedy text
    pub fn new(authority: impl Into<String>, limit: Limit) -> Self {
        Self {
            authority: authority.into(),
            limit,
            consequence: None,
            solution: None,
        }
    }

    /// Create an informational standard
    pub fn informational(authority: impl Into<String>) -> Self {
        Self::new(authority, Limit::Unbounded)
    }

    /// Attach consequence and solution text
    pub fn with_remedy(
        mut self,
        consequence: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        self.consequence = Some(consequence.into());
        self.solution = Some(solution.into());
        self
    }

    pub fn min_limit(&self) -> Option<f64> {
        self.limit.min()
    }

    pub fn max_limit(&self) -> Option<f64> {
        self.limit.max()
    }
}

/// Wire shape of a standard in the reference data source
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardRecord {
    authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    consequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
}

impl From<StandardRecord> for Standard {
    fn from(record: StandardRecord) -> Self {
        Self {
            authority: record.authority,
            limit: Limit::from_bounds(record.min_limit, record.max_limit),
            consequence: record.consequence,
            solution: record.solution,
        }
    }
}

impl From<Standard> for StandardRecord {
    fn from(standard: Standard) -> Self {
        Self {
            min_limit: standard.limit.min(),
            max_limit: standard.limit.max(),
            authority: standard.authority,
            consequence: standard.consequence,
            solution: standard.solution,
        }
    }
}

/// A named water-quality parameter and the standards that apply to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Case-sensitive lookup key
    pub name: String,
    /// Display unit (e.g. "mg/L"), may be empty
    #[serde(default)]
    pub unit: String,
    /// Standards in report order
    #[serde(default)]
    pub standards: Vec<Standard>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            standards: Vec::new(),
        }
    }

    /// Append a standard
    pub fn with_standard(mut self, standard: Standard) -> Self {
        self.standards.push(standard);
        self
    }
}

/// One caller-supplied lab result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Must match a `Parameter::name` exactly
    #[serde(alias = "name")]
    pub parameter_name: String,
    pub value: f64,
}

impl Measurement {
    pub fn new(parameter_name: impl Into<String>, value: f64) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            value,
        }
    }
}
