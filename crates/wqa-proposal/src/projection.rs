//! Population projection
//!
//! Cities grow geometrically, villages arithmetically. Both record the
//! worked steps so a proposal can show its arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use wqa_core::{WqaError, WqaResult};

use crate::grouped;

/// Kind of community served by the scheme.
///
/// Serializes as "city" / "village"; deserializes through [`FromStr`], so
/// labels such as "City (Geometric)" are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum CommunityType {
    City,
    Village,
}

impl CommunityType {
    /// Projection method used for this community
    pub fn method(&self) -> &'static str {
        match self {
            CommunityType::City => "Geometric Progression Method",
            CommunityType::Village => "Arithmetic Progression Method",
        }
    }

    /// Assumed demand in litres per person per day
    pub fn per_capita_demand(&self) -> u64 {
        match self {
            CommunityType::City => 120,
            CommunityType::Village => 60,
        }
    }
}

impl fmt::Display for CommunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunityType::City => write!(f, "City (Geometric)"),
            CommunityType::Village => write!(f, "Village (Arithmetic)"),
        }
    }
}

/// Accepts "city", "village" and the labelled forms such as "City (Geometric)"
impl FromStr for CommunityType {
    type Err = WqaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered.starts_with("city") {
            Ok(CommunityType::City)
        } else if lowered.starts_with("village") {
            Ok(CommunityType::Village)
        } else {
            Err(WqaError::ProposalError(format!("unknown community type: {}", s)))
        }
    }
}

impl TryFrom<String> for CommunityType {
    type Error = WqaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Projected design population with its worked steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub method: String,
    pub population: u64,
    pub steps: Vec<String>,
}

/// Project the population at the end of the design period.
///
/// Fractional people are truncated, for the yearly increment as well as
/// the final figure. Figures beyond `u64` are rejected.
pub fn project(
    community: CommunityType,
    population: u64,
    growth_rate: f64,
    years: u32,
) -> WqaResult<Projection> {
    let mut steps = Vec::new();

    let projected = match community {
        CommunityType::City => {
            steps.push("FORMULA: Pn = Po * (1 + r/100)^n".to_string());
            steps.push(format!(
                "SUBSTITUTION: {} * (1 + {}/100)^{}",
                population, growth_rate, years
            ));

            let factor = (1.0 + growth_rate / 100.0).powf(f64::from(years));
            let projected = whole_people(population as f64 * factor)?;

            steps.push(format!("GROWTH FACTOR: {:.4}", factor));
            projected
        }
        CommunityType::Village => {
            steps.push("FORMULA: Pn = Po + (n * Increase_per_year)".to_string());
            steps.push("STEP 1: Calculate Annual Increase = (Rate/100) * Po".to_string());

            let increase = whole_people(growth_rate / 100.0 * population as f64)?;
            steps.push(format!(
                "        Increase = ({}/100) * {} = {} people/year",
                growth_rate, population, increase
            ));

            steps.push(format!("STEP 2: Add growth over {} years", years));
            steps.push(format!("        {} + ({} * {})", population, years, increase));
            u64::from(years)
                .checked_mul(increase)
                .and_then(|growth| population.checked_add(growth))
                .ok_or_else(|| overflow(population))?
        }
    };

    steps.push(format!("RESULT: {} people", grouped(projected)));

    Ok(Projection {
        method: community.method().to_string(),
        population: projected,
        steps,
    })
}

/// Truncate to a whole head count
fn whole_people(count: f64) -> WqaResult<u64> {
    // u64::MAX as f64 rounds up to 2^64, the first value that does not fit
    if !count.is_finite() || count < 0.0 || count >= u64::MAX as f64 {
        return Err(WqaError::ProposalError(format!(
            "projected population out of range: {}",
            count
        )));
    }
    Ok(count.floor() as u64)
}

fn overflow(population: u64) -> WqaError {
    WqaError::ProposalError(format!(
        "projected population out of range for current population {}",
        population
    ))
}
