//! WQA Proposal: water supply scheme design figures
//!
//! Turns a handful of planning inputs into the numbers a scheme proposal
//! needs: projected population, average and peak demand, and the treatment
//! train for the raw water source.
//!
//! # Example
//!
//! ```
//! use wqa_proposal::{draft, CommunityType, ProposalInputs};
//!
//! let inputs = ProposalInputs {
//!     project_name: "Ilupeju Water Scheme".to_string(),
//!     source_description: "Borehole".to_string(),
//!     community: CommunityType::Village,
//!     population: 5_000,
//!     growth_rate: 2.5,
//!     design_period: 12,
//! };
//!
//! let proposal = draft(&inputs).unwrap();
//! assert_eq!(proposal.projection.population, 6_500);
//! assert_eq!(proposal.demand.average_daily, 390_000);
//! ```

pub mod demand;
pub mod projection;
pub mod treatment;

pub use demand::{Demand, PEAK_FACTOR};
pub use projection::{CommunityType, Projection};
pub use treatment::{Treatment, WaterSource};

use serde::{Deserialize, Serialize};
use wqa_core::{WqaError, WqaResult};

/// Planning inputs for a proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalInputs {
    pub project_name: String,
    pub source_description: String,
    #[serde(alias = "type")]
    pub community: CommunityType,
    /// Current population
    pub population: u64,
    /// Percent per year
    pub growth_rate: f64,
    /// Years
    pub design_period: u32,
}

impl ProposalInputs {
    pub fn validate(&self) -> WqaResult<()> {
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            return Err(WqaError::ProposalError(format!(
                "growth rate must be a non-negative number, got {}",
                self.growth_rate
            )));
        }
        if self.design_period == 0 {
            return Err(WqaError::ProposalError("design period must be positive".to_string()));
        }
        if self.population == 0 {
            return Err(WqaError::ProposalError(
                "current population must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Computed proposal figures
#[derive(Debug, Clone, Serialize)]
pub struct Proposal {
    pub project_name: String,
    pub source_description: String,
    pub community: CommunityType,
    pub projection: Projection,
    pub demand: Demand,
    pub treatment: Treatment,
}

/// Validate inputs and compute every proposal section
pub fn draft(inputs: &ProposalInputs) -> WqaResult<Proposal> {
    inputs.validate()?;

    let projection = projection::project(
        inputs.community,
        inputs.population,
        inputs.growth_rate,
        inputs.design_period,
    )?;
    let demand = demand::estimate(projection.population, inputs.community.per_capita_demand())?;
    let treatment = treatment::select(&inputs.source_description);

    tracing::info!(
        project = %inputs.project_name,
        community = %inputs.community,
        design_population = projection.population,
        source = ?treatment.source,
        "proposal drafted"
    );

    Ok(Proposal {
        project_name: inputs.project_name.clone(),
        source_description: inputs.source_description.clone(),
        community: inputs.community,
        projection,
        demand,
        treatment,
    })
}

/// Group digits in thousands, e.g. 1854582 -> "1,854,582"
pub(crate) fn grouped(n: impl Into<u128>) -> String {
    let digits = n.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ProposalInputs {
        ProposalInputs {
            project_name: "Oke-Ogun Regional Supply".to_string(),
            source_description: "River Ofiki".to_string(),
            community: CommunityType::City,
            population: 10_000,
            growth_rate: 3.0,
            design_period: 10,
        }
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0u64), "0");
        assert_eq!(grouped(999u64), "999");
        assert_eq!(grouped(1_000u64), "1,000");
        assert_eq!(grouped(1_854_582u64), "1,854,582");
    }

    #[test]
    fn test_draft_city() {
        let proposal = draft(&inputs()).unwrap();
        assert_eq!(proposal.projection.population, 13_439);
        assert_eq!(proposal.demand.per_capita, 120);
        assert_eq!(proposal.demand.average_daily, 1_612_680);
        assert_eq!(proposal.treatment.source, WaterSource::SurfaceWater);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let mut bad = inputs();
        bad.growth_rate = -1.0;
        assert!(matches!(draft(&bad), Err(WqaError::ProposalError(_))));

        let mut bad = inputs();
        bad.design_period = 0;
        assert!(draft(&bad).unwrap_err().to_string().contains("design period"));

        let mut bad = inputs();
        bad.population = 0;
        assert!(draft(&bad).is_err());

        let mut bad = inputs();
        bad.growth_rate = f64::NAN;
        assert!(draft(&bad).is_err());
    }

    #[test]
    fn test_huge_population_is_an_error() {
        let mut huge = inputs();
        huge.population = 200_000_000_000_000_000;
        huge.growth_rate = 2.0;

        let err = draft(&huge).unwrap_err();
        assert!(err.to_string().starts_with("PROPOSAL/"));

        // 4.8e17 people after growth, 60 L each
        huge.community = CommunityType::Village;
        huge.population = 400_000_000_000_000_000;
        assert!(matches!(draft(&huge), Err(WqaError::ProposalError(_))));
    }

    #[test]
    fn test_inputs_from_json() {
        let inputs: ProposalInputs = serde_json::from_value(serde_json::json!({
            "project_name": "Ilupeju",
            "source_description": "Borehole",
            "type": "village",
            "population": 5000,
            "growth_rate": 2.5,
            "design_period": 12
        }))
        .unwrap();
        assert_eq!(inputs.community, CommunityType::Village);

        let labelled: ProposalInputs = serde_json::from_value(serde_json::json!({
            "project_name": "Abeokuta North",
            "source_description": "River Ogun",
            "type": "City (Geometric)",
            "population": 40000,
            "growth_rate": 3.0,
            "design_period": 20
        }))
        .unwrap();
        assert_eq!(labelled.community, CommunityType::City);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(draft(&inputs()).unwrap()).unwrap();
        assert_eq!(value["projection"]["method"], "Geometric Progression Method");
        assert!(value["demand"]["steps"].is_array());
        assert_eq!(value["treatment"]["source"], "surface_water");
        assert_eq!(value["treatment"]["stages"][0], "1. Intake & Screening");
    }
}
