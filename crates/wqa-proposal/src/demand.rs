//! Water demand from the projected population.

use serde::Serialize;
use wqa_core::{WqaError, WqaResult};

use crate::grouped;

/// Peak factor applied to the average daily demand
pub const PEAK_FACTOR: f64 = 1.15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demand {
    /// Litres per person per day
    pub per_capita: u64,
    /// Q_avg in litres per day
    pub average_daily: u64,
    /// Q_max in litres per day
    pub maximum_daily: f64,
    /// Q_max rounded and digit-grouped, e.g. "448,500"
    pub design_capacity: String,
    pub steps: Vec<String>,
}

pub fn estimate(population: u64, per_capita: u64) -> WqaResult<Demand> {
    let average_daily = population.checked_mul(per_capita).ok_or_else(|| {
        WqaError::ProposalError(format!(
            "daily demand out of range for population {}",
            population
        ))
    })?;
    let maximum_daily = average_daily as f64 * PEAK_FACTOR;
    // u128 holds any u64 scaled by the peak factor
    let maximum_rounded = maximum_daily.round() as u128;
    let design_capacity = grouped(maximum_rounded);

    let steps = vec![
        format!(
            "Assumed Per Capita Demand: {} Liters/person/day (based on community type)",
            per_capita
        ),
        "AVG DAILY DEMAND (Q_avg) = Population * Per Capita".to_string(),
        format!("                       = {} * {}", grouped(population), per_capita),
        format!("                       = {} Liters/day", grouped(average_daily)),
        format!("MAX DAILY DEMAND (Q_max) = Q_avg * Peak Factor ({})", PEAK_FACTOR),
        format!("                       = {} * {}", grouped(average_daily), PEAK_FACTOR),
        format!("                       = {} Liters/day", design_capacity),
    ];

    Ok(Demand {
        per_capita,
        average_daily,
        maximum_daily,
        design_capacity,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_village_demand() {
        let demand = estimate(6_500, 60).unwrap();
        assert_eq!(demand.average_daily, 390_000);
        assert_eq!(demand.design_capacity, "448,500");
        assert!((demand.maximum_daily - 448_500.0).abs() < 1e-6);
        assert_eq!(demand.steps[2], "                       = 6,500 * 60");
        assert_eq!(demand.steps[3], "                       = 390,000 Liters/day");
        assert_eq!(demand.steps[6], "                       = 448,500 Liters/day");
    }

    #[test]
    fn test_peak_factor_line() {
        let demand = estimate(13_439, 120).unwrap();
        assert_eq!(demand.average_daily, 1_612_680);
        assert_eq!(demand.steps[4], "MAX DAILY DEMAND (Q_max) = Q_avg * Peak Factor (1.15)");
        assert_eq!(demand.steps[6], "                       = 1,854,582 Liters/day");
    }

    #[test]
    fn test_demand_overflow_rejected() {
        let err = estimate(200_000_000_000_000_000, 120).unwrap_err();
        assert!(matches!(err, WqaError::ProposalError(_)));
        assert!(err.to_string().contains("daily demand out of range"));
    }

    #[test]
    fn test_design_capacity_near_limit() {
        // Q_avg fits in u64, Q_max does not
        let demand = estimate(u64::MAX / 2, 2).unwrap();
        assert_eq!(demand.design_capacity.len(), 26); // 20 digits, 6 commas
    }
}
