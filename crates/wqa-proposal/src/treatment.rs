//! Treatment train selection by raw water source.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    SurfaceWater,
    Groundwater,
    Rainwater,
}

impl WaterSource {
    /// Classify a free-text source description.
    ///
    /// Matching is case-sensitive on "River" then "Borehole"; anything else
    /// is treated as rainwater harvesting.
    pub fn classify(description: &str) -> Self {
        if description.contains("River") {
            WaterSource::SurfaceWater
        } else if description.contains("Borehole") {
            WaterSource::Groundwater
        } else {
            WaterSource::Rainwater
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            WaterSource::SurfaceWater => {
                "Raw water source: Surface water (River/Stream). High risk of turbidity, \
                 suspended solids, and bacteriological contamination."
            }
            WaterSource::Groundwater => {
                "Raw water source: Deep Groundwater. Generally low turbidity \
                 but potential for dissolved Iron, Manganese, Hardness, or Fluoride."
            }
            WaterSource::Rainwater => {
                "Raw water source: Rainwater Harvesting. Generally pure \
                 but risk of roof contamination (bird droppings, dust, leaves)."
            }
        }
    }

    /// Ordered treatment stages
    pub fn stages(&self) -> &'static [&'static str] {
        match self {
            WaterSource::SurfaceWater => &[
                "1. Intake & Screening",
                "2. Aeration (Cascade)",
                "3. Coagulation (Flash Mix)",
                "4. Flocculation",
                "5. Sedimentation",
                "6. Filtration",
                "7. Disinfection",
                "8. Storage",
            ],
            WaterSource::Groundwater => &[
                "1. Aeration",
                "2. pH Correction",
                "3. Softening (Optional)",
                "4. Filtration (Pressure Sand)",
                "5. Disinfection",
                "6. Elevated Storage",
            ],
            WaterSource::Rainwater => &[
                "1. Catchment & Gutters",
                "2. First Flush Diverter",
                "3. Screening",
                "4. Sedimentation Tank",
                "5. Filtration",
                "6. Disinfection",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Treatment {
    pub source: WaterSource,
    pub source_summary: String,
    pub stages: Vec<String>,
}

pub fn select(description: &str) -> Treatment {
    let source = WaterSource::classify(description);
    Treatment {
        source,
        source_summary: source.summary().to_string(),
        stages: source.stages().iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(WaterSource::classify("River Ogun intake"), WaterSource::SurfaceWater);
        assert_eq!(WaterSource::classify("Deep Borehole"), WaterSource::Groundwater);
        assert_eq!(WaterSource::classify("Roof catchment"), WaterSource::Rainwater);
        // lowercase does not match
        assert_eq!(WaterSource::classify("river"), WaterSource::Rainwater);
    }

    #[test]
    fn test_river_wins_over_borehole() {
        assert_eq!(WaterSource::classify("River and Borehole"), WaterSource::SurfaceWater);
    }

    #[test]
    fn test_select() {
        let treatment = select("Borehole");
        assert_eq!(treatment.stages.len(), 6);
        assert_eq!(treatment.stages[0], "1. Aeration");
        assert!(treatment.source_summary.contains("Deep Groundwater"));

        assert_eq!(select("Surface River").stages.last().unwrap(), "8. Storage");
    }
}
