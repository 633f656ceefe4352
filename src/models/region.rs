//! Region base-profile model
//!
//! A `RegionProfile` holds the static parameters a region is born with.
//! Daily observations are derived from these plus seasonal and random
//! perturbation; the profile itself never changes during a generation run.

use serde::Serialize;

/// Static base profile for one region
///
/// Base attributes are drawn once per generation run and are immutable
/// thereafter. `base_urbanization` lies in [0.2, 0.9] at draw time; the
/// daily observation may drift slightly outside through noise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionProfile {
    /// Region identifier, unique, 1..=N
    pub region_id: u32,
    /// Resident population at baseline
    pub base_population: f64,
    /// Medical facility count at baseline
    pub base_medical_facilities: f64,
    /// Urbanization share at baseline, in [0.2, 0.9]
    pub base_urbanization: f64,
    /// Education level at baseline, in [0.4, 0.9]
    pub base_education_level: f64,
    /// Mean income at baseline
    pub base_income_level: f64,
}

impl RegionProfile {
    /// Create a new base profile
    #[must_use]
    pub fn new(
        region_id: u32,
        base_population: f64,
        base_medical_facilities: f64,
        base_urbanization: f64,
        base_education_level: f64,
        base_income_level: f64,
    ) -> Self {
        Self {
            region_id,
            base_population,
            base_medical_facilities,
            base_urbanization,
            base_education_level,
            base_income_level,
        }
    }
}
