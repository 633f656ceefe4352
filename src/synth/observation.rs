//! Per-(date, region) observation synthesis
//!
//! Each observation is derived from a region's base profile, a seasonal
//! factor shared by all regions on a given day, and independent noise
//! terms. The derived indices are deliberate linear combinations of the
//! upstream indicators plus noise, which is what gives the panel real
//! correlation structure for the analysis side to find.
//!
//! The draw order below is a reproducibility contract: changing it changes
//! every seeded panel.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::models::{Observation, RegionProfile};

/// Standard deviation of the per-row population noise
const POPULATION_NOISE_SD: f64 = 0.001;

/// Standard deviation of the daily urbanization/education drift
const DRIFT_NOISE_SD: f64 = 0.01;

/// Standard deviation of the noise on the derived indices
const INDEX_NOISE_SD: f64 = 0.05;

/// Per-facility staffing ratio draw range
const STAFF_PER_FACILITY_RANGE: (f64, f64) = (5.0, 15.0);

/// Elderly population share draw range
const ELDERLY_SHARE_RANGE: (f64, f64) = (0.1, 0.3);

/// Shared multiplicative seasonal wave for a calendar day
///
/// All regions share the same wave and differ only in base level, so
/// facility counts and income move together over the year.
#[must_use]
pub fn seasonal_factor(date: NaiveDate) -> f64 {
    1.0 + 0.1 * (2.0 * std::f64::consts::PI * f64::from(date.ordinal()) / 365.0).sin()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Synthesizer deriving one observation per (profile, date, rng) triple
pub struct ObservationSynthesizer {
    population_noise: Normal<f64>,
    drift_noise: Normal<f64>,
    index_noise: Normal<f64>,
}

impl Default for ObservationSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationSynthesizer {
    /// Create a synthesizer with the standard noise terms
    #[must_use]
    pub fn new() -> Self {
        // The sigmas are positive constants, so construction cannot fail.
        Self {
            population_noise: Normal::new(0.0, POPULATION_NOISE_SD).unwrap(),
            drift_noise: Normal::new(0.0, DRIFT_NOISE_SD).unwrap(),
            index_noise: Normal::new(0.0, INDEX_NOISE_SD).unwrap(),
        }
    }

    /// Derive a full observation for one (date, region) pair
    ///
    /// Counts are truncated to integers at storage time; rates, scores and
    /// indices are stored at their canonical precision (2 or 3 decimals).
    /// The intermediate arithmetic always runs on the unrounded values.
    pub fn synthesize<R: Rng>(
        &self,
        profile: &RegionProfile,
        date: NaiveDate,
        rng: &mut R,
    ) -> Observation {
        let seasonal = seasonal_factor(date);

        let population = profile.base_population * (1.0 + self.population_noise.sample(rng));
        let medical_facilities = profile.base_medical_facilities * seasonal;
        let urbanization = profile.base_urbanization + self.drift_noise.sample(rng);
        let education_level = profile.base_education_level + self.drift_noise.sample(rng);
        let income_level = profile.base_income_level * seasonal;

        let medical_staff = medical_facilities
            * rng.random_range(STAFF_PER_FACILITY_RANGE.0..STAFF_PER_FACILITY_RANGE.1);
        // Elderly share is exogenous noise, not a regional trait.
        let elderly_population =
            rng.random_range(ELDERLY_SHARE_RANGE.0..ELDERLY_SHARE_RANGE.1);

        let awareness_index =
            0.6 * education_level + 0.4 * urbanization + self.index_noise.sample(rng);
        let accessibility_score = 0.7 * (medical_facilities / population * 100_000.0)
            + 0.3 * urbanization
            + self.index_noise.sample(rng);

        let vaccination_rate = (100.0
            * (0.3 * awareness_index
                + 0.3 * accessibility_score
                + 0.2 * education_level
                + 0.2 * (income_level / 100_000.0)))
            .clamp(0.0, 100.0);

        Observation {
            date,
            region_id: profile.region_id,
            population: population as i64,
            medical_facilities: medical_facilities as i64,
            medical_staff: medical_staff as i64,
            vaccination_rate: round2(vaccination_rate),
            awareness_index: round3(awareness_index),
            accessibility_score: round3(accessibility_score),
            income_level: round2(income_level),
            education_level: round3(education_level),
            urbanization: round3(urbanization),
            elderly_population: round3(elderly_population),
        }
    }
}
