//! Daily observation model
//!
//! One `Observation` is the panel's atomic row: a full set of indicator
//! values for a single (date, region) pair. Observations are created once
//! by the synthesizer and never mutated afterwards.
//!
//! The numeric indicator columns are addressed by name throughout the
//! analysis surface; the catalog below is the single source of truth for
//! which names exist.

use chrono::NaiveDate;
use serde::Serialize;

/// The numeric indicator columns, in canonical column order
pub const NUMERIC_COLUMNS: [&str; 10] = [
    "population",
    "medical_facilities",
    "medical_staff",
    "vaccination_rate",
    "awareness_index",
    "accessibility_score",
    "income_level",
    "education_level",
    "urbanization",
    "elderly_population",
];

/// Human-readable label for an indicator column, for report output
#[must_use]
pub fn display_label(column: &str) -> Option<&'static str> {
    match column {
        "population" => Some("Population"),
        "medical_facilities" => Some("Medical facilities"),
        "medical_staff" => Some("Medical staff"),
        "vaccination_rate" => Some("Vaccination rate (%)"),
        "awareness_index" => Some("Awareness index"),
        "accessibility_score" => Some("Accessibility score"),
        "income_level" => Some("Income level"),
        "education_level" => Some("Education level"),
        "urbanization" => Some("Urbanization"),
        "elderly_population" => Some("Elderly population share"),
        _ => None,
    }
}

/// A full set of indicator values for one (date, region) pair
///
/// Count-like fields are truncated to integers at synthesis time; rates,
/// scores and indices are stored rounded to their canonical precision
/// (2 decimals for `vaccination_rate` and `income_level`, 3 for the rest).
/// That rounding is part of the contract, not a display concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Region the observation belongs to
    pub region_id: u32,
    /// Resident population
    pub population: i64,
    /// Medical facility count
    pub medical_facilities: i64,
    /// Medical staff headcount
    pub medical_staff: i64,
    /// Vaccinated share of the population, clamped to [0, 100]
    pub vaccination_rate: f64,
    /// Population health-awareness index
    pub awareness_index: f64,
    /// Care accessibility score
    pub accessibility_score: f64,
    /// Mean income
    pub income_level: f64,
    /// Education level
    pub education_level: f64,
    /// Urbanization share
    pub urbanization: f64,
    /// Elderly share of the population, in [0.1, 0.3]
    pub elderly_population: f64,
}

impl Observation {
    /// Numeric value of a named indicator column
    ///
    /// # Returns
    /// `None` when the column name is not in [`NUMERIC_COLUMNS`]
    #[must_use]
    pub fn value(&self, column: &str) -> Option<f64> {
        match column {
            "population" => Some(self.population as f64),
            "medical_facilities" => Some(self.medical_facilities as f64),
            "medical_staff" => Some(self.medical_staff as f64),
            "vaccination_rate" => Some(self.vaccination_rate),
            "awareness_index" => Some(self.awareness_index),
            "accessibility_score" => Some(self.accessibility_score),
            "income_level" => Some(self.income_level),
            "education_level" => Some(self.education_level),
            "urbanization" => Some(self.urbanization),
            "elderly_population" => Some(self.elderly_population),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_observation() -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            region_id: 1,
            population: 1_500_000,
            medical_facilities: 42,
            medical_staff: 380,
            vaccination_rate: 61.25,
            awareness_index: 0.612,
            accessibility_score: 0.488,
            income_level: 54_210.33,
            education_level: 0.703,
            urbanization: 0.561,
            elderly_population: 0.204,
        }
    }

    #[test]
    fn test_value_covers_every_catalog_column() {
        let obs = sample_observation();
        for column in NUMERIC_COLUMNS {
            assert!(obs.value(column).is_some(), "missing column: {column}");
        }
    }

    #[test]
    fn test_value_rejects_unknown_column() {
        let obs = sample_observation();
        assert_eq!(obs.value("date"), None);
        assert_eq!(obs.value("no_such_column"), None);
    }

    #[test]
    fn test_every_column_has_a_label() {
        for column in NUMERIC_COLUMNS {
            assert!(display_label(column).is_some(), "missing label: {column}");
        }
        assert_eq!(display_label("no_such_column"), None);
    }
}
