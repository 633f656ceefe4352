//! Per-region summary statistics for one indicator column.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::models::Panel;
use crate::utils::stats;

/// Descriptive statistics of one metric within one region
///
/// `std` is the sample standard deviation (n - 1 denominator) and is `NaN`
/// when the region contributes a single row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Summarize one metric per region over all rows of the panel
///
/// # Errors
/// Returns `EmptyInput` for a panel with zero rows and `InvalidArgument`
/// for a metric name outside the indicator catalog.
pub fn summarize(panel: &Panel, metric: &str) -> Result<BTreeMap<u32, MetricSummary>> {
    if panel.is_empty() {
        return Err(PanelError::EmptyInput(format!(
            "cannot summarize '{metric}' over an empty panel"
        )));
    }

    let mut grouped: FxHashMap<u32, Vec<f64>> = FxHashMap::default();
    for obs in panel.rows() {
        let value = obs.value(metric).ok_or_else(|| {
            PanelError::InvalidArgument(format!("unknown indicator column: {metric}"))
        })?;
        grouped.entry(obs.region_id).or_default().push(value);
    }

    let mut summaries = BTreeMap::new();
    for (region_id, values) in grouped {
        // Groups are never empty by construction.
        let mean = stats::mean(&values).unwrap_or(f64::NAN);
        let std = stats::sample_std(&values).unwrap_or(f64::NAN);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        summaries.insert(
            region_id,
            MetricSummary {
                mean,
                std,
                min,
                max,
                count: values.len(),
            },
        );
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use chrono::NaiveDate;

    fn observation(day: u32, region_id: u32, vaccination_rate: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            region_id,
            population: 1_000_000,
            medical_facilities: 50,
            medical_staff: 500,
            vaccination_rate,
            awareness_index: 0.5,
            accessibility_score: 0.5,
            income_level: 50_000.0,
            education_level: 0.6,
            urbanization: 0.5,
            elderly_population: 0.2,
        }
    }

    #[test]
    fn test_summarize_groups_by_region() {
        let panel = Panel::new(vec![
            observation(1, 1, 40.0),
            observation(1, 2, 70.0),
            observation(2, 1, 60.0),
            observation(2, 2, 80.0),
        ])
        .unwrap();

        let summaries = summarize(&panel, "vaccination_rate").unwrap();
        assert_eq!(summaries.len(), 2);

        let region1 = &summaries[&1];
        assert_eq!(region1.count, 2);
        assert!((region1.mean - 50.0).abs() < 1e-12);
        assert_eq!(region1.min, 40.0);
        assert_eq!(region1.max, 60.0);
        // Sample std of {40, 60} is sqrt(200).
        assert!((region1.std - 200.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_single_row_region_has_nan_std() {
        let panel = Panel::new(vec![observation(1, 1, 40.0)]).unwrap();
        let summaries = summarize(&panel, "vaccination_rate").unwrap();
        assert!(summaries[&1].std.is_nan());
        assert_eq!(summaries[&1].count, 1);
    }

    #[test]
    fn test_summarize_empty_panel_fails() {
        let panel = Panel::new(Vec::new()).unwrap();
        assert!(matches!(
            summarize(&panel, "vaccination_rate"),
            Err(PanelError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_summarize_unknown_column_fails() {
        let panel = Panel::new(vec![observation(1, 1, 40.0)]).unwrap();
        assert!(matches!(
            summarize(&panel, "no_such_column"),
            Err(PanelError::InvalidArgument(_))
        ));
    }
}
