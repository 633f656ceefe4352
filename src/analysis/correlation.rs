//! Pairwise Pearson correlation over indicator columns.
//!
//! Zero-variance columns make the coefficient undefined; those entries are
//! reported as `NaN` (including the column's own diagonal), never raised as
//! errors and never substituted with zero.

use log::warn;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::models::Panel;
use crate::utils::stats;

/// Square, symmetric correlation matrix indexed by column name
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Column names, in matrix order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Correlation between two named columns
    ///
    /// # Returns
    /// `None` when either name is not part of the matrix; `Some(NaN)` when
    /// the coefficient is undefined for the pair
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.values[i][j])
    }

    /// Whether the coefficient for a pair exists and is defined
    #[must_use]
    pub fn is_defined(&self, a: &str, b: &str) -> bool {
        self.get(a, b).is_some_and(|r| !r.is_nan())
    }

    /// Value at a (row, column) index pair
    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Compute the Pearson correlation matrix over the named columns
///
/// # Errors
/// Returns `EmptyInput` for a panel with zero rows, `InsufficientData` when
/// fewer than two rows remain, and `InvalidArgument` for an empty column
/// list or an unknown column name.
pub fn correlate(panel: &Panel, columns: &[&str]) -> Result<CorrelationMatrix> {
    if panel.is_empty() {
        return Err(PanelError::EmptyInput(
            "cannot correlate over an empty panel".to_string(),
        ));
    }
    if columns.is_empty() {
        return Err(PanelError::InvalidArgument(
            "correlation requires at least one column".to_string(),
        ));
    }
    if panel.len() < 2 {
        return Err(PanelError::InsufficientData(format!(
            "correlation requires at least 2 rows, got {}",
            panel.len()
        )));
    }

    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| panel.column(column))
        .collect::<Result<_>>()?;

    let degenerate: Vec<bool> = series
        .iter()
        .map(|values| matches!(stats::sample_variance(values), Some(v) if v == 0.0))
        .collect();
    for (column, _) in columns.iter().zip(&degenerate).filter(|&(_, &degen)| degen) {
        warn!("column '{column}' has zero variance; its correlations are undefined");
    }

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                if degenerate[i] { f64::NAN } else { 1.0 }
            } else {
                stats::pearson(&series[i], &series[j])
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(ToString::to_string).collect(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use chrono::NaiveDate;

    fn observation(day: u32, region_id: u32, vaccination: f64, income: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            region_id,
            population: 1_000_000,
            medical_facilities: 50,
            medical_staff: 500,
            vaccination_rate: vaccination,
            awareness_index: 0.5,
            accessibility_score: 0.5,
            income_level: income,
            education_level: 0.6,
            urbanization: 0.5,
            elderly_population: 0.2,
        }
    }

    fn linear_panel() -> Panel {
        Panel::new(vec![
            observation(1, 1, 10.0, 20_000.0),
            observation(2, 1, 20.0, 40_000.0),
            observation(3, 1, 30.0, 60_000.0),
            observation(4, 1, 40.0, 80_000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_correlate_symmetric_with_unit_diagonal() {
        let matrix = correlate(&linear_panel(), &["vaccination_rate", "income_level"]).unwrap();

        assert_eq!(matrix.get("vaccination_rate", "vaccination_rate"), Some(1.0));
        assert_eq!(matrix.get("income_level", "income_level"), Some(1.0));

        let r_ab = matrix.get("vaccination_rate", "income_level").unwrap();
        let r_ba = matrix.get("income_level", "vaccination_rate").unwrap();
        assert_eq!(r_ab, r_ba);
        // The two series are perfectly linearly related.
        assert!((r_ab - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlate_zero_variance_column_is_nan_not_error() {
        // awareness_index is constant across the fixture rows.
        let matrix = correlate(&linear_panel(), &["vaccination_rate", "awareness_index"]).unwrap();

        assert!(matrix.get("vaccination_rate", "awareness_index").unwrap().is_nan());
        assert!(matrix.get("awareness_index", "awareness_index").unwrap().is_nan());
        assert!(!matrix.is_defined("vaccination_rate", "awareness_index"));
        assert!(matrix.is_defined("vaccination_rate", "vaccination_rate"));
    }

    #[test]
    fn test_correlate_too_few_rows_fails() {
        let panel = Panel::new(vec![observation(1, 1, 10.0, 20_000.0)]).unwrap();
        assert!(matches!(
            correlate(&panel, &["vaccination_rate"]),
            Err(PanelError::InsufficientData(_))
        ));

        let empty = Panel::new(Vec::new()).unwrap();
        assert!(matches!(
            correlate(&empty, &["vaccination_rate"]),
            Err(PanelError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_correlate_rejects_bad_columns() {
        assert!(matches!(
            correlate(&linear_panel(), &[]),
            Err(PanelError::InvalidArgument(_))
        ));
        assert!(matches!(
            correlate(&linear_panel(), &["no_such_column"]),
            Err(PanelError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_get_unknown_column_is_none() {
        let matrix = correlate(&linear_panel(), &["vaccination_rate"]).unwrap();
        assert_eq!(matrix.get("vaccination_rate", "no_such_column"), None);
    }
}
