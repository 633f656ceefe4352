//! Panel model
//!
//! A `Panel` is the full ordered table of observations across all dates and
//! regions: exactly one row per (date, region_id) pair, sorted primarily by
//! date and secondarily by region id. The constructor enforces both
//! invariants so downstream analysis can rely on them.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::models::observation::Observation;

/// An ordered sequence of observations covering dates × regions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    observations: Vec<Observation>,
}

impl Panel {
    /// Create a panel from observations, enforcing the ordering invariant
    ///
    /// # Errors
    /// Returns `InvalidArgument` when the rows are not sorted by
    /// (date, region_id) or when a (date, region_id) pair occurs twice.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        for window in observations.windows(2) {
            let prev = (window[0].date, window[0].region_id);
            let next = (window[1].date, window[1].region_id);
            if prev >= next {
                return Err(PanelError::InvalidArgument(format!(
                    "panel rows out of order or duplicated at ({}, region {})",
                    window[1].date, window[1].region_id
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Number of rows in the panel
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the panel has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All rows, in (date, region_id) order
    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.observations
    }

    /// Distinct region ids present in the panel, ascending
    #[must_use]
    pub fn region_ids(&self) -> Vec<u32> {
        let ids: BTreeSet<u32> = self.observations.iter().map(|o| o.region_id).collect();
        ids.into_iter().collect()
    }

    /// First and last observation date
    ///
    /// # Returns
    /// `None` for an empty panel
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Extract a named indicator column across all rows
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a column name outside the catalog
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        self.observations
            .iter()
            .map(|o| {
                o.value(name).ok_or_else(|| {
                    PanelError::InvalidArgument(format!("unknown indicator column: {name}"))
                })
            })
            .collect()
    }

    /// A filtered view restricted to a region subset and a date range
    ///
    /// Both bounds are inclusive. The result is a self-contained panel that
    /// preserves the ordering invariant, suitable for handing straight to
    /// the analysis operations.
    #[must_use]
    pub fn filtered(&self, regions: &[u32], from: NaiveDate, to: NaiveDate) -> Self {
        let observations = self
            .observations
            .iter()
            .filter(|o| o.date >= from && o.date <= to && regions.contains(&o.region_id))
            .cloned()
            .collect();
        // A subsequence of a sorted, duplicate-free sequence keeps both properties.
        Self { observations }
    }
}
