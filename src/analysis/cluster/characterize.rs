//! Human-readable cluster characterization.
//!
//! A feature counts as distinctive for a cluster when its cluster mean
//! deviates from the all-region mean by more than 10 percent relative
//! difference. The flag is a readability device for summaries, not a
//! statistical significance test.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::observation::display_label;
use crate::utils::stats;

/// Relative-difference threshold for flagging a feature, in percent
pub const DISTINCTIVE_THRESHOLD_PCT: f64 = 10.0;

/// Direction of a distinctive feature relative to the all-region mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Deviation {
    Above,
    Below,
}

/// A feature whose cluster mean deviates notably from the global mean
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistinctiveFeature {
    /// Indicator column name
    pub feature: String,
    /// Whether the cluster sits above or below the all-region mean
    pub direction: Deviation,
    /// Absolute relative difference from the all-region mean, in percent
    pub relative_difference_pct: f64,
}

/// Characterization of one cluster
#[derive(Debug, Clone, Serialize)]
pub struct ClusterProfile {
    /// Cluster label
    pub cluster: usize,
    /// Number of member regions; zero when initialization collapsed
    pub size: usize,
    /// Member region ids, ascending
    pub regions: Vec<u32>,
    /// Feature means in original units
    pub feature_means: BTreeMap<String, f64>,
    /// Features deviating more than the threshold from the global mean
    pub distinctive: Vec<DistinctiveFeature>,
}

impl ClusterProfile {
    /// One-line human-readable description of the cluster
    #[must_use]
    pub fn describe(&self) -> String {
        if self.distinctive.is_empty() {
            return format!(
                "Cluster {} ({} regions): no marked deviation from the panel means",
                self.cluster, self.size
            );
        }

        let traits: Vec<String> = self
            .distinctive
            .iter()
            .map(|d| {
                let label = display_label(&d.feature).unwrap_or(d.feature.as_str());
                let direction = match d.direction {
                    Deviation::Above => "above",
                    Deviation::Below => "below",
                };
                format!(
                    "{label} {:.1}% {direction} the panel mean",
                    d.relative_difference_pct
                )
            })
            .collect();

        format!(
            "Cluster {} ({} regions): {}",
            self.cluster,
            self.size,
            traits.join(", ")
        )
    }
}

/// Build per-cluster profiles from region-level means and assignments
pub(crate) fn characterize(
    features: &[&str],
    region_ids: &[u32],
    region_means: &[Vec<f64>],
    assignments: &[usize],
    k: usize,
) -> Vec<ClusterProfile> {
    // Global mean per feature, over region-level means (each region counts
    // once, regardless of how many panel rows it contributed).
    let global_means: Vec<f64> = (0..features.len())
        .map(|j| {
            let column: Vec<f64> = region_means.iter().map(|row| row[j]).collect();
            stats::mean(&column).unwrap_or(f64::NAN)
        })
        .collect();

    (0..k)
        .map(|label| {
            let member_indices: Vec<usize> = assignments
                .iter()
                .enumerate()
                .filter(|&(_, &assigned)| assigned == label)
                .map(|(i, _)| i)
                .collect();

            let regions: Vec<u32> = member_indices.iter().map(|&i| region_ids[i]).collect();

            let mut feature_means = BTreeMap::new();
            let mut distinctive = Vec::new();
            for (j, feature) in features.iter().enumerate() {
                let column: Vec<f64> = member_indices
                    .iter()
                    .map(|&i| region_means[i][j])
                    .collect();
                let cluster_mean = stats::mean(&column).unwrap_or(f64::NAN);
                feature_means.insert((*feature).to_string(), cluster_mean);

                // A zero global mean leaves the relative difference
                // undefined; such a feature is never flagged.
                if global_means[j] == 0.0 || cluster_mean.is_nan() {
                    continue;
                }
                let diff_pct = (cluster_mean - global_means[j]) / global_means[j] * 100.0;
                if diff_pct.abs() > DISTINCTIVE_THRESHOLD_PCT {
                    distinctive.push(DistinctiveFeature {
                        feature: (*feature).to_string(),
                        direction: if diff_pct > 0.0 {
                            Deviation::Above
                        } else {
                            Deviation::Below
                        },
                        relative_difference_pct: diff_pct.abs(),
                    });
                }
            }

            ClusterProfile {
                cluster: label,
                size: regions.len(),
                regions,
                feature_means,
                distinctive,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characterize_flags_deviating_features() {
        // Two regions near 10, two near 90; global mean 50.
        let region_ids = [1, 2, 3, 4];
        let region_means = vec![vec![10.0], vec![12.0], vec![88.0], vec![90.0]];
        let assignments = [0, 0, 1, 1];

        let profiles = characterize(
            &["vaccination_rate"],
            &region_ids,
            &region_means,
            &assignments,
            2,
        );

        assert_eq!(profiles.len(), 2);

        let low = &profiles[0];
        assert_eq!(low.size, 2);
        assert_eq!(low.regions, vec![1, 2]);
        assert_eq!(low.distinctive.len(), 1);
        assert_eq!(low.distinctive[0].direction, Deviation::Below);
        // Cluster mean 11 against a global mean of 50: 78 percent below.
        assert!((low.distinctive[0].relative_difference_pct - 78.0).abs() < 1e-9);

        let high = &profiles[1];
        assert_eq!(high.distinctive[0].direction, Deviation::Above);
    }

    #[test]
    fn test_characterize_within_threshold_is_not_distinctive() {
        let region_ids = [1, 2];
        let region_means = vec![vec![100.0], vec![105.0]];
        let assignments = [0, 1];

        let profiles = characterize(&["income_level"], &region_ids, &region_means, &assignments, 2);
        // Both clusters sit within 10 percent of the global mean of 102.5.
        assert!(profiles[0].distinctive.is_empty());
        assert!(profiles[1].distinctive.is_empty());
    }

    #[test]
    fn test_characterize_reports_empty_clusters() {
        let region_ids = [1, 2];
        let region_means = vec![vec![10.0], vec![11.0]];
        let assignments = [0, 0];

        let profiles = characterize(&["urbanization"], &region_ids, &region_means, &assignments, 2);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].size, 2);
        assert_eq!(profiles[1].size, 0);
        assert!(profiles[1].regions.is_empty());
    }

    #[test]
    fn test_describe_mentions_direction() {
        let region_ids = [1, 2, 3, 4];
        let region_means = vec![vec![10.0], vec![12.0], vec![88.0], vec![90.0]];
        let assignments = [0, 0, 1, 1];

        let profiles = characterize(
            &["vaccination_rate"],
            &region_ids,
            &region_means,
            &assignments,
            2,
        );

        let text = profiles[0].describe();
        assert!(text.contains("below the panel mean"), "got: {text}");
        assert!(text.contains("Vaccination rate"), "got: {text}");
    }
}
