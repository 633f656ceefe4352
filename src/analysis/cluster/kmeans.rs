//! Seeded k-means over standardized region-level means.

use std::collections::BTreeMap;

use log::{info, warn};
use rand::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;

use crate::analysis::cluster::characterize::{ClusterProfile, characterize};
use crate::analysis::cluster::config::ClusteringConfig;
use crate::error::{PanelError, Result};
use crate::models::Panel;
use crate::utils::stats;

/// Maximum supported cluster count
pub const MAX_CLUSTERS: usize = 10;

/// Feature vectors are short (a handful of indicator columns), so they live
/// inline rather than on the heap.
type FeatureVec = SmallVec<[f64; 8]>;

/// Outcome of a clustering run
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringResult {
    /// Cluster label per region id
    pub assignments: BTreeMap<u32, usize>,
    /// Per-cluster characterization, indexed by cluster label
    pub clusters: Vec<ClusterProfile>,
    /// Iterations the winning restart took
    pub iterations: usize,
    /// Whether the winning restart converged before the iteration cap
    pub converged: bool,
    /// Within-cluster sum of squares of the winning restart
    pub inertia: f64,
}

struct KMeansRun {
    assignments: Vec<usize>,
    iterations: usize,
    converged: bool,
    inertia: f64,
}

/// Cluster regions by the mean of each feature over the panel's date range
///
/// Aggregates to one row per region, standardizes each feature to zero mean
/// and unit variance across regions, then partitions the regions into `k`
/// groups by iterative centroid assignment. Initialization is seeded and
/// restarted `config.restarts` times; ties in nearest-centroid assignment
/// break to the lowest cluster index. K-means may converge with fewer than
/// `k` non-empty groups when an initialization collapses; that outcome is
/// reported, not hidden.
///
/// # Errors
/// Returns `EmptyInput` for a panel with zero rows, and `InvalidArgument`
/// for an empty feature list, an unknown feature column, or `k` outside
/// `[2, min(10, number of regions)]`.
pub fn cluster_regions(
    panel: &Panel,
    features: &[&str],
    config: &ClusteringConfig,
) -> Result<ClusteringResult> {
    if panel.is_empty() {
        return Err(PanelError::EmptyInput(
            "cannot cluster an empty panel".to_string(),
        ));
    }
    if features.is_empty() {
        return Err(PanelError::InvalidArgument(
            "clustering requires at least one feature column".to_string(),
        ));
    }

    let (region_ids, region_means) = aggregate_region_means(panel, features)?;
    let n_regions = region_ids.len();
    let max_k = MAX_CLUSTERS.min(n_regions);
    if config.k < 2 || config.k > max_k {
        return Err(PanelError::InvalidArgument(format!(
            "k must lie in [2, {max_k}] for {n_regions} regions, got {}",
            config.k
        )));
    }

    let points = standardize(&region_means, features);

    let base_seed = match config.random_seed {
        Some(seed) => seed,
        None => rand::rng().random(),
    };

    let mut rng = StdRng::seed_from_u64(base_seed);
    let mut best = run_once(&points, config.k, config.max_iterations, &mut rng);
    for restart in 1..config.restarts.max(1) {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(restart as u64));
        let run = run_once(&points, config.k, config.max_iterations, &mut rng);
        if run.inertia < best.inertia {
            best = run;
        }
    }

    let non_empty = (0..config.k)
        .filter(|label| best.assignments.iter().any(|a| a == label))
        .count();
    if non_empty < config.k {
        warn!(
            "initialization collapse: {} of {} clusters are empty",
            config.k - non_empty,
            config.k
        );
    }
    if !best.converged {
        warn!(
            "k-means hit the iteration cap of {} without stabilizing",
            config.max_iterations
        );
    }
    info!(
        "Clustered {} regions into {} groups in {} iterations (inertia {:.4})",
        n_regions, non_empty, best.iterations, best.inertia
    );

    let clusters = characterize(
        features,
        &region_ids,
        &region_means,
        &best.assignments,
        config.k,
    );

    let assignments = region_ids
        .iter()
        .copied()
        .zip(best.assignments.iter().copied())
        .collect();

    Ok(ClusteringResult {
        assignments,
        clusters,
        iterations: best.iterations,
        converged: best.converged,
        inertia: best.inertia,
    })
}

/// Aggregate the panel to one mean feature row per region, region-id order
fn aggregate_region_means(
    panel: &Panel,
    features: &[&str],
) -> Result<(Vec<u32>, Vec<Vec<f64>>)> {
    let mut grouped: BTreeMap<u32, Vec<Vec<f64>>> = BTreeMap::new();
    for obs in panel.rows() {
        let row: Vec<f64> = features
            .iter()
            .map(|feature| {
                obs.value(feature).ok_or_else(|| {
                    PanelError::InvalidArgument(format!("unknown indicator column: {feature}"))
                })
            })
            .collect::<Result<_>>()?;
        grouped.entry(obs.region_id).or_default().push(row);
    }

    let mut region_ids = Vec::with_capacity(grouped.len());
    let mut region_means = Vec::with_capacity(grouped.len());
    for (region_id, rows) in grouped {
        let means: Vec<f64> = (0..features.len())
            .map(|j| {
                let column: Vec<f64> = rows.iter().map(|row| row[j]).collect();
                stats::mean(&column).unwrap_or(f64::NAN)
            })
            .collect();
        region_ids.push(region_id);
        region_means.push(means);
    }

    Ok((region_ids, region_means))
}

/// Standardize each feature to zero mean and unit variance across regions
///
/// Uses the population standard deviation, matching the usual scaler
/// semantics for clustering. A zero-variance feature carries no separating
/// information and standardizes to all zeros.
fn standardize(region_means: &[Vec<f64>], features: &[&str]) -> Vec<FeatureVec> {
    let n = region_means.len() as f64;
    let n_features = features.len();

    let mut means = vec![0.0; n_features];
    let mut stds = vec![0.0; n_features];
    for j in 0..n_features {
        let mean = region_means.iter().map(|row| row[j]).sum::<f64>() / n;
        let variance = region_means
            .iter()
            .map(|row| (row[j] - mean) * (row[j] - mean))
            .sum::<f64>()
            / n;
        means[j] = mean;
        stds[j] = variance.sqrt();
        if stds[j] == 0.0 {
            warn!(
                "feature '{}' has zero variance across regions and will not separate clusters",
                features[j]
            );
        }
    }

    region_means
        .iter()
        .map(|row| {
            (0..n_features)
                .map(|j| {
                    if stds[j] == 0.0 {
                        0.0
                    } else {
                        (row[j] - means[j]) / stds[j]
                    }
                })
                .collect()
        })
        .collect()
}

/// One seeded k-means run: sample k distinct points as centroids, then
/// alternate assignment and centroid recomputation until stable
fn run_once(points: &[FeatureVec], k: usize, max_iterations: usize, rng: &mut StdRng) -> KMeansRun {
    let n_features = points[0].len();

    let mut indices: Vec<usize> = (0..points.len()).collect();
    indices.partial_shuffle(rng, k);
    let mut centroids: Vec<FeatureVec> = indices[..k].iter().map(|&i| points[i].clone()).collect();

    let mut assignments: Vec<usize> = points
        .iter()
        .map(|point| nearest_centroid(point, &centroids))
        .collect();

    let mut iterations = 0;
    let mut converged = false;
    for iter in 1..=max_iterations {
        iterations = iter;

        // Recompute each centroid as the mean of its assigned points; an
        // empty cluster keeps its previous centroid.
        for (label, centroid) in centroids.iter_mut().enumerate() {
            let mut sums: FeatureVec = SmallVec::from_elem(0.0, n_features);
            let mut count = 0usize;
            for (point, &assigned) in points.iter().zip(&assignments) {
                if assigned == label {
                    for (sum, value) in sums.iter_mut().zip(point) {
                        *sum += value;
                    }
                    count += 1;
                }
            }
            if count > 0 {
                for (slot, sum) in centroid.iter_mut().zip(&sums) {
                    *slot = sum / count as f64;
                }
            }
        }

        let next: Vec<usize> = points
            .iter()
            .map(|point| nearest_centroid(point, &centroids))
            .collect();

        if next == assignments {
            converged = true;
            break;
        }
        assignments = next;
    }

    let inertia = points
        .iter()
        .zip(&assignments)
        .map(|(point, &label)| squared_distance(point, &centroids[label]))
        .sum();

    KMeansRun {
        assignments,
        iterations,
        converged,
        inertia,
    }
}

/// Index of the nearest centroid; ties break to the lowest cluster index
fn nearest_centroid(point: &FeatureVec, centroids: &[FeatureVec]) -> usize {
    let mut best = 0;
    let mut best_distance = squared_distance(point, &centroids[0]);
    for (label, centroid) in centroids.iter().enumerate().skip(1) {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best = label;
            best_distance = distance;
        }
    }
    best
}

fn squared_distance(a: &FeatureVec, b: &FeatureVec) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
