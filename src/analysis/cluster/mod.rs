//! K-means clustering of regions
//!
//! Aggregates the panel to one feature row per region, standardizes across
//! regions, and partitions the regions by iterative centroid assignment.
//! Initialization is seeded and restarted; the run with the lowest
//! within-cluster sum of squares wins.

pub mod characterize;
pub mod config;
pub mod kmeans;

pub use characterize::{ClusterProfile, Deviation, DistinctiveFeature};
pub use config::{ClusteringConfig, ClusteringConfigBuilder};
pub use kmeans::{ClusteringResult, MAX_CLUSTERS, cluster_regions};
