//! Configuration for the region clustering process.

use std::fmt;

/// Configuration for a k-means clustering run
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Number of clusters to form
    pub k: usize,

    /// Iteration cap per restart
    pub max_iterations: usize,

    /// Number of independent seeded initializations; the run with the
    /// lowest within-cluster sum of squares is kept
    pub restarts: usize,

    /// Optional random seed for reproducible centroid initialization
    pub random_seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            k: 3,                 // Small interpretable grouping
            max_iterations: 300,  // Converges far earlier in practice
            restarts: 10,         // Guards against a bad initialization
            random_seed: None,
        }
    }
}

impl ClusteringConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a clustering configuration
    #[must_use]
    pub fn builder() -> ClusteringConfigBuilder {
        ClusteringConfigBuilder::new()
    }
}

impl fmt::Display for ClusteringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clustering Configuration:")?;
        writeln!(f, "  Clusters: {}", self.k)?;
        writeln!(f, "  Max Iterations: {}", self.max_iterations)?;
        writeln!(f, "  Restarts: {}", self.restarts)?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        Ok(())
    }
}

/// Builder for constructing a clustering configuration
#[derive(Debug, Clone, Default)]
pub struct ClusteringConfigBuilder {
    config: ClusteringConfig,
}

impl ClusteringConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ClusteringConfig::default(),
        }
    }

    /// Set the number of clusters
    #[must_use]
    pub const fn k(mut self, k: usize) -> Self {
        self.config.k = k;
        self
    }

    /// Set the iteration cap per restart
    #[must_use]
    pub const fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the number of restarts
    #[must_use]
    pub const fn restarts(mut self, restarts: usize) -> Self {
        self.config.restarts = restarts;
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Build the clustering configuration
    #[must_use]
    pub fn build(self) -> ClusteringConfig {
        self.config
    }
}
