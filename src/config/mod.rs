//! Configuration for panel generation.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{PanelError, Result};

/// Configuration for a panel generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of regions to synthesize, ids 1..=n
    pub n_regions: usize,
    /// Number of consecutive days to cover
    pub days: usize,
    /// First calendar day of the panel
    pub start_date: NaiveDate,
    /// Optional random seed for reproducible generation
    pub random_seed: Option<u64>,
    /// Whether to synthesize dates in parallel for large panels
    pub use_parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_regions: 50,                                          // Full regional panel
            days: 365,                                              // One year of daily data
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            random_seed: None,                                      // Fresh entropy per run
            use_parallel: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a generator configuration
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Check the configuration for malformed counts
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `n_regions` or `days` is zero
    pub fn validate(&self) -> Result<()> {
        if self.n_regions < 1 {
            return Err(PanelError::InvalidArgument(
                "n_regions must be at least 1".to_string(),
            ));
        }
        if self.days < 1 {
            return Err(PanelError::InvalidArgument(
                "days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of rows the generated panel will contain
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.n_regions * self.days
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Regions: {}", self.n_regions)?;
        writeln!(f, "  Days: {}", self.days)?;
        writeln!(f, "  Start Date: {}", self.start_date)?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        writeln!(f, "  Parallel: {}", self.use_parallel)?;
        Ok(())
    }
}

/// Builder for constructing a generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Set the number of regions
    #[must_use]
    pub const fn n_regions(mut self, n_regions: usize) -> Self {
        self.config.n_regions = n_regions;
        self
    }

    /// Set the number of days
    #[must_use]
    pub const fn days(mut self, days: usize) -> Self {
        self.config.days = days;
        self
    }

    /// Set the first calendar day
    #[must_use]
    pub const fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.config.start_date = start_date;
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set whether to use parallel synthesis
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.config.use_parallel = parallel;
        self
    }

    /// Build the generator configuration
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
