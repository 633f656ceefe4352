//! A Rust library for synthesizing multi-region, multi-day panels of
//! correlated health-system indicators, and for deriving summary
//! statistics, correlation matrices, and k-means region clusterings
//! from them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod synth;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::GeneratorConfig;
pub use error::{PanelError, Result};
pub use models::{NUMERIC_COLUMNS, Observation, Panel, RegionProfile, display_label};

// Synthesis
pub use synth::{PanelAssembler, generate_panel};

// Analysis capabilities
pub use analysis::{
    ClusterProfile, ClusteringConfig, ClusteringResult, CorrelationMatrix, MetricSummary,
    cluster_regions, correlate, summarize,
};
