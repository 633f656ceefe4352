use std::time::Instant;

use chrono::{Duration, NaiveDate};
use log::info;
use medpanel::analysis::{ClusteringConfig, cluster_regions, correlate, summarize};
use medpanel::{GeneratorConfig, PanelAssembler};

/// Columns the correlation report covers (everything except raw population)
const ANALYSIS_COLUMNS: [&str; 9] = [
    "vaccination_rate",
    "medical_facilities",
    "medical_staff",
    "awareness_index",
    "accessibility_score",
    "income_level",
    "education_level",
    "urbanization",
    "elderly_population",
];

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Generate a full-year panel across fifty regions
    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let config = GeneratorConfig::builder()
        .n_regions(50)
        .days(365)
        .start_date(start_date)
        .random_seed(42)
        .build();
    let end_date = start_date + Duration::days(config.days as i64 - 1);

    let start = Instant::now();
    let panel = PanelAssembler::new(config).assemble()?;
    info!("Generated {} rows in {:?}", panel.len(), start.elapsed());

    // Example 1: per-region vaccination statistics on a filtered view
    let view = panel.filtered(&[1, 2, 3, 4, 5], start_date, end_date);
    let summaries = summarize(&view, "vaccination_rate")?;
    for (region_id, summary) in &summaries {
        info!(
            "Region {region_id}: vaccination mean {:.2} std {:.2} min {:.2} max {:.2} over {} days",
            summary.mean, summary.std, summary.min, summary.max, summary.count
        );
    }

    // Example 2: correlation matrix over the analysis columns
    let matrix = correlate(&view, &ANALYSIS_COLUMNS)?;
    for (i, column) in matrix.columns().iter().enumerate() {
        let row: Vec<String> = (0..matrix.columns().len())
            .map(|j| format!("{:+.2}", matrix.value_at(i, j)))
            .collect();
        info!("{column:>20} [{}]", row.join(" "));
    }

    // Example 3: cluster all regions on the default feature set
    let clustering = ClusteringConfig::builder().k(3).random_seed(42).build();
    let result = cluster_regions(
        &panel,
        &["vaccination_rate", "accessibility_score", "income_level"],
        &clustering,
    )?;
    info!(
        "Clustering converged: {} ({} iterations, inertia {:.3})",
        result.converged, result.iterations, result.inertia
    );
    for profile in &result.clusters {
        info!("{}", profile.describe());
    }

    Ok(())
}
