//! Emits a generated panel together with its analyses as one JSON document,
//! the shape an external dashboard consumes.

use chrono::NaiveDate;
use medpanel::analysis::{ClusteringConfig, cluster_regions, correlate, summarize};
use medpanel::generate_panel;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let panel = generate_panel(10, 90, start_date, Some(42))?;

    let vaccination_summary = summarize(&panel, "vaccination_rate")?;
    let correlation = correlate(
        &panel,
        &[
            "vaccination_rate",
            "awareness_index",
            "accessibility_score",
            "income_level",
            "education_level",
            "urbanization",
        ],
    )?;
    let clustering = cluster_regions(
        &panel,
        &["vaccination_rate", "accessibility_score", "income_level"],
        &ClusteringConfig::builder().k(3).random_seed(42).build(),
    )?;

    let feed = json!({
        "rows": panel.rows(),
        "vaccination_summary": vaccination_summary,
        "correlation": correlation,
        "clustering": clustering,
    });
    println!("{}", serde_json::to_string_pretty(&feed)?);

    Ok(())
}
