//! Progress reporting for long-running panel assembly, using the
//! indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Style for the panel assembly progress bar
pub const ASSEMBLY_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} rows ({per_sec}) {msg}";

/// Panels below this row count skip progress reporting entirely
pub const PROGRESS_ROW_THRESHOLD: usize = 10_000;

/// Create a progress bar for observation synthesis across a whole panel
///
/// # Arguments
/// * `total_rows` - Number of observations the panel will contain
#[must_use]
pub fn assembly_progress_bar(total_rows: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_rows);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(ASSEMBLY_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Create a hidden progress bar for small panels where reporting is noise
#[must_use]
pub fn hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}
