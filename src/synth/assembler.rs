//! Full panel assembly
//!
//! Generates one region profile set, then synthesizes one observation per
//! (date, region) pair in date-major, region-minor order. Each date owns an
//! independent RNG stream derived from the base seed, which makes the
//! parallel and sequential paths produce byte-identical panels.

use std::time::Instant;

use chrono::{Duration, NaiveDate};
use log::info;
use rand::prelude::*;
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{Observation, Panel, RegionProfile};
use crate::synth::observation::ObservationSynthesizer;
use crate::synth::profile::RegionProfileGenerator;
use crate::utils::progress;

/// Assembler producing the full ordered panel for a configuration
pub struct PanelAssembler {
    config: GeneratorConfig,
}

impl PanelAssembler {
    // Threshold for switching to parallel synthesis, in panel rows
    const PARALLEL_THRESHOLD: usize = 50_000;

    /// Create a new assembler with the given configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Assemble the full panel
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `n_regions` or `days` is zero
    pub fn assemble(&self) -> Result<Panel> {
        self.config.validate()?;
        let start_time = Instant::now();

        let base_seed = match self.config.random_seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };

        // Profiles consume the base stream; date streams are derived below.
        let mut rng = StdRng::seed_from_u64(base_seed);
        let profiles = RegionProfileGenerator::generate(self.config.n_regions, &mut rng)?;
        info!("Generated {} region base profiles", profiles.len());

        let synthesizer = ObservationSynthesizer::new();
        let total_rows = self.config.total_rows();
        let pb = if total_rows >= progress::PROGRESS_ROW_THRESHOLD {
            progress::assembly_progress_bar(total_rows as u64)
        } else {
            progress::hidden_progress_bar()
        };

        let dates: Vec<NaiveDate> = (0..self.config.days)
            .map(|i| self.config.start_date + Duration::days(i as i64))
            .collect();

        let use_parallel = self.config.use_parallel && total_rows >= Self::PARALLEL_THRESHOLD;

        let mut observations: Vec<Observation> = if use_parallel {
            info!(
                "Synthesizing {} rows in parallel across {} threads",
                total_rows,
                rayon::current_num_threads()
            );
            dates
                .par_iter()
                .enumerate()
                .flat_map(|(day_index, &date)| {
                    let rows =
                        synthesize_date(&synthesizer, &profiles, date, base_seed, day_index);
                    pb.inc(rows.len() as u64);
                    rows
                })
                .collect()
        } else {
            let mut rows = Vec::with_capacity(total_rows);
            for (day_index, &date) in dates.iter().enumerate() {
                rows.extend(synthesize_date(
                    &synthesizer,
                    &profiles,
                    date,
                    base_seed,
                    day_index,
                ));
                pb.inc(profiles.len() as u64);
            }
            rows
        };

        pb.finish_and_clear();

        // The iteration order already satisfies the panel invariant; the
        // stable sort is a defensive check, not a functional necessity.
        observations.sort_by_key(|o| (o.date, o.region_id));

        let panel = Panel::new(observations)?;
        info!(
            "Assembled panel of {} rows ({} regions x {} days) in {:?}",
            panel.len(),
            self.config.n_regions,
            self.config.days,
            start_time.elapsed()
        );

        Ok(panel)
    }
}

/// Synthesize all regions for one date from the date's own RNG stream
fn synthesize_date(
    synthesizer: &ObservationSynthesizer,
    profiles: &[RegionProfile],
    date: NaiveDate,
    base_seed: u64,
    day_index: usize,
) -> Vec<Observation> {
    // Offset by one so day 0 does not replay the profile stream.
    let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(day_index as u64 + 1));
    profiles
        .iter()
        .map(|profile| synthesizer.synthesize(profile, date, &mut rng))
        .collect()
}

/// Generate a full panel in one call
///
/// This is the crate's primary generation entry point: `n_regions` regions
/// over `days` consecutive days starting at `start_date`, reproducible when
/// `random_seed` is supplied.
///
/// # Errors
/// Returns `InvalidArgument` when `n_regions` or `days` is zero
pub fn generate_panel(
    n_regions: usize,
    days: usize,
    start_date: NaiveDate,
    random_seed: Option<u64>,
) -> Result<Panel> {
    let mut builder = GeneratorConfig::builder()
        .n_regions(n_regions)
        .days(days)
        .start_date(start_date);
    if let Some(seed) = random_seed {
        builder = builder.random_seed(seed);
    }
    PanelAssembler::new(builder.build()).assemble()
}
