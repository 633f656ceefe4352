//! Tests for panel generation: shape, bounds, ordering, reproducibility.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use medpanel::{GeneratorConfig, PanelAssembler, PanelError, generate_panel};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

#[test]
fn test_panel_has_one_row_per_date_region_pair() {
    for (n_regions, days) in [(1, 1), (3, 2), (10, 30)] {
        let panel = generate_panel(n_regions, days, start(), Some(5)).unwrap();
        assert_eq!(panel.len(), n_regions * days);

        let mut pairs = HashSet::new();
        for obs in panel.rows() {
            assert!(
                pairs.insert((obs.date, obs.region_id)),
                "duplicate pair ({}, {})",
                obs.date,
                obs.region_id
            );
        }
        assert_eq!(pairs.len(), n_regions * days);
    }
}

#[test]
fn test_panel_is_sorted_date_major_region_minor() {
    let panel = generate_panel(4, 5, start(), Some(8)).unwrap();
    let keys: Vec<(NaiveDate, u32)> = panel.rows().iter().map(|o| (o.date, o.region_id)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // The date range covers the request with no gaps.
    assert_eq!(
        panel.date_range(),
        Some((start(), start() + Duration::days(4)))
    );
}

#[test]
fn test_indicator_bounds_hold_for_any_seed() {
    for seed in [0, 1, 99, 12345] {
        let panel = generate_panel(8, 40, start(), Some(seed)).unwrap();
        for obs in panel.rows() {
            assert!(
                (0.0..=100.0).contains(&obs.vaccination_rate),
                "vaccination_rate {} out of range (seed {seed})",
                obs.vaccination_rate
            );
            assert!(
                (0.1..=0.3).contains(&obs.elderly_population),
                "elderly_population {} out of range (seed {seed})",
                obs.elderly_population
            );
            assert!(obs.population > 0);
            assert!(obs.medical_facilities >= 0);
            assert!(obs.medical_staff >= 0);
        }
    }
}

#[test]
fn test_same_seed_is_byte_identical() {
    let first = generate_panel(6, 14, start(), Some(2024)).unwrap();
    let second = generate_panel(6, 14, start(), Some(2024)).unwrap();
    assert_eq!(first, second);

    // Identical down to the serialized representation.
    let a = serde_json::to_string(first.rows()).unwrap();
    let b = serde_json::to_string(second.rows()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parallel_and_sequential_paths_agree() {
    let base = GeneratorConfig::builder()
        .n_regions(120)
        .days(500)
        .start_date(start())
        .random_seed(77);

    let parallel = PanelAssembler::new(base.clone().use_parallel(true).build())
        .assemble()
        .unwrap();
    let sequential = PanelAssembler::new(base.use_parallel(false).build())
        .assemble()
        .unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_invalid_counts_are_rejected() {
    assert!(matches!(
        generate_panel(0, 10, start(), Some(1)),
        Err(PanelError::InvalidArgument(_))
    ));
    assert!(matches!(
        generate_panel(10, 0, start(), Some(1)),
        Err(PanelError::InvalidArgument(_))
    ));
}

#[test]
fn test_filtered_view_preserves_invariants() {
    let panel = generate_panel(6, 10, start(), Some(3)).unwrap();
    let view = panel.filtered(&[2, 4], start() + Duration::days(2), start() + Duration::days(5));

    assert_eq!(view.len(), 2 * 4);
    assert_eq!(view.region_ids(), vec![2, 4]);
    for obs in view.rows() {
        assert!(obs.date >= start() + Duration::days(2));
        assert!(obs.date <= start() + Duration::days(5));
    }
}
