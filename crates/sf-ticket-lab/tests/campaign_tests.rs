//! End-to-end campaign engine tests
//!
//! Covers:
//! - Duplicate-free allocation within [1, N]
//! - Panel shape invariants for every winning record
//! - Exact fill versus short allocation
//! - Deterministic starvation order under scarcity
//! - Edition bounds
//! - Seed variation preserving all invariants

use std::collections::HashSet;

use sf_core::{DECOY_COUNT, MATCH_COUNT, MAX_DECOY_COPIES, PANEL_SLOTS};
use sf_ticket_lab::{
    CampaignConfig, DecoyCatalog, EditionRange, PrizeTier, RunResult, TicketEngine,
};

fn run_seeded(config: CampaignConfig, seed: u64) -> RunResult {
    let mut engine = TicketEngine::with_config(config);
    engine.seed(seed);
    engine.run().unwrap()
}

fn assert_run_invariants(result: &RunResult, ticket_count: u32) {
    // No ticket belongs to two tiers, ids stay in [1, N]
    let mut seen = HashSet::new();
    for tier in &result.allocations.tiers {
        assert!(tier.awarded() <= tier.requested);
        for &ticket in &tier.winners {
            assert!(seen.insert(ticket));
            assert!((1..=ticket_count).contains(&ticket));
        }
    }
    assert_eq!(seen.len(), result.records.len());

    // Panel shape per record
    for record in &result.records {
        let prize = record.prize_value.to_string();
        assert_eq!(record.panel.len(), PANEL_SLOTS);

        let matches = record.panel.iter().filter(|slot| **slot == prize).count();
        assert_eq!(matches, MATCH_COUNT);

        let decoys: Vec<String> = record
            .panel
            .iter()
            .filter(|slot| **slot != prize)
            .cloned()
            .collect();
        assert_eq!(decoys.len(), DECOY_COUNT);
        for decoy in &decoys {
            let copies = decoys.iter().filter(|other| *other == decoy).count();
            assert!(copies <= MAX_DECOY_COPIES);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ALLOCATION PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_campaign_invariants() {
    let result = run_seeded(CampaignConfig::default(), 1);
    assert_run_invariants(&result, 100);
}

#[test]
fn test_exact_fill_when_supply_matches_demand() {
    let result = run_seeded(CampaignConfig::default(), 17);
    assert_eq!(result.allocations.total_requested(), 100);
    assert_eq!(result.allocations.total_awarded(), 100);
    assert!(!result.allocations.is_short());
}

#[test]
fn test_earlier_tiers_fill_before_later_ones_starve() {
    let mut config = CampaignConfig::default();
    config.ticket_count = 5;
    config.tiers = vec![
        PrizeTier::new(100_000, 3),
        PrizeTier::new(50_000, 3),
        PrizeTier::new(10_000, 2),
    ];

    let result = run_seeded(config, 23);
    assert_run_invariants(&result, 5);

    let tiers = &result.allocations.tiers;
    assert_eq!(tiers[0].awarded(), 3);
    assert_eq!(tiers[1].awarded(), 2);
    assert_eq!(tiers[2].awarded(), 0);
    assert_eq!(result.allocations.total_awarded(), 5);
}

#[test]
fn test_two_ticket_pool_starves_trailing_tier() {
    let mut config = CampaignConfig::default();
    config.ticket_count = 2;
    config.tiers = vec![
        PrizeTier::new(100_000, 1),
        PrizeTier::new(50_000, 1),
        PrizeTier::new(10_000, 4),
    ];

    let result = run_seeded(config, 31);
    let tiers = &result.allocations.tiers;
    assert_eq!(tiers[0].awarded(), 1);
    assert_eq!(tiers[1].awarded(), 1);
    assert_eq!(tiers[2].requested, 4);
    assert_eq!(tiers[2].awarded(), 0);
    assert_eq!(tiers[2].shortfall(), 4);
    assert_eq!(result.records.len(), 2);
}

// ═══════════════════════════════════════════════════════════════════════════════
// PANEL PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_small_campaign_decoys_come_from_catalog_only() {
    let mut config = CampaignConfig::default();
    config.ticket_count = 10;
    config.tiers = vec![PrizeTier::new(1_000, 1), PrizeTier::new(100, 3)];
    config.catalog = DecoyCatalog::new(vec![100, 100, 500, 500, 1000, 1000, 5000, 5000]);

    let result = run_seeded(config, 41);
    assert_run_invariants(&result, 10);
    assert_eq!(result.records.len(), 4);

    for record in &result.records {
        let prize = record.prize_value.to_string();
        for slot in record.panel.iter().filter(|slot| **slot != prize) {
            assert!(
                ["100", "500", "1000", "5000"].contains(&slot.as_str()),
                "decoy {slot} not in catalog"
            );
        }
    }
}

#[test]
fn test_six_entry_catalog_is_rejected_up_front() {
    let mut config = CampaignConfig::default();
    config.ticket_count = 10;
    config.tiers = vec![PrizeTier::new(1_000, 1), PrizeTier::new(100, 3)];
    config.catalog = DecoyCatalog::new(vec![100, 100, 500, 500, 1000, 1000]);

    let mut engine = TicketEngine::with_config(config);
    engine.seed(43);
    assert!(engine.run().is_err());
}

// ═══════════════════════════════════════════════════════════════════════════════
// EDITION PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_editions_stay_in_configured_bounds() {
    let mut config = CampaignConfig::default();
    config.editions = Some(EditionRange::new(3, 4));

    let result = run_seeded(config, 53);
    assert_eq!(result.records.len(), 100);
    for record in &result.records {
        let edition = record.edition.unwrap();
        assert!((3..=4).contains(&edition));
    }

    let summary = result.summary();
    assert_eq!(summary.editions.len(), 100);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SEED VARIATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_different_seeds_vary_allocation_but_keep_invariants() {
    let result_a = run_seeded(CampaignConfig::default(), 61);
    let result_b = run_seeded(CampaignConfig::default(), 62);

    assert_run_invariants(&result_a, 100);
    assert_run_invariants(&result_b, 100);

    let ids_a = result_a.summary().ticket_ids;
    let ids_b = result_b.summary().ticket_ids;
    assert_ne!(ids_a, ids_b);
}
