//! Campaign orchestration

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use sf_core::{RegistrySummary, TicketResult, WinningRecord};

use crate::allocate::{AllocationReport, allocate};
use crate::config::CampaignConfig;
use crate::panel::PanelGenerator;
use crate::pool::TicketPool;

/// Ticket Engine
///
/// Runs a campaign end to end: validates the configuration, allocates
/// tickets across the prize schedule, and builds one reveal panel per
/// winning ticket.
pub struct TicketEngine {
    /// Configuration
    config: CampaignConfig,
    /// Random number generator
    rng: StdRng,
}

/// Complete output of one campaign run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Requested-versus-actual allocation per tier
    pub allocations: AllocationReport,
    /// Winning records in tier order, then draw order
    pub records: Vec<WinningRecord>,
}

impl RunResult {
    /// Derive the registry summary view
    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary::from_records(&self.records)
    }
}

impl TicketEngine {
    /// Create a new engine with the default campaign
    pub fn new() -> Self {
        Self::with_config(CampaignConfig::default())
    }

    /// Create with specific config
    pub fn with_config(config: CampaignConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Get current config
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Seed RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Execute the campaign
    ///
    /// Configuration errors abort before any draw, with no partial output.
    /// Pool exhaustion is not an error; it surfaces as per-tier shortfall in
    /// the allocation report.
    pub fn run(&mut self) -> TicketResult<RunResult> {
        self.config.validate()?;

        let requested = self.config.total_requested();
        if requested > self.config.ticket_count {
            log::warn!(
                "schedule requests {} winners but only {} tickets exist",
                requested,
                self.config.ticket_count
            );
        }

        let mut pool = TicketPool::new(self.config.ticket_count)?;
        let allocations = allocate(&mut pool, &self.config.tiers, &mut self.rng);

        let generator = PanelGenerator::new(self.config.catalog.clone());
        let mut records = Vec::with_capacity(allocations.total_awarded() as usize);
        for tier in &allocations.tiers {
            for &ticket_id in &tier.winners {
                let panel = generator.build_panel(tier.face_value, &mut self.rng)?;
                let edition = self
                    .config
                    .editions
                    .as_ref()
                    .map(|range| range.draw(&mut self.rng));
                records.push(WinningRecord {
                    ticket_id,
                    prize_value: tier.face_value,
                    panel,
                    edition,
                });
            }
        }

        log::info!(
            "campaign '{}': {} of {} requested winners across {} tiers",
            self.config.name,
            allocations.total_awarded(),
            requested,
            allocations.tiers.len()
        );

        Ok(RunResult {
            allocations,
            records,
        })
    }

    /// Export config as JSON
    pub fn export_config(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap_or_default()
    }

    /// Import config from JSON
    pub fn import_config(&mut self, json: &str) -> Result<(), String> {
        let config: CampaignConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))?;
        self.config = config;
        Ok(())
    }
}

impl Default for TicketEngine {
    fn default() -> Self {
        Self::new()
    }
}
