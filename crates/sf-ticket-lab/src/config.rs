//! Campaign configuration

use rand::Rng;
use serde::{Deserialize, Serialize};

use sf_core::{DECOY_COUNT, Denomination, MAX_DECOY_COPIES, TicketError, TicketResult};

/// One prize tier: a face value and how many tickets must win it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Prize denomination
    pub face_value: Denomination,
    /// Tickets this tier claims
    pub count: u32,
}

impl PrizeTier {
    /// Create a tier
    pub fn new(face_value: Denomination, count: u32) -> Self {
        Self { face_value, count }
    }

    /// Value paid out when the tier fills completely
    pub fn total_value(&self) -> u64 {
        self.face_value as u64 * self.count as u64
    }
}

/// Multiset of denominations eligible to appear as panel decoys
///
/// Duplicate entries are meaningful: they bound how often a denomination may
/// show up across one panel's decoy slots. Callers supply the catalog per
/// deployment; no fixed shape is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoyCatalog {
    /// Catalog entries
    pub entries: Vec<Denomination>,
}

impl DecoyCatalog {
    /// Create a catalog from raw entries
    pub fn new(entries: Vec<Denomination>) -> Self {
        Self { entries }
    }

    /// Standard catalog: every denomination twice
    pub fn standard() -> Self {
        Self::new(vec![
            100, 100, 500, 500, 1000, 1000, 5000, 5000, 10000, 10000, 50000, 50000, 100000, 100000,
        ])
    }

    /// Total entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of one denomination
    pub fn multiplicity(&self, value: Denomination) -> usize {
        self.entries.iter().filter(|&&entry| entry == value).count()
    }

    /// True when the denomination appears at least once
    pub fn contains(&self, value: Denomination) -> bool {
        self.entries.contains(&value)
    }

    /// Decoy slots usable for a given prize
    ///
    /// Counts each non-prize denomination at most `MAX_DECOY_COPIES` times,
    /// matching what a panel may actually draw.
    pub fn decoy_slots(&self, prize: Denomination) -> usize {
        let mut seen: Vec<Denomination> = Vec::new();
        let mut slots = 0;
        for &entry in &self.entries {
            if entry == prize || seen.contains(&entry) {
                continue;
            }
            seen.push(entry);
            slots += self.multiplicity(entry).min(MAX_DECOY_COPIES);
        }
        slots
    }

    /// Working copy with every occurrence of the prize removed
    pub fn working_copy(&self, prize: Denomination) -> Vec<Denomination> {
        self.entries
            .iter()
            .copied()
            .filter(|&entry| entry != prize)
            .collect()
    }
}

impl Default for DecoyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inclusive range of edition templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionRange {
    /// Lowest template number
    pub min: u8,
    /// Highest template number
    pub max: u8,
}

impl EditionRange {
    /// Create a range
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// True when an edition falls inside the range
    pub fn contains(&self, edition: u8) -> bool {
        (self.min..=self.max).contains(&edition)
    }

    /// Draw one edition uniformly
    pub fn draw<R: Rng>(&self, rng: &mut R) -> u8 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for EditionRange {
    /// Ten print templates, numbered from 1
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

/// Complete campaign configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Campaign name
    pub name: String,
    /// Total tickets printed (ids 1..=ticket_count)
    pub ticket_count: u32,
    /// Prize schedule, drained in this order
    pub tiers: Vec<PrizeTier>,
    /// Decoy catalog
    pub catalog: DecoyCatalog,
    /// Edition tag range; None disables edition tags
    pub editions: Option<EditionRange>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self::genesis_100()
    }
}

impl CampaignConfig {
    /// The original 100-ticket series
    pub fn genesis_100() -> Self {
        Self {
            name: "Genesis Series".into(),
            ticket_count: 100,
            tiers: vec![
                PrizeTier::new(100_000, 1),
                PrizeTier::new(50_000, 1),
                PrizeTier::new(10_000, 4),
                PrizeTier::new(5_000, 10),
                PrizeTier::new(1_000, 20),
                PrizeTier::new(500, 30),
                PrizeTier::new(100, 30),
                PrizeTier::new(100, 4),
            ],
            catalog: DecoyCatalog::standard(),
            editions: Some(EditionRange::default()),
        }
    }

    /// Small run for tests and dry runs
    pub fn smoke_test() -> Self {
        Self {
            name: "Smoke Test".into(),
            ticket_count: 10,
            tiers: vec![PrizeTier::new(1_000, 1), PrizeTier::new(100, 3)],
            catalog: DecoyCatalog::standard(),
            editions: Some(EditionRange::default()),
        }
    }

    /// Total winners the schedule requests
    pub fn total_requested(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.count).sum()
    }

    /// Total prize value when every tier fills
    pub fn total_prize_value(&self) -> u64 {
        self.tiers.iter().map(|tier| tier.total_value()).sum()
    }

    /// Eager validation; runs before any draw
    ///
    /// Catalog checks cover every tier face value so a run can never abort
    /// with a partially built panel set.
    pub fn validate(&self) -> TicketResult<()> {
        if self.ticket_count == 0 {
            return Err(TicketError::InvalidConfiguration(
                "ticket count must be positive".into(),
            ));
        }
        if self.tiers.is_empty() {
            return Err(TicketError::InvalidConfiguration(
                "prize schedule is empty".into(),
            ));
        }
        if self.tiers.iter().any(|tier| tier.face_value == 0) {
            return Err(TicketError::InvalidConfiguration(
                "tier face value must be positive".into(),
            ));
        }
        if let Some(editions) = &self.editions {
            if editions.min == 0 || editions.min > editions.max {
                return Err(TicketError::InvalidConfiguration(format!(
                    "edition range [{}, {}] is malformed",
                    editions.min, editions.max
                )));
            }
        }

        let mut checked: Vec<Denomination> = Vec::new();
        for tier in &self.tiers {
            if checked.contains(&tier.face_value) {
                continue;
            }
            checked.push(tier.face_value);

            if !self.catalog.contains(tier.face_value) {
                return Err(TicketError::UnknownDenomination(tier.face_value));
            }
            let available = self.catalog.decoy_slots(tier.face_value);
            if available < DECOY_COUNT {
                return Err(TicketError::CatalogTooSmall {
                    needed: DECOY_COUNT,
                    available,
                });
            }
        }

        Ok(())
    }
}
