//! Reveal panel construction

use rand::Rng;
use rand::seq::SliceRandom;

use sf_core::{
    DECOY_COUNT, Denomination, MATCH_COUNT, MAX_DECOY_COPIES, PANEL_SLOTS, TicketError,
    TicketResult,
};

use crate::config::DecoyCatalog;

/// Builds 8-slot reveal panels from a fixed catalog template
///
/// The template is never mutated; every build draws from a private working
/// copy, so panels for different winners are independent.
#[derive(Debug, Clone)]
pub struct PanelGenerator {
    catalog: DecoyCatalog,
}

impl PanelGenerator {
    /// Create a generator over a catalog template
    pub fn new(catalog: DecoyCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog template this generator draws decoys from
    pub fn catalog(&self) -> &DecoyCatalog {
        &self.catalog
    }

    /// Build one panel: 3 slots equal to the prize, 5 decoys, shuffled
    ///
    /// Decoys are drawn uniformly by instance from a working copy with every
    /// occurrence of the prize removed; removal targets the drawn position so
    /// duplicate catalog entries keep their multiset meaning. No denomination
    /// is picked a third time among the decoys.
    pub fn build_panel<R: Rng>(
        &self,
        prize: Denomination,
        rng: &mut R,
    ) -> TicketResult<Vec<String>> {
        if !self.catalog.contains(prize) {
            return Err(TicketError::UnknownDenomination(prize));
        }
        let available = self.catalog.decoy_slots(prize);
        if available < DECOY_COUNT {
            return Err(TicketError::CatalogTooSmall {
                needed: DECOY_COUNT,
                available,
            });
        }

        let mut working = self.catalog.working_copy(prize);
        let mut values: Vec<Denomination> = vec![prize; MATCH_COUNT];

        for _ in 0..DECOY_COUNT {
            let eligible: Vec<usize> = (0..working.len())
                .filter(|&index| {
                    let candidate = working[index];
                    let copies = values.iter().filter(|&&value| value == candidate).count();
                    copies < MAX_DECOY_COPIES
                })
                .collect();
            if eligible.is_empty() {
                return Err(TicketError::CatalogTooSmall {
                    needed: DECOY_COUNT,
                    available,
                });
            }

            let slot = eligible[rng.random_range(0..eligible.len())];
            values.push(working.swap_remove(slot));
        }

        values.shuffle(rng);
        debug_assert_eq!(values.len(), PANEL_SLOTS);

        Ok(values.into_iter().map(|value| value.to_string()).collect())
    }
}
