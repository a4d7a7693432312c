//! Tier-by-tier winner allocation

use rand::Rng;
use serde::{Deserialize, Serialize};

use sf_core::{Denomination, TicketId};

use crate::config::PrizeTier;
use crate::pool::TicketPool;

/// Winners drawn for one prize tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierAllocation {
    /// Tier face value
    pub face_value: Denomination,
    /// Winners the schedule requested
    pub requested: u32,
    /// Winners actually drawn, in draw order
    pub winners: Vec<TicketId>,
}

impl TierAllocation {
    /// Winners actually produced
    pub fn awarded(&self) -> u32 {
        self.winners.len() as u32
    }

    /// Requested winners the pool could not supply
    pub fn shortfall(&self) -> u32 {
        self.requested - self.awarded()
    }

    /// True when the pool ran dry before the tier filled
    pub fn is_short(&self) -> bool {
        self.shortfall() > 0
    }
}

/// Requested-versus-actual outcome of one allocation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Per-tier outcomes in schedule order
    pub tiers: Vec<TierAllocation>,
}

impl AllocationReport {
    /// Winners requested across all tiers
    pub fn total_requested(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.requested).sum()
    }

    /// Winners awarded across all tiers
    pub fn total_awarded(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.awarded()).sum()
    }

    /// True when any tier came up short
    pub fn is_short(&self) -> bool {
        self.tiers.iter().any(|tier| tier.is_short())
    }
}

/// Drain the pool tier by tier in schedule order
///
/// Pool exhaustion ends the current tier's draws and leaves later tiers with
/// zero winners; it is reported through the per-tier counts, never as an
/// error. Callers wanting fairness under scarcity pre-sort the tiers.
pub fn allocate<R: Rng>(
    pool: &mut TicketPool,
    tiers: &[PrizeTier],
    rng: &mut R,
) -> AllocationReport {
    let mut report = AllocationReport::default();

    for tier in tiers {
        let mut winners = Vec::with_capacity(tier.count as usize);
        for _ in 0..tier.count {
            match pool.draw_and_remove(rng) {
                Ok(ticket) => winners.push(ticket),
                Err(_) => break,
            }
        }

        log::debug!(
            "tier {}: awarded {}/{}",
            tier.face_value,
            winners.len(),
            tier.count
        );
        if winners.len() < tier.count as usize {
            log::warn!(
                "tier {} short: pool exhausted after {} of {} draws",
                tier.face_value,
                winners.len(),
                tier.count
            );
        }

        report.tiers.push(TierAllocation {
            face_value: tier.face_value,
            requested: tier.count,
            winners,
        });
    }

    report
}
