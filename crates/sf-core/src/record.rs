//! Winning records and the registry summary view

use serde::{Deserialize, Serialize};

use crate::{Denomination, TicketId};

/// One winning ticket with its finished reveal panel
///
/// Created once by the engine and immutable afterward; collaborators render
/// one artifact per record, keyed by `ticket_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinningRecord {
    /// Winning ticket id
    pub ticket_id: TicketId,
    /// Prize the ticket pays out
    pub prize_value: Denomination,
    /// The 8 reveal values in print order (stringified denominations)
    pub panel: Vec<String>,
    /// Template selector, present when editions are enabled
    pub edition: Option<u8>,
}

/// Three index-aligned sequences for the downstream registry update
///
/// Derived from winning records; `editions` stays empty when the campaign
/// runs without edition tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub ticket_ids: Vec<TicketId>,
    pub prize_values: Vec<Denomination>,
    pub editions: Vec<u8>,
}

impl RegistrySummary {
    /// Build the summary view from a batch of records
    pub fn from_records(records: &[WinningRecord]) -> Self {
        let mut summary = Self {
            ticket_ids: Vec::with_capacity(records.len()),
            prize_values: Vec::with_capacity(records.len()),
            editions: Vec::with_capacity(records.len()),
        };
        for record in records {
            summary.ticket_ids.push(record.ticket_id);
            summary.prize_values.push(record.prize_value);
            if let Some(edition) = record.edition {
                summary.editions.push(edition);
            }
        }
        summary
    }

    /// Number of winners in the summary
    pub fn len(&self) -> usize {
        self.ticket_ids.len()
    }

    /// True when no winners were recorded
    pub fn is_empty(&self) -> bool {
        self.ticket_ids.is_empty()
    }
}
