//! Ticket pool with uniform draw-without-replacement

use rand::Rng;

use sf_core::{TicketError, TicketId, TicketResult};

/// Owns the universe of ticket ids for one campaign run
///
/// Mutated only by `draw_and_remove`; every remaining ticket keeps equal
/// probability at each call, independent of insertion order.
#[derive(Debug, Clone)]
pub struct TicketPool {
    tickets: Vec<TicketId>,
}

impl TicketPool {
    /// Populate the pool with ids `1..=ticket_count`
    pub fn new(ticket_count: u32) -> TicketResult<Self> {
        if ticket_count == 0 {
            return Err(TicketError::InvalidConfiguration(
                "ticket count must be positive".into(),
            ));
        }
        Ok(Self {
            tickets: (1..=ticket_count).collect(),
        })
    }

    /// Tickets still in the pool
    pub fn remaining(&self) -> usize {
        self.tickets.len()
    }

    /// True when every ticket has been drawn
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Draw one remaining ticket uniformly at random and remove it
    pub fn draw_and_remove<R: Rng>(&mut self, rng: &mut R) -> TicketResult<TicketId> {
        if self.tickets.is_empty() {
            return Err(TicketError::PoolExhausted);
        }
        let index = rng.random_range(0..self.tickets.len());
        Ok(self.tickets.swap_remove(index))
    }
}
