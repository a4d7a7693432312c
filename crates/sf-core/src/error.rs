//! Error types for the ticket engine

use thiserror::Error;

use crate::Denomination;

/// Ticket engine error type
#[derive(Error, Debug)]
pub enum TicketError {
    /// Rejected campaign configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No tickets left to draw
    #[error("Ticket pool exhausted")]
    PoolExhausted,

    /// Catalog cannot fill a panel's decoy slots
    #[error("Catalog too small: {available} usable decoy entries, need {needed}")]
    CatalogTooSmall {
        /// Decoy slots a panel requires
        needed: usize,
        /// Usable entries the catalog offers
        available: usize,
    },

    /// Prize value missing from the decoy catalog
    #[error("Denomination {0} not present in catalog")]
    UnknownDenomination(Denomination),
}

/// Result type for ticket operations
pub type TicketResult<T> = Result<T, TicketError>;
