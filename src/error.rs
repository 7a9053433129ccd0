//! Error types for game operations.

use thiserror::Error;

/// Errors from parsing a `(rank, suit)` pair into a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardFormatError {
    /// Rank label is not one of the 13 valid ranks.
    #[error("invalid card format: unrecognized rank label")]
    UnknownRank,
    /// Suit label is not one of the 4 valid suits.
    #[error("invalid card format: unrecognized suit label")]
    UnknownSuit,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for the initial deal.
    #[error("invalid round state for the initial deal")]
    InvalidState,
}
