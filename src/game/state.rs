//! Round state types.

use serde::{Deserialize, Serialize};

/// Round lifecycle state.
///
/// A round moves `NotStarted → InProgress → DealerTurn → Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// No cards dealt yet.
    #[default]
    NotStarted,
    /// Initial deal done; player may take more cards.
    InProgress,
    /// Dealer has played out their hand.
    DealerTurn,
    /// Outcome has been read.
    Resolved,
}
