//! Serializable round snapshots.

use serde::{Deserialize, Serialize};

use crate::game::RoundState;
use crate::pile::Pile;

/// A persisted round: the three card sequences plus the round state.
///
/// Hosting layers serialize this between requests and rebuild a
/// controller with [`Game::restore`](crate::Game::restore). Cards
/// round-trip as plain `(rank, suit)` label pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining deck cards in deal order.
    pub deck: Pile,
    /// The player's cards.
    pub player: Pile,
    /// The dealer's cards.
    pub dealer: Pile,
    /// Round state at capture time.
    pub state: RoundState,
}
