//! Round outcome types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a resolved round.
///
/// The eight variants cover the full decision ladder; the `Display`
/// messages are the fixed strings the hosting layer shows the player
/// (bust outcomes share the plain win/lose messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both player and dealer scored exactly 21.
    BlackjackPush,
    /// Player scored exactly 21, dealer did not.
    PlayerBlackjack,
    /// Dealer scored exactly 21, player did not.
    DealerBlackjack,
    /// Player went over 21; dealer wins.
    PlayerBust,
    /// Dealer went over 21; player wins.
    DealerBust,
    /// Player outscored the dealer, both 21 or under.
    PlayerWin,
    /// Dealer outscored the player, both 21 or under.
    DealerWin,
    /// Equal scores, neither 21, neither bust.
    Push,
}

impl Outcome {
    /// Returns the fixed player-facing message for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BlackjackPush => "Player and dealer have blackjack so its a tie!",
            Self::PlayerBlackjack => "Player wins with a blackjack!",
            Self::DealerBlackjack => "Dealer wins with a blackjack!",
            Self::DealerBust | Self::PlayerWin => "Player wins!",
            Self::PlayerBust | Self::DealerWin => "Dealer wins!",
            Self::Push => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
