//! Hand representation and blackjack scoring.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};
use crate::pile::Pile;

/// Score contributed by a non-ace rank: face cards count 10, number
/// cards count their pip value. Aces are resolved separately.
const fn non_ace_value(rank: Rank) -> u32 {
    match rank {
        Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 0,
        pip => pip as u32 + 2,
    }
}

/// One participant's cards within a round.
///
/// Starts empty, grows one card at a time, and is emptied wholesale
/// between rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Pile,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Pile::new() }
    }

    /// Rebuilds a hand from an arbitrary card sequence.
    ///
    /// Used by hosting layers restoring a persisted round.
    #[must_use]
    pub const fn from_cards(cards: Pile) -> Self {
        Self { cards }
    }

    /// Appends one card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the hand unconditionally.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Calculates the blackjack score of the hand.
    ///
    /// Non-ace cards are summed first (face cards count 10), then each
    /// ace in turn adds 11 if the running total stays at or below 21,
    /// otherwise 1. The result is not capped: a value above 21 is a bust,
    /// detected by comparison.
    #[must_use]
    pub fn score(&self) -> u32 {
        let mut total: u32 = 0;
        let mut aces: u32 = 0;

        for card in &self.cards {
            if card.rank == Rank::Ace {
                aces += 1;
            } else {
                total += non_ace_value(card.rank);
            }
        }

        for _ in 0..aces {
            total += if total + 11 <= 21 { 11 } else { 1 };
        }

        total
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand scores exactly 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.score() == 21
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the cards as a pile.
    #[must_use]
    pub const fn pile(&self) -> &Pile {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cards, f)
    }
}
