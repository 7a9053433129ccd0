//! The deck: canonical construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::pile::Pile;

/// A deck of cards dealt from the front.
///
/// A fresh deck holds the 52 canonical cards in new-pack order: all 13
/// ranks of clubs, then diamonds, hearts, spades. Shuffling takes an
/// explicit random source so rounds stay seedable and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Pile,
}

impl Deck {
    /// Creates an unshuffled deck in new-pack order.
    #[must_use]
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self {
            cards: Pile::from(cards),
        }
    }

    /// Rebuilds a deck from an arbitrary card sequence.
    ///
    /// Used by hosting layers restoring a persisted round; no uniqueness
    /// is enforced.
    #[must_use]
    pub const fn from_cards(cards: Pile) -> Self {
        Self { cards }
    }

    /// Uniformly permutes the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.as_mut_slice().shuffle(rng);
    }

    /// Removes and returns up to `n` cards from the front of the deck.
    ///
    /// When fewer than `n` cards remain, the result holds whatever was
    /// available; callers must check the returned length rather than
    /// assume `n` cards.
    pub fn deal(&mut self, n: usize) -> Pile {
        self.cards.take_front(n)
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.deal(1).cards().first().copied()
    }

    /// Discards the current contents, repopulates the 52-card set, and
    /// shuffles.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = Self::fresh().cards;
        self.shuffle(rng);
    }

    /// Returns the remaining cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the remaining cards as a pile.
    #[must_use]
    pub const fn pile(&self) -> &Pile {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::fresh()
    }
}
