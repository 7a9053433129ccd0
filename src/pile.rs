//! Ordered card sequences.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// An ordered sequence of cards.
///
/// The order is the current arrangement: sorting mutates it in place and
/// dealing removes from the front. Duplicates are allowed; only
/// [`Deck`](crate::Deck) construction guarantees uniqueness.
///
/// Serializes transparently as the card sequence, so hosting layers can
/// persist piles as plain lists of `(rank, suit)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends one card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Stable in-place sort by rank, `2` lowest and ace highest.
    ///
    /// Cards of equal rank keep their prior relative order.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by_key(|card| card.rank);
    }

    /// Stable in-place sort by suit, clubs first and spades last.
    ///
    /// Cards of equal suit keep their prior relative order.
    pub fn sort_by_suit(&mut self) {
        self.cards.sort_by_key(|card| card.suit);
    }

    /// Appends copies of `other`'s cards in their current order.
    ///
    /// `other` is unaffected and remains independently usable.
    pub fn merge(&mut self, other: &Self) {
        self.cards.extend_from_slice(&other.cards);
    }

    /// Mutable slice access for in-place permutation.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Removes and returns up to `n` cards from the front.
    ///
    /// Returns fewer than `n` when the pile is under-supplied.
    pub(crate) fn take_front(&mut self, n: usize) -> Self {
        let n = n.min(self.cards.len());
        let rest = self.cards.split_off(n);
        Self {
            cards: core::mem::replace(&mut self.cards, rest),
        }
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
