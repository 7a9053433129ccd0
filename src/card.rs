//! Card types and deck constants.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CardFormatError;

/// Card rank.
///
/// Declaration order is the canonical sort order used by
/// [`Pile::sort_by_rank`](crate::Pile::sort_by_rank): `2` lowest, ace
/// highest. The order is a sort key only; scoring treats aces specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the short label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the name used in display asset files (`"jack"`, `"ace"`, ...).
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
            other => other.label(),
        }
    }

    /// Parses a short rank label.
    ///
    /// # Errors
    ///
    /// Returns [`CardFormatError::UnknownRank`] if the label is not one of
    /// the 13 valid ranks.
    pub fn from_label(label: &str) -> Result<Self, CardFormatError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == label)
            .ok_or(CardFormatError::UnknownRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
///
/// Declaration order is the canonical sort order used by
/// [`Pile::sort_by_suit`](crate::Pile::sort_by_suit): clubs first, spades
/// last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the short label (`"C"`, `"D"`, `"H"`, `"S"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
        }
    }

    /// Returns the name used in display asset files (`"clubs"`, ...).
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Parses a short suit label.
    ///
    /// # Errors
    ///
    /// Returns [`CardFormatError::UnknownSuit`] if the label is not one of
    /// the 4 valid suits.
    pub fn from_label(label: &str) -> Result<Self, CardFormatError> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.label() == label)
            .ok_or(CardFormatError::UnknownSuit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Serializes as a `(rank label, suit label)` pair, e.g. `["A", "S"]`, so
/// hosting layers can persist card sequences as plain pairs. Deserializing
/// a malformed pair fails with [`CardFormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a card from short rank and suit labels, e.g. `("A", "S")`.
    ///
    /// This is the validation boundary: a `Card` can only hold one of the
    /// 13 valid ranks and 4 valid suits.
    ///
    /// # Errors
    ///
    /// Returns [`CardFormatError`] if either label is unrecognized.
    pub fn from_labels(rank: &str, suit: &str) -> Result<Self, CardFormatError> {
        Ok(Self {
            rank: Rank::from_label(rank)?,
            suit: Suit::from_label(suit)?,
        })
    }

    /// Returns the display asset file name, e.g. `"ace_of_spades.png"`.
    #[must_use]
    pub fn asset_name(&self) -> String {
        alloc::format!("{}_of_{}.png", self.rank.asset_name(), self.suit.asset_name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl From<Card> for (String, String) {
    fn from(card: Card) -> Self {
        (String::from(card.rank.label()), String::from(card.suit.label()))
    }
}

impl TryFrom<(String, String)> for Card {
    type Error = CardFormatError;

    fn try_from((rank, suit): (String, String)) -> Result<Self, Self::Error> {
        Self::from_labels(&rank, &suit)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
