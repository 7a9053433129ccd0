//! Round controller and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::snapshot::Snapshot;

mod dealer;
pub mod state;

pub use state::RoundState;

/// A single round of blackjack: one deck, a player hand, and a dealer
/// hand, played from the initial deal to an outcome.
///
/// The controller owns its deck and hands exclusively; concurrent rounds
/// need separate instances. The random source is a [`ChaCha8Rng`] seeded
/// at construction, so a fixed seed replays the same shuffle.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck cards are dealt from.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Game;
    ///
    /// let mut game = Game::new(42);
    /// game.start().unwrap();
    /// assert_eq!(game.player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::fresh();
        deck.shuffle(&mut rng);

        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::NotStarted,
            rng,
        }
    }

    /// Deals the initial two cards to the player, then two to the dealer,
    /// one card at a time.
    ///
    /// The deal order (player, player, dealer, dealer) is fixed so a round
    /// replays deterministically against a known deck sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started.
    pub fn start(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::NotStarted {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            if let Some(card) = self.deck.deal_one() {
                self.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.deck.deal_one() {
                self.dealer.add_card(card);
            }
        }

        self.state = RoundState::InProgress;
        Ok(())
    }

    /// Deals one card from the deck into the player's hand.
    ///
    /// The controller does not gate player hits; the hosting layer decides
    /// when the player stops. Returns `None` if the deck is exhausted.
    pub fn hit(&mut self) -> Option<Card> {
        let card = self.deck.deal_one()?;
        self.player.add_card(card);
        Some(card)
    }

    /// Resets the round: repopulated shuffled deck, both hands emptied,
    /// state back to not-started.
    pub fn reset(&mut self) {
        self.deck.reset(&mut self.rng);
        self.player.clear();
        self.dealer.clear();
        self.state = RoundState::NotStarted;
    }

    /// Captures the round as a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.deck.pile().clone(),
            player: self.player.pile().clone(),
            dealer: self.dealer.pile().clone(),
            state: self.state,
        }
    }

    /// Rebuilds a round controller from a persisted snapshot.
    ///
    /// The hosting layer round-trips snapshots between requests; restoring
    /// is not thread-safe and must not run concurrently on the same
    /// persisted state.
    #[must_use]
    pub fn restore(snapshot: Snapshot, seed: u64) -> Self {
        Self {
            deck: Deck::from_cards(snapshot.deck),
            player: Hand::from_cards(snapshot.player),
            dealer: Hand::from_cards(snapshot.dealer),
            state: snapshot.state,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand mutably, for hosting layers feeding cards
    /// through [`Hand::add_card`] directly.
    pub const fn player_mut(&mut self) -> &mut Hand {
        &mut self.player
    }

    /// Returns the dealer's hand mutably.
    pub const fn dealer_mut(&mut self) -> &mut Hand {
        &mut self.dealer
    }

    /// Returns the deck mutably, for hosting layers dealing through
    /// [`Deck::deal`] directly.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}
