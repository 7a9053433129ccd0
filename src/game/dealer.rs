use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Outcome;

use super::{Game, RoundState};

impl Game {
    /// Dealer plays out their hand.
    ///
    /// The dealer draws while under 17, or while trailing a non-busted
    /// player even above 17. The trailing-hit rule is a deliberate house
    /// deviation from the textbook stand-on-17 dealer.
    ///
    /// Drawing stops early if the deck runs dry; the dealer stands on
    /// whatever they hold.
    ///
    /// Returns the cards drawn by the dealer.
    pub fn dealer_play(&mut self) -> Vec<Card> {
        let player_score = self.player.score();
        let mut drawn_cards = Vec::new();

        loop {
            let dealer_score = self.dealer.score();

            let must_hit = dealer_score < 17
                || (dealer_score < player_score && player_score <= 21);
            if !must_hit {
                break;
            }

            let Some(card) = self.deck.deal_one() else {
                break;
            };
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.state = RoundState::DealerTurn;
        drawn_cards
    }

    /// Runs dealer play, then decides the round.
    ///
    /// Outcomes are evaluated in priority order: double blackjack, player
    /// blackjack, dealer blackjack, player bust, dealer bust, higher
    /// score, tie.
    ///
    /// Not idempotent: each call re-runs [`dealer_play`](Self::dealer_play),
    /// so resolving again after the player drew further cards can deal
    /// more cards and change the outcome.
    pub fn resolve(&mut self) -> Outcome {
        self.dealer_play();

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        self.state = RoundState::Resolved;

        if player_score == 21 && dealer_score == 21 {
            Outcome::BlackjackPush
        } else if player_score == 21 {
            Outcome::PlayerBlackjack
        } else if dealer_score == 21 {
            Outcome::DealerBlackjack
        } else if player_score > 21 {
            Outcome::PlayerBust
        } else if dealer_score > 21 {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::PlayerWin
        } else if player_score < dealer_score {
            Outcome::DealerWin
        } else {
            Outcome::Push
        }
    }
}
