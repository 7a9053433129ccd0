//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] round controller that owns one [`Deck`]
//! and two [`Hand`]s and plays a round from the initial deal to an
//! [`Outcome`]. A serializable [`Snapshot`] lets a hosting layer persist
//! the round between requests and restore it later.
//!
//! # Example
//!
//! ```
//! use twentyone::Game;
//!
//! let mut game = Game::new(42);
//! game.start().unwrap();
//! let outcome = game.resolve();
//! let _ = outcome.message();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod pile;
pub mod result;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardFormatError, DealError};
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use pile::Pile;
pub use result::Outcome;
pub use snapshot::Snapshot;
