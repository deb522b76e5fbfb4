//! A Pontoon round engine with optional `no_std` support.
//!
//! Pontoon is a blackjack variant for one to seven players against an
//! automated dealer. The crate provides a [`Game`] type that runs a round
//! from the deal through each player's turn, the dealer's turn, settlement
//! and cleanup. All player decisions and table output go through a
//! [`Console`], so the engine runs the same under a terminal, a script or a
//! test.
//!
//! # Example
//!
//! ```
//! use pontoon::{Game, PontoonOptions, Scripted};
//!
//! let mut game = Game::new(["Ann"], PontoonOptions::default(), 42).unwrap();
//! let mut console = Scripted::declining();
//! let result = game.play_round(&mut console).unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod settlement;

// Re-export main types
pub use card::{ACE_VALUE, Card, DECK_SIZE, Suit};
pub use console::{Console, Scripted};
pub use deck::Deck;
pub use error::{ActionError, RoundError, TableError};
pub use game::{Game, RoundPhase, TurnState};
pub use hand::{FIVE_CARD_TRICK, Hand, TWENTY_ONE};
pub use options::{Money, PontoonOptions, RoundingMode};
pub use participant::{Dealer, Participant, Player, Stake};
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use settlement::Verdict;
