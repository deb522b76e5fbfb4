//! Game engine and round orchestration.

use alloc::string::String;
use alloc::vec::Vec;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::{RoundError, TableError};
use crate::options::PontoonOptions;
use crate::participant::{Dealer, Player};
use crate::result::RoundResult;

mod deal;
mod dealer;
mod showdown;
pub mod state;
mod turns;

pub use state::{RoundPhase, TurnState};

/// A Pontoon table: the seated players, the dealer and the deck.
///
/// Players persist for the whole game and keep their bankrolls between
/// rounds. Each round is driven through its phases in order, either one
/// phase at a time or all at once with [`Game::play_round`].
pub struct Game {
    /// Cards in the deck.
    pub deck: Deck,
    /// Game options.
    pub options: PontoonOptions,
    /// Players in seating order.
    players: Vec<Player>,
    /// The dealer.
    dealer: Dealer,
    /// Current phase of the round.
    phase: RoundPhase,
    /// Whether the dealer drew this round.
    dealer_played: bool,
}

impl Game {
    /// Seats the named players and shuffles a deck with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if no names are given or there are more names than
    /// [`PontoonOptions::max_players`].
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{Game, PontoonOptions};
    ///
    /// let game = Game::new(["Ann", "Bob"], PontoonOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// ```
    pub fn new<I, S>(names: I, options: PontoonOptions, seed: u64) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::new(name, options.starting_bankroll))
            .collect();

        if players.is_empty() {
            return Err(TableError::NoPlayers);
        }
        if players.len() > options.max_players as usize {
            return Err(TableError::TooManyPlayers {
                count: players.len(),
                max: options.max_players,
            });
        }

        log::debug!("seating {} players with seed {seed}", players.len());

        Ok(Self {
            deck: Deck::new(seed),
            dealer: Dealer::new("Dealer", options.dealer_stands_on),
            options,
            players,
            phase: RoundPhase::Dealing,
            dealer_played: false,
        })
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the players still waiting on the dealer: not surrendered, not
    /// busted and not already resolved during their turn.
    pub fn still_playing(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_still_playing())
    }

    fn ensure_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn advance(&mut self, next: RoundPhase) {
        log::debug!("round phase {:?} -> {next:?}", self.phase);
        self.phase = next;
    }

    /// Plays one complete round: deal, player turns, dealer, settlement and
    /// cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at the dealing phase, or a player
    /// action is rejected.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, RoundError> {
        self.deal(console)?;
        self.play_player_turns(console)?;
        if self.dealer_decision(console)? {
            self.dealer_turn(console)?;
        }
        let result = self.settle(console)?;
        self.cleanup(console)?;
        Ok(result)
    }
}
