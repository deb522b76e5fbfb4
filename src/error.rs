//! Error types for table and round operations.

use thiserror::Error;

use crate::game::RoundPhase;

/// Errors that can occur while seating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No player names were given.
    #[error("at least one player is required")]
    NoPlayers,
    /// More players than seats.
    #[error("{count} players do not fit at a table of {max}")]
    TooManyPlayers {
        /// Number of players requested.
        count: usize,
        /// Number of seats available.
        max: u8,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The stake has already been doubled this round.
    #[error("stake already doubled")]
    AlreadyDoubled,
    /// The player has already drawn past the initial two cards.
    #[error("cannot double down after a hit")]
    AlreadyHit,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A phase was run out of order.
    #[error("round is in {actual:?}, expected {expected:?}")]
    InvalidPhase {
        /// Phase the operation belongs to.
        expected: RoundPhase,
        /// Phase the round is actually in.
        actual: RoundPhase,
    },
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}
