//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::options::Money;

/// How a player's round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Won with a total of exactly 21.
    TwentyOne,
    /// Won under the five-card rule.
    FiveCardTrick,
    /// Won on comparison, or because the dealer busted.
    Win,
    /// Lost on comparison, ties included.
    Lose,
    /// Went over 21.
    Bust,
    /// Withdrew for the surrender penalty.
    Surrendered,
}

impl HandOutcome {
    /// Returns whether the outcome pays the player.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::TwentyOne | Self::FiveCardTrick | Self::Win)
    }
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index, in seating order.
    pub seat: usize,
    /// The player's name.
    pub name: String,
    /// The outcome of the round.
    pub outcome: HandOutcome,
    /// The player's final total.
    pub total: Option<u8>,
    /// Net bankroll change over the round.
    pub net: Money,
    /// Bankroll after the round.
    pub bankroll: Money,
    /// Whether the outcome was decided during the player's own turn.
    pub resolved_in_turn: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_total: Option<u8>,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer played a turn at all.
    pub dealer_played: bool,
}

impl RoundResult {
    /// Returns the result for the given seat.
    #[must_use]
    pub fn seat(&self, seat: usize) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.seat == seat)
    }
}
