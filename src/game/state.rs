//! Round and turn state types.

/// Phase of the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting to deal two cards to everyone.
    Dealing,
    /// Players take their turns in seating order.
    PlayerTurns,
    /// Deciding whether the dealer needs to play.
    DealerDecision,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Standing players are compared against the dealer.
    Settlement,
    /// Hands are cleared and the deck restocked.
    Cleanup,
}

/// Terminal state of a single player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Stood; waits for settlement.
    Standing,
    /// Reached 21 or the five-card rule; paid immediately.
    Won,
    /// Went over 21; lost immediately.
    Busted,
    /// Withdrew for the surrender penalty.
    Surrendered,
}
