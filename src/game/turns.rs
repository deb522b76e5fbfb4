use alloc::format;
use alloc::string::ToString;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::TWENTY_ONE;
use crate::options::PontoonOptions;
use crate::participant::{Participant, Player};

use super::{Game, RoundPhase, TurnState};

impl Game {
    /// Runs every player's turn to completion, in seating order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt, or a player action
    /// is rejected.
    pub fn play_player_turns<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::PlayerTurns)?;

        let options = &self.options;
        for player in &mut self.players {
            let state = play_turn(player, &mut self.deck, options, console)?;
            log::debug!("{} ends turn {state:?}", player.name());
        }

        self.advance(RoundPhase::DealerDecision);
        Ok(())
    }
}

/// Drives one player from the initial two cards to a terminal state.
///
/// An initial 21 wins outright. Otherwise the player may surrender, then may
/// double down for exactly one more card, then hits until standing. Reaching
/// 21 or five cards wins on the spot; going over 21 loses on the spot.
fn play_turn<C: Console + ?Sized>(
    player: &mut Player,
    deck: &mut Deck,
    options: &PontoonOptions,
    console: &mut C,
) -> Result<TurnState, RoundError> {
    if let Some(state) = resolve(player, options, console) {
        return Ok(state);
    }

    if options.surrender && !player.surrender(console, options.surrender_penalty) {
        console.show(&format!("{} surrenders.", player.name()));
        return Ok(TurnState::Surrendered);
    }

    if options.double_down && player.can_double_down() {
        let question = format!("{}: Do you want to double down? (Y/N): ", player.name());
        if console.ask_yes_no(&question) {
            player.double_down(options.stake)?;
            player.hand_mut().add(deck.draw());
            console.show(&player.to_string());
            if let Some(state) = resolve(player, options, console) {
                return Ok(state);
            }
        }
    }

    while player.wants_hit(console) {
        player.hand_mut().add(deck.draw());
        console.show(&player.to_string());
        if let Some(state) = resolve(player, options, console) {
            return Ok(state);
        }
    }

    Ok(TurnState::Standing)
}

/// Settles a hand that has just won or busted. Returns `None` while the
/// player can still act.
fn resolve<C: Console + ?Sized>(
    player: &mut Player,
    options: &PontoonOptions,
    console: &mut C,
) -> Option<TurnState> {
    if player.hand().five_card() || player.total() == Some(TWENTY_ONE) {
        console.show(&format!("{} wins.", player.name()));
        player.win(options);
        Some(TurnState::Won)
    } else if player.is_busted() {
        console.show(&format!("{} busts.", player.name()));
        player.bust(options);
        Some(TurnState::Busted)
    } else {
        None
    }
}
