use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::console::Console;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::participant::Participant;

use super::{Game, RoundPhase};

/// Cards dealt to every hand at the start of a round.
const INITIAL_CARDS: usize = 2;

impl Game {
    /// Deals two cards to each player and to the dealer, hiding the dealer's
    /// first card.
    ///
    /// Every player's round-scoped state is reset first. If the deck cannot
    /// cover the initial deal it is restocked before any card leaves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at the dealing phase.
    pub fn deal<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Dealing)?;

        for player in &mut self.players {
            player.reset_for_round();
        }
        self.dealer.clear();
        self.dealer_played = false;

        let needed = (self.players.len() + 1) * INITIAL_CARDS;
        if self.deck.len() < needed {
            log::debug!("{} cards left, {needed} needed: restocking", self.deck.len());
            self.deck.populate();
            self.deck.shuffle();
        }

        let mut hands: Vec<&mut Hand> = self
            .players
            .iter_mut()
            .map(Participant::hand_mut)
            .collect();
        hands.push(self.dealer.hand_mut());
        self.deck.deal(&mut hands, INITIAL_CARDS);
        self.dealer.hide_hole();

        for player in &self.players {
            console.show(&format!("{}: You have ${}", player.name(), player.bankroll()));
            console.show(&format!("You bet ${}", self.options.stake));
            console.show(&player.to_string());
        }
        console.show(&self.dealer.to_string());

        self.advance(RoundPhase::PlayerTurns);
        Ok(())
    }
}
