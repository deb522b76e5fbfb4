use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::card::Card;
use crate::console::Console;
use crate::error::RoundError;
use crate::participant::Participant;

use super::{Game, RoundPhase};

impl Game {
    /// Decides whether the dealer has to play.
    ///
    /// The dealer's hole card is revealed either way. When nobody is still
    /// playing the round skips straight to settlement and `false` is
    /// returned; otherwise the dealer's turn is next and `true` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the player turns have not finished.
    pub fn dealer_decision<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<bool, RoundError> {
        self.ensure_phase(RoundPhase::DealerDecision)?;

        let mut contested = 0;
        for player in self.still_playing() {
            console.show(&player.to_string());
            contested += 1;
        }

        self.dealer.reveal_hole();
        console.show(&self.dealer.to_string());

        if contested == 0 {
            log::debug!("no players left standing, dealer does not draw");
            self.advance(RoundPhase::Settlement);
            Ok(false)
        } else {
            self.advance(RoundPhase::DealerTurn);
            Ok(true)
        }
    }

    /// Dealer plays their hand: reveals the hole card and draws while below
    /// the stand threshold.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at the dealer's turn.
    pub fn dealer_turn<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<Vec<Card>, RoundError> {
        self.ensure_phase(RoundPhase::DealerTurn)?;

        self.dealer.reveal_hole();
        self.dealer_played = true;

        let mut drawn_cards = Vec::new();
        while !self.dealer.is_busted() && self.dealer.wants_hit(console) {
            let card = self.deck.draw();
            self.dealer.hand_mut().add(card);
            drawn_cards.push(card);
            console.show(&self.dealer.to_string());

            if self.dealer.is_busted() {
                console.show(&format!("{} busts.", self.dealer.name()));
                self.dealer.bust(&self.options);
            }
        }

        log::debug!(
            "dealer drew {} card(s), total {:?}",
            drawn_cards.len(),
            self.dealer.total()
        );
        self.advance(RoundPhase::Settlement);
        Ok(drawn_cards)
    }
}
