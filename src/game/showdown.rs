use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::console::Console;
use crate::error::RoundError;
use crate::participant::Participant;
use crate::result::{PlayerResult, RoundResult};
use crate::settlement::{self, Verdict};

use super::{Game, RoundPhase};

impl Game {
    /// Settles every player still waiting on the dealer and reports the round.
    ///
    /// Players who won, busted or surrendered during their own turn are not
    /// judged again; their outcome is only reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at the settlement phase.
    pub fn settle<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, RoundError> {
        self.ensure_phase(RoundPhase::Settlement)?;

        // Judging needs both totals defined.
        self.dealer.reveal_hole();
        let dealer_hand = self.dealer.hand();

        let mut player_results = Vec::with_capacity(self.players.len());

        for (seat, player) in self.players.iter_mut().enumerate() {
            let contested = player.is_still_playing();

            if contested {
                let verdict =
                    settlement::judge(player.hand(), dealer_hand).unwrap_or(Verdict::Lose);
                match verdict {
                    Verdict::Win => {
                        console.show(&format!("{} wins.", player.name()));
                        player.win(&self.options);
                    }
                    Verdict::Lose => {
                        console.show(&format!("{} loses.", player.name()));
                        player.lose(&self.options);
                    }
                }
            }

            let Some(outcome) = player.outcome() else {
                continue;
            };

            player_results.push(PlayerResult {
                seat,
                name: player.name().to_string(),
                outcome,
                total: player.total(),
                net: player.round_net(),
                bankroll: player.bankroll(),
                resolved_in_turn: !contested,
            });
        }

        let result = RoundResult {
            players: player_results,
            dealer_total: dealer_hand.total(),
            dealer_bust: dealer_hand.is_busted(),
            dealer_played: self.dealer_played,
        };

        log::info!(
            "round settled: dealer {:?}, {} player result(s)",
            result.dealer_total,
            result.players.len()
        );
        self.advance(RoundPhase::Cleanup);
        Ok(result)
    }

    /// Clears every hand and round-scoped flag, then repopulates and
    /// reshuffles the deck for the next round. Bankrolls are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn cleanup<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Cleanup)?;

        for player in &mut self.players {
            player.reset_for_round();
            console.show(&format!("{}: You have ${}", player.name(), player.bankroll()));
        }
        self.dealer.clear();
        self.dealer_played = false;

        self.deck.populate();
        self.deck.shuffle();

        self.advance(RoundPhase::Dealing);
        Ok(())
    }
}
