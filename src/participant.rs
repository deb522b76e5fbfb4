//! Players and the dealer.
//!
//! Both own a [`Hand`] and share the [`Participant`] capability. They differ
//! in how they decide to hit: a player is asked through the [`Console`], the
//! dealer follows the house rule.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::console::Console;
use crate::error::ActionError;
use crate::hand::{Hand, TWENTY_ONE};
use crate::options::{Money, PontoonOptions};
use crate::result::HandOutcome;
use crate::settlement;

/// Behaviour shared by everyone holding a hand at the table.
pub trait Participant {
    /// Returns the name shown at the table.
    fn name(&self) -> &str;

    /// Returns the hand.
    fn hand(&self) -> &Hand;

    /// Returns the hand for dealing.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Decides whether to take another card.
    fn wants_hit<C: Console + ?Sized>(&self, console: &mut C) -> bool;

    /// Reacts to going over 21.
    fn bust(&mut self, options: &PontoonOptions);

    /// Returns the hand total, `None` while a card is face-down.
    fn total(&self) -> Option<u8> {
        self.hand().total()
    }

    /// Returns whether the hand is over 21.
    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    /// Throws the hand away.
    fn clear(&mut self) {
        self.hand_mut().clear();
    }
}

fn write_seat(f: &mut fmt::Formatter<'_>, name: &str, hand: &Hand) -> fmt::Result {
    write!(f, "{name}:\t{hand}")?;
    match hand.total() {
        Some(total) if total > 0 => write!(f, "({total})"),
        _ => Ok(()),
    }
}

/// Stake played this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stake {
    /// The flat stake; the player may keep hitting.
    #[default]
    Unit,
    /// Doubled down; no further hits.
    Doubled,
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    bankroll: Money,
    stake: Stake,
    continuing: bool,
    done: bool,
    outcome: Option<HandOutcome>,
    round_net: Money,
}

impl Player {
    /// Creates a player with the given bankroll.
    #[must_use]
    pub fn new(name: impl Into<String>, bankroll: Money) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            bankroll,
            stake: Stake::Unit,
            continuing: true,
            done: false,
            outcome: None,
            round_net: 0,
        }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> Money {
        self.bankroll
    }

    /// Returns the stake played this round.
    #[must_use]
    pub const fn stake(&self) -> Stake {
        self.stake
    }

    /// Returns whether the player is still in the round.
    ///
    /// Only surrender clears this flag.
    #[must_use]
    pub const fn is_continuing(&self) -> bool {
        self.continuing
    }

    /// Returns whether the player's outcome is already settled this round.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the outcome, once decided.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Returns the bankroll change since the round started.
    #[must_use]
    pub const fn round_net(&self) -> Money {
        self.round_net
    }

    /// Returns whether the player waits on the dealer for a verdict.
    #[must_use]
    pub fn is_still_playing(&self) -> bool {
        self.continuing && !self.done && !self.is_busted()
    }

    /// Clears the hand and every round-scoped flag. The bankroll is kept.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.stake = Stake::Unit;
        self.continuing = true;
        self.done = false;
        self.outcome = None;
        self.round_net = 0;
    }

    fn adjust(&mut self, amount: Money) {
        self.bankroll += amount;
        self.round_net += amount;
    }

    /// Offers surrender. On acceptance the penalty is paid and the player
    /// leaves the round.
    ///
    /// Returns whether the player is still continuing.
    pub fn surrender<C: Console + ?Sized>(&mut self, console: &mut C, penalty: Money) -> bool {
        self.continuing = true;
        let question = format!("{}: Do you want to surrender? (Y/N): ", self.name);
        if console.ask_yes_no(&question) {
            self.adjust(-penalty);
            self.continuing = false;
            self.outcome = Some(HandOutcome::Surrendered);
            log::info!("{} surrenders for {penalty}", self.name);
        }
        self.continuing
    }

    /// Returns whether doubling down is still allowed.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.stake == Stake::Unit && self.hand.len() <= 2
    }

    /// Doubles down: wagers one more stake and locks the hand against hits.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake is already doubled or the player has
    /// already hit.
    pub fn double_down(&mut self, stake: Money) -> Result<(), ActionError> {
        if self.stake == Stake::Doubled {
            return Err(ActionError::AlreadyDoubled);
        }
        if self.hand.len() > 2 {
            return Err(ActionError::AlreadyHit);
        }
        self.adjust(-stake);
        self.stake = Stake::Doubled;
        log::debug!("{} doubles down", self.name);
        Ok(())
    }

    /// Pays a win and marks the player done.
    ///
    /// The outcome is recorded from the hand: 21, five cards, or a plain win.
    pub fn win(&mut self, options: &PontoonOptions) {
        let total = self.hand.total();
        let outcome = if total == Some(TWENTY_ONE) {
            HandOutcome::TwentyOne
        } else if self.hand.five_card() {
            HandOutcome::FiveCardTrick
        } else {
            HandOutcome::Win
        };
        let amount = settlement::payout(total, options);
        self.adjust(amount);
        self.outcome = Some(outcome);
        self.done = true;
        log::info!("{} wins {amount} ({outcome:?})", self.name);
    }

    /// Forfeits the stake and marks the player done.
    pub fn lose(&mut self, options: &PontoonOptions) {
        self.forfeit(options.stake, HandOutcome::Lose);
    }

    fn forfeit(&mut self, stake: Money, outcome: HandOutcome) {
        self.adjust(-stake);
        self.outcome = Some(outcome);
        self.done = true;
        log::info!("{} loses {stake} ({outcome:?})", self.name);
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Asks the player while the stake is not doubled and the total is
    /// under 21. Stands automatically otherwise.
    fn wants_hit<C: Console + ?Sized>(&self, console: &mut C) -> bool {
        let open = self.stake == Stake::Unit && self.total().is_some_and(|t| t < TWENTY_ONE);
        if !open {
            return false;
        }
        let question = format!("\n{}, do you want a hit? (Y/N): ", self.name);
        console.ask_yes_no(&question)
    }

    fn bust(&mut self, options: &PontoonOptions) {
        self.forfeit(options.stake, HandOutcome::Bust);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seat(f, &self.name, &self.hand)
    }
}

/// The house.
#[derive(Debug, Clone)]
pub struct Dealer {
    name: String,
    hand: Hand,
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer that stands once its total reaches `stands_on`.
    #[must_use]
    pub fn new(name: impl Into<String>, stands_on: u8) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            stands_on,
        }
    }

    /// House rule: hit while the total is below the stand threshold.
    ///
    /// Never hits on a hidden total.
    #[must_use]
    pub fn must_hit(&self) -> bool {
        self.hand.total().is_some_and(|total| total < self.stands_on)
    }

    /// Returns whether the first card is face-down.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.hand.cards().first().is_some_and(|card| !card.face_up)
    }

    /// Turns the first card face-down.
    pub fn hide_hole(&mut self) {
        if !self.is_hole_hidden() {
            self.hand.flip_first();
        }
    }

    /// Turns the first card face-up.
    pub fn reveal_hole(&mut self) {
        if self.is_hole_hidden() {
            self.hand.flip_first();
        }
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new("Dealer", PontoonOptions::default().dealer_stands_on)
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn wants_hit<C: Console + ?Sized>(&self, _console: &mut C) -> bool {
        self.must_hit()
    }

    fn bust(&mut self, _options: &PontoonOptions) {
        log::info!("{} busts", self.name);
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seat(f, &self.name, &self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::console::Scripted;
    use alloc::string::ToString;

    fn deal(participant: &mut impl Participant, ranks: &[u8]) {
        for &rank in ranks {
            participant.hand_mut().add(Card::new(Suit::Clubs, rank));
        }
    }

    #[test]
    fn player_is_asked_below_twenty_one() {
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[10, 5]);
        let mut console = Scripted::new(&[true]);
        assert!(player.wants_hit(&mut console));
        assert_eq!(console.asked.len(), 1);
    }

    #[test]
    fn player_stands_automatically_on_twenty_one() {
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[1, 13]);
        let mut console = Scripted::new(&[true]);
        assert!(!player.wants_hit(&mut console));
        assert!(console.asked.is_empty());
    }

    #[test]
    fn doubled_player_is_not_asked() {
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[5, 4]);
        player.double_down(10).unwrap();
        let mut console = Scripted::new(&[true]);
        assert!(!player.wants_hit(&mut console));
        assert!(console.asked.is_empty());
        assert_eq!(player.bankroll(), 90);
    }

    #[test]
    fn double_down_only_once_and_before_a_hit() {
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[5, 4]);
        player.double_down(10).unwrap();
        assert_eq!(player.double_down(10), Err(ActionError::AlreadyDoubled));

        let mut hitter = Player::new("Bob", 100);
        deal(&mut hitter, &[2, 3, 4]);
        assert!(!hitter.can_double_down());
        assert_eq!(hitter.double_down(10), Err(ActionError::AlreadyHit));
    }

    #[test]
    fn surrender_costs_the_penalty() {
        let mut player = Player::new("Ann", 100);
        assert!(!player.surrender(&mut Scripted::new(&[true]), 5));
        assert!(!player.is_continuing());
        assert_eq!(player.bankroll(), 95);
        assert_eq!(player.outcome(), Some(HandOutcome::Surrendered));

        let mut stays = Player::new("Bob", 100);
        assert!(stays.surrender(&mut Scripted::declining(), 5));
        assert_eq!(stays.bankroll(), 100);
    }

    #[test]
    fn win_pays_by_total() {
        let options = PontoonOptions::default();

        let mut pontoon = Player::new("Ann", 100);
        deal(&mut pontoon, &[1, 12]);
        pontoon.win(&options);
        assert_eq!(pontoon.bankroll(), 115);
        assert_eq!(pontoon.outcome(), Some(HandOutcome::TwentyOne));
        assert!(pontoon.is_done());

        let mut trick = Player::new("Bob", 100);
        deal(&mut trick, &[2, 3, 4, 5, 2]);
        trick.win(&options);
        assert_eq!(trick.bankroll(), 120);
        assert_eq!(trick.outcome(), Some(HandOutcome::FiveCardTrick));
    }

    #[test]
    fn bust_forfeits_the_stake() {
        let options = PontoonOptions::default();
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[13, 12, 5]);
        assert!(player.is_busted());
        player.bust(&options);
        assert_eq!(player.bankroll(), 90);
        assert_eq!(player.round_net(), -10);
        assert!(!player.is_still_playing());
    }

    #[test]
    fn reset_keeps_bankroll() {
        let mut player = Player::new("Ann", 100);
        deal(&mut player, &[5, 4]);
        player.double_down(10).unwrap();
        player.reset_for_round();
        assert!(player.hand().is_empty());
        assert_eq!(player.stake(), Stake::Unit);
        assert_eq!(player.round_net(), 0);
        assert_eq!(player.bankroll(), 90);
        assert!(player.is_still_playing());
    }

    #[test]
    fn dealer_hits_below_seventeen() {
        let mut dealer = Dealer::default();
        deal(&mut dealer, &[7, 9]);
        assert!(dealer.must_hit());
        deal(&mut dealer, &[1]);
        assert_eq!(dealer.total(), Some(17));
        assert!(!dealer.must_hit());
    }

    #[test]
    fn dealer_never_hits_a_hidden_hand() {
        let mut dealer = Dealer::default();
        deal(&mut dealer, &[7, 9]);
        dealer.hide_hole();
        assert_eq!(dealer.total(), None);
        assert!(!dealer.wants_hit(&mut Scripted::declining()));
        dealer.reveal_hole();
        assert_eq!(dealer.total(), Some(16));
    }

    #[test]
    fn display_omits_hidden_total() {
        let mut dealer = Dealer::default();
        deal(&mut dealer, &[7, 9]);
        dealer.hide_hole();
        assert_eq!(dealer.to_string(), "Dealer:\tXX\t9c\t");
        dealer.reveal_hole();
        assert_eq!(dealer.to_string(), "Dealer:\t7c\t9c\t(16)");

        let player = Player::new("Ann", 100);
        assert_eq!(player.to_string(), "Ann:\t<empty>");
    }
}
