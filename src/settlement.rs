//! Settlement rules: who beats the dealer and what a win pays.

use crate::hand::{Hand, TWENTY_ONE};
use crate::options::{Money, PontoonOptions, RoundingMode};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> Money {
    match mode {
        RoundingMode::Up => amount.ceil() as Money,
        RoundingMode::Down => amount.floor() as Money,
        RoundingMode::Nearest => amount.round() as Money,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> Money {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as Money,
        RoundingMode::Down => libm::floor(amount) as Money,
        RoundingMode::Nearest => libm::round(amount) as Money,
    }
}

/// Verdict of a standing hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The player beats the dealer.
    Win,
    /// The dealer beats or ties the player.
    Lose,
}

/// Compares a standing player's hand against the dealer's final hand.
///
/// A busted dealer loses to everyone. Otherwise the player must be strictly
/// higher: a tie goes to the dealer. Returns `None` while either total is
/// hidden.
#[must_use]
pub fn judge(player: &Hand, dealer: &Hand) -> Option<Verdict> {
    let player_total = player.total()?;
    if dealer.is_busted() {
        return Some(Verdict::Win);
    }
    let dealer_total = dealer.total()?;

    if player_total > dealer_total {
        Some(Verdict::Win)
    } else {
        Some(Verdict::Lose)
    }
}

/// Returns what a win pays on the flat stake.
///
/// A winning total of 21 pays [`PontoonOptions::twenty_one_pays`], anything
/// else pays [`PontoonOptions::win_pays`].
#[must_use]
pub fn payout(total: Option<u8>, options: &PontoonOptions) -> Money {
    let ratio = if total == Some(TWENTY_ONE) {
        options.twenty_one_pays
    } else {
        options.win_pays
    };
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let amount = (options.stake as f64) * ratio;
    round_amount(amount, options.rounding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card::new(Suit::Diamonds, rank));
        }
        hand
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(judge(&hand(&[10, 9]), &hand(&[10, 8])), Some(Verdict::Win));
        assert_eq!(judge(&hand(&[10, 7]), &hand(&[10, 8])), Some(Verdict::Lose));
    }

    #[test]
    fn tie_goes_to_the_dealer() {
        assert_eq!(judge(&hand(&[10, 13]), &hand(&[12, 11])), Some(Verdict::Lose));
    }

    #[test]
    fn busted_dealer_loses_to_any_standing_hand() {
        assert_eq!(judge(&hand(&[2, 3]), &hand(&[10, 6, 9])), Some(Verdict::Win));
    }

    #[test]
    fn hidden_dealer_cannot_be_judged() {
        let mut dealer = hand(&[10, 9]);
        dealer.flip_first();
        assert_eq!(judge(&hand(&[10, 10]), &dealer), None);
    }

    #[test]
    fn twenty_one_pays_one_and_a_half() {
        let options = PontoonOptions::default();
        assert_eq!(payout(Some(21), &options), 15);
        assert_eq!(payout(Some(20), &options), 20);
    }

    #[test]
    fn fractional_payouts_follow_rounding_mode() {
        let options = PontoonOptions::default().with_stake(5);
        assert_eq!(payout(Some(21), &options), 7);
        let options = options.with_rounding(RoundingMode::Up);
        assert_eq!(payout(Some(21), &options), 8);
    }
}
