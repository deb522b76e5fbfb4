//! Hands and the Pontoon value model.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{ACE_VALUE, Card};

/// The best total a hand can reach.
pub const TWENTY_ONE: u8 = 21;

/// Number of cards that wins under the five-card rule.
pub const FIVE_CARD_TRICK: usize = 5;

/// Totals at or below this promote one ace to 11.
const ACE_PROMOTION_LIMIT: u8 = 11;

/// An ordered set of cards owned by a single participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns the first card over. Does nothing on an empty hand.
    pub fn flip_first(&mut self) {
        if let Some(card) = self.cards.first_mut() {
            card.flip();
        }
    }

    /// Calculates the value of the hand.
    ///
    /// Returns `None` while any card is face-down. Otherwise every ace counts
    /// 1, and if the hand holds an ace and the raw sum is at most 11, exactly
    /// one ace is promoted to 11.
    #[must_use]
    pub fn total(&self) -> Option<u8> {
        let mut total: u8 = 0;
        let mut has_ace = false;

        for card in &self.cards {
            let value = card.value()?;
            has_ace |= value == ACE_VALUE;
            total = total.saturating_add(value);
        }

        if has_ace && total <= ACE_PROMOTION_LIMIT {
            total += 10;
        }

        Some(total)
    }

    /// Returns whether the hand is over 21.
    ///
    /// A hand with a face-down card is never busted.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total().is_some_and(|total| total > TWENTY_ONE)
    }

    /// Returns whether the hand wins under the five-card rule.
    #[must_use]
    pub fn five_card(&self) -> bool {
        self.cards.len() == FIVE_CARD_TRICK && self.total().is_some_and(|total| total < TWENTY_ONE)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }
        for card in &self.cards {
            write!(f, "{card}\t")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use alloc::string::ToString;

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card::new(Suit::Hearts, rank));
        }
        hand
    }

    #[test]
    fn empty_hand_totals_zero() {
        let hand = Hand::new();
        assert_eq!(hand.total(), Some(0));
        assert!(!hand.is_busted());
        assert!(!hand.five_card());
    }

    #[test]
    fn ace_and_king_make_twenty_one() {
        assert_eq!(hand(&[1, 13]).total(), Some(21));
    }

    #[test]
    fn only_one_ace_is_promoted() {
        assert_eq!(hand(&[1, 1]).total(), Some(12));
        assert_eq!(hand(&[1, 1, 9]).total(), Some(21));
        assert_eq!(hand(&[1, 1, 10]).total(), Some(12));
    }

    #[test]
    fn ace_stays_low_above_promotion_limit() {
        assert_eq!(hand(&[1, 6, 5]).total(), Some(12));
        assert_eq!(hand(&[1, 5, 5]).total(), Some(21));
    }

    #[test]
    fn court_cards_bust() {
        let busted = hand(&[13, 12, 5]);
        assert_eq!(busted.total(), Some(25));
        assert!(busted.is_busted());
    }

    #[test]
    fn five_small_cards_win() {
        let small = hand(&[2, 3, 4, 5, 2]);
        assert_eq!(small.total(), Some(16));
        assert!(small.five_card());

        let exact = hand(&[2, 3, 4, 5, 7]);
        assert_eq!(exact.total(), Some(21));
        assert!(!exact.five_card());
    }

    #[test]
    fn hidden_card_hides_the_total() {
        let mut dealer = Hand::new();
        dealer.add(Card::face_down(Suit::Clubs, 13));
        dealer.add(Card::new(Suit::Spades, 13));
        dealer.add(Card::new(Suit::Spades, 5));
        assert_eq!(dealer.total(), None);
        assert!(!dealer.is_busted());

        dealer.flip_first();
        assert!(dealer.is_busted());
    }

    #[test]
    fn display_separates_cards_with_tabs() {
        let mut shown = hand(&[1, 13]);
        assert_eq!(shown.to_string(), "Ah\tKh\t");
        shown.clear();
        assert_eq!(shown.to_string(), "<empty>");
    }
}
