//! The deck the dealer deals from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand::Hand;

/// A single 52-card deck with its own seeded shuffler.
///
/// Cards are drawn from the end of the internal vector. The deck never runs
/// dry: drawing from an empty deck first repopulates and reshuffles it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a populated, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.populate();
        deck.shuffle();
        deck
    }

    /// Replaces the contents with one fresh, ordered deck.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Fixes the upcoming draw order. `draws[0]` is dealt first.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws one face-up card, restocking first if the deck is empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the deck is repopulated before any pop from an empty deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            log::debug!("deck exhausted, repopulating and reshuffling");
            self.populate();
            self.shuffle();
        }
        let mut card = self
            .cards
            .pop()
            .expect("populate() always leaves 52 cards in the deck");
        card.face_up = true;
        log::trace!("drew {card}");
        card
    }

    /// Deals `per_hand` cards to each hand, one card at a time around the table.
    pub fn deal(&mut self, hands: &mut [&mut Hand], per_hand: usize) {
        for _ in 0..per_hand {
            for hand in hands.iter_mut() {
                hand.add(self.draw());
            }
        }
    }
}
