//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn letter(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

/// Raw value of an ace before any promotion.
pub const ACE_VALUE: u8 = 1;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is showing.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when totalling a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn face_down(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Returns the raw value of the card, or `None` while it is face-down.
    ///
    /// Aces count 1 and court cards count 10.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        if !self.face_up {
            return None;
        }
        Some(match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.face_up {
            return f.write_str("XX");
        }
        match self.rank {
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn face_down_card_has_no_value() {
        let mut card = Card::face_down(Suit::Spades, 9);
        assert_eq!(card.value(), None);
        card.flip();
        assert_eq!(card.value(), Some(9));
    }

    #[test]
    fn court_cards_count_ten_and_ace_counts_one() {
        assert_eq!(Card::new(Suit::Hearts, 1).value(), Some(ACE_VALUE));
        for rank in 11..=13 {
            assert_eq!(Card::new(Suit::Clubs, rank).value(), Some(10));
        }
    }

    #[test]
    fn display_uses_rank_and_suit_letters() {
        assert_eq!(Card::new(Suit::Clubs, 1).to_string(), "Ac");
        assert_eq!(Card::new(Suit::Diamonds, 13).to_string(), "Kd");
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10h");
        assert_eq!(Card::face_down(Suit::Spades, 7).to_string(), "XX");
    }
}
