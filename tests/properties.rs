use pontoon::settlement::{Verdict, judge};
use pontoon::{Card, Dealer, Hand, Participant, Suit};
use proptest::prelude::*;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), 1u8..=13).prop_map(|(suit, rank)| Card::new(suit, rank))
}

fn non_ace() -> impl Strategy<Value = Card> {
    (any_suit(), 2u8..=13).prop_map(|(suit, rank)| Card::new(suit, rank))
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add(card);
    }
    hand
}

fn raw_sum(cards: &[Card]) -> u8 {
    cards.iter().map(|card| card.rank.min(10)).sum()
}

proptest! {
    #[test]
    fn without_aces_total_is_the_plain_sum(cards in prop::collection::vec(non_ace(), 0..8)) {
        prop_assert_eq!(hand_of(&cards).total(), Some(raw_sum(&cards)));
    }

    #[test]
    fn one_ace_is_promoted_only_at_eleven_or_less(
        ace_suit in any_suit(),
        others in prop::collection::vec(non_ace(), 1..6),
        position in 0usize..6,
    ) {
        let mut cards = others;
        let at = position.min(cards.len());
        cards.insert(at, Card::new(ace_suit, 1));
        let raw = raw_sum(&cards);
        let expected = if raw <= 11 { raw + 10 } else { raw };
        prop_assert_eq!(hand_of(&cards).total(), Some(expected));
    }

    #[test]
    fn face_down_card_hides_total_and_blocks_bust(
        cards in prop::collection::vec(any_card(), 1..8),
        hidden in 0usize..8,
    ) {
        let mut cards = cards;
        let at = hidden % cards.len();
        cards[at].face_up = false;
        let hand = hand_of(&cards);
        prop_assert_eq!(hand.total(), None);
        prop_assert!(!hand.is_busted());
    }

    #[test]
    fn busted_iff_total_over_twenty_one(cards in prop::collection::vec(any_card(), 0..8)) {
        let hand = hand_of(&cards);
        let total = hand.total().unwrap();
        prop_assert_eq!(hand.is_busted(), total > 21);
    }

    #[test]
    fn five_card_rule_needs_five_cards_under_twenty_one(
        cards in prop::collection::vec(any_card(), 0..8),
    ) {
        let hand = hand_of(&cards);
        let expected = cards.len() == 5 && hand.total().unwrap() < 21;
        prop_assert_eq!(hand.five_card(), expected);
    }

    #[test]
    fn dealer_hits_iff_below_seventeen(cards in prop::collection::vec(any_card(), 0..8)) {
        let mut dealer = Dealer::default();
        for &card in &cards {
            dealer.hand_mut().add(card);
        }
        let total = dealer.total().unwrap();
        prop_assert_eq!(dealer.must_hit(), total < 17);
    }

    #[test]
    fn settlement_needs_a_strictly_higher_total(
        player in prop::collection::vec(any_card(), 2..5),
        dealer in prop::collection::vec(any_card(), 2..6),
    ) {
        let player = hand_of(&player);
        let dealer = hand_of(&dealer);
        let verdict = judge(&player, &dealer).unwrap();

        if dealer.is_busted() {
            prop_assert_eq!(verdict, Verdict::Win);
        } else if player.total() > dealer.total() {
            prop_assert_eq!(verdict, Verdict::Win);
        } else {
            prop_assert_eq!(verdict, Verdict::Lose);
        }
    }
}
