//! Card, pile, deck, and hand tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Card, CardFormatError, DECK_SIZE, Deck, Hand, Pile, Rank, Suit};

fn card(rank: &str, suit: &str) -> Card {
    Card::from_labels(rank, suit).expect("valid card labels")
}

fn pile(cards: &[(&str, &str)]) -> Pile {
    cards
        .iter()
        .map(|&(rank, suit)| card(rank, suit))
        .collect()
}

#[test]
fn fresh_deck_covers_full_cross_product() {
    let deck = Deck::fresh();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<(Rank, Suit)> =
        deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(distinct.contains(&(rank, suit)));
        }
    }
}

#[test]
fn fresh_deck_is_in_new_pack_order() {
    let deck = Deck::fresh();
    // Suit-outer, rank-inner: all 13 clubs first, spades last.
    assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::fresh();
    let before = deck.cards().to_vec();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    deck.shuffle(&mut rng);
    let after = deck.cards().to_vec();

    assert_ne!(before, after);

    let mut sorted_before = before;
    let mut sorted_after = after;
    sorted_before.sort_by_key(|c| (c.suit, c.rank));
    sorted_after.sort_by_key(|c| (c.suit, c.rank));
    assert_eq!(sorted_before, sorted_after);
}

#[test]
fn shuffle_with_same_seed_is_reproducible() {
    let mut first = Deck::fresh();
    let mut second = Deck::fresh();

    first.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(first.cards(), second.cards());
}

#[test]
fn deal_then_merge_restores_cardinality() {
    let mut deck = Deck::fresh();
    let dealt = deck.deal(5);
    assert_eq!(dealt.len(), 5);
    assert_eq!(deck.len(), DECK_SIZE - 5);

    let mut all = Pile::from(deck.cards().to_vec());
    all.merge(&dealt);
    assert_eq!(all.len(), DECK_SIZE);
    // Merge copies; the dealt pile stays usable.
    assert_eq!(dealt.len(), 5);
}

#[test]
fn deal_removes_from_the_front() {
    let mut deck = Deck::fresh();
    let expected = deck.cards()[..3].to_vec();
    let dealt = deck.deal(3);
    assert_eq!(dealt.cards(), expected.as_slice());
}

#[test]
fn undersupplied_deal_truncates_silently() {
    let mut deck = Deck::from_cards(pile(&[("2", "C"), ("3", "D"), ("4", "H")]));
    let dealt = deck.deal(10);
    assert_eq!(dealt.len(), 3);
    assert!(deck.is_empty());
    assert_eq!(deck.deal_one(), None);
}

#[test]
fn reset_repopulates_and_shuffles() {
    let mut deck = Deck::fresh();
    deck.deal(20);
    assert_eq!(deck.len(), DECK_SIZE - 20);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    deck.reset(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck.cards(), Deck::fresh().cards());
}

#[test]
fn rank_and_suit_sorts_follow_canonical_orders() {
    let mut cards = pile(&[("2", "C"), ("4", "S"), ("3", "H"), ("5", "D")]);

    cards.sort_by_rank();
    assert_eq!(
        cards,
        pile(&[("2", "C"), ("3", "H"), ("4", "S"), ("5", "D")])
    );

    cards.sort_by_suit();
    assert_eq!(
        cards,
        pile(&[("2", "C"), ("5", "D"), ("3", "H"), ("4", "S")])
    );
}

#[test]
fn sorts_are_stable_on_ties() {
    let mut cards = pile(&[("5", "H"), ("5", "C"), ("2", "S")]);
    cards.sort_by_rank();
    // Equal ranks keep their prior relative order.
    assert_eq!(cards, pile(&[("2", "S"), ("5", "H"), ("5", "C")]));
}

#[test]
fn merge_appends_in_order_and_leaves_other_untouched() {
    let mut cards = pile(&[("2", "C"), ("4", "S")]);
    let other = pile(&[("5", "H"), ("9", "D")]);
    cards.merge(&other);
    assert_eq!(
        cards,
        pile(&[("2", "C"), ("4", "S"), ("5", "H"), ("9", "D")])
    );
    assert_eq!(other, pile(&[("5", "H"), ("9", "D")]));
}

#[test]
fn pile_display_lists_cards_in_order() {
    let cards = pile(&[("2", "C"), ("10", "H"), ("A", "S")]);
    assert_eq!(cards.to_string(), "[2C, 10H, AS]");
    assert_eq!(Pile::new().to_string(), "[]");
}

#[test]
fn score_jack_ace_three_is_fourteen() {
    let mut hand = Hand::new();
    hand.add_card(card("J", "H"));
    hand.add_card(card("A", "S"));
    hand.add_card(card("3", "D"));
    // Non-ace sum 13; ace would bust at 11, so it counts 1.
    assert_eq!(hand.score(), 14);
}

#[test]
fn score_two_aces_is_twelve() {
    let mut hand = Hand::new();
    hand.add_card(card("A", "S"));
    hand.add_card(card("A", "H"));
    assert_eq!(hand.score(), 12);
}

#[test]
fn score_helpers_and_clear() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);

    hand.add_card(card("A", "S"));
    hand.add_card(card("K", "C"));
    assert_eq!(hand.score(), 21);
    assert!(hand.is_blackjack());
    assert!(!hand.is_bust());

    hand.add_card(card("5", "D"));
    hand.add_card(card("9", "H"));
    assert_eq!(hand.score(), 25);
    assert!(hand.is_bust());

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
}

#[test]
fn malformed_labels_are_rejected() {
    assert_eq!(
        Card::from_labels("Z", "S").unwrap_err(),
        CardFormatError::UnknownRank
    );
    assert_eq!(
        Card::from_labels("A", "X").unwrap_err(),
        CardFormatError::UnknownSuit
    );
    // "10" is the only two-character rank label.
    assert_eq!(card("10", "H"), Card::new(Rank::Ten, Suit::Hearts));
}

#[test]
fn card_serializes_as_label_pair() {
    let ace = card("A", "S");
    assert_eq!(serde_json::to_string(&ace).unwrap(), r#"["A","S"]"#);

    let parsed: Card = serde_json::from_str(r#"["10","H"]"#).unwrap();
    assert_eq!(parsed, card("10", "H"));

    let err = serde_json::from_str::<Card>(r#"["Z","S"]"#).unwrap_err();
    assert!(err.to_string().contains("unrecognized rank"));
}

#[test]
fn asset_names_match_display_assets() {
    assert_eq!(card("A", "S").asset_name(), "ace_of_spades.png");
    assert_eq!(card("10", "H").asset_name(), "10_of_hearts.png");
    assert_eq!(card("Q", "D").asset_name(), "queen_of_diamonds.png");
    assert_eq!(card("J", "C").asset_name(), "jack_of_clubs.png");
    assert_eq!(card("K", "H").asset_name(), "king_of_hearts.png");
    assert_eq!(card("2", "C").asset_name(), "2_of_clubs.png");
}
