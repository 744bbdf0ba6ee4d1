//! Card and deck tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Card, CardError, DECK_SIZE, Deck, DrawError, Rank, Suit, WeightTable};

fn card(suit: Suit, rank: Rank) -> Card {
    WeightTable::default().card(suit, rank)
}

#[test]
fn built_deck_is_complete() {
    let deck = Deck::new(&WeightTable::default());
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 36);

    let pairs: HashSet<(Suit, Rank)> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
    assert_eq!(pairs.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| c.weight() > 0));
}

#[test]
fn default_weights_follow_the_classic_table() {
    let table = WeightTable::default();
    assert_eq!(table.weight(Rank::Six), 6);
    assert_eq!(table.weight(Rank::Ten), 10);
    assert_eq!(table.weight(Rank::Jack), 2);
    assert_eq!(table.weight(Rank::Queen), 3);
    assert_eq!(table.weight(Rank::King), 4);
    assert_eq!(table.weight(Rank::Ace), 11);

    let bounds = table.bounds();
    assert_eq!(bounds.max, 11);
    assert_eq!(bounds.min, 2);
}

#[test]
fn custom_weights_change_bounds_and_cards() {
    let table = WeightTable::new([6, 7, 8, 9, 10, 10, 10, 10, 11]).unwrap();
    assert_eq!(table.bounds().min, 6);

    let deck = Deck::new(&table);
    let total: u32 = deck.cards().iter().map(|c| u32::from(c.weight())).sum();
    assert_eq!(total, 4 * (6 + 7 + 8 + 9 + 10 + 10 + 10 + 10 + 11));
}

#[test]
fn zero_weights_are_rejected() {
    assert_eq!(
        Card::new(Suit::Hearts, Rank::Ace, 0).unwrap_err(),
        CardError::ZeroWeight { rank: Rank::Ace }
    );
    assert_eq!(
        WeightTable::new([6, 7, 8, 9, 10, 0, 3, 4, 11]).unwrap_err(),
        CardError::ZeroWeight { rank: Rank::Jack }
    );
    assert_eq!(
        WeightTable::default()
            .with_weight(Rank::King, 0)
            .unwrap_err(),
        CardError::ZeroWeight { rank: Rank::King }
    );
}

#[test]
fn shuffle_only_reorders() {
    let original = Deck::new(&WeightTable::default());
    let mut shuffled = original.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    shuffled.shuffle(&mut rng);

    assert_eq!(shuffled.len(), original.len());
    assert_ne!(shuffled.cards(), original.cards());

    let before: HashSet<Card> = original.cards().iter().copied().collect();
    let after: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(before, after);

    let mut weights_before: Vec<u8> = original.cards().iter().map(Card::weight).collect();
    let mut weights_after: Vec<u8> = shuffled.cards().iter().map(Card::weight).collect();
    weights_before.sort_unstable();
    weights_after.sort_unstable();
    assert_eq!(weights_before, weights_after);
}

#[test]
fn draw_shrinks_deck_until_empty() {
    let mut deck = Deck::new(&WeightTable::default());

    for expected in (0..DECK_SIZE).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.len(), expected);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(deck.len(), 0);
}

#[test]
fn stacked_deck_deals_in_order() {
    let first = card(Suit::Spades, Rank::Ace);
    let second = card(Suit::Diamonds, Rank::Ten);
    let mut deck = Deck::from_draws(&[first, second]);

    assert_eq!(deck.draw().unwrap(), first);
    assert_eq!(deck.draw().unwrap(), second);
}

#[test]
fn drawn_from_checks_weights_and_repeats() {
    let table = WeightTable::default();
    assert!(Deck::new(&table).is_drawn_from(&table));
    assert!(Deck::from_draws(&[]).is_drawn_from(&table));

    let partial = Deck::from_draws(&[card(Suit::Hearts, Rank::Six), card(Suit::Spades, Rank::Six)]);
    assert!(partial.is_drawn_from(&table));

    let repeated = Deck::from_draws(&[card(Suit::Hearts, Rank::Six), card(Suit::Hearts, Rank::Six)]);
    assert!(!repeated.is_drawn_from(&table));

    let heavy_kings = table.with_weight(Rank::King, 10).unwrap();
    assert!(!Deck::new(&heavy_kings).is_drawn_from(&table));
    assert!(Deck::new(&heavy_kings).is_drawn_from(&heavy_kings));
}

#[test]
fn cards_display_rank_and_suit() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A\u{2660}");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "10\u{2666}");
    assert_eq!(Suit::Clubs.short_notation(), "C");
    assert_eq!(Rank::Queen.symbol(), "Q");
}
