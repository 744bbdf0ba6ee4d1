//! The deck: a stack of cards drawn from the top.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit, WeightTable};
use crate::error::DrawError;

/// An ordered stack of cards. The last element is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per suit and rank, weighted
    /// by `weights`.
    #[must_use]
    pub fn new(weights: &WeightTable) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(weights.card(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from prearranged cards. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck has no cards; the deck
    /// is left untouched.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns whether every card could have come from a deck built with
    /// `weights`: each weight matches its rank and no suit and rank pair
    /// appears twice. Missing cards are allowed.
    #[must_use]
    pub fn is_drawn_from(&self, weights: &WeightTable) -> bool {
        let mut seen: u64 = 0;

        for card in &self.cards {
            if card.weight() != weights.weight(card.rank()) {
                return false;
            }
            let bit = 1u64 << (card.suit().index() * Rank::ALL.len() + card.rank().index());
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }

        true
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
