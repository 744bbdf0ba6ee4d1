//! Card types and the per-rank weight table.

use core::fmt;

use crate::error::CardError;

/// Number of cards in a freshly built deck (4 suits x 9 ranks).
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Single-letter notation (`D`, `C`, `H`, `S`).
    #[must_use]
    pub const fn short_notation(self) -> &'static str {
        match self {
            Self::Diamonds => "D",
            Self::Clubs => "C",
            Self::Hearts => "H",
            Self::Spades => "S",
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Diamonds => "\u{2666}",
            Self::Clubs => "\u{2663}",
            Self::Hearts => "\u{2665}",
            Self::Spades => "\u{2660}",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank. The game is played with a short deck: six through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck-construction order.
    pub const ALL: [Self; 9] = [
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Display symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A playing card.
///
/// The weight is the number of points the card scores. It is assigned when
/// the deck is built, so two decks built from different [`WeightTable`]s can
/// score the same rank differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    weight: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::ZeroWeight`] if `weight` is zero.
    pub const fn new(suit: Suit, rank: Rank, weight: u8) -> Result<Self, CardError> {
        if weight == 0 {
            return Err(CardError::ZeroWeight { rank });
        }
        Ok(Self { suit, rank, weight })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Points this card is worth.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        self.weight
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Heaviest and lightest single-card weights of a [`WeightTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightBounds {
    /// Largest weight any single card carries.
    pub max: u8,
    /// Smallest weight any single card carries.
    pub min: u8,
}

/// Points assigned to each rank when a deck is built.
///
/// The default is the classic table: six through ten score their face
/// value, jack 2, queen 3, king 4 and ace 11.
///
/// ```
/// use twentyone::{Rank, WeightTable};
///
/// let table = WeightTable::default().with_weight(Rank::Jack, 10).unwrap();
/// assert_eq!(table.weight(Rank::Jack), 10);
/// assert_eq!(table.bounds().min, 3);
/// assert_eq!(table.bounds().max, 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    weights: [u8; 9],
}

impl WeightTable {
    /// Creates a table from weights listed in [`Rank::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::ZeroWeight`] for the first rank given a zero weight.
    pub fn new(weights: [u8; 9]) -> Result<Self, CardError> {
        if let Some(rank) = Rank::ALL.into_iter().find(|rank| weights[rank.index()] == 0) {
            return Err(CardError::ZeroWeight { rank });
        }
        Ok(Self { weights })
    }

    /// Replaces the weight of a single rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::ZeroWeight`] if `weight` is zero.
    pub const fn with_weight(mut self, rank: Rank, weight: u8) -> Result<Self, CardError> {
        if weight == 0 {
            return Err(CardError::ZeroWeight { rank });
        }
        self.weights[rank.index()] = weight;
        Ok(self)
    }

    /// Returns the weight of `rank`.
    #[must_use]
    pub const fn weight(&self, rank: Rank) -> u8 {
        self.weights[rank.index()]
    }

    /// Derives the heaviest and lightest weights in the table.
    #[must_use]
    pub fn bounds(&self) -> WeightBounds {
        let max = self.weights.iter().copied().max().unwrap_or(0);
        let min = self.weights.iter().copied().min().unwrap_or(0);
        WeightBounds { max, min }
    }

    /// Builds the card for `suit` and `rank` with this table's weight.
    #[must_use]
    pub const fn card(&self, suit: Suit, rank: Rank) -> Card {
        // Weights are validated on the way into the table.
        Card {
            suit,
            rank,
            weight: self.weight(rank),
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: [6, 7, 8, 9, 10, 2, 3, 4, 11],
        }
    }
}
