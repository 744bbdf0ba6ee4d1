//! Hit/stand decisions for automated participants.
//!
//! The policy only looks at the current score. Below the point where even
//! the heaviest card cannot bust, it always hits; one card short of where
//! the lightest card would bust, it always stands. Between the two it hits
//! with a probability that falls as the score rises.

use rand::Rng;

use crate::card::WeightBounds;

/// The winning score. Anything above it exceeds.
pub const MAX_SCORE: u16 = 21;

/// The dealer stands on this total or more.
pub const DEALER_STAND_TOTAL: u16 = 17;

/// Hit chances (in percent) for the low, middle and high bands.
pub const HIT_CHANCES: [u8; 3] = [85, 60, 35];

/// What a participant's current score calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatement {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
    /// Score is exactly [`MAX_SCORE`].
    Win,
    /// Score is above [`MAX_SCORE`].
    Exceed,
    /// Waiting on an external hit or stand choice.
    Pending,
}

/// A source of uniform rolls in `0..100`.
///
/// Every [`Rng`] is a source. Tests can implement this for scripted rolls.
pub trait PercentSource {
    /// Returns a uniform value in `0..100`.
    fn roll_percent(&mut self) -> u8;
}

impl<R: Rng + ?Sized> PercentSource for R {
    fn roll_percent(&mut self) -> u8 {
        self.random_range(0..100)
    }
}

/// Scores at which the policy changes behaviour, derived from weight bounds.
///
/// Values are signed: a card heavier than [`MAX_SCORE`] pushes `lower` below
/// zero, and the bands are placed from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// At or below this score no single card can bust.
    pub lower: i32,
    /// At this score any card would bust.
    pub upper: i32,
    /// Last score of the 85% band.
    pub first: i32,
    /// Last score of the 60% band.
    pub second: i32,
    /// Last score of the 35% band.
    pub third: i32,
}

impl Thresholds {
    /// Derives the thresholds from the heaviest and lightest card weights.
    #[must_use]
    pub fn new(bounds: WeightBounds) -> Self {
        let max_score = i32::from(MAX_SCORE);
        let upper = max_score - i32::from(bounds.min) + 1;
        let lower = max_score - i32::from(bounds.max);
        let range = upper - lower;

        Self {
            lower,
            upper,
            first: lower + range / 5,
            second: lower + range / 2,
            third: upper - 1,
        }
    }
}

/// Decides the next move for an automated participant.
///
/// Only the banded region consumes a roll from `source`; every other score
/// is decided deterministically.
pub fn decide<S: PercentSource + ?Sized>(
    score: u16,
    is_dealer: bool,
    bounds: WeightBounds,
    source: &mut S,
) -> TurnStatement {
    if score > MAX_SCORE {
        return TurnStatement::Exceed;
    }
    if score == MAX_SCORE {
        return TurnStatement::Win;
    }
    if is_dealer && score >= DEALER_STAND_TOTAL {
        return TurnStatement::Stand;
    }

    let thresholds = Thresholds::new(bounds);
    let score = i32::from(score);

    if score == thresholds.upper {
        return TurnStatement::Stand;
    }
    if score <= thresholds.lower {
        return TurnStatement::Hit;
    }

    let chance = if score <= thresholds.first {
        HIT_CHANCES[0]
    } else if score <= thresholds.second {
        HIT_CHANCES[1]
    } else if score <= thresholds.third {
        HIT_CHANCES[2]
    } else {
        return TurnStatement::Stand;
    };

    roll(chance, source)
}

fn roll<S: PercentSource + ?Sized>(chance: u8, source: &mut S) -> TurnStatement {
    if source.roll_percent() <= chance {
        TurnStatement::Hit
    } else {
        TurnStatement::Stand
    }
}
