//! Participants: the automated opponent and the human-controlled hand.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, WeightBounds};
use crate::policy::{self, MAX_SCORE, PercentSource, TurnStatement};

/// Who decides a participant's hits and stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    /// Decisions come from the built-in policy.
    Automated,
    /// Decisions come from outside the engine.
    Human,
}

/// A participant at the table and its hand for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    kind: ParticipantKind,
    dealer: bool,
    /// Cards in draw order.
    hand: Vec<Card>,
    score: u16,
    passed: bool,
    won: bool,
    exceeded: bool,
}

impl Participant {
    /// Creates a participant with an empty hand and cleared flags.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParticipantKind, dealer: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            dealer,
            hand: Vec::new(),
            score: 0,
            passed: false,
            won: false,
            exceeded: false,
        }
    }

    /// Creates an automated participant.
    #[must_use]
    pub fn automated(name: impl Into<String>, dealer: bool) -> Self {
        Self::new(name, ParticipantKind::Automated, dealer)
    }

    /// Creates a human-controlled participant.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, ParticipantKind::Human, false)
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who drives this participant's decisions.
    #[must_use]
    pub const fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// Returns whether the participant holds the dealer role.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.dealer
    }

    /// Returns whether the participant is driven by the policy.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.kind == ParticipantKind::Automated
    }

    /// Cards in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Sum of the weights of all cards held.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Adds a card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.score = self.score.saturating_add(u16::from(card.weight()));
        self.hand.push(card);
    }

    /// Evaluates the current score.
    ///
    /// Automated participants run the hit/stand policy and may consume a
    /// roll from `source`. Human-controlled participants only ever report
    /// [`TurnStatement::Win`], [`TurnStatement::Exceed`] or
    /// [`TurnStatement::Pending`].
    pub fn analyze_turn<S: PercentSource + ?Sized>(
        &self,
        bounds: WeightBounds,
        source: &mut S,
    ) -> TurnStatement {
        match self.kind {
            ParticipantKind::Automated => policy::decide(self.score, self.dealer, bounds, source),
            ParticipantKind::Human => {
                if self.score > MAX_SCORE {
                    TurnStatement::Exceed
                } else if self.score == MAX_SCORE {
                    TurnStatement::Win
                } else {
                    TurnStatement::Pending
                }
            }
        }
    }

    /// Returns whether the participant stood.
    #[must_use]
    pub const fn has_passed(&self) -> bool {
        self.passed
    }

    /// Returns whether the participant has been marked as a winner.
    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// Returns whether the participant went over [`MAX_SCORE`].
    #[must_use]
    pub const fn has_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Returns whether the participant is over [`MAX_SCORE`], flagged or not.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.exceeded || self.score > MAX_SCORE
    }

    /// Returns whether the participant can no longer act this round.
    #[must_use]
    pub const fn has_finished(&self) -> bool {
        self.passed || self.won || self.exceeded
    }

    /// Marks the participant as a winner (or clears the mark).
    pub const fn set_win(&mut self, won: bool) {
        self.won = won;
    }

    /// Marks the participant as stood (or clears the mark).
    pub const fn set_pass(&mut self, passed: bool) {
        self.passed = passed;
    }

    /// Marks the participant as exceeded (or clears the mark).
    pub const fn set_exceeded(&mut self, exceeded: bool) {
        self.exceeded = exceeded;
    }

    /// Applies the flag a terminal statement implies.
    ///
    /// Returns `true` if the statement ended the participant's turn.
    pub(crate) const fn apply(&mut self, statement: TurnStatement) -> bool {
        match statement {
            TurnStatement::Exceed => self.exceeded = true,
            TurnStatement::Win => self.won = true,
            TurnStatement::Stand => self.passed = true,
            TurnStatement::Hit | TurnStatement::Pending => return false,
        }
        true
    }

    /// The statement a finished participant is locked into.
    pub(crate) const fn terminal_statement(&self) -> Option<TurnStatement> {
        if self.exceeded {
            Some(TurnStatement::Exceed)
        } else if self.won {
            Some(TurnStatement::Win)
        } else if self.passed {
            Some(TurnStatement::Stand)
        } else {
            None
        }
    }
}
