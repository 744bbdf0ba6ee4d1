use crate::card::{Card, WeightBounds};
use crate::error::ActionError;
use crate::participant::Participant;
use crate::policy::{PercentSource, TurnStatement};

use super::{Game, Table, Tick};

impl Table {
    fn evaluate<S: PercentSource + ?Sized>(
        &mut self,
        index: usize,
        bounds: WeightBounds,
        source: &mut S,
    ) -> Result<TurnStatement, ActionError> {
        self.ensure_in_progress()?;
        let participant = self.participant_mut(index)?;

        if let Some(statement) = participant.terminal_statement() {
            return Ok(statement);
        }

        let statement = participant.analyze_turn(bounds, source);
        let ended = participant.apply(statement);

        tracing::debug!(
            participant = participant.name(),
            score = participant.score(),
            ?statement,
            ended,
            "turn analyzed"
        );

        Ok(statement)
    }

    fn tick<S: PercentSource + ?Sized>(
        &mut self,
        bounds: WeightBounds,
        source: &mut S,
    ) -> Result<Tick, ActionError> {
        self.ensure_in_progress()?;

        // Prefer an automated participant that can still act.
        let index = self
            .participants
            .iter()
            .position(|participant| participant.is_automated() && !participant.has_finished())
            .or_else(|| self.participants.iter().position(Participant::is_automated))
            .ok_or(ActionError::NoAutomatedParticipant)?;

        let statement = self.evaluate(index, bounds, source)?;
        if statement != TurnStatement::Hit {
            return Ok(Tick::Settled { index, statement });
        }

        let card = self.deal_to(index)?;
        Ok(Tick::Drew { index, card })
    }
}

impl Game {
    /// Draws one card for the participant at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, no participant sits at
    /// `index`, the participant already passed, won or exceeded, or the deck
    /// is empty. A failed call leaves the deck and hands untouched.
    pub fn hit(&self, index: usize) -> Result<Card, ActionError> {
        let mut table = self.table.lock();
        table.ensure_in_progress()?;
        table.deal_to(index)
    }

    /// Ends the turn of the participant at `index` without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, no participant sits at
    /// `index`, or the participant has already finished.
    pub fn pass(&self, index: usize) -> Result<(), ActionError> {
        let mut table = self.table.lock();
        table.ensure_in_progress()?;

        let participant = table.participant_mut(index)?;
        if participant.has_finished() {
            return Err(ActionError::ParticipantFinished);
        }
        participant.set_pass(true);

        tracing::debug!(
            participant = participant.name(),
            score = participant.score(),
            "participant passed"
        );

        Ok(())
    }

    /// Analyzes the turn of the participant at `index` and records the
    /// outcome. `Win` and `Exceed` lock the participant for the rest of the
    /// round; an automated `Stand` marks it as passed.
    ///
    /// A participant that has already finished reports its final statement
    /// again without consuming randomness.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or no participant sits at
    /// `index`.
    pub fn evaluate(&self, index: usize) -> Result<TurnStatement, ActionError> {
        let bounds = self.weight_bounds();
        let mut table = self.table.lock();
        let mut rng = self.rng.lock();
        table.evaluate(index, bounds, &mut *rng)
    }

    /// Same as [`Game::evaluate`], drawing policy rolls from `source`.
    ///
    /// # Errors
    ///
    /// See [`Game::evaluate`].
    pub fn evaluate_with<S: PercentSource + ?Sized>(
        &self,
        index: usize,
        source: &mut S,
    ) -> Result<TurnStatement, ActionError> {
        let bounds = self.weight_bounds();
        self.table.lock().evaluate(index, bounds, source)
    }

    /// Advances the automated opponent by one step: evaluates it and, if the
    /// policy says hit, draws one card for it.
    ///
    /// The caller decides the cadence; keep calling until the returned
    /// [`Tick`] is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, there is no automated
    /// participant, or the deck is empty when a card is needed.
    pub fn tick(&self) -> Result<Tick, ActionError> {
        let bounds = self.weight_bounds();
        let mut table = self.table.lock();
        let mut rng = self.rng.lock();
        table.tick(bounds, &mut *rng)
    }

    /// Same as [`Game::tick`], drawing policy rolls from `source`.
    ///
    /// # Errors
    ///
    /// See [`Game::tick`].
    pub fn tick_with<S: PercentSource + ?Sized>(&self, source: &mut S) -> Result<Tick, ActionError> {
        let bounds = self.weight_bounds();
        self.table.lock().tick(bounds, source)
    }
}
