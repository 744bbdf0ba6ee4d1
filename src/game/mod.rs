//! Table engine and round state management.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, WeightBounds};
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::policy::MAX_SCORE;
use crate::snapshot::TableSnapshot;

mod actions;
mod resolve;
pub mod state;

pub use state::{DEALER_SEAT, GameState, PLAYER_SEAT, Tick};

/// Everything a round mutates. Guarded by a single lock so that no two
/// mutating calls interleave.
#[derive(Debug)]
struct Table {
    deck: Deck,
    participants: Vec<Participant>,
    state: GameState,
    /// Number given to the last automated participant created this round.
    computer_seq: u32,
    running: bool,
}

impl Table {
    const fn ensure_in_progress(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::InProgress => Ok(()),
            GameState::NotStarted | GameState::Finished => Err(ActionError::InvalidState),
        }
    }

    fn participant(&self, index: usize) -> Result<&Participant, ActionError> {
        self.participants
            .get(index)
            .ok_or(ActionError::InvalidParticipantIndex(index))
    }

    fn participant_mut(&mut self, index: usize) -> Result<&mut Participant, ActionError> {
        self.participants
            .get_mut(index)
            .ok_or(ActionError::InvalidParticipantIndex(index))
    }

    /// Draws the top card for the participant at `index`. A card that takes
    /// the score over [`MAX_SCORE`] locks the participant as exceeded.
    fn deal_to(&mut self, index: usize) -> Result<Card, ActionError> {
        let Self {
            deck, participants, ..
        } = self;
        let participant = participants
            .get_mut(index)
            .ok_or(ActionError::InvalidParticipantIndex(index))?;

        if participant.has_finished() {
            return Err(ActionError::ParticipantFinished);
        }

        let card = deck.draw().inspect_err(|_| {
            tracing::warn!(participant = participant.name(), "draw from empty deck");
        })?;
        participant.receive_card(card);
        if participant.score() > MAX_SCORE {
            participant.set_exceeded(true);
        }

        tracing::debug!(
            participant = participant.name(),
            card = %card,
            score = participant.score(),
            exceeded = participant.has_exceeded(),
            remaining = deck.len(),
            "card drawn"
        );

        Ok(card)
    }

    fn is_finished(&self) -> bool {
        !self.participants.is_empty() && self.participants.iter().all(Participant::has_finished)
    }

    fn winners(&self) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|participant| participant.has_won())
            .cloned()
            .collect()
    }

    fn spawn_computer(&mut self, prefix: &str, dealer: bool) -> Participant {
        self.computer_seq += 1;
        Participant::automated(format!("{prefix} {}", self.computer_seq), dealer)
    }
}

/// A 21 points table engine: one deck, an automated dealer and a
/// human-controlled participant.
///
/// The engine never calls out. Callers drive it with [`Game::start_round`],
/// [`Game::hit`], [`Game::pass`], [`Game::evaluate`] and [`Game::tick`], and
/// poll [`Game::snapshot`] after each call.
///
/// # Example
///
/// ```
/// use twentyone::{Game, GameOptions, GameState, PLAYER_SEAT};
///
/// let game = Game::new(GameOptions::default(), 42);
/// game.start_round();
/// assert_eq!(game.state(), GameState::InProgress);
///
/// game.pass(PLAYER_SEAT).unwrap();
/// while !game.tick().unwrap().is_settled() {}
///
/// assert!(game.is_round_finished());
/// let winners = game.resolve_winners().unwrap();
/// assert!(winners.len() <= 2);
/// ```
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    table: Mutex<Table>,
    /// Random number generator for shuffles and policy rolls.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new table with the given seed. No round is dealt yet.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let deck = Deck::new(&options.weights);

        Self {
            options,
            table: Mutex::new(Table {
                deck,
                participants: Vec::new(),
                state: GameState::NotStarted,
                computer_seq: 0,
                running: false,
            }),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Starts a fresh round: builds and shuffles a full deck, seats a new
    /// dealer and player, and deals one card to each (dealer first).
    ///
    /// Calling this again reloads the table; nothing from the previous round
    /// survives.
    pub fn start_round(&self) {
        let mut deck = Deck::new(&self.options.weights);
        deck.shuffle(&mut *self.rng.lock());

        let mut table = self.table.lock();
        self.seat_and_deal(&mut table, deck);
    }

    /// Starts a round from a prearranged deck without shuffling it.
    ///
    /// The deck may be shorter than a full one, but every card must be one
    /// the table's weight table would build, at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyDeck`] if the deck cannot cover the
    /// opening deal, or [`ActionError::ForeignDeck`] if it repeats a card or
    /// carries weights from another table. The table is left untouched in
    /// either case.
    pub fn start_round_with_deck(&self, deck: Deck) -> Result<(), ActionError> {
        if deck.len() < 2 {
            return Err(ActionError::EmptyDeck);
        }
        if !deck.is_drawn_from(&self.options.weights) {
            return Err(ActionError::ForeignDeck);
        }

        let mut table = self.table.lock();
        self.seat_and_deal(&mut table, deck);
        Ok(())
    }

    fn seat_and_deal(&self, table: &mut Table, deck: Deck) {
        table.deck = deck;
        table.participants.clear();
        table.computer_seq = 0;

        let dealer = table.spawn_computer(&self.options.computer_name, true);
        table.participants.push(dealer);
        table
            .participants
            .push(Participant::human(self.options.player_name.as_str()));

        table.state = GameState::InProgress;
        table.running = true;

        for seat in [DEALER_SEAT, PLAYER_SEAT] {
            if let Err(err) = table.deal_to(seat) {
                tracing::warn!(seat, %err, "opening deal incomplete");
            }
        }

        tracing::info!(
            dealer = table.participants[DEALER_SEAT].name(),
            player = table.participants[PLAYER_SEAT].name(),
            remaining = table.deck.len(),
            "round started"
        );
    }

    /// Returns the current round state.
    pub fn state(&self) -> GameState {
        self.table.lock().state
    }

    /// Returns whether a round has ever been started on this table.
    pub fn is_running(&self) -> bool {
        self.table.lock().running
    }

    /// Returns the number of cards left in the deck.
    pub fn deck_remaining(&self) -> usize {
        self.table.lock().deck.len()
    }

    /// Returns whether the deck is exhausted.
    pub fn is_deck_empty(&self) -> bool {
        self.table.lock().deck.is_empty()
    }

    /// Heaviest and lightest card weights, as used by the policy.
    pub fn weight_bounds(&self) -> WeightBounds {
        self.options.weights.bounds()
    }

    /// Returns a copy of the participant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidParticipantIndex`] if no participant sits
    /// at `index`.
    pub fn participant(&self, index: usize) -> Result<Participant, ActionError> {
        self.table.lock().participant(index).cloned()
    }

    /// Returns copies of all participants in seat order.
    pub fn participants(&self) -> Vec<Participant> {
        self.table.lock().participants.clone()
    }

    /// Returns a read-only view of the table.
    pub fn snapshot(&self) -> TableSnapshot {
        let table = self.table.lock();
        TableSnapshot {
            state: table.state,
            deck_remaining: table.deck.len(),
            participants: table.participants.clone(),
        }
    }
}
