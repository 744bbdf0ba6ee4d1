//! A 21 points card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single table: a 36-card
//! short deck, an automated dealer and a human-controlled participant. It
//! handles dealing, hits and passes, the dealer's hit/stand policy, and
//! winner resolution. Rendering and pacing are left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions, PLAYER_SEAT};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_round();
//! let card = game.hit(PLAYER_SEAT).unwrap();
//! println!("drew {card}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod participant;
pub mod policy;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, WeightBounds, WeightTable};
pub use deck::Deck;
pub use error::{ActionError, CardError, DrawError, ResolveError};
pub use game::{DEALER_SEAT, Game, GameState, PLAYER_SEAT, Tick};
pub use options::GameOptions;
pub use participant::{Participant, ParticipantKind};
pub use policy::{PercentSource, Thresholds, TurnStatement};
pub use snapshot::TableSnapshot;
