//! Core value types: cards, ranks, RNG, configuration.
//!
//! These are the leaves of the engine. Nothing here knows about piles or
//! move legality.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, Color, ParseCardError, Rank, Suit, DECK_SIZE, RANK_COUNT};
pub use config::CanfieldConfig;
pub use rng::GameRng;
