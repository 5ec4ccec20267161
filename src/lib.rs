//! # canfield-engine
//!
//! Rules engine for Canfield solitaire.
//!
//! The engine owns all card state, enforces move legality, deals new games,
//! and supports undo. Rendering, input handling and menus belong to the
//! caller: a UI calls the move methods on [`Game`] and reads pile tops and
//! sizes back for drawing.
//!
//! ## Rules in brief
//!
//! - 13 cards go to the reserve, one to foundation 1, one to each of four
//!   tableaus, and the rest to the stock.
//! - The rank of the foundation 1 card is the **base rank**. Every
//!   foundation starts at the base rank and builds up in suit, wrapping
//!   from King to Ace.
//! - Tableaus build down in alternating colors, wrapping from Ace to King.
//!   An emptied tableau is refilled at once from the reserve.
//! - The stock is drawn to the waste; an empty stock turns the waste back
//!   over.
//!
//! ## Design
//!
//! - **Silent illegal moves**: a move that fails validation changes
//!   nothing and returns `false`.
//! - **Snapshot undo**: each applied move pushes the whole previous board.
//!   Piles are persistent `im` vectors, so snapshots are O(1) clones.
//! - **Deterministic dealing**: ChaCha8 streams; every deal has a seed.
//!
//! ## Modules
//!
//! - `core`: cards, cyclic ranks, RNG, configuration
//! - `piles`: pile container and the eleven-pile board
//! - `deal`: deck construction and the initial layout
//! - `rules`: pure move-legality predicates
//! - `game`: moves, undo history, and the `Game` engine
//!
//! ```
//! use canfield_engine::{CanfieldConfig, Game};
//!
//! let mut game = Game::new(CanfieldConfig::new().with_seed(7));
//! game.deal();
//!
//! for tableau in 1..=4 {
//!     assert_eq!(game.tableau_size(tableau), 1);
//! }
//! assert_eq!(game.top_foundation(1).map(|c| c.rank()), game.base_rank());
//! assert!(!game.is_won());
//! ```

pub mod core;
pub mod deal;
pub mod game;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CanfieldConfig, Card, Color, GameRng, Rank, Suit};
pub use crate::game::{Game, Move};
pub use crate::piles::{Board, InvariantViolation, Pile, PileKind};
