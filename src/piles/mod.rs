//! Piles and the board that holds them.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card container (top = last), no legality checks
//! - `PileKind`: which of the eleven piles a `Pile` is
//! - `Board`: all eleven piles plus the base rank; clones are snapshots

pub mod board;
pub mod pile;

pub use board::{Board, InvariantViolation, FOUNDATION_COUNT, RESERVE_SIZE, TABLEAU_COUNT};
pub use pile::{Pile, PileKind};
