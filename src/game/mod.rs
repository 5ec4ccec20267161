//! Game orchestration: moves, undo history, and the engine itself.
//!
//! ## Key Types
//!
//! - `Game`: the engine the presentation layer drives
//! - `Move`: a move addressed by pile kind and 1-based slot
//! - `History` / `Snapshot`: full-board undo stack

pub mod engine;
pub mod history;
pub mod moves;

pub use engine::Game;
pub use history::{History, Snapshot};
pub use moves::Move;
