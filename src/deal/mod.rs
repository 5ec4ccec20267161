//! Dealing: deck construction, shuffling, and the initial layout.

pub mod dealer;

pub use dealer::{deal, deal_from_deck, standard_deck};
