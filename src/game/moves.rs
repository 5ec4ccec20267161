//! Move representation.
//!
//! A `Move` names a transfer by pile kind and 1-based slot number only.
//! It never carries card identity: the presentation layer remembers which
//! pile the player picked up from and issues the matching move.
//!
//! Foundation destinations are never named. The engine places a card on
//! the lowest-numbered foundation that accepts it.

use serde::{Deserialize, Serialize};

use crate::piles::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// One engine move. Slot numbers are 1-based (`1..=4`).
///
/// ```
/// use canfield_engine::game::Move;
///
/// let mv = Move::TableauToTableau(1, 3);
/// assert_eq!(mv.to_string(), "tableau 1 -> tableau 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Draw from stock to waste, or recycle the waste when the stock is empty.
    StockToWaste,
    ReserveToFoundation,
    ReserveToTableau(usize),
    WasteToFoundation,
    WasteToTableau(usize),
    TableauToFoundation(usize),
    /// Source tableau, destination tableau.
    TableauToTableau(usize, usize),
    /// Source foundation, destination tableau.
    FoundationToTableau(usize, usize),
}

impl Move {
    /// Every well-formed move, legal or not, in a fixed order.
    pub fn candidates() -> impl Iterator<Item = Move> {
        let tableaus = 1..=TABLEAU_COUNT;
        let foundations = 1..=FOUNDATION_COUNT;

        [Move::StockToWaste, Move::ReserveToFoundation, Move::WasteToFoundation]
            .into_iter()
            .chain(tableaus.clone().map(Move::ReserveToTableau))
            .chain(tableaus.clone().map(Move::WasteToTableau))
            .chain(tableaus.clone().map(Move::TableauToFoundation))
            .chain(tableaus.flat_map(move |src| {
                (1..=TABLEAU_COUNT)
                    .filter(move |&dst| dst != src)
                    .map(move |dst| Move::TableauToTableau(src, dst))
            }))
            .chain(foundations.flat_map(move |f| {
                (1..=TABLEAU_COUNT).map(move |t| Move::FoundationToTableau(f, t))
            }))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::StockToWaste => f.write_str("stock -> waste"),
            Move::ReserveToFoundation => f.write_str("reserve -> foundation"),
            Move::ReserveToTableau(t) => write!(f, "reserve -> tableau {}", t),
            Move::WasteToFoundation => f.write_str("waste -> foundation"),
            Move::WasteToTableau(t) => write!(f, "waste -> tableau {}", t),
            Move::TableauToFoundation(t) => write!(f, "tableau {} -> foundation", t),
            Move::TableauToTableau(src, dst) => write!(f, "tableau {} -> tableau {}", src, dst),
            Move::FoundationToTableau(src, t) => write!(f, "foundation {} -> tableau {}", src, t),
        }
    }
}
