//! Move legality predicates.
//!
//! Every function here is pure: it reads a `Board` and returns a verdict.
//! Slots are 0-based; an out-of-range slot is simply illegal.
//!
//! ## Acceptance rules
//!
//! - **Foundation**: an empty foundation takes any card of the base rank
//!   (which fixes its suit); otherwise the card must be the cyclic `next`
//!   rank of the top, in the foundation's suit.
//! - **Tableau**: an empty tableau takes any card; otherwise the card must
//!   be the opposite color and the cyclic `prev` rank of the top.

use crate::core::{CanfieldConfig, Card};
use crate::piles::{Board, FOUNDATION_COUNT};

// === Acceptance ===

/// Can `card` be placed on foundation `slot`?
#[must_use]
pub fn foundation_accepts(board: &Board, slot: usize, card: Card) -> bool {
    let (Some(foundation), Some(base)) = (board.foundation(slot), board.base_rank()) else {
        return false;
    };

    match foundation.top() {
        None => card.rank() == base,
        Some(top) => {
            card.rank() == top.rank().next() && Some(card.suit()) == board.foundation_suit(slot)
        }
    }
}

/// Can `card` be placed on tableau `slot`?
#[must_use]
pub fn tableau_accepts(board: &Board, slot: usize, card: Card) -> bool {
    let Some(tableau) = board.tableau(slot) else {
        return false;
    };

    match tableau.top() {
        None => true,
        Some(top) => card.color() != top.color() && card.rank() == top.rank().prev(),
    }
}

/// Lowest-numbered foundation that accepts `card`.
#[must_use]
pub fn foundation_for(board: &Board, card: Card) -> Option<usize> {
    (0..FOUNDATION_COUNT).find(|&slot| foundation_accepts(board, slot, card))
}

// === Stock / Waste ===

/// Would a stock-to-waste call recycle the waste instead of drawing?
#[must_use]
pub fn is_recycle(board: &Board) -> bool {
    board.stock().is_empty()
}

/// Stock to waste is legal while the stock has cards, or, once it is
/// empty, while the waste has cards to recycle and the recycle limit
/// allows another pass.
#[must_use]
pub fn can_stock_to_waste(board: &Board, config: &CanfieldConfig) -> bool {
    if !board.stock().is_empty() {
        return true;
    }
    !board.waste().is_empty() && config.allows_recycle(board.recycles())
}

#[must_use]
pub fn can_waste_to_foundation(board: &Board, foundation: usize) -> bool {
    board
        .waste()
        .top()
        .is_some_and(|card| foundation_accepts(board, foundation, card))
}

#[must_use]
pub fn can_waste_to_tableau(board: &Board, tableau: usize) -> bool {
    board
        .waste()
        .top()
        .is_some_and(|card| tableau_accepts(board, tableau, card))
}

// === Reserve ===

#[must_use]
pub fn can_reserve_to_foundation(board: &Board, foundation: usize) -> bool {
    board
        .reserve()
        .top()
        .is_some_and(|card| foundation_accepts(board, foundation, card))
}

#[must_use]
pub fn can_reserve_to_tableau(board: &Board, tableau: usize) -> bool {
    board
        .reserve()
        .top()
        .is_some_and(|card| tableau_accepts(board, tableau, card))
}

// === Tableau / Foundation ===

#[must_use]
pub fn can_tableau_to_foundation(board: &Board, tableau: usize, foundation: usize) -> bool {
    board
        .tableau(tableau)
        .and_then(|pile| pile.top())
        .is_some_and(|card| foundation_accepts(board, foundation, card))
}

/// A single top card moves between two different tableaus.
#[must_use]
pub fn can_tableau_to_tableau(board: &Board, src: usize, dst: usize) -> bool {
    src != dst
        && board
            .tableau(src)
            .and_then(|pile| pile.top())
            .is_some_and(|card| tableau_accepts(board, dst, card))
}

#[must_use]
pub fn can_foundation_to_tableau(board: &Board, foundation: usize, tableau: usize) -> bool {
    board
        .foundation(foundation)
        .and_then(|pile| pile.top())
        .is_some_and(|card| tableau_accepts(board, tableau, card))
}
