//! Deck construction and the Canfield deal.
//!
//! Cards are dealt from the front of the (shuffled) deck in this order:
//!
//! 1. 13 cards to the reserve (the 13th dealt ends up on top)
//! 2. 1 card to foundation 1; its rank is the base rank for the deal
//! 3. 1 card to each of the 4 tableaus
//! 4. the remaining 34 cards to the stock (the last dealt ends up on top)
//!
//! The waste starts empty and foundations 2-4 start empty.

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{Card, GameRng, Rank, Suit, DECK_SIZE};
use crate::piles::{Board, RESERVE_SIZE, TABLEAU_COUNT};

/// The 52-card set in suit-major order (all clubs, then diamonds, ...).
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::all().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Shuffle a fresh deck with `rng` and deal it.
#[must_use]
pub fn deal(rng: &mut GameRng) -> Board {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deal_from_deck(deck)
}

/// Deal a caller-ordered deck without shuffling.
///
/// Panics if `deck` is not a permutation of the standard deck.
#[must_use]
pub fn deal_from_deck(deck: Vec<Card>) -> Board {
    assert_eq!(deck.len(), DECK_SIZE, "Deck must hold {} cards", DECK_SIZE);
    let distinct: FxHashSet<Card> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE, "Deck must not contain duplicate cards");

    let mut board = Board::new();
    let (reserve, rest) = deck.split_at(RESERVE_SIZE);
    let base_card = rest[0];
    let rest = &rest[1..];
    let (tableaus, stock) = rest.split_at(TABLEAU_COUNT);

    for &card in reserve {
        board.reserve.push(card);
    }

    board.foundations[0].push(base_card);
    board.base_rank = Some(base_card.rank());

    for (tableau, &card) in board.tableaus.iter_mut().zip(tableaus) {
        tableau.push(card);
    }

    for &card in stock {
        board.stock.push(card);
    }

    debug!(
        "dealt board: base rank {}, reserve top {:?}, stock {}",
        base_card.rank(),
        board.reserve.top().map(|c| c.to_string()),
        board.stock.size()
    );

    board
}
