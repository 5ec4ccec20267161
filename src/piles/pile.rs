//! A single ordered pile of cards.
//!
//! Index 0 is the bottom card; the last card is the top. `Pile` is a
//! mechanical container: it never checks legality. Callers (the validator
//! and `Game`) decide what may be pushed.
//!
//! Cards are stored in an `im::Vector`, so cloning a pile (and therefore a
//! whole board snapshot) is O(1) and shares structure with the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Which pile this is. Foundation and tableau slots are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Reserve,
    Foundation(u8),
    Tableau(u8),
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileKind::Stock => f.write_str("stock"),
            PileKind::Waste => f.write_str("waste"),
            PileKind::Reserve => f.write_str("reserve"),
            PileKind::Foundation(i) => write!(f, "foundation {}", i + 1),
            PileKind::Tableau(i) => write!(f, "tableau {}", i + 1),
        }
    }
}

/// Ordered sequence of cards, top = last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vector::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first.
    #[must_use]
    pub fn from_cards(kind: PileKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Bottom card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    ///
    /// Panics if the pile is empty. Moves are validated before any pop, so
    /// an empty pop means the engine itself is broken.
    pub fn pop(&mut self) -> Card {
        match self.cards.pop_back() {
            Some(card) => card,
            None => panic!("pop from empty {} pile", self.kind),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index` counted from the bottom (0 = bottom).
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Card at `depth` counted from the top (0 = top).
    #[must_use]
    pub fn from_top(&self, depth: usize) -> Option<Card> {
        let index = self.cards.len().checked_sub(depth)?.checked_sub(1)?;
        self.at(index)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Remove every card, returning them bottom first.
    pub fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Append `cards` (bottom first) on top of this pile.
    pub fn extend(&mut self, cards: Vector<Card>) {
        self.cards.append(cards);
    }
}
