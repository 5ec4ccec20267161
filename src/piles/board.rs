//! The full Canfield layout: eleven piles plus the base rank.
//!
//! A `Board` is the complete mutable state of one deal. Cloning it produces
//! a snapshot for undo; because every pile is an `im::Vector`, the clone
//! is O(1) and shares structure with the live board.
//!
//! ## Layout
//!
//! - stock, waste, reserve
//! - 4 foundations, built up from the base rank in one suit
//! - 4 tableaus, built down in alternating colors
//!
//! `validate` checks every structural invariant of a dealt board.

use rustc_hash::FxHashSet;

use super::pile::{Pile, PileKind};
use crate::core::{Card, Rank, DECK_SIZE, RANK_COUNT};

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 4;

/// Cards dealt to the reserve.
pub const RESERVE_SIZE: usize = 13;

/// Complete pile state of one deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) reserve: Pile,
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
    pub(crate) tableaus: [Pile; TABLEAU_COUNT],
    /// Starting rank of every foundation. `None` until dealt.
    pub(crate) base_rank: Option<Rank>,
    /// Waste-to-stock recycles performed in this deal.
    pub(crate) recycles: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty, undealt board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stock: Pile::new(PileKind::Stock),
            waste: Pile::new(PileKind::Waste),
            reserve: Pile::new(PileKind::Reserve),
            foundations: std::array::from_fn(|i| Pile::new(PileKind::Foundation(i as u8))),
            tableaus: std::array::from_fn(|i| Pile::new(PileKind::Tableau(i as u8))),
            base_rank: None,
            recycles: 0,
        }
    }

    // === Pile Access ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn reserve(&self) -> &Pile {
        &self.reserve
    }

    /// Foundation by 0-based slot.
    #[must_use]
    pub fn foundation(&self, slot: usize) -> Option<&Pile> {
        self.foundations.get(slot)
    }

    /// Tableau by 0-based slot.
    #[must_use]
    pub fn tableau(&self, slot: usize) -> Option<&Pile> {
        self.tableaus.get(slot)
    }

    /// Look up any pile by kind.
    #[must_use]
    pub fn pile(&self, kind: PileKind) -> Option<&Pile> {
        match kind {
            PileKind::Stock => Some(&self.stock),
            PileKind::Waste => Some(&self.waste),
            PileKind::Reserve => Some(&self.reserve),
            PileKind::Foundation(i) => self.foundations.get(i as usize),
            PileKind::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    pub(crate) fn pile_mut(&mut self, kind: PileKind) -> &mut Pile {
        match kind {
            PileKind::Stock => &mut self.stock,
            PileKind::Waste => &mut self.waste,
            PileKind::Reserve => &mut self.reserve,
            PileKind::Foundation(i) => &mut self.foundations[i as usize],
            PileKind::Tableau(i) => &mut self.tableaus[i as usize],
        }
    }

    /// All eleven piles.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste, &self.reserve]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    // === Derived State ===

    /// The base rank of this deal, if dealt.
    #[must_use]
    pub fn base_rank(&self) -> Option<Rank> {
        self.base_rank
    }

    /// Recycles performed so far in this deal.
    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    /// Suit a foundation is building, fixed by its first card.
    #[must_use]
    pub fn foundation_suit(&self, slot: usize) -> Option<crate::core::Suit> {
        self.foundation(slot)?.bottom().map(Card::suit)
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles().map(Pile::size).sum()
    }

    /// Won when every foundation holds a full cycle of ranks.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.size() == RANK_COUNT as usize)
    }

    // === Invariants ===

    /// Check every structural invariant.
    ///
    /// An undealt board must be completely empty. A dealt board must hold
    /// all 52 cards exactly once, with well-formed foundations and
    /// tableaus, and no empty tableau while the reserve still has cards.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let total = self.total_cards();
        let Some(base) = self.base_rank else {
            return if total == 0 {
                Ok(())
            } else {
                Err(InvariantViolation::CardCount { expected: 0, found: total })
            };
        };

        if total != DECK_SIZE {
            return Err(InvariantViolation::CardCount { expected: DECK_SIZE, found: total });
        }

        let mut seen = FxHashSet::default();
        for card in self.piles().flat_map(Pile::iter) {
            if !seen.insert(card) {
                return Err(InvariantViolation::DuplicateCard(card));
            }
        }

        for (slot, foundation) in self.foundations.iter().enumerate() {
            let mut expected = base;
            let suit = foundation.bottom().map(Card::suit);
            for card in foundation.iter() {
                if card.rank() != expected || Some(card.suit()) != suit {
                    return Err(InvariantViolation::FoundationSequence { slot, card });
                }
                expected = expected.next();
            }
        }

        for (slot, tableau) in self.tableaus.iter().enumerate() {
            let cards: Vec<Card> = tableau.iter().collect();
            for pair in cards.windows(2) {
                let (below, above) = (pair[0], pair[1]);
                if above.color() == below.color() || above.rank() != below.rank().prev() {
                    return Err(InvariantViolation::TableauSequence { slot, card: above });
                }
            }
            if tableau.is_empty() && !self.reserve.is_empty() {
                return Err(InvariantViolation::UnfilledTableau { slot });
            }
        }

        Ok(())
    }
}

/// A broken board invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Wrong number of cards on the board.
    CardCount { expected: usize, found: usize },
    /// The same card appears twice.
    DuplicateCard(Card),
    /// A foundation card breaks the base-rank sequence or the suit.
    FoundationSequence { slot: usize, card: Card },
    /// A tableau card does not step down in alternating color.
    TableauSequence { slot: usize, card: Card },
    /// A tableau was left empty while the reserve had cards.
    UnfilledTableau { slot: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::CardCount { expected, found } => {
                write!(f, "expected {} cards on the board, found {}", expected, found)
            }
            InvariantViolation::DuplicateCard(card) => write!(f, "duplicate card {}", card),
            InvariantViolation::FoundationSequence { slot, card } => {
                write!(f, "foundation {} out of sequence at {}", slot + 1, card)
            }
            InvariantViolation::TableauSequence { slot, card } => {
                write!(f, "tableau {} out of sequence at {}", slot + 1, card)
            }
            InvariantViolation::UnfilledTableau { slot } => {
                write!(f, "tableau {} is empty while the reserve has cards", slot + 1)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
