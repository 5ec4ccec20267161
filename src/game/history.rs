//! Undo history of full board snapshots.
//!
//! Each entry is the complete board as it was before a move, plus the move
//! that followed. Snapshots are cheap: `Board` piles are `im::Vector`s, so
//! consecutive snapshots share almost all of their storage.

use std::collections::VecDeque;

use super::moves::Move;
use crate::piles::Board;

/// Board state captured before a move.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// The board before `cause` was applied.
    pub board: Board,
    /// The move applied after this snapshot was taken.
    pub cause: Move,
}

/// Stack of snapshots, most recent last.
///
/// With a limit set, pushing past it discards the oldest snapshot.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl History {
    /// Create an empty history. `None` keeps every snapshot.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Record a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.limit == Some(0) {
            return;
        }
        self.entries.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// The move that produced the current board, if recorded.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.entries.back().map(|s| s.cause)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
