//! The Canfield game engine.
//!
//! `Game` owns the board, the shuffle stream and the undo history. Every
//! public move follows the same path:
//!
//! 1. resolve the move into a concrete `Transfer` (this is where legality
//!    is decided; nothing is mutated yet)
//! 2. push a snapshot of the current board
//! 3. apply the transfer, refilling an emptied tableau from the reserve
//!
//! An illegal move returns `false` and leaves the board and history
//! untouched. Slot numbers in the public API are 1-based.
//!
//! ```
//! use canfield_engine::{CanfieldConfig, Game};
//!
//! let mut game = Game::new(CanfieldConfig::new().with_seed(42));
//! game.deal();
//!
//! assert_eq!(game.reserve_size(), 13);
//! assert!(game.stock_to_waste());
//! assert!(game.top_waste().is_some());
//!
//! assert!(game.undo());
//! assert!(game.top_waste().is_none());
//! ```

use log::{debug, info, trace};
use smallvec::SmallVec;

use super::history::{History, Snapshot};
use super::moves::Move;
use crate::core::{CanfieldConfig, Card, GameRng, Rank};
use crate::deal;
use crate::piles::{Board, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::rules::validator;

/// A resolved, legal board mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transfer {
    /// Move up to `draw_count` cards from stock to waste.
    Draw,
    /// Turn the whole waste back into the stock.
    Recycle,
    /// Move one top card between piles.
    Card { from: PileKind, to: PileKind },
}

/// Canfield rules engine.
///
/// Single-threaded and synchronous. Callers sharing a `Game` across
/// threads must wrap it in their own lock.
#[derive(Clone, Debug)]
pub struct Game {
    config: CanfieldConfig,
    rng: GameRng,
    board: Board,
    history: History,
    deal_seed: Option<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(CanfieldConfig::default())
    }
}

impl Game {
    /// Create an engine with every pile empty. Call `deal` to start.
    #[must_use]
    pub fn new(config: CanfieldConfig) -> Self {
        assert!(config.draw_count > 0, "Draw count must be at least 1");

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            history: History::new(config.undo_limit),
            config,
            rng,
            board: Board::new(),
            deal_seed: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CanfieldConfig {
        &self.config
    }

    /// The current board, for rendering or inspection.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Dealing ===

    /// Start a fresh randomized deal and clear the undo history.
    pub fn deal(&mut self) {
        let seed = self.rng.next_seed();
        self.deal_seeded(seed);
    }

    /// Start the deal identified by `seed`. The same seed always produces
    /// the same layout.
    pub fn deal_seeded(&mut self, seed: u64) {
        let board = deal::deal(&mut GameRng::new(seed));
        self.install(board);
        self.deal_seed = Some(seed);
        info!(
            "dealt game {:#018x}, base rank {}",
            seed,
            self.board.base_rank().map_or_else(String::new, |r| r.to_string())
        );
    }

    /// Deal `deck` in the given order without shuffling.
    ///
    /// Panics if `deck` is not a permutation of the 52-card deck.
    pub fn deal_ordered(&mut self, deck: Vec<Card>) {
        let board = deal::deal_from_deck(deck);
        self.install(board);
        self.deal_seed = None;
        info!("dealt ordered deck");
    }

    fn install(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
    }

    /// Seed of the current deal, if it came from `deal`/`deal_seeded`.
    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    // === Moves ===

    /// Apply `mv` if it is legal. Returns whether anything changed.
    pub fn apply(&mut self, mv: Move) -> bool {
        let Some(transfer) = self.resolve(mv) else {
            trace!("rejected {}", mv);
            return false;
        };

        self.history.push(Snapshot {
            board: self.board.clone(),
            cause: mv,
        });
        self.execute(transfer);
        debug!("applied {} ({:?})", mv, transfer);

        debug_assert!(
            self.board.validate().is_ok(),
            "board invariant broken after {}: {:?}",
            mv,
            self.board.validate()
        );

        if self.board.is_won() {
            info!("game won after {}", mv);
        }
        true
    }

    /// Check whether `mv` would be applied.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.resolve(mv).is_some()
    }

    /// Every move that is currently legal.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 16]> {
        Move::candidates().filter(|&mv| self.is_legal(mv)).collect()
    }

    /// Draw from stock to waste; with an empty stock, recycle the waste.
    pub fn stock_to_waste(&mut self) -> bool {
        self.apply(Move::StockToWaste)
    }

    pub fn reserve_to_foundation(&mut self) -> bool {
        self.apply(Move::ReserveToFoundation)
    }

    pub fn reserve_to_tableau(&mut self, tableau: usize) -> bool {
        self.apply(Move::ReserveToTableau(tableau))
    }

    pub fn waste_to_foundation(&mut self) -> bool {
        self.apply(Move::WasteToFoundation)
    }

    pub fn waste_to_tableau(&mut self, tableau: usize) -> bool {
        self.apply(Move::WasteToTableau(tableau))
    }

    pub fn tableau_to_foundation(&mut self, tableau: usize) -> bool {
        self.apply(Move::TableauToFoundation(tableau))
    }

    pub fn tableau_to_tableau(&mut self, src: usize, dst: usize) -> bool {
        self.apply(Move::TableauToTableau(src, dst))
    }

    pub fn foundation_to_tableau(&mut self, foundation: usize, tableau: usize) -> bool {
        self.apply(Move::FoundationToTableau(foundation, tableau))
    }

    // === Undo ===

    /// Restore the board from before the last applied move.
    ///
    /// No-op (returns `false`) with an empty history or a won game.
    pub fn undo(&mut self) -> bool {
        if self.board.is_won() {
            trace!("undo ignored: game is won");
            return false;
        }
        match self.history.pop() {
            Some(snapshot) => {
                debug!("undo {}", snapshot.cause);
                self.board = snapshot.board;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.board.is_won() && !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent move still in the undo history.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last_move()
    }

    // === Queries ===

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    #[must_use]
    pub fn base_rank(&self) -> Option<Rank> {
        self.board.base_rank()
    }

    #[must_use]
    pub fn top_stock(&self) -> Option<Card> {
        self.board.stock().top()
    }

    #[must_use]
    pub fn top_waste(&self) -> Option<Card> {
        self.board.waste().top()
    }

    #[must_use]
    pub fn top_reserve(&self) -> Option<Card> {
        self.board.reserve().top()
    }

    /// Top card of tableau `tableau` (1-based).
    #[must_use]
    pub fn top_tableau(&self, tableau: usize) -> Option<Card> {
        self.board.tableau(tableau_slot(tableau)?)?.top()
    }

    /// Top card of foundation `foundation` (1-based).
    #[must_use]
    pub fn top_foundation(&self, foundation: usize) -> Option<Card> {
        self.board.foundation(foundation_slot(foundation)?)?.top()
    }

    /// Cards in tableau `tableau` (1-based); 0 for an invalid index.
    #[must_use]
    pub fn tableau_size(&self, tableau: usize) -> usize {
        tableau_slot(tableau)
            .and_then(|slot| self.board.tableau(slot))
            .map_or(0, |pile| pile.size())
    }

    /// Card `depth` positions below the top of tableau `tableau`
    /// (1-based tableau, depth 0 = top).
    #[must_use]
    pub fn get_tableau(&self, tableau: usize, depth: usize) -> Option<Card> {
        self.board.tableau(tableau_slot(tableau)?)?.from_top(depth)
    }

    /// Cards in foundation `foundation` (1-based); 0 for an invalid index.
    #[must_use]
    pub fn foundation_size(&self, foundation: usize) -> usize {
        foundation_slot(foundation)
            .and_then(|slot| self.board.foundation(slot))
            .map_or(0, |pile| pile.size())
    }

    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.board.stock().size()
    }

    #[must_use]
    pub fn waste_size(&self) -> usize {
        self.board.waste().size()
    }

    #[must_use]
    pub fn reserve_size(&self) -> usize {
        self.board.reserve().size()
    }

    /// Stock recycles performed in the current deal.
    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.board.recycles()
    }

    // === Internals ===

    /// Decide what `mv` does on the current board, or `None` if illegal.
    fn resolve(&self, mv: Move) -> Option<Transfer> {
        if self.board.is_won() {
            return None;
        }

        let board = &self.board;
        let card = |from: PileKind, to: PileKind| Transfer::Card { from, to };

        match mv {
            Move::StockToWaste => {
                if !validator::can_stock_to_waste(board, &self.config) {
                    None
                } else if validator::is_recycle(board) {
                    Some(Transfer::Recycle)
                } else {
                    Some(Transfer::Draw)
                }
            }
            Move::ReserveToFoundation => {
                let f = validator::foundation_for(board, board.reserve().top()?)?;
                Some(card(PileKind::Reserve, foundation_kind(f)))
            }
            Move::ReserveToTableau(t) => {
                let t = tableau_slot(t)?;
                validator::can_reserve_to_tableau(board, t)
                    .then(|| card(PileKind::Reserve, tableau_kind(t)))
            }
            Move::WasteToFoundation => {
                let f = validator::foundation_for(board, board.waste().top()?)?;
                Some(card(PileKind::Waste, foundation_kind(f)))
            }
            Move::WasteToTableau(t) => {
                let t = tableau_slot(t)?;
                validator::can_waste_to_tableau(board, t)
                    .then(|| card(PileKind::Waste, tableau_kind(t)))
            }
            Move::TableauToFoundation(t) => {
                let t = tableau_slot(t)?;
                let f = validator::foundation_for(board, board.tableau(t)?.top()?)?;
                debug_assert!(validator::can_tableau_to_foundation(board, t, f));
                Some(card(tableau_kind(t), foundation_kind(f)))
            }
            Move::TableauToTableau(src, dst) => {
                let (src, dst) = (tableau_slot(src)?, tableau_slot(dst)?);
                validator::can_tableau_to_tableau(board, src, dst)
                    .then(|| card(tableau_kind(src), tableau_kind(dst)))
            }
            Move::FoundationToTableau(f, t) => {
                let (f, t) = (foundation_slot(f)?, tableau_slot(t)?);
                validator::can_foundation_to_tableau(board, f, t)
                    .then(|| card(foundation_kind(f), tableau_kind(t)))
            }
        }
    }

    /// Apply a resolved transfer. Must only be called with the result of
    /// `resolve` on the current board.
    fn execute(&mut self, transfer: Transfer) {
        let board = &mut self.board;
        match transfer {
            Transfer::Draw => {
                let count = self.config.draw_count.min(board.stock.size());
                for _ in 0..count {
                    let card = board.stock.pop();
                    board.waste.push(card);
                }
            }
            Transfer::Recycle => {
                let cards = board.waste.take_all();
                board.stock.extend(cards);
                board.recycles += 1;
            }
            Transfer::Card { from, to } => {
                let card = board.pile_mut(from).pop();
                board.pile_mut(to).push(card);

                if matches!(from, PileKind::Tableau(_))
                    && board.pile_mut(from).is_empty()
                    && !board.reserve.is_empty()
                {
                    let refill = board.reserve.pop();
                    trace!("refilled {} with {}", from, refill);
                    board.pile_mut(from).push(refill);
                }
            }
        }
    }
}

/// Convert a 1-based tableau number to a slot.
fn tableau_slot(index: usize) -> Option<usize> {
    (1..=TABLEAU_COUNT).contains(&index).then(|| index - 1)
}

/// Convert a 1-based foundation number to a slot.
fn foundation_slot(index: usize) -> Option<usize> {
    (1..=FOUNDATION_COUNT).contains(&index).then(|| index - 1)
}

fn tableau_kind(slot: usize) -> PileKind {
    PileKind::Tableau(slot as u8)
}

fn foundation_kind(slot: usize) -> PileKind {
    PileKind::Foundation(slot as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn seeded() -> Game {
        let mut game = Game::new(CanfieldConfig::new().with_seed(1234));
        game.deal();
        game
    }

    /// Every card on the foundations except KS, which sits on the waste.
    fn one_move_from_winning() -> Game {
        let mut game = Game::new(CanfieldConfig::new().with_seed(1));
        let mut board = Board::new();
        board.base_rank = Some(Rank::ACE);
        for (slot, suit) in Suit::ALL.into_iter().enumerate() {
            for rank in Rank::all() {
                let c = Card::new(rank, suit);
                if c == card("KS") {
                    board.waste.push(c);
                } else {
                    board.foundations[slot].push(c);
                }
            }
        }
        assert_eq!(board.validate(), Ok(()));
        game.install(board);
        game
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::default();
        assert_eq!(game.board().total_cards(), 0);
        assert_eq!(game.base_rank(), None);
        assert_eq!(game.deal_seed(), None);
        assert!(!game.is_won());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_slot_conversion() {
        assert_eq!(tableau_slot(0), None);
        assert_eq!(tableau_slot(1), Some(0));
        assert_eq!(tableau_slot(4), Some(3));
        assert_eq!(tableau_slot(5), None);
        assert_eq!(foundation_slot(usize::MAX), None);
    }

    #[test]
    fn test_resolve_stock_to_waste() {
        let mut game = seeded();
        assert_eq!(game.resolve(Move::StockToWaste), Some(Transfer::Draw));

        while game.stock_size() > 0 {
            assert!(game.stock_to_waste());
        }
        assert_eq!(game.resolve(Move::StockToWaste), Some(Transfer::Recycle));
    }

    #[test]
    fn test_resolve_picks_lowest_foundation() {
        let mut game = Game::default();
        let mut board = Board::new();
        board.base_rank = Some(Rank::new(3));
        board.waste.push(card("3D"));
        game.install(board);

        assert_eq!(
            game.resolve(Move::WasteToFoundation),
            Some(Transfer::Card {
                from: PileKind::Waste,
                to: PileKind::Foundation(0)
            })
        );
    }

    #[test]
    fn test_draw_count_three() {
        let mut game = Game::new(CanfieldConfig::new().with_seed(5).with_draw_count(3));
        game.deal();
        let top_three: Vec<Card> = (0..3)
            .map(|d| game.board().stock().from_top(d).unwrap())
            .collect();

        assert!(game.stock_to_waste());

        assert_eq!(game.waste_size(), 3);
        assert_eq!(game.stock_size(), 31);
        // Drawn one at a time, so the third card drawn ends on top
        assert_eq!(game.top_waste(), Some(top_three[2]));
        assert_eq!(game.board().waste().bottom(), Some(top_three[0]));
    }

    #[test]
    fn test_draw_count_larger_than_stock() {
        let mut game = Game::new(CanfieldConfig::new().with_seed(5).with_draw_count(5));
        game.deal();
        // 34 cards: six full draws and a final draw of 4
        for _ in 0..7 {
            assert!(game.stock_to_waste());
        }
        assert_eq!(game.stock_size(), 0);
        assert_eq!(game.waste_size(), 34);
    }

    #[test]
    fn test_recycle_limit_and_undo() {
        let mut game = Game::new(CanfieldConfig::new().with_seed(9).with_recycle_limit(1));
        game.deal();

        while game.stock_size() > 0 {
            assert!(game.stock_to_waste());
        }
        assert!(game.stock_to_waste());
        assert_eq!(game.recycles(), 1);

        while game.stock_size() > 0 {
            assert!(game.stock_to_waste());
        }
        assert!(!game.stock_to_waste(), "second recycle exceeds the limit");

        // Undoing back past the recycle restores the allowance
        while game.recycles() > 0 {
            assert!(game.undo());
        }
        assert!(game.is_legal(Move::StockToWaste));
    }

    #[test]
    fn test_undo_limit() {
        let mut game = Game::new(CanfieldConfig::new().with_seed(3).with_undo_limit(2));
        game.deal();

        for _ in 0..5 {
            assert!(game.stock_to_waste());
        }
        assert_eq!(game.history_len(), 2);
        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.waste_size(), 3);
    }

    #[test]
    fn test_win_freezes_game() {
        let mut game = one_move_from_winning();
        assert!(!game.is_won());
        assert!(!game.can_undo());

        assert!(game.waste_to_foundation());
        assert!(game.is_won());
        assert_eq!(game.last_move(), Some(Move::WasteToFoundation));

        // Frozen: no undo, no foundation-to-tableau, nothing legal
        assert!(!game.can_undo());
        assert!(!game.undo());
        assert!(!game.foundation_to_tableau(4, 1));
        assert!(game.legal_moves().is_empty());
        assert!(game.is_won());

        game.deal();
        assert!(!game.is_won());
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_deal_seeded_reproduces() {
        let mut a = Game::default();
        let mut b = Game::default();
        a.deal_seeded(77);
        b.deal_seeded(77);

        assert_eq!(a.board(), b.board());
        assert_eq!(a.deal_seed(), Some(77));
    }

    #[test]
    fn test_deal_draws_fresh_seeds() {
        let mut game = Game::new(CanfieldConfig::new().with_seed(11));
        game.deal();
        let first = game.deal_seed();
        game.deal();
        assert_ne!(game.deal_seed(), first);

        let mut replay = Game::default();
        replay.deal_seeded(game.deal_seed().unwrap());
        assert_eq!(replay.board(), game.board());
    }

    #[test]
    fn test_game_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Game>();
    }
}
