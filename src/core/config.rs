//! Engine configuration.
//!
//! Canfield has a few house-rule knobs that vary between variants. The
//! engine takes them once at construction via `CanfieldConfig`:
//!
//! - `seed`: fixed seed for reproducible deals, or `None` for OS entropy
//! - `draw_count`: cards moved from stock to waste per draw
//! - `recycle_limit`: how many times the waste may be turned back into the
//!   stock per deal (`None` = unlimited)
//! - `undo_limit`: maximum snapshots kept for undo (`None` = unlimited)

use serde::{Deserialize, Serialize};

/// Complete engine configuration.
///
/// ```
/// use canfield_engine::core::CanfieldConfig;
///
/// let config = CanfieldConfig::new()
///     .with_seed(42)
///     .with_draw_count(3)
///     .with_recycle_limit(2);
///
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.draw_count, 3);
/// assert_eq!(config.undo_limit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanfieldConfig {
    /// Seed for the shuffle stream. `None` draws one from system entropy.
    pub seed: Option<u64>,

    /// Cards moved from stock to waste per draw (at least 1).
    pub draw_count: usize,

    /// Stock recycles allowed per deal. `None` for unlimited.
    pub recycle_limit: Option<u32>,

    /// Undo depth. `None` for unlimited.
    pub undo_limit: Option<usize>,
}

impl Default for CanfieldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: 1,
            recycle_limit: None,
            undo_limit: None,
        }
    }
}

impl CanfieldConfig {
    /// Create the default configuration: single-card draws, unlimited
    /// recycling and undo, entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of cards per stock draw.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Draw count must be at least 1");
        self.draw_count = count;
        self
    }

    /// Limit the number of stock recycles per deal.
    #[must_use]
    pub fn with_recycle_limit(mut self, limit: u32) -> Self {
        self.recycle_limit = Some(limit);
        self
    }

    /// Limit the undo depth. Older snapshots are discarded first.
    #[must_use]
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = Some(limit);
        self
    }

    /// Check whether another recycle is allowed after `performed` recycles.
    #[must_use]
    pub fn allows_recycle(&self, performed: u32) -> bool {
        self.recycle_limit.map_or(true, |limit| performed < limit)
    }
}
