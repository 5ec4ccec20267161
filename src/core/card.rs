//! Playing cards: suits, colors, and cyclic ranks.
//!
//! ## Rank
//!
//! Ranks run 1 (Ace) through 13 (King) and wrap around: the successor of a
//! King is an Ace and the predecessor of an Ace is a King. Canfield builds
//! foundations upward from a base rank chosen at deal time, so all rank
//! comparisons go through `next`/`prev`/`steps_from` rather than `<`.
//!
//! ## Card
//!
//! A `Card` is a small `Copy` value. Two cards with the same rank and suit
//! are interchangeable; a deck holds exactly one of each.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of distinct ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter code (`C`, `D`, `H`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card color. Tableau building alternates colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank in `1..=13` with cyclic ordering.
///
/// ```
/// use canfield_engine::core::Rank;
///
/// let king = Rank::new(13);
/// assert_eq!(king.next(), Rank::ACE);
/// assert_eq!(Rank::ACE.prev(), king);
/// assert_eq!(Rank::new(2).steps_from(king), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(RANK_COUNT);

    /// Create a rank. Panics if `value` is outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= RANK_COUNT, "Rank must be in 1..=13");
        Self(value)
    }

    /// Create a rank, returning `None` if `value` is outside `1..=13`.
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANK_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rank value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Cyclic successor: King wraps to Ace.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 % RANK_COUNT + 1)
    }

    /// Cyclic predecessor: Ace wraps to King.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + RANK_COUNT - 2) % RANK_COUNT + 1)
    }

    /// Number of `next` steps from `base` to `self`, in `0..13`.
    #[must_use]
    pub const fn steps_from(self, base: Rank) -> u8 {
        (self.0 + RANK_COUNT - base.0) % RANK_COUNT
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANK_COUNT).map(Rank)
    }

    fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::try_new(value).ok_or_else(|| format!("rank {} outside 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

/// Error returned when parsing a card from text fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError(String);

impl std::fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid card: {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse `"AH"`, `"10s"`, `"qc"`, ... (rank label then suit letter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let trimmed = s.trim();
        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_letter(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "A" => Rank::ACE,
            "J" => Rank::new(11),
            "Q" => Rank::new(12),
            "K" => Rank::KING,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::try_new)
                .ok_or_else(err)?,
        };

        Ok(Card::new(rank, suit))
    }
}
