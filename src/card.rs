//! Card, suit, and rank types.

use core::hash::{Hash, Hasher};

/// Card suit.
///
/// The enumeration order matters: suit-reduced decks use the first N suits,
/// and glyph atlases store their cells in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Spades, Self::Hearts];

    /// Returns `true` for the red suits (diamonds and hearts).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }

    /// Returns `true` for the black suits (clubs and spades).
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    /// Position of the suit in enumeration (and atlas) order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank, Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Display label for the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Ordinal position, 0 for Ace through 12 for King.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for Jack, Queen, and King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns `true` if this rank comes directly after `other`.
    ///
    /// There is no wraparound: `King.is_next(Ace)` is `false` and so is
    /// `Ace.is_next(King)`.
    #[must_use]
    pub const fn is_next(self, other: Self) -> bool {
        other.index() + 1 == self.index()
    }

    /// Returns `true` if this rank comes directly before `other`, so
    /// `Two.is_previous(Three)` holds but not the reverse.
    #[must_use]
    pub const fn is_previous(self, other: Self) -> bool {
        other.index() == self.index() + 1
    }
}

/// A playing card with a board position.
///
/// The position is placement bookkeeping for the rendering and input layers;
/// it takes no part in equality or hashing, so decks and rule engines compare
/// cards by `(suit, rank)` alone.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    x: f32,
    y: f32,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            x: 1.0,
            y: 1.0,
        }
    }

    /// Returns the card's `(x, y)` position.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Places the card at `(x, y)`.
    pub const fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Moves the card by a drag delta. Deltas are subtracted: a positive
    /// `dx` moves the card left, matching the pointer-tracking convention
    /// of the input layer.
    pub const fn move_by(&mut self, dx: f32, dy: f32) {
        self.x -= dx;
        self.y -= dy;
    }

    /// Sequencing hook for rule engines: `true` when the two cards share a
    /// color, or when this card sits one rank below `other`.
    ///
    /// Note the `||`: this predicate is deliberately looser than the usual
    /// alternating-color-and-sequential tableau rule. Rule engines compose
    /// it with their own checks.
    #[must_use]
    pub fn is_previous(&self, other: &Self) -> bool {
        self.suit.is_red() == other.suit.is_red() || self.rank.is_previous(other.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}
