//! Deck composition and shuffling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered stack of cards built from one or more logical decks.
///
/// The suit count selects the solitaire variant the deck serves:
///
/// - `4`: full decks — Klondike, FreeCell, and multi-deck games.
/// - `2`: two-suit stocks (Spider two-suit); the deck count is doubled and
///   each contributing deck holds 52 cards over the first two suits,
///   repeated.
/// - `1`: one-suit stocks (Spider one-suit); the deck count is quadrupled
///   and each contributing deck holds 52 cards of the first suit.
///
/// Every contributing deck is 52 cards, so `(1, 4)` yields 52, `(1, 2)`
/// yields 104, and `(1, 1)` yields 208. Duplicate `(suit, rank)` pairs are
/// expected whenever suits are reduced or decks combined.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a shuffled deck for the given variant.
    ///
    /// The fresh stack is run through three shuffle passes before use.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnsupportedSuitCount`] unless `suits` is 1, 2,
    /// or 4.
    pub fn new(num_decks: u8, suits: u8) -> Result<Self, DeckError> {
        Self::with_rng(num_decks, suits, &mut rand::rng())
    }

    /// Creates a shuffled deck using a deterministic seed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnsupportedSuitCount`] unless `suits` is 1, 2,
    /// or 4.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::Deck;
    ///
    /// let a = Deck::with_seed(1, 4, 7).unwrap();
    /// let b = Deck::with_seed(1, 4, 7).unwrap();
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    pub fn with_seed(num_decks: u8, suits: u8, seed: u64) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(num_decks, suits, &mut rng)
    }

    /// Creates a shuffled deck using the caller's random source.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnsupportedSuitCount`] unless `suits` is 1, 2,
    /// or 4.
    pub fn with_rng<R: Rng + ?Sized>(
        num_decks: u8,
        suits: u8,
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::unshuffled(num_decks, suits)?;
        deck.shuffle_with(rng);
        deck.shuffle_with(rng);
        deck.shuffle_with(rng);
        Ok(deck)
    }

    /// Creates a deck in build order, without shuffling.
    ///
    /// Useful for rule engines that deal fixed layouts and for tests.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnsupportedSuitCount`] unless `suits` is 1, 2,
    /// or 4.
    pub fn unshuffled(num_decks: u8, suits: u8) -> Result<Self, DeckError> {
        let decks = match suits {
            4 => num_decks as usize,
            2 => num_decks as usize * 2,
            1 => num_decks as usize * 4,
            other => return Err(DeckError::UnsupportedSuitCount(other)),
        };

        // Each contributing deck keeps all four suit slots, cycling through
        // the reduced suit set, so it always holds 52 cards.
        let suits = suits as usize;
        let mut cards = Vec::with_capacity(decks * DECK_SIZE);
        for _ in 0..decks {
            for slot in 0..4 {
                let suit = Suit::ALL[slot % suits];
                for &rank in &Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Runs one shuffle pass with a fresh random source.
    ///
    /// This is a partial Fisher-Yates walk: each step swaps a random index
    /// drawn from `[0, last)` with `last`, then decrements, stopping above
    /// index 1. The bottom two slots are never themselves the walk target,
    /// so the bottom of the stack keeps its card slightly more often than a
    /// full pass would. Known mixing quirk, kept deliberately;
    /// [`Deck::new`] layers three passes on top of each other.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Runs one shuffle pass with the caller's random source.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut last = self.cards.len().saturating_sub(1);
        while last > 1 {
            let swap = rng.random_range(0..last);
            self.cards.swap(swap, last);
            last -= 1;
        }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` when the deck is empty; running out of cards is a
    /// normal outcome, not an error.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts a card back on top of the deck.
    ///
    /// No uniqueness check is made: multi-deck variants legitimately hold
    /// duplicate `(suit, rank)` pairs.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns `true` when no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The cards in stack order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
