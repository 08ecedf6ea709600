//! A solitaire deck engine with procedural card-face rendering.
//!
//! The crate has two halves. The domain half models cards and the decks the
//! solitaire variants are dealt from: a single standard deck for Klondike
//! and FreeCell, and suit-reduced multi-deck stocks for Spider. The render
//! half slices glyph atlases and composes one face image per `(suit, rank)`
//! into a [`RenderCache`], at either of two size profiles.
//!
//! # Example
//!
//! ```no_run
//! use solrs::{CardSize, Deck, DirResources, RenderCache, SizeProfile};
//!
//! // Two-suit Spider stock: 104 cards over the first two suits.
//! let mut deck = Deck::new(1, 2)?;
//! let top = deck.pop();
//!
//! // One face image per card, sized for a 495px-wide screen.
//! let resources = DirResources::new("assets");
//! let profile = SizeProfile::normal(CardSize::for_screen(495));
//! let cache = RenderCache::build(&resources, profile)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod render;
pub mod size;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{DeckError, ResourceError};
pub use render::{AtlasId, DirResources, Pixmap, RenderCache, Resources};
pub use size::{CardSize, ProfileKind, SizeProfile};
