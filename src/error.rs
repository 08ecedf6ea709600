//! Error types for deck construction and cache building.

use thiserror::Error;

use crate::render::AtlasId;

/// Errors that can occur when constructing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The suit count is not 1, 2, or 4.
    #[error("unsupported suit count: {0}")]
    UnsupportedSuitCount(u8),
}

/// Errors that can occur while loading atlas resources.
///
/// Any of these aborts a cache build: card faces cannot be synthesized
/// without their glyph sets.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource could not be read.
    #[error("failed to read atlas resource {id:?}")]
    Io {
        /// The resource that failed.
        id: AtlasId,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The resource was read but could not be decoded as an image.
    #[error("failed to decode atlas resource {id:?}")]
    Decode {
        /// The resource that failed.
        id: AtlasId,
        /// The underlying decode error.
        #[source]
        source: image::ImageError,
    },
    /// The provider has no image for the resource.
    #[error("atlas resource {id:?} is not available")]
    Missing {
        /// The missing resource.
        id: AtlasId,
    },
}
