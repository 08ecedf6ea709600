//! Atlas resources and how they are loaded.

use std::path::PathBuf;

use image::{ImageReader, RgbaImage};

use super::pixmap::Pixmap;
use crate::error::ResourceError;

/// The atlas resources card-face synthesis draws from.
///
/// Suit and font atlases are horizontal glyph strips (4 cells for suits,
/// 13 for ranks); the card back and the six face-art images are single
/// pictures scaled at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtlasId {
    /// Card-back art for the face-down image.
    CardBack,
    /// Standard suit-pip strip.
    Suits,
    /// Small corner-pip strip.
    SmallSuits,
    /// Big center-suit strip.
    BigSuits,
    /// Medium black rank font strip.
    MedBlackFont,
    /// Medium red rank font strip.
    MedRedFont,
    /// Large black rank font strip.
    BigBlackFont,
    /// Large red rank font strip.
    BigRedFont,
    /// Red jack face art.
    RedJack,
    /// Red queen face art.
    RedQueen,
    /// Red king face art.
    RedKing,
    /// Black jack face art.
    BlackJack,
    /// Black queen face art.
    BlackQueen,
    /// Black king face art.
    BlackKing,
}

impl AtlasId {
    /// Every resource, in no particular order.
    pub const ALL: [Self; 14] = [
        Self::CardBack,
        Self::Suits,
        Self::SmallSuits,
        Self::BigSuits,
        Self::MedBlackFont,
        Self::MedRedFont,
        Self::BigBlackFont,
        Self::BigRedFont,
        Self::RedJack,
        Self::RedQueen,
        Self::RedKing,
        Self::BlackJack,
        Self::BlackQueen,
        Self::BlackKing,
    ];

    /// File name of the resource inside a [`DirResources`] directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CardBack => "cardback.png",
            Self::Suits => "suits.png",
            Self::SmallSuits => "smallsuits.png",
            Self::BigSuits => "bigsuits.png",
            Self::MedBlackFont => "medblackfont.png",
            Self::MedRedFont => "medredfont.png",
            Self::BigBlackFont => "bigblackfont.png",
            Self::BigRedFont => "bigredfont.png",
            Self::RedJack => "redjack.png",
            Self::RedQueen => "redqueen.png",
            Self::RedKing => "redking.png",
            Self::BlackJack => "blackjack.png",
            Self::BlackQueen => "blackqueen.png",
            Self::BlackKing => "blackking.png",
        }
    }

}

/// Source of atlas images.
///
/// The provider decides where atlases live — files, embedded bytes, or a
/// different raster backend entirely; synthesis only asks it to produce one
/// image per id.
pub trait Resources {
    /// The image type this provider produces.
    type Image: Pixmap;

    /// Loads the atlas image for `id`.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal to the cache build that requested it.
    fn load(&self, id: AtlasId) -> Result<Self::Image, ResourceError>;
}

/// Loads atlas PNG files from a directory.
///
/// File names follow [`AtlasId::file_name`], e.g. `suits.png`.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Resources for DirResources {
    type Image = RgbaImage;

    fn load(&self, id: AtlasId) -> Result<RgbaImage, ResourceError> {
        let path = self.root.join(id.file_name());
        let reader = ImageReader::open(&path).map_err(|source| ResourceError::Io { id, source })?;
        let decoded = reader
            .decode()
            .map_err(|source| ResourceError::Decode { id, source })?;
        Ok(decoded.to_rgba8())
    }
}
