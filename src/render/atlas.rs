//! Glyph extraction from strip atlases.

use super::pixmap::{Pixmap, Rect};
use crate::card::{Rank, Suit};

/// Stretches `atlas` so it holds exactly `count` cells of `w` x `h`.
///
/// Resources ship at one native size; stretching the whole strip first lets
/// the same file serve any target glyph size.
fn fit_strip<P: Pixmap>(atlas: &P, count: u32, w: u32, h: u32) -> P {
    let (strip_w, strip_h) = (count * w, h);
    if atlas.width() == strip_w && atlas.height() == strip_h {
        atlas.clone()
    } else {
        atlas.scaled(strip_w, strip_h)
    }
}

/// Extracts cell `index` from a fitted strip, optionally rotated 180
/// degrees for corner glyphs that must read correctly on an upside-down
/// card.
fn extract<P: Pixmap>(strip: &P, index: u32, w: u32, h: u32, rotate: bool) -> P {
    let cell = strip.cropped(Rect::new(i64::from(index * w), 0, w, h));
    if rotate { cell.rotated_180() } else { cell }
}

/// One glyph per suit, sliced from a 4-cell strip atlas.
#[derive(Clone)]
pub struct SuitGlyphs<P>([P; 4]);

impl<P: Pixmap> SuitGlyphs<P> {
    /// Slices a suit strip into per-suit glyphs of `size` x `size`.
    ///
    /// Upright and inverted corner glyphs need one call each, with `rotate`
    /// false and true respectively.
    #[must_use]
    pub fn slice(atlas: &P, size: u32, rotate: bool) -> Self {
        let strip = fit_strip(atlas, 4, size, size);
        Self(core::array::from_fn(|i| {
            extract(&strip, i as u32, size, size, rotate)
        }))
    }

    /// The glyph for `suit`.
    #[must_use]
    pub fn get(&self, suit: Suit) -> &P {
        &self.0[suit.index()]
    }
}

/// One glyph per rank, sliced from a 13-cell strip atlas.
#[derive(Clone)]
pub struct RankGlyphs<P>([P; 13]);

impl<P: Pixmap> RankGlyphs<P> {
    /// Slices a rank font strip into per-rank glyphs of `w` x `h`.
    #[must_use]
    pub fn slice(atlas: &P, w: u32, h: u32, rotate: bool) -> Self {
        let strip = fit_strip(atlas, 13, w, h);
        Self(core::array::from_fn(|i| {
            extract(&strip, i as u32, w, h, rotate)
        }))
    }

    /// The glyph for `rank`.
    #[must_use]
    pub fn get(&self, rank: Rank) -> &P {
        &self.0[rank.index()]
    }
}
