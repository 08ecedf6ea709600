//! Card-face composition.

use super::atlas::{RankGlyphs, SuitGlyphs};
use super::layout::pip_positions;
use super::pixmap::{Color, Pixmap, Rect};
use super::resources::{AtlasId, Resources};
use crate::card::{Rank, Suit};
use crate::error::ResourceError;
use crate::size::{ProfileKind, SizeProfile};

const CORNER_RADIUS: u32 = 4;

/// Face art for one color family, upright and pre-rotated, scaled to the
/// decorated area of a face card.
struct FaceArt<P> {
    jack: P,
    rev_jack: P,
    queen: P,
    rev_queen: P,
    king: P,
    rev_king: P,
}

impl<P: Pixmap> FaceArt<P> {
    fn load<R>(res: &R, red: bool, w: u32, h: u32) -> Result<Self, ResourceError>
    where
        R: Resources<Image = P>,
    {
        let pair = |id: AtlasId| -> Result<(P, P), ResourceError> {
            let art = res.load(id)?.scaled(w, h);
            let rev = art.rotated_180();
            Ok((art, rev))
        };
        let (jack, rev_jack) = pair(if red {
            AtlasId::RedJack
        } else {
            AtlasId::BlackJack
        })?;
        let (queen, rev_queen) = pair(if red {
            AtlasId::RedQueen
        } else {
            AtlasId::BlackQueen
        })?;
        let (king, rev_king) = pair(if red {
            AtlasId::RedKing
        } else {
            AtlasId::BlackKing
        })?;
        Ok(Self {
            jack,
            rev_jack,
            queen,
            rev_queen,
            king,
            rev_king,
        })
    }

    fn get(&self, rank: Rank) -> Option<(&P, &P)> {
        match rank {
            Rank::Jack => Some((&self.jack, &self.rev_jack)),
            Rank::Queen => Some((&self.queen, &self.rev_queen)),
            Rank::King => Some((&self.king, &self.rev_king)),
            _ => None,
        }
    }
}

/// Every sliced source image one profile's synthesis pass draws from.
///
/// Composition picks its glyphs and layout off this enum, so the two
/// profiles share a single pass instead of duplicating it per resolution.
enum GlyphBank<P> {
    Normal {
        suit_glyphs: SuitGlyphs<P>,
        rev_suit_glyphs: SuitGlyphs<P>,
        small_suit_glyphs: SuitGlyphs<P>,
        rev_small_suit_glyphs: SuitGlyphs<P>,
        black_font: RankGlyphs<P>,
        red_font: RankGlyphs<P>,
        rev_black_font: RankGlyphs<P>,
        rev_red_font: RankGlyphs<P>,
        red_art: FaceArt<P>,
        black_art: FaceArt<P>,
    },
    Large {
        suit_glyphs: SuitGlyphs<P>,
        big_suit_glyphs: SuitGlyphs<P>,
        black_font: RankGlyphs<P>,
        red_font: RankGlyphs<P>,
    },
}

/// Composes one face image per `(suit, rank)` for a single profile.
pub(crate) struct FaceSynthesizer<P> {
    profile: SizeProfile,
    bank: GlyphBank<P>,
    hidden: P,
}

impl<P: Pixmap> FaceSynthesizer<P> {
    /// Loads and slices every atlas the profile needs.
    ///
    /// # Errors
    ///
    /// Fails on the first unloadable resource; synthesis cannot run with a
    /// partial glyph set.
    pub fn load<R>(res: &R, profile: &SizeProfile) -> Result<Self, ResourceError>
    where
        R: Resources<Image = P>,
    {
        let card = profile.card;
        let hidden = res.load(AtlasId::CardBack)?.scaled(card.width, card.height);

        let bank = match profile.kind {
            ProfileKind::Normal => {
                let suits = res.load(AtlasId::Suits)?;
                let small = res.load(AtlasId::SmallSuits)?;
                let black = res.load(AtlasId::MedBlackFont)?;
                let red = res.load(AtlasId::MedRedFont)?;
                let face_w = card.width - 20;
                let face_h = card.height / 2 - 9;
                GlyphBank::Normal {
                    suit_glyphs: SuitGlyphs::slice(&suits, profile.suit_size, false),
                    rev_suit_glyphs: SuitGlyphs::slice(&suits, profile.suit_size, true),
                    small_suit_glyphs: SuitGlyphs::slice(&small, profile.small_suit_size, false),
                    rev_small_suit_glyphs: SuitGlyphs::slice(&small, profile.small_suit_size, true),
                    black_font: RankGlyphs::slice(
                        &black,
                        profile.font_width,
                        profile.font_height,
                        false,
                    ),
                    red_font: RankGlyphs::slice(&red, profile.font_width, profile.font_height, false),
                    rev_black_font: RankGlyphs::slice(
                        &black,
                        profile.font_width,
                        profile.font_height,
                        true,
                    ),
                    rev_red_font: RankGlyphs::slice(
                        &red,
                        profile.font_width,
                        profile.font_height,
                        true,
                    ),
                    red_art: FaceArt::load(res, true, face_w, face_h)?,
                    black_art: FaceArt::load(res, false, face_w, face_h)?,
                }
            }
            ProfileKind::Large => {
                let suits = res.load(AtlasId::Suits)?;
                let big = res.load(AtlasId::BigSuits)?;
                let black = res.load(AtlasId::BigBlackFont)?;
                let red = res.load(AtlasId::BigRedFont)?;
                GlyphBank::Large {
                    suit_glyphs: SuitGlyphs::slice(&suits, profile.suit_size, false),
                    big_suit_glyphs: SuitGlyphs::slice(&big, profile.big_suit_size, false),
                    black_font: RankGlyphs::slice(
                        &black,
                        profile.font_width,
                        profile.font_height,
                        false,
                    ),
                    red_font: RankGlyphs::slice(&red, profile.font_width, profile.font_height, false),
                }
            }
        };

        Ok(Self {
            profile: *profile,
            bank,
            hidden,
        })
    }

    /// Takes the face-down image out of the synthesizer.
    pub fn into_hidden(self) -> P {
        self.hidden
    }

    /// Composes the face image for one card.
    pub fn synthesize(&self, suit: Suit, rank: Rank) -> P {
        let card = self.profile.card;
        let (w, h) = (i64::from(card.width), i64::from(card.height));

        let mut face = P::new(card.width, card.height);
        face.fill_round_rect(
            Rect::new(0, 0, card.width, card.height),
            CORNER_RADIUS,
            Color::BLACK,
        );
        face.fill_round_rect(
            Rect::new(1, 1, card.width - 2, card.height - 2),
            CORNER_RADIUS,
            Color::WHITE,
        );

        match &self.bank {
            GlyphBank::Normal {
                suit_glyphs,
                rev_suit_glyphs,
                small_suit_glyphs,
                rev_small_suit_glyphs,
                black_font,
                red_font,
                rev_black_font,
                rev_red_font,
                red_art,
                black_art,
            } => {
                let font_w = i64::from(self.profile.font_width);
                let font_h = i64::from(self.profile.font_height);
                let (font, rev_font) = if suit.is_red() {
                    (red_font, rev_red_font)
                } else {
                    (black_font, rev_black_font)
                };

                face.blit(font.get(rank), 2, 4);
                face.blit(rev_font.get(rank), w - font_w - 2, h - font_h - 4);

                // Wider fonts push the corner pip one pixel further in.
                if font_w > 6 {
                    face.blit(small_suit_glyphs.get(suit), 3, 5 + font_h);
                    face.blit(rev_small_suit_glyphs.get(suit), w - 7, h - 11 - font_h);
                } else {
                    face.blit(small_suit_glyphs.get(suit), 2, 5 + font_h);
                    face.blit(rev_small_suit_glyphs.get(suit), w - 6, h - 11 - font_h);
                }

                if rank.is_face() {
                    face.blit(suit_glyphs.get(suit), 10, 9);
                    face.blit(rev_suit_glyphs.get(suit), w - 21, h - 20);

                    face.stroke_rect(
                        Rect::new(9, 8, (w - 18) as u32, (h - 16) as u32),
                        Color::BLACK,
                    );
                    let art = if suit.is_red() { red_art } else { black_art };
                    if let Some((upright, inverted)) = art.get(rank) {
                        let face_h = h / 2 - 9;
                        face.blit(upright, 10, 9);
                        face.blit(inverted, 10, h - face_h - 9);
                    }
                } else {
                    for pip in pip_positions(rank, w, h) {
                        let glyph = if pip.inverted {
                            rev_suit_glyphs.get(suit)
                        } else {
                            suit_glyphs.get(suit)
                        };
                        face.blit(glyph, pip.x, pip.y);
                    }
                }
            }
            GlyphBank::Large {
                suit_glyphs,
                big_suit_glyphs,
                black_font,
                red_font,
            } => {
                let font = if suit.is_red() { red_font } else { black_font };
                face.blit(font.get(rank), 3, 4);
                face.blit(suit_glyphs.get(suit), w - 14, 4);
                face.blit(big_suit_glyphs.get(suit), w / 2 - 12, h / 2 - 13);
            }
        }

        face
    }
}
