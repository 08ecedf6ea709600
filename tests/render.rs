//! Atlas slicing, layout, and render-cache integration tests.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use solrs::render::{Pip, RankGlyphs, SuitGlyphs, pip_positions};
use solrs::{
    AtlasId, CardSize, Rank, RenderCache, ResourceError, Resources, SizeProfile, Suit,
};

const SUIT_COLORS: [Rgba<u8>; 4] = [
    Rgba([10, 10, 10, 255]),
    Rgba([200, 30, 30, 255]),
    Rgba([30, 30, 30, 255]),
    Rgba([220, 50, 50, 255]),
];
const BLACK_FONT: Rgba<u8> = Rgba([1, 1, 1, 255]);
const RED_FONT: Rgba<u8> = Rgba([190, 0, 0, 255]);
const BACK: Rgba<u8> = Rgba([0, 0, 160, 255]);
const RED_ART: Rgba<u8> = Rgba([170, 40, 40, 255]);
const BLACK_ART: Rgba<u8> = Rgba([40, 40, 40, 255]);

fn strip(cells: u32, w: u32, h: u32, color_of: impl Fn(u32) -> Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(cells * w, h, |x, _| color_of(x / w))
}

fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(w, h, color)
}

/// Atlas provider backed by in-memory images at their native sizes.
struct MemResources(HashMap<AtlasId, RgbaImage>);

impl MemResources {
    fn complete() -> Self {
        let mut atlases = HashMap::new();
        atlases.insert(AtlasId::CardBack, solid(45, 64, BACK));
        atlases.insert(AtlasId::Suits, strip(4, 10, 10, |i| SUIT_COLORS[i as usize]));
        atlases.insert(
            AtlasId::SmallSuits,
            strip(4, 5, 5, |i| SUIT_COLORS[i as usize]),
        );
        atlases.insert(
            AtlasId::BigSuits,
            strip(4, 25, 25, |i| SUIT_COLORS[i as usize]),
        );
        atlases.insert(AtlasId::MedBlackFont, strip(13, 7, 9, |_| BLACK_FONT));
        atlases.insert(AtlasId::MedRedFont, strip(13, 7, 9, |_| RED_FONT));
        atlases.insert(AtlasId::BigBlackFont, strip(13, 18, 15, |_| BLACK_FONT));
        atlases.insert(AtlasId::BigRedFont, strip(13, 18, 15, |_| RED_FONT));
        for id in [AtlasId::RedJack, AtlasId::RedQueen, AtlasId::RedKing] {
            atlases.insert(id, solid(25, 23, RED_ART));
        }
        for id in [AtlasId::BlackJack, AtlasId::BlackQueen, AtlasId::BlackKing] {
            atlases.insert(id, solid(25, 23, BLACK_ART));
        }

        let res = Self(atlases);
        for id in AtlasId::ALL {
            assert!(res.0.contains_key(&id), "atlas {id:?} not stocked");
        }
        res
    }

    fn without(id: AtlasId) -> Self {
        let mut res = Self::complete();
        res.0.remove(&id);
        res
    }
}

impl Resources for MemResources {
    type Image = RgbaImage;

    fn load(&self, id: AtlasId) -> Result<RgbaImage, ResourceError> {
        self.0
            .get(&id)
            .cloned()
            .ok_or(ResourceError::Missing { id })
    }
}

#[test]
fn suit_strip_slices_into_per_suit_cells() {
    let atlas = strip(4, 10, 10, |i| SUIT_COLORS[i as usize]);
    let glyphs = SuitGlyphs::slice(&atlas, 10, false);

    for suit in Suit::ALL {
        let glyph = glyphs.get(suit);
        assert_eq!(glyph.dimensions(), (10, 10));
        assert_eq!(*glyph.get_pixel(0, 0), SUIT_COLORS[suit.index()]);
    }
}

#[test]
fn rank_strip_slices_thirteen_cells() {
    let atlas = strip(13, 7, 9, |i| Rgba([i as u8, 0, 0, 255]));
    let glyphs = RankGlyphs::slice(&atlas, 7, 9, false);

    for rank in Rank::ALL {
        let glyph = glyphs.get(rank);
        assert_eq!(glyph.dimensions(), (7, 9));
        assert_eq!(*glyph.get_pixel(3, 4), Rgba([rank.index() as u8, 0, 0, 255]));
    }
}

#[test]
fn rotated_extraction_flips_each_cell() {
    let base = Rgba([100, 100, 100, 255]);
    let marker = Rgba([255, 0, 255, 255]);
    // One marker pixel in the top-left corner of every cell.
    let atlas = RgbaImage::from_fn(40, 10, |x, y| {
        if x % 10 == 0 && y == 0 { marker } else { base }
    });

    let upright = SuitGlyphs::slice(&atlas, 10, false);
    let rotated = SuitGlyphs::slice(&atlas, 10, true);

    for suit in Suit::ALL {
        assert_eq!(*upright.get(suit).get_pixel(0, 0), marker);
        assert_eq!(*rotated.get(suit).get_pixel(0, 0), base);
        assert_eq!(*rotated.get(suit).get_pixel(9, 9), marker);
    }
}

#[test]
fn undersized_atlas_is_stretched_to_the_strip() {
    // Native 4x1: one pixel per cell.
    let atlas = strip(4, 1, 1, |i| SUIT_COLORS[i as usize]);
    let glyphs = SuitGlyphs::slice(&atlas, 10, false);

    for suit in Suit::ALL {
        let glyph = glyphs.get(suit);
        assert_eq!(glyph.dimensions(), (10, 10));
        assert_eq!(*glyph.get_pixel(5, 5), SUIT_COLORS[suit.index()]);
    }
}

#[test]
fn pip_counts_match_the_rank() {
    let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 0, 0];
    for rank in Rank::ALL {
        let pips = pip_positions(rank, 45, 64);
        assert_eq!(pips.len(), expected[rank.index()], "{rank:?}");
    }
}

#[test]
fn pips_split_between_upright_and_inverted() {
    let inverted = |pips: &[Pip]| pips.iter().filter(|p| p.inverted).count();

    let ace = pip_positions(Rank::Ace, 45, 64);
    assert_eq!(inverted(&ace), 0);
    // Single pip sits in the center column at the vertical-center slot.
    assert_eq!((ace[0].x, ace[0].y), (45 / 2 - 5, 64 / 2 - 6));

    let nine = pip_positions(Rank::Nine, 45, 64);
    assert_eq!(inverted(&nine), 4);

    let ten = pip_positions(Rank::Ten, 45, 64);
    assert_eq!(inverted(&ten), 5);
    // The two Ten extras sit in the center column, halfway between rows.
    let center_extras = ten
        .iter()
        .filter(|p| p.x == 45 / 2 - 5)
        .count();
    assert_eq!(center_extras, 2);
}

#[test]
fn normal_cache_is_complete_and_sized() {
    let resources = MemResources::complete();
    let profile = SizeProfile::normal(CardSize::DEFAULT);
    let cache = RenderCache::build(&resources, profile).unwrap();

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(cache.card(suit, rank).dimensions(), (45, 64));
        }
    }
    assert_eq!(cache.hidden().dimensions(), (45, 64));
    assert_eq!(*cache.hidden().get_pixel(0, 0), BACK);
}

#[test]
fn large_cache_is_complete_and_sized() {
    let resources = MemResources::complete();
    let profile = SizeProfile::large(CardSize::for_screen(990));
    let cache = RenderCache::build(&resources, profile).unwrap();

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(cache.card(suit, rank).dimensions(), (90, 128));
        }
    }
    assert_eq!(cache.hidden().dimensions(), (90, 128));
}

#[test]
fn card_face_composition_places_glyphs() {
    let resources = MemResources::complete();
    let cache = RenderCache::build(&resources, SizeProfile::normal(CardSize::DEFAULT)).unwrap();

    // Rounded corner stays transparent, the edge band is border black,
    // and the front is white where nothing is drawn.
    let ace = cache.card(Suit::Clubs, Rank::Ace);
    assert_eq!(ace.get_pixel(0, 0).0[3], 0);
    assert_eq!(*ace.get_pixel(0, 32), Rgba([0, 0, 0, 255]));
    assert_eq!(*ace.get_pixel(22, 4), Rgba([255, 255, 255, 255]));

    // Rank glyph corner uses the red font for red suits.
    let ace_hearts = cache.card(Suit::Hearts, Rank::Ace);
    assert_eq!(*ace_hearts.get_pixel(2, 4), RED_FONT);
    assert_eq!(*ace.get_pixel(2, 4), BLACK_FONT);

    // The single Ace pip lands on the center slot in the suit color.
    assert_eq!(*ace.get_pixel(17, 26), SUIT_COLORS[Suit::Clubs.index()]);

    // A Two has an upright pip at the top row and an inverted one at the
    // bottom row of the center column.
    let two = cache.card(Suit::Diamonds, Rank::Two);
    assert_eq!(*two.get_pixel(17, 7), SUIT_COLORS[Suit::Diamonds.index()]);
    assert_eq!(*two.get_pixel(17, 46), SUIT_COLORS[Suit::Diamonds.index()]);
}

#[test]
fn face_cards_carry_art_and_frame() {
    let resources = MemResources::complete();
    let cache = RenderCache::build(&resources, SizeProfile::normal(CardSize::DEFAULT)).unwrap();

    let jack_hearts = cache.card(Suit::Hearts, Rank::Jack);
    // Frame outline corner, then art inside it, upright and inverted.
    assert_eq!(*jack_hearts.get_pixel(9, 8), Rgba([0, 0, 0, 255]));
    assert_eq!(*jack_hearts.get_pixel(12, 12), RED_ART);
    assert_eq!(*jack_hearts.get_pixel(12, 34), RED_ART);

    let king_spades = cache.card(Suit::Spades, Rank::King);
    assert_eq!(*king_spades.get_pixel(12, 12), BLACK_ART);

    // Below the frame the front stays white.
    assert_eq!(*jack_hearts.get_pixel(22, 60), Rgba([255, 255, 255, 255]));
}

#[test]
fn large_profile_draws_center_suit_and_single_rank_glyph() {
    let resources = MemResources::complete();
    let cache = RenderCache::build(&resources, SizeProfile::large(CardSize::for_screen(990))).unwrap();

    let five_hearts = cache.card(Suit::Hearts, Rank::Five);
    assert_eq!(*five_hearts.get_pixel(3, 4), RED_FONT);
    // 10px corner suit at (w-14, 4) and 25px center suit at (w/2-12, h/2-13).
    assert_eq!(
        *five_hearts.get_pixel(90 - 14, 4),
        SUIT_COLORS[Suit::Hearts.index()]
    );
    assert_eq!(
        *five_hearts.get_pixel(45 - 12, 64 - 13),
        SUIT_COLORS[Suit::Hearts.index()]
    );

    // No pip grid in this profile; the left column stays white.
    assert_eq!(*five_hearts.get_pixel(9, 20), Rgba([255, 255, 255, 255]));
}

#[test]
fn missing_atlas_fails_the_whole_build() {
    let resources = MemResources::without(AtlasId::Suits);
    let Err(err) = RenderCache::build(&resources, SizeProfile::normal(CardSize::DEFAULT)) else {
        panic!("build succeeded without the suit atlas");
    };
    assert!(matches!(err, ResourceError::Missing { id: AtlasId::Suits }));

    let resources = MemResources::without(AtlasId::BigSuits);
    let Err(err) = RenderCache::build(&resources, SizeProfile::large(CardSize::DEFAULT)) else {
        panic!("build succeeded without the big suit atlas");
    };
    assert!(matches!(
        err,
        ResourceError::Missing {
            id: AtlasId::BigSuits
        }
    ));
}

#[test]
fn card_size_tracks_screen_width_at_fixed_aspect() {
    assert_eq!(CardSize::for_screen(495), CardSize::DEFAULT);

    let size = CardSize::for_screen(990);
    assert_eq!((size.width, size.height), (90, 128));

    let size = CardSize::for_screen(500);
    assert_eq!((size.width, size.height), (45, 64));
}
