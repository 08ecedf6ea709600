//! Card dimensions and rendering size profiles.

/// Pixel dimensions of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSize {
    /// Card width in pixels.
    pub width: u32,
    /// Card height in pixels.
    pub height: u32,
}

impl CardSize {
    /// The baseline card size used before any screen measurement arrives.
    pub const DEFAULT: Self = Self {
        width: 45,
        height: 64,
    };

    /// Derives card dimensions from a screen width.
    ///
    /// Eleven cards fit side by side and the 45:64 card aspect ratio is
    /// fixed, so `width = screen_width / 11` and `height = width * 64 / 45`
    /// in integer math.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::CardSize;
    ///
    /// let size = CardSize::for_screen(495);
    /// assert_eq!((size.width, size.height), (45, 64));
    /// ```
    #[must_use]
    pub fn for_screen(screen_width: u32) -> Self {
        let width = screen_width / 11;
        let size = Self {
            width,
            height: width * 64 / 45,
        };
        log::debug!(
            "card size for screen width {screen_width}: {}x{}",
            size.width,
            size.height
        );
        size
    }
}

impl Default for CardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which of the two rendering profiles a synthesis pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Full card faces with corner glyphs, pip layouts, and face art.
    Normal,
    /// Simplified oversized faces: one rank glyph and a big center suit.
    Large,
}

/// Glyph metrics and target card size for one synthesis pass.
///
/// Every synthesis and layout call takes the profile explicitly; there is
/// no process-wide card size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeProfile {
    /// The profile family.
    pub kind: ProfileKind,
    /// Target card dimensions.
    pub card: CardSize,
    /// Cell size of the standard suit-pip strip.
    pub suit_size: u32,
    /// Cell size of the small corner-pip strip.
    pub small_suit_size: u32,
    /// Cell size of the big center-suit strip.
    pub big_suit_size: u32,
    /// Cell width of the rank font strip for this profile.
    pub font_width: u32,
    /// Cell height of the rank font strip for this profile.
    pub font_height: u32,
}

impl SizeProfile {
    /// Builds the profile metrics for `kind` at the given card size.
    #[must_use]
    pub const fn new(kind: ProfileKind, card: CardSize) -> Self {
        let (font_width, font_height) = match kind {
            ProfileKind::Normal => (7, 9),
            ProfileKind::Large => (18, 15),
        };
        Self {
            kind,
            card,
            suit_size: 10,
            small_suit_size: 5,
            big_suit_size: 25,
            font_width,
            font_height,
        }
    }

    /// The normal profile at the given card size.
    #[must_use]
    pub const fn normal(card: CardSize) -> Self {
        Self::new(ProfileKind::Normal, card)
    }

    /// The large profile at the given card size.
    #[must_use]
    pub const fn large(card: CardSize) -> Self {
        Self::new(ProfileKind::Large, card)
    }
}
