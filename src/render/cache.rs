//! The synthesized card image set.

use core::array;

use super::face::FaceSynthesizer;
use super::pixmap::Pixmap;
use super::resources::Resources;
use crate::card::{Rank, Suit};
use crate::error::ResourceError;
use crate::size::SizeProfile;

/// A complete set of card-face images for one size profile.
///
/// The cache is an immutable snapshot: build a new one and drop the old
/// whenever the profile toggles or a resize changes the card size. Handing
/// the fresh cache to the drawing surface by value is the publish step;
/// nothing ever mutates a built cache in place.
pub struct RenderCache<P> {
    profile: SizeProfile,
    cards: [[P; 13]; 4],
    hidden: P,
}

impl<P: Pixmap> RenderCache<P> {
    /// Synthesizes every card face plus the face-down image.
    ///
    /// # Errors
    ///
    /// Returns the first resource failure. The cache is never built
    /// partially: any unloadable atlas aborts the whole pass.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use solrs::{CardSize, DirResources, RenderCache, SizeProfile};
    ///
    /// let resources = DirResources::new("assets");
    /// let profile = SizeProfile::normal(CardSize::for_screen(495));
    /// let cache = RenderCache::build(&resources, profile)?;
    /// # Ok::<(), solrs::ResourceError>(())
    /// ```
    pub fn build<R>(resources: &R, profile: SizeProfile) -> Result<Self, ResourceError>
    where
        R: Resources<Image = P>,
    {
        log::debug!(
            "rebuilding {:?} card faces at {}x{}",
            profile.kind,
            profile.card.width,
            profile.card.height
        );
        let synth = FaceSynthesizer::load(resources, &profile)?;
        let cards = array::from_fn(|s| {
            array::from_fn(|r| synth.synthesize(Suit::ALL[s], Rank::ALL[r]))
        });
        Ok(Self {
            profile,
            cards,
            hidden: synth.into_hidden(),
        })
    }

    /// The synthesized face for `(suit, rank)`.
    #[must_use]
    pub fn card(&self, suit: Suit, rank: Rank) -> &P {
        &self.cards[suit.index()][rank.index()]
    }

    /// The face-down card image.
    #[must_use]
    pub fn hidden(&self) -> &P {
        &self.hidden
    }

    /// The profile this cache was built for.
    #[must_use]
    pub const fn profile(&self) -> &SizeProfile {
        &self.profile
    }
}
