//! Card-face synthesis: atlas slicing, composition, and the render cache.

mod atlas;
mod cache;
mod face;
mod layout;
mod pixmap;
mod resources;

pub use atlas::{RankGlyphs, SuitGlyphs};
pub use cache::RenderCache;
pub use layout::{Pip, pip_positions};
pub use pixmap::{Color, Pixmap, Rect};
pub use resources::{AtlasId, DirResources, Resources};
