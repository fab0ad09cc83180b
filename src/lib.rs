pub mod atlas;
pub mod bake;
pub mod canvas;
pub mod compose;
pub mod error;
pub mod naming;
pub mod palette;
pub mod resize;
pub mod settings;
pub mod text;
pub mod tier;

// two ways to get a half-size strip live side by side on purpose:
// - `bake` re-rasterizes the outlines at the derived tier's point size
// - `resize` resamples an already baked strip
// they are not expected to produce the same pixels.

pub use error::{BakeError, Result};
