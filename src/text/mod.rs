// glyphs are rasterized straight from the font outlines at each tier's point size,
// then thresholded to a bi-level mask so every output pixel is one of two colors.

pub mod centering;
pub mod glyph;
pub mod rasterizer;

pub use centering::{center_in_cell, Offset};
pub use glyph::{check_digit, BBox, Glyph, GlyphSource, INK_THRESHOLD};
pub use rasterizer::{FontRasterizer, FontSpec};
