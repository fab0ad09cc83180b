use itertools::{Itertools, MinMaxResult};

use crate::error::{BakeError, Result};

/// Coverage at or above this value counts as ink.
pub const INK_THRESHOLD: u8 = 128;

/// Ink bounding box in pixels, relative to the glyph's drawing origin (top-left
/// of the line box). `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A digit rendered at one point size, trimmed to its ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub character: char,
    pub point_size: u32,
    pub bbox: BBox,
    /// Row-major, `bbox.width() * bbox.height()` entries.
    mask: Vec<bool>,
}

impl Glyph {
    /// Builds a glyph from an 8-bit coverage bitmap whose top-left pixel sits at
    /// (`left`, `top`) relative to the drawing origin. Coverage is thresholded
    /// and the box shrunk to the rows and columns that still hold ink.
    pub fn from_coverage(
        character: char,
        point_size: u32,
        left: i32,
        top: i32,
        width: usize,
        height: usize,
        coverage: &[u8],
    ) -> Self {
        debug_assert_eq!(coverage.len(), width * height);
        let ink = |x: usize, y: usize| coverage[y * width + x] >= INK_THRESHOLD;

        let rows = (0..height)
            .filter(|&y| (0..width).any(|x| ink(x, y)))
            .minmax();
        let cols = (0..width)
            .filter(|&x| (0..height).any(|y| ink(x, y)))
            .minmax();

        let (rows, cols) = match (span(rows), span(cols)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => {
                return Self {
                    character,
                    point_size,
                    bbox: BBox {
                        left,
                        top,
                        right: left,
                        bottom: top,
                    },
                    mask: Vec::new(),
                }
            }
        };

        let mask = (rows.0..=rows.1)
            .flat_map(|y| (cols.0..=cols.1).map(move |x| ink(x, y)))
            .collect();

        Self {
            character,
            point_size,
            bbox: BBox {
                left: left + cols.0 as i32,
                top: top + rows.0 as i32,
                right: left + cols.1 as i32 + 1,
                bottom: top + rows.1 as i32 + 1,
            },
            mask,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Ink pixel positions relative to the drawing origin.
    pub fn ink_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.bbox.width().max(1) as usize;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, ink)| **ink)
            .map(move |(i, _)| {
                (
                    self.bbox.left + (i % width) as i32,
                    self.bbox.top + (i / width) as i32,
                )
            })
    }
}

fn span(result: MinMaxResult<usize>) -> Option<(usize, usize)> {
    match result {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Anything that can turn a digit into a [Glyph] at a given point size.
pub trait GlyphSource {
    fn rasterize(&self, character: char, point_size: u32) -> Result<Glyph>;
}

pub fn check_digit(character: char) -> Result<()> {
    if character.is_ascii_digit() {
        Ok(())
    } else {
        Err(BakeError::UnsupportedCharacter(character))
    }
}
