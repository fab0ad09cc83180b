use std::ops::Add;

use super::glyph::BBox;
use crate::tier::CellSize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Self) -> Self::Output {
        Offset {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

/// Where to put a glyph's drawing origin so its ink box sits in the middle of
/// `cell`. Integer division truncates toward zero; a glyph larger than the cell
/// gets a negative offset and is clipped later.
pub fn center_in_cell(bbox: &BBox, cell: CellSize, y_correction: i32) -> Offset {
    let cell_w = cell.width as i32;
    let cell_h = cell.height as i32;
    Offset {
        dx: (cell_w - bbox.width()) / 2 - bbox.left,
        dy: (cell_h - bbox.height()) / 2 - bbox.top + y_correction,
    }
}
