use crate::{Quad, Quadrant};

/// A square area of a row-major raster.
///
/// `row` increases to the south, `col` increases to the east.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub side: usize,
}
impl Region {
    /// the whole raster
    pub fn full(side: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            side,
        }
    }
    pub fn is_cell(&self) -> bool {
        self.side == 1
    }

    /// the sub-region covering quadrant `q`, side must be even
    pub fn quadrant(&self, q: Quadrant) -> Self {
        debug_assert!(self.side % 2 == 0, "can't split an odd side {}", self.side);
        let half = self.side / 2;
        Self {
            row: self.row + if q.is_north() { 0 } else { half },
            col: self.col + if q.is_west() { 0 } else { half },
            side: half,
        }
    }
    pub fn split(&self) -> Quad<Region> {
        Quad::from_fn(|q| self.quadrant(q))
    }

    /// index of the top-left cell in a raster `stride` cells wide
    pub fn origin(&self, stride: usize) -> usize {
        self.row * stride + self.col
    }
    /// row-major indices of every cell, in a raster `stride` cells wide
    pub fn indices(&self, stride: usize) -> impl Iterator<Item = usize> {
        let Self { row, col, side } = *self;
        (row..row + side).flat_map(move |r| {
            let start = r * stride + col;
            start..start + side
        })
    }
}
