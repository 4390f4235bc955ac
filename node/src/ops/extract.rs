//! tree -> raster

use tracing::trace_span;

use crate::{Error, Node, Region, Result, Value};

impl Node {
    /// Expands the tree into a row-major image `side` pixels wide.
    pub fn extract(&self, side: usize) -> Result<Vec<Value>> {
        let _span = trace_span!("extract", side).entered();
        if side == 0 {
            return Err(Error::EmptyRaster);
        }
        if !side.is_power_of_two() {
            return Err(Error::NotPowerOfTwo { side });
        }
        let count = side
            .checked_mul(side)
            .ok_or(Error::TooLarge { count: usize::MAX })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| Error::TooLarge { count })?;
        pixels.resize(count, 0);
        self.fill(&mut pixels, side, Region::full(side))?;
        Ok(pixels)
    }

    /// writes every pixel of `region` exactly once
    fn fill(&self, pixels: &mut [Value], stride: usize, region: Region) -> Result<()> {
        match self {
            Node::Leaf(value) => {
                for i in region.indices(stride) {
                    pixels[i] = *value;
                }
            }
            Node::Inner(inner) => {
                if region.is_cell() {
                    return Err(Error::TreeTooDeep { side: stride });
                }
                for (child, quadrant) in inner.iter().zip(region.split()) {
                    child.fill(pixels, stride, quadrant)?;
                }
            }
        }
        Ok(())
    }
}
