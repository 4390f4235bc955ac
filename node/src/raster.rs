use crate::{Error, Region, Result, Value};

/// Side length of a square image with `count` pixels.
///
/// Only power of two sides are accepted, so halving a region always lands on whole pixels.
pub fn side_of(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::EmptyRaster);
    }
    let side = count.isqrt();
    if side * side != count {
        return Err(Error::NotSquare { count });
    }
    if !side.is_power_of_two() {
        return Err(Error::NotPowerOfTwo { side });
    }
    Ok(side)
}

/// A square grayscale image stored in row-major order
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Raster {
    side: usize,
    pixels: Vec<Value>,
}
impl Raster {
    pub fn new(pixels: Vec<Value>) -> Result<Self> {
        let side = side_of(pixels.len())?;
        Ok(Self { side, pixels })
    }

    pub fn side(&self) -> usize {
        self.side
    }
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    pub fn region(&self) -> Region {
        Region::full(self.side)
    }
    pub fn pixels(&self) -> &[Value] {
        &self.pixels
    }
}
