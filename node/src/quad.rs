//! Raw types to name indicies to what would otherwise be fixed length arrays

/// One of the four equal sub-squares of a square region.
///
/// The declaration order is the order quadrants are visited in everywhere:
/// upper-left, upper-right, lower-left, lower-right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    /// upper-left
    NW,
    /// upper-right
    NE,
    /// lower-left
    SW,
    /// lower-right
    SE,
}
impl Quadrant {
    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    /// calls `f` once per quadrant, in quadrant order
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        let nw = f(Quadrant::NW);
        let ne = f(Quadrant::NE);
        let sw = f(Quadrant::SW);
        let se = f(Quadrant::SE);
        Quad { nw, ne, sw, se }
    }
    pub fn iter(&self) -> std::array::IntoIter<&T, 4> {
        [&self.nw, &self.ne, &self.sw, &self.se].into_iter()
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}
/// takes exactly four items in quadrant order, anything else is handed back untouched
impl<T> TryFrom<Vec<T>> for Quad<T> {
    type Error = Vec<T>;
    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let [nw, ne, sw, se] = <[T; 4]>::try_from(items)?;
        Ok(Quad { nw, ne, sw, se })
    }
}
