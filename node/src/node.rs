use crate::Quad;

/// One entry of a compressed stream
pub type Token = i64;
/// A pixel intensity
pub type Value = u32;

/// The token emitted for a node that is split into quadrants.
///
/// Any negative token is read back as a split.
pub const SPLIT: Token = -1;

/// A quadtree over a square region of an image.
///
/// Each inner node owns its four children outright, trees are never shared or mutated after construction.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// every pixel in the region has this value
    Leaf(Value),
    /// the region is not uniform and is split into quadrants
    Inner(Box<Quad<Node>>),
}

impl Node {
    pub fn new_leaf(value: Value) -> Self {
        Self::Leaf(value)
    }
    pub fn new_inner(children: Quad<Node>) -> Self {
        Self::Inner(Box::new(children))
    }

    /// the token this node contributes to a preorder stream
    pub fn value(&self) -> Token {
        match self {
            Self::Leaf(value) => Token::from(*value),
            Self::Inner(_) => SPLIT,
        }
    }
    pub fn inner(&self) -> Option<&Quad<Node>> {
        match self {
            Self::Leaf(_) => None,
            Self::Inner(inner) => Some(inner),
        }
    }
}
