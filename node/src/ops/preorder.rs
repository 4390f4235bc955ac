//! tree -> tokens

use std::fmt::Display;
use std::iter::FusedIterator;

use itertools::Itertools;

use crate::{Node, Token};

impl Node {
    /// Tokens of this tree, the node itself before its children, children in quadrant order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
    pub fn write_tokens(&self, out: &mut Vec<Token>) {
        out.extend(self.preorder());
    }
}

/// Depth first walk over a tree, yields one token per node
#[derive(Clone, Debug)]
pub struct Preorder<'n> {
    stack: Vec<&'n Node>,
}
impl<'n> Iterator for Preorder<'n> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(inner) = node.inner() {
            // reversed so nw is popped first
            self.stack.extend([&inner.se, &inner.sw, &inner.ne, &inner.nw]);
        }
        Some(node.value())
    }
}
impl FusedIterator for Preorder<'_> {}

/// space separated preorder tokens
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.preorder().format(" "))
    }
}
