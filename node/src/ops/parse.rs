//! tokens -> tree

use tracing::{trace, trace_span};

use crate::{Error, Node, Quad, Result, Token, Value};

impl Node {
    /// Parses one tree from the front of `tokens`.
    ///
    /// Returns the tree along with how many tokens it took, anything after that is left alone.
    pub fn parse(tokens: &[Token]) -> Result<(Node, usize)> {
        let _span = trace_span!("parse", tokens = tokens.len()).entered();
        let mut reader = TokenReader::new(tokens);
        let node = reader.read_node()?;
        trace!(consumed = reader.consumed(), "parsed");
        Ok((node, reader.consumed()))
    }
    /// Parses a tree that must use every token.
    pub fn parse_exact(tokens: &[Token]) -> Result<Node> {
        let (node, consumed) = Node::parse(tokens)?;
        match tokens.len() - consumed {
            0 => Ok(node),
            count => Err(Error::TrailingTokens { count }),
        }
    }
}

/// A cursor over a preorder token stream.
///
/// The stream is only ever read front to back, one token at a time.
#[derive(Clone, Debug)]
pub struct TokenReader<'src> {
    src: &'src [Token],
    at: usize,
    max_depth: Option<usize>,
}
impl<'src> TokenReader<'src> {
    pub fn new(src: &'src [Token]) -> Self {
        Self {
            src,
            at: 0,
            max_depth: None,
        }
    }
    /// fail with `TreeTooDeep` instead of splitting deeper than an image of `side` allows
    ///
    /// A side of 0 or 1 allows no splits at all.
    pub fn limit_side(mut self, side: usize) -> Self {
        self.max_depth = Some(side.checked_ilog2().map_or(0, |d| d as usize));
        self
    }

    /// number of tokens read so far
    pub fn consumed(&self) -> usize {
        self.at
    }
    pub fn remaining(&self) -> &'src [Token] {
        &self.src[self.at..]
    }
    pub fn is_done(&self) -> bool {
        self.at >= self.src.len()
    }

    /// Reads one tree.
    ///
    /// Splits still waiting on children are kept on an explicit stack, not the call stack.
    pub fn read_node(&mut self) -> Result<Node> {
        let mut pending: Vec<Vec<Node>> = Vec::new();
        loop {
            let index = self.at;
            let Some(token) = self.peak() else {
                return Err(Error::Truncated { consumed: index });
            };
            self.consume();
            if token < 0 {
                if let Some(max_depth) = self.max_depth {
                    if pending.len() >= max_depth {
                        return Err(Error::TreeTooDeep { side: 1 << max_depth });
                    }
                }
                pending.push(Vec::with_capacity(4));
                continue;
            }
            let Ok(value) = Value::try_from(token) else {
                return Err(Error::LeafTooLarge { token, index });
            };
            let mut node = Node::new_leaf(value);
            // hand the node to its parent, closing every split that is now complete
            loop {
                let Some(children) = pending.last_mut() else {
                    return Ok(node);
                };
                children.push(node);
                match Quad::try_from(std::mem::take(children)) {
                    Ok(quad) => {
                        pending.pop();
                        node = Node::new_inner(quad);
                    }
                    Err(partial) => {
                        *children = partial;
                        break;
                    }
                }
            }
        }
    }

    fn peak(&self) -> Option<Token> {
        self.src.get(self.at).copied()
    }
    fn consume(&mut self) {
        self.at += 1;
    }
}
