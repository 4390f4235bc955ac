use crate::Node;

impl Node {
    /// number of uniform regions
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Inner(inner) => inner.iter().map(Node::leaf_count).sum(),
        }
    }
    /// number of tokens in the preorder stream
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Inner(inner) => 1 + inner.iter().map(Node::node_count).sum::<usize>(),
        }
    }
    /// number of splits on the longest path from the root, a leaf has depth 0
    pub fn depth(&self) -> u32 {
        match self {
            Node::Leaf(_) => 0,
            Node::Inner(inner) => 1 + inner.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
}
