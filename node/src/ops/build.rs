//! raster -> tree

use tracing::{trace, trace_span};

use crate::{Node, Quad, Raster, Region, Value};

impl Node {
    /// Builds the tree for a whole image.
    pub fn build(raster: &Raster) -> Node {
        let _span = trace_span!("build", side = raster.side()).entered();
        let node = Node::build_region(raster.pixels(), raster.side(), raster.region());
        trace!(leaves = node.leaf_count(), nodes = node.node_count(), "built");
        node
    }

    /// Builds the tree for `region` of a row-major image `stride` pixels wide.
    ///
    /// `pixels` is the whole image, not a copy of the region.
    /// Panics if `region` doesn't fit inside the image, or if a non-uniform region has an odd side.
    pub fn build_region(pixels: &[Value], stride: usize, region: Region) -> Node {
        let candidate = pixels[region.origin(stride)];
        let uniform = region.indices(stride).all(|i| pixels[i] == candidate);
        if uniform {
            Node::new_leaf(candidate)
        } else {
            Node::new_inner(Quad::from_fn(|q| {
                Node::build_region(pixels, stride, region.quadrant(q))
            }))
        }
    }
}
