//! Whole image compression and decompression.
//!
//! A compressed stream is the original pixel count followed by the preorder tokens of the tree.
//! The count is needed to recover the image side when decoding, the tree alone can't tell a
//! uniform 1x1 image from a uniform 256x256 one.

use tracing::{debug, debug_span};

use crate::raster::side_of;
use crate::{Error, Node, Region, Result, Token, TokenReader, Value};

/// Output of [`compress`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Compressed {
    /// pixel count followed by the preorder tree
    pub tokens: Vec<Token>,
    pub tree: Node,
    pub pixel_count: usize,
}
impl Compressed {
    /// number of tokens, including the leading pixel count
    pub fn compressed_len(&self) -> usize {
        self.tokens.len()
    }
    /// fraction of the original size that was saved, negative if the stream grew
    #[allow(clippy::cast_precision_loss)] // only reported, never computed with
    pub fn compression(&self) -> f64 {
        let uncompressed = self.pixel_count as f64;
        let compressed = self.compressed_len() as f64;
        (uncompressed - compressed) / uncompressed
    }
}

/// Output of [`uncompress`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Uncompressed {
    /// row-major image
    pub pixels: Vec<Value>,
    pub tree: Node,
    pub pixel_count: usize,
    pub side: usize,
}

/// Compresses a row-major square image.
pub fn compress(pixels: &[Value]) -> Result<Compressed> {
    let _span = debug_span!("compress", pixels = pixels.len()).entered();
    let side = side_of(pixels.len())?;
    let tree = Node::build_region(pixels, side, Region::full(side));

    #[allow(clippy::cast_possible_wrap)] // slice lengths never exceed isize::MAX
    let count = pixels.len() as Token;
    let mut tokens = Vec::with_capacity(tree.node_count() + 1);
    tokens.push(count);
    tree.write_tokens(&mut tokens);

    debug!(side, tokens = tokens.len(), leaves = tree.leaf_count(), "compressed");
    Ok(Compressed {
        tokens,
        tree,
        pixel_count: pixels.len(),
    })
}

/// Rebuilds the image from a compressed stream.
///
/// Every token must be used, a stream with extra tokens after the tree is rejected.
pub fn uncompress(tokens: &[Token]) -> Result<Uncompressed> {
    let _span = debug_span!("uncompress", tokens = tokens.len()).entered();
    let (&count, tree_tokens) = tokens.split_first().ok_or(Error::MissingPixelCount)?;
    let pixel_count =
        usize::try_from(count).map_err(|_| Error::InvalidPixelCount { token: count })?;
    let side = side_of(pixel_count)?;

    let mut reader = TokenReader::new(tree_tokens).limit_side(side);
    let tree = reader.read_node()?;
    if !reader.is_done() {
        return Err(Error::TrailingTokens {
            count: reader.remaining().len(),
        });
    }
    let pixels = tree.extract(side)?;

    debug!(side, leaves = tree.leaf_count(), "uncompressed");
    Ok(Uncompressed {
        pixels,
        tree,
        pixel_count,
        side,
    })
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::{test_raster, Raster};

    #[test]
    fn all_different_2x2() {
        let compressed = compress(&[0, 1, 2, 3]).unwrap();
        assert_eq!(compressed.tokens, [4, -1, 0, 1, 2, 3]);
        assert_eq!(compressed.pixel_count, 4);
        assert_eq!(compressed.tree.to_string(), "-1 0 1 2 3");

        let uncompressed = uncompress(&compressed.tokens).unwrap();
        assert_eq!(uncompressed.pixels, [0, 1, 2, 3]);
        assert_eq!(uncompressed.side, 2);
        assert_eq!(uncompressed.pixel_count, 4);
        assert_eq!(uncompressed.tree, compressed.tree);
    }

    #[test]
    fn uniform_collapses() {
        for side in [1, 2, 16, 64] {
            let pixels = vec![128; side * side];
            let compressed = compress(&pixels).unwrap();
            #[allow(clippy::cast_possible_wrap)]
            let count = (side * side) as Token;
            assert_eq!(compressed.tokens, [count, 128]);
            assert_eq!(uncompress(&compressed.tokens).unwrap().pixels, pixels);
        }
    }

    #[test]
    fn single_pixel() {
        let compressed = compress(&[77]).unwrap();
        assert_eq!(compressed.tokens, [1, 77]);
        let uncompressed = uncompress(&[1, 77]).unwrap();
        assert_eq!(uncompressed.pixels, [77]);
        assert_eq!(uncompressed.side, 1);
    }

    #[test]
    fn compression_ratio() {
        let raster = test_raster! {"
            0 0 0 0
            0 0 0 0
            0 0 1 2
            0 0 3 4
        "};
        let compressed = compress(raster.pixels()).unwrap();
        assert_eq!(compressed.tokens, [16, -1, 0, 0, 0, -1, 1, 2, 3, 4]);
        assert!((compressed.compression() - 6.0 / 16.0).abs() < 1e-9);

        let grew = compress(&[0, 1, 2, 3]).unwrap();
        assert!((grew.compression() - -0.5).abs() < 1e-9);
    }

    #[test]
    fn compress_rejects_bad_sizes() {
        assert_eq!(compress(&[]), Err(Error::EmptyRaster));
        assert_eq!(compress(&[1, 2, 3]), Err(Error::NotSquare { count: 3 }));
        assert_eq!(
            compress(&[0; 9]),
            Err(Error::NotPowerOfTwo { side: 3 })
        );
    }

    #[test]
    fn uncompress_errors() {
        assert_eq!(uncompress(&[]), Err(Error::MissingPixelCount));
        assert_eq!(
            uncompress(&[-4, 0]),
            Err(Error::InvalidPixelCount { token: -4 })
        );
        assert_eq!(uncompress(&[5, 0]), Err(Error::NotSquare { count: 5 }));
        assert_eq!(uncompress(&[0, 0]), Err(Error::EmptyRaster));
        assert_eq!(uncompress(&[4]), Err(Error::Truncated { consumed: 0 }));
        assert_eq!(
            uncompress(&[4, -1, 0, 1, 2]),
            Err(Error::Truncated { consumed: 4 })
        );
        assert_eq!(
            uncompress(&[4, -1, 0, 1, 2, 3, 9]),
            Err(Error::TrailingTokens { count: 1 })
        );
        assert_eq!(
            uncompress(&[4, -1, -1, 0, 0, 0, 0, 1, 2, 3]),
            Err(Error::TreeTooDeep { side: 2 })
        );
    }

    #[test]
    fn huge_pixel_count() {
        #[cfg(target_pointer_width = "64")]
        let count: Token = 1 << 62;
        #[cfg(not(target_pointer_width = "64"))]
        let count: Token = 1 << 30;
        let pixel_count = usize::try_from(count).unwrap();
        assert_eq!(
            uncompress(&[count, 0]),
            Err(Error::TooLarge { count: pixel_count })
        );
    }

    #[test]
    fn long_split_run() {
        let mut tokens = vec![-1; 1_000_000];
        tokens[0] = 4;
        assert_eq!(uncompress(&tokens), Err(Error::TreeTooDeep { side: 2 }));
    }

    #[test]
    fn leaf_values_are_not_range_checked() {
        let uncompressed = uncompress(&[1, 1000]).unwrap();
        assert_eq!(uncompressed.pixels, [1000]);
    }

    /// square images with a power of two side, drawn from a small palette so regions are often uniform
    fn raster() -> impl Strategy<Value = Vec<u32>> {
        (0_u32..=5).prop_flat_map(|log2| {
            let side = 1_usize << log2;
            prop::collection::vec(prop::sample::select(vec![0_u32, 1, 128, 255]), side * side)
        })
    }

    proptest! {
        #[test]
        fn tree_round_trip(pixels in raster()) {
            let raster = Raster::new(pixels).unwrap();
            let tree = Node::build(&raster);
            prop_assert_eq!(tree.extract(raster.side()).unwrap(), raster.pixels());
        }

        #[test]
        fn stream_round_trip(pixels in raster()) {
            let compressed = compress(&pixels).unwrap();
            prop_assert_eq!(compressed.compressed_len(), compressed.tree.node_count() + 1);
            let uncompressed = uncompress(&compressed.tokens).unwrap();
            prop_assert_eq!(uncompressed.pixels, pixels);
        }

        #[test]
        fn parse_uses_every_token(pixels in raster()) {
            let compressed = compress(&pixels).unwrap();
            let (tree, consumed) = Node::parse(&compressed.tokens[1..]).unwrap();
            prop_assert_eq!(consumed, compressed.tokens.len() - 1);
            prop_assert_eq!(tree, compressed.tree);
        }

        #[test]
        fn any_byte_values(pixels in prop::collection::vec(0_u32..=255, 64)) {
            let compressed = compress(&pixels).unwrap();
            prop_assert_eq!(uncompress(&compressed.tokens).unwrap().pixels, pixels);
        }
    }
}
