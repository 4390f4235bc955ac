use thiserror::Error;

use crate::Token;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while reading, compressing, or uncompressing an image.
///
/// `line` fields are 0 based, `Display` prints them 1 based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("image has no pixels")]
    EmptyRaster,
    #[error("non-square pixel count {count}")]
    NotSquare { count: usize },
    #[error("image side {side} is not a power of two")]
    NotPowerOfTwo { side: usize },
    #[error("image of {count} pixels is too large to hold in memory")]
    TooLarge { count: usize },

    #[error("compressed stream is empty, expected the pixel count first")]
    MissingPixelCount,
    #[error("invalid pixel count {token}")]
    InvalidPixelCount { token: Token },
    #[error("compressed stream ended after {consumed} tree tokens, in the middle of a split")]
    Truncated { consumed: usize },
    #[error("{count} tokens left over after the tree")]
    TrailingTokens { count: usize },
    #[error("tree token {index} has value {token} which is too large for a pixel")]
    LeafTooLarge { token: Token, index: usize },
    #[error("tree splits further than an image of side {side} allows")]
    TreeTooDeep { side: usize },

    #[error("line {}: {text:?} is not an integer", .line + 1)]
    InvalidInteger { line: usize, text: String },
    #[error("line {}: value {value} exceeds required bounds [0, 255]", .line + 1)]
    ValueOutOfRange { line: usize, value: i64 },
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn lines_display_one_based() {
        let err = Error::ValueOutOfRange { line: 0, value: 256 };
        assert_eq!(
            err.to_string(),
            "line 1: value 256 exceeds required bounds [0, 255]"
        );
        let err = Error::InvalidInteger {
            line: 4,
            text: "12a".to_owned(),
        };
        assert_eq!(err.to_string(), "line 5: \"12a\" is not an integer");
    }

    #[test]
    fn dimension_display() {
        assert_eq!(
            Error::NotSquare { count: 5 }.to_string(),
            "non-square pixel count 5"
        );
        assert_eq!(
            Error::NotPowerOfTwo { side: 3 }.to_string(),
            "image side 3 is not a power of two"
        );
        assert_eq!(
            Error::TooLarge { count: 1 << 20 }.to_string(),
            "image of 1048576 pixels is too large to hold in memory"
        );
    }
}
