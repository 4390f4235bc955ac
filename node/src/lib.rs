//! Lossless quadtree compression for square grayscale images.
//!
//! A region of the image that is a single color becomes a leaf, anything else is split into four
//! quadrants and tried again. The tree is stored as its preorder tokens, see [`compress`] and
//! [`uncompress`].

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod codec;
mod error;
mod format;
mod node;
mod quad;
mod raster;
mod region;
mod ops {
    mod build;
    mod census;
    mod extract;
    mod parse;
    mod preorder;
    mod test_format;

    pub use parse::*;
    pub use preorder::*;
}

pub use crate::node::*;
pub use codec::*;
pub use error::*;
pub use format::*;
pub use ops::*;
pub use quad::*;
pub use raster::*;
pub use region::*;
