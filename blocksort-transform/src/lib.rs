//! Block-sorting transforms for blocksort.
//!
//! This crate provides the reversible preprocessing stage of a block-sorting
//! compressor:
//! 1. Circular suffix array - sorts the cyclic rotations of a block
//! 2. Burrows-Wheeler Transform (BWT) - last column of the sorted rotations
//! 3. Move-to-Front Transform (MTF) - turns byte runs into small integers
//!
//! Every transform works on a complete in-memory block and keeps no state
//! between calls. The MTF output is what an entropy coder would consume next.
//!
//! ## Example
//!
//! ```rust
//! use blocksort_transform::{bwt, mtf, pipeline};
//!
//! let block = bwt::transform(b"ABRACADABRA!").unwrap();
//! assert_eq!(block.first(), 3);
//! assert_eq!(block.data(), b"ARD!RCAAAABB");
//! assert_eq!(block.invert().unwrap(), b"ABRACADABRA!");
//!
//! let codes = mtf::encode(b"ABRACADABRA!");
//! assert_eq!(mtf::decode(&codes), b"ABRACADABRA!");
//!
//! let packed = pipeline::encode(b"ABRACADABRA!").unwrap();
//! assert_eq!(pipeline::decode(&packed).unwrap(), b"ABRACADABRA!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
/// Transform limits.
pub mod config;
/// Move-to-Front Transform implementation.
pub mod mtf;
/// BWT followed by MTF.
pub mod pipeline;
/// Circular suffix array construction.
pub mod suffix;

pub use bwt::{BwtBlock, BwtCodec};
pub use config::TransformConfig;
pub use mtf::{MtfCodec, SymbolList};
pub use pipeline::PipelineCodec;
pub use suffix::CircularSuffixArray;
