//! # Blocksort Core
//!
//! Core components for the blocksort transforms.
//!
//! - [`bytestream`]: Sequential byte source and sink
//! - [`traits`]: The [`Codec`] trait shared by all transforms
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     blocksort <bwt|mtf|pipeline> <encode|decode>        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Transforms                                              │
//! │     Circular suffix array, BWT, MTF, pipeline           │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     ByteReader/ByteWriter, Codec, BlocksortError        │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bytestream;
pub mod error;
pub mod traits;

pub use bytestream::{ByteReader, ByteWriter};
pub use error::{BlocksortError, Result};
pub use traits::{Codec, Direction};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bytestream::{ByteReader, ByteWriter};
    pub use crate::error::{BlocksortError, Result};
    pub use crate::traits::{Codec, Direction};
}
