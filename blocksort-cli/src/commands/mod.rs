//! Command implementations for the blocksort CLI.

pub mod transform;

pub use transform::cmd_transform;
