//! BWT followed by MTF.
//!
//! The whole BWT frame, header included, is fed through MTF. Encoding a block
//! here gives the same bytes as piping `bwt` output into `mtf`.

use crate::{bwt, mtf};
use blocksort_core::error::Result;
use blocksort_core::traits::Codec;
use tracing::debug;

/// Apply the BWT, then MTF, to a block.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let frame = bwt::encode(data)?;
    let codes = mtf::encode(&frame);
    debug!(
        len = data.len(),
        zeros = codes.iter().filter(|&&code| code == 0).count(),
        "pipeline encode"
    );
    Ok(codes)
}

/// Undo MTF, then the BWT.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let frame = mtf::decode(data);
    bwt::decode(&frame)
}

/// BWT+MTF as a [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineCodec;

impl Codec for PipelineCodec {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        encode(input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        decode(input)
    }
}
