//! Transform command implementation.

use blocksort_core::{Codec, Direction};
use std::io::{self, BufWriter, Read, Write};
use tracing::info;

/// Run `codec` over all of stdin and write the result to stdout.
pub fn cmd_transform<C: Codec>(
    codec: C,
    direction: Direction,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    run_transform(&codec, direction, stdin, stdout)?;
    Ok(())
}

/// Run `codec` over everything in `reader`, writing to `writer`.
///
/// Returns the number of bytes written.
pub fn run_transform<C: Codec, R: Read, W: Write>(
    codec: &C,
    direction: Direction,
    reader: R,
    writer: W,
) -> blocksort_core::Result<u64> {
    let written = codec.apply_stream(direction, reader, writer)?;
    info!(codec = codec.name(), ?direction, written, "transform complete");
    Ok(written)
}
