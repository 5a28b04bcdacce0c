//! Core traits for block transforms.
//!
//! A [`Codec`] is a stateless, reversible whole-buffer transform. Every call
//! owns its working buffers; nothing is carried from one call to the next.

use crate::bytestream::{ByteReader, ByteWriter};
use crate::error::Result;
use std::io::{Read, Write};

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Forward transform.
    #[default]
    Encode,
    /// Inverse transform.
    Decode,
}

/// A reversible block transform.
///
/// Implemented by the BWT, MTF and composed pipeline codecs.
pub trait Codec {
    /// Short lowercase name, used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Apply the forward transform to a complete block.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Apply the inverse transform to a complete block.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Apply the transform in the given direction.
    fn apply(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>> {
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }

    /// Read the whole source, transform it, and write the result to the sink.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    fn apply_stream<R: Read, W: Write>(
        &self,
        direction: Direction,
        reader: R,
        writer: W,
    ) -> Result<u64>
    where
        Self: Sized,
    {
        let input = ByteReader::new(reader).read_to_end()?;
        let output = self.apply(direction, &input)?;

        let mut writer = ByteWriter::new(writer);
        writer.write_bytes(&output)?;
        writer.flush()?;
        Ok(writer.bytes_written())
    }

    /// Encode everything from `reader` into `writer`.
    fn encode_stream<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<u64>
    where
        Self: Sized,
    {
        self.apply_stream(Direction::Encode, reader, writer)
    }

    /// Decode everything from `reader` into `writer`.
    fn decode_stream<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<u64>
    where
        Self: Sized,
    {
        self.apply_stream(Direction::Decode, reader, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reverses its input; its own inverse.
    struct Reverse;

    impl Codec for Reverse {
        fn name(&self) -> &'static str {
            "reverse"
        }

        fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }

        fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
            self.encode(input)
        }
    }

    #[test]
    fn test_direction_default() {
        assert_eq!(Direction::default(), Direction::Encode);
    }

    #[test]
    fn test_apply_stream() {
        let mut output = Vec::new();
        let written = Reverse
            .encode_stream(Cursor::new(b"abc"), &mut output)
            .unwrap();
        assert_eq!(written, 3);
        assert_eq!(output, b"cba");

        let mut restored = Vec::new();
        Reverse
            .decode_stream(Cursor::new(&output), &mut restored)
            .unwrap();
        assert_eq!(restored, b"abc");
    }
}
