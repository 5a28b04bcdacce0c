//! Byte-level I/O for block transforms.
//!
//! This module provides `ByteReader` and `ByteWriter`, the sequential byte
//! source and sink the transforms are fed from and drained into. Transforms
//! hold the whole block in memory, so the reader only needs two operations:
//! read one fixed-width header field, and read everything that remains.
//!
//! # Byte Ordering
//!
//! Multi-byte integers are big-endian, matching the BWT frame header.
//!
//! # Example
//!
//! ```
//! use blocksort_core::bytestream::{ByteReader, ByteWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = ByteWriter::new(&mut output);
//!     writer.write_u32_be(3).unwrap();
//!     writer.write_bytes(b"ARD!").unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = ByteReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_u32_be().unwrap(), 3);
//! assert_eq!(reader.read_to_end().unwrap(), b"ARD!");
//! ```

use crate::error::{BlocksortError, Result};
use std::io::{ErrorKind, Read, Write};

/// A byte-level reader that wraps any `Read` implementation.
#[derive(Debug)]
pub struct ByteReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Total bytes read (for error reporting).
    total_bytes_read: u64,
}

impl<R: Read> ByteReader<R> {
    /// Create a new `ByteReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            total_bytes_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `ByteReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.total_bytes_read
    }

    /// Fill `buf` completely or fail with `UnexpectedEof` naming the shortfall.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => return Err(BlocksortError::unexpected_eof(buf.len() - filled)),
                Ok(n) => {
                    filled += n;
                    self.total_bytes_read += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Read a big-endian 32-bit unsigned integer.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.read_full(&mut bytes)?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_full(&mut byte)?;
        Ok(byte[0])
    }

    /// Read every remaining byte of the source.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        let n = self.reader.read_to_end(&mut data)?;
        self.total_bytes_read += n as u64;
        Ok(data)
    }
}

/// A byte-level writer that wraps any `Write` implementation.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Total bytes written.
    total_bytes_written: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Create a new `ByteWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_bytes_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `ByteWriter`, flushing it, and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Get the total number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.total_bytes_written
    }

    /// Write a big-endian 32-bit unsigned integer.
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte])
    }

    /// Write a byte slice in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.total_bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_u32_big_endian() {
        let mut output = Vec::new();
        {
            let mut writer = ByteWriter::new(&mut output);
            writer.write_u32_be(0x0102_0304).unwrap();
            assert_eq!(writer.bytes_written(), 4);
        }
        assert_eq!(output, [0x01, 0x02, 0x03, 0x04]);

        let mut reader = ByteReader::new(Cursor::new(&output));
        assert_eq!(reader.read_u32_be().unwrap(), 0x0102_0304);
        assert_eq!(reader.bytes_read(), 4);
    }

    #[test]
    fn test_header_then_payload() {
        let data = [0, 0, 0, 3, b'A', b'R', b'D', b'!'];
        let mut reader = ByteReader::new(Cursor::new(&data));
        assert_eq!(reader.read_u32_be().unwrap(), 3);
        assert_eq!(reader.read_u8().unwrap(), b'A');
        assert_eq!(reader.read_to_end().unwrap(), b"RD!");
        assert_eq!(reader.bytes_read(), 8);
        assert!(reader.read_to_end().unwrap().is_empty());
    }

    #[test]
    fn test_truncated_header() {
        let mut reader = ByteReader::new(Cursor::new([0u8, 1]));
        let err = reader.read_u32_be().unwrap_err();
        assert!(matches!(err, BlocksortError::UnexpectedEof { expected: 2 }));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = ByteReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_to_end().unwrap().is_empty());
        assert!(matches!(
            reader.read_u8(),
            Err(BlocksortError::UnexpectedEof { expected: 1 })
        ));
    }

    #[test]
    fn test_into_inner() {
        let mut writer = ByteWriter::new(Vec::new());
        writer.write_u8(0xFF).unwrap();
        writer.write_bytes(b"ok").unwrap();
        assert_eq!(writer.into_inner().unwrap(), [0xFF, b'o', b'k']);
    }
}
