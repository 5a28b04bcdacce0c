//! Burrows-Wheeler Transform.
//!
//! The BWT sorts the cyclic rotations of a block and keeps the last column of
//! the sorted rotation matrix, together with the row holding the untouched
//! block. Rotations that share a context sort next to each other, so the
//! bytes preceding them cluster into runs.
//!
//! # Frame format
//!
//! ```text
//! +---------------------+---------------------------+
//! | first (u32, BE)     | last column (n bytes)     |
//! +---------------------+---------------------------+
//! ```
//!
//! `n` is implicit: everything after the 4-byte header is the last column.

use crate::config::TransformConfig;
use crate::suffix::CircularSuffixArray;
use blocksort_core::bytestream::{ByteReader, ByteWriter};
use blocksort_core::error::{BlocksortError, Result};
use blocksort_core::traits::Codec;
use std::io::{Cursor, Read, Write};
use tracing::debug;

/// Size of the byte alphabet used by the counting sort.
const RADIX: usize = 256;

/// Length of the frame header carrying `first`.
pub const HEADER_LEN: usize = 4;

/// Output of a forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Sorted row holding the original block.
    first: u32,
    /// Last column of the sorted rotation matrix.
    data: Vec<u8>,
}

impl BwtBlock {
    /// Create a block from its parts.
    ///
    /// Nothing is validated here; [`BwtBlock::invert`] checks `first`.
    pub fn new(first: u32, data: Vec<u8>) -> Self {
        Self { first, data }
    }

    /// Row of the sorted rotations where the original block appears.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// The last column.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Block length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Split into `(first, last column)`.
    pub fn into_parts(self) -> (u32, Vec<u8>) {
        (self.first, self.data)
    }

    /// Recover the original block.
    pub fn invert(&self) -> Result<Vec<u8>> {
        inverse_transform(self.first, &self.data)
    }

    /// Write the frame: header, then the last column.
    pub fn write_to<W: Write>(&self, writer: &mut ByteWriter<W>) -> Result<()> {
        writer.write_u32_be(self.first)?;
        writer.write_bytes(&self.data)
    }

    /// Read a frame: header, then every remaining byte.
    pub fn read_from<R: Read>(reader: &mut ByteReader<R>) -> Result<Self> {
        let first = reader.read_u32_be()?;
        let data = reader.read_to_end()?;
        Ok(Self { first, data })
    }

    /// Serialize the frame into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.data.len());
        out.extend_from_slice(&self.first.to_be_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    /// Parse a frame from a buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_from(&mut ByteReader::new(Cursor::new(bytes)))
    }
}

/// Perform the Burrows-Wheeler Transform with the default configuration.
pub fn transform(data: &[u8]) -> Result<BwtBlock> {
    transform_with(data, &TransformConfig::DEFAULT)
}

/// Perform the Burrows-Wheeler Transform.
///
/// Fails with `InvalidArgument` if the block is longer than
/// `config.max_block_len`.
pub fn transform_with(data: &[u8], config: &TransformConfig) -> Result<BwtBlock> {
    config.check_block_len(data.len())?;

    if data.is_empty() {
        return Ok(BwtBlock::default());
    }

    let n = data.len();
    let suffixes = CircularSuffixArray::new(data);

    // The row starting at offset 0 is the original block; its preceding
    // byte wraps to the end.
    let mut first = 0;
    let mut last = Vec::with_capacity(n);
    for (row, offset) in suffixes.iter().enumerate() {
        if offset == 0 {
            first = row;
            last.push(data[n - 1]);
        } else {
            last.push(data[offset - 1]);
        }
    }

    let first = u32::try_from(first).map_err(|_| {
        BlocksortError::invalid_argument(format!("row {first} does not fit the frame header"))
    })?;
    debug!(len = n, first, "bwt forward transform");

    Ok(BwtBlock { first, data: last })
}

/// Build the LF-mapping of a last column.
///
/// `next[row]` is the position in `bwt` of the byte that starts sorted row
/// `row`. A stable counting sort keeps equal bytes in their last-column
/// order, which is what makes the mapping consistent.
fn next_rows(bwt: &[u8]) -> Vec<usize> {
    let mut counts = [0usize; RADIX];
    for &byte in bwt {
        counts[byte as usize] += 1;
    }

    // Starting row of each byte value in the sorted first column
    let mut starts = [0usize; RADIX];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    let mut next = vec![0usize; bwt.len()];
    for (i, &byte) in bwt.iter().enumerate() {
        next[starts[byte as usize]] = i;
        starts[byte as usize] += 1;
    }
    next
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// `first` must lie in `[0, n)` for a non-empty column and be `0` for an
/// empty one; anything else fails with `InvalidArgument`.
pub fn inverse_transform(first: u32, bwt: &[u8]) -> Result<Vec<u8>> {
    let n = bwt.len();
    let first = first as usize;

    if n == 0 {
        if first != 0 {
            return Err(BlocksortError::invalid_argument(format!(
                "first row {first} given for an empty block"
            )));
        }
        return Ok(Vec::new());
    }
    if first >= n {
        return Err(BlocksortError::index_out_of_range("first row", first, n));
    }

    let next = next_rows(bwt);

    let mut result = Vec::with_capacity(n);
    let mut row = first;
    for _ in 0..n {
        row = next[row];
        result.push(bwt[row]);
    }

    debug!(len = n, first, "bwt inverse transform");
    Ok(result)
}

/// Transform a block and serialize it as a frame.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    Ok(transform(data)?.to_bytes())
}

/// Parse a frame and recover the original block.
pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
    BwtBlock::from_bytes(frame)?.invert()
}

/// The BWT as a [`Codec`], reading and writing frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct BwtCodec;

impl Codec for BwtCodec {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        encode(input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bwt_empty() {
        let block = transform(b"").unwrap();
        assert!(block.is_empty());
        assert_eq!(block.first(), 0);
        assert!(inverse_transform(0, b"").unwrap().is_empty());
    }

    #[test]
    fn test_bwt_single() {
        let block = transform(b"a").unwrap();
        assert_eq!(block.data(), &[0x61]);
        assert_eq!(block.first(), 0);
        assert_eq!(block.invert().unwrap(), b"a");
    }

    #[test]
    fn test_bwt_abracadabra() {
        let block = transform(b"ABRACADABRA!").unwrap();
        assert_eq!(block.first(), 3);
        assert_eq!(block.data(), b"ARD!RCAAAABB");

        let recovered = inverse_transform(3, b"ARD!RCAAAABB").unwrap();
        assert_eq!(recovered, b"ABRACADABRA!");
    }

    #[test]
    fn test_bwt_banana() {
        let block = transform(b"banana").unwrap();
        assert_eq!(block.first(), 3);
        assert_eq!(block.data(), b"nnbaaa");
        assert_eq!(block.invert().unwrap(), b"banana");
    }

    #[test]
    fn test_bwt_repeated_run() {
        // A run is its own last column.
        let data = [b'A'; 10];
        let block = transform(&data).unwrap();
        assert_eq!(block.data(), &data);
        assert!((block.first() as usize) < data.len());
        assert_eq!(block.invert().unwrap(), data);
    }

    #[test]
    fn test_bwt_roundtrip() {
        let test_cases = [
            b"hello world".as_slice(),
            b"abracadabra",
            b"mississippi",
            b"aaaaa",
            b"abcde",
            b"abababab",
            b"the quick brown fox jumps over the lazy dog",
            &[0x00, 0xFF, 0x00, 0xFF, 0x80],
        ];

        for data in test_cases {
            let block = transform(data).unwrap();
            let recovered = block.invert().unwrap();
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_bwt_groups_similar() {
        let data = b"abababab";
        let block = transform(data).unwrap();

        let runs = 1 + block
            .data()
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        assert!(runs <= 4, "BWT should group similar bytes");
    }

    #[test]
    fn test_first_column_is_sorted_last_column() {
        let data = b"mississippi";
        let block = transform(data).unwrap();
        let suffixes = CircularSuffixArray::new(data);

        let first_column: Vec<u8> = suffixes.iter().map(|offset| data[offset]).collect();
        let mut sorted = block.data().to_vec();
        sorted.sort_unstable();
        assert_eq!(first_column, sorted);
    }

    #[test]
    fn test_next_rows_is_stable() {
        // Sorted first column of "ARD!" is "!ADR"
        assert_eq!(next_rows(b"ARD!"), vec![3, 0, 2, 1]);
        // Equal bytes keep their order
        assert_eq!(next_rows(b"bab"), vec![1, 0, 2]);
    }

    #[test]
    fn test_inverse_rejects_bad_first() {
        let err = inverse_transform(12, b"ARD!RCAAAABB").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("first row 12"));

        let err = inverse_transform(1, b"").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_block_limit() {
        let config = TransformConfig::new(4);
        assert!(transform_with(b"abcd", &config).is_ok());
        assert!(
            transform_with(b"abcde", &config)
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_frame_layout() {
        let frame = encode(b"ABRACADABRA!").unwrap();
        assert_eq!(&frame[..HEADER_LEN], &[0, 0, 0, 3]);
        assert_eq!(&frame[HEADER_LEN..], b"ARD!RCAAAABB");
        assert_eq!(decode(&frame).unwrap(), b"ABRACADABRA!");

        assert_eq!(encode(b"").unwrap(), vec![0, 0, 0, 0]);
        assert!(decode(&[0, 0, 0, 0]).unwrap().is_empty());
        assert_eq!(decode(&[0, 0, 0, 0, 0x61]).unwrap(), b"a");
    }

    #[test]
    fn test_truncated_frame() {
        let err = decode(&[0, 0]).unwrap_err();
        assert!(matches!(err, BlocksortError::UnexpectedEof { expected: 2 }));
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_codec_stream() {
        let mut frame = Vec::new();
        BwtCodec
            .encode_stream(Cursor::new(b"banana"), &mut frame)
            .unwrap();
        assert_eq!(frame, [0, 0, 0, 3, b'n', b'n', b'b', b'a', b'a', b'a']);

        let mut writer = ByteWriter::new(Vec::new());
        BwtBlock::new(3, b"nnbaaa".to_vec())
            .write_to(&mut writer)
            .unwrap();
        assert_eq!(writer.into_inner().unwrap(), frame);
    }
}
