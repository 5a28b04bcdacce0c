//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its current position in a list of all 256
//! byte values, then moves that byte to the front of the list. Bytes that
//! recur close together get small codes, so the runs produced by the BWT turn
//! into long stretches of zeros.
//!
//! Encoding and decoding apply the same list update for the same
//! `(byte, position)` pair, which is what makes the transform lossless.

use blocksort_core::error::Result;
use blocksort_core::traits::Codec;
use tracing::trace;

/// Number of symbols in the list.
pub const ALPHABET_SIZE: usize = 256;

/// Ordered list of all 256 byte values.
///
/// Every byte value appears exactly once at all times; the only mutation is
/// [`SymbolList::move_to_front`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolList {
    symbols: [u8; ALPHABET_SIZE],
}

impl SymbolList {
    /// Create the identity list: position `i` holds byte `i`.
    pub fn new() -> Self {
        let mut symbols = [0u8; ALPHABET_SIZE];
        for (pos, symbol) in symbols.iter_mut().enumerate() {
            *symbol = pos as u8;
        }
        Self { symbols }
    }

    /// Current position of `byte`.
    #[inline]
    pub fn position_of(&self, byte: u8) -> u8 {
        // The last slot needs no comparison: the list is a permutation.
        let mut pos = 0;
        while pos < ALPHABET_SIZE - 1 && self.symbols[pos] != byte {
            pos += 1;
        }
        debug_assert_eq!(self.symbols[pos], byte);
        pos as u8
    }

    /// Byte currently at `pos`.
    #[inline]
    pub fn symbol_at(&self, pos: u8) -> u8 {
        self.symbols[pos as usize]
    }

    /// Move the byte at `pos` to the front, shifting the ones before it back.
    #[inline]
    pub fn move_to_front(&mut self, pos: u8) {
        let pos = pos as usize;
        if pos > 0 {
            let symbol = self.symbols[pos];
            self.symbols.copy_within(0..pos, 1);
            self.symbols[0] = symbol;
        }
    }

    /// Encode one byte: return its position and move it to the front.
    #[inline]
    pub fn encode_symbol(&mut self, byte: u8) -> u8 {
        let pos = self.position_of(byte);
        self.move_to_front(pos);
        pos
    }

    /// Decode one position: return its byte and move it to the front.
    #[inline]
    pub fn decode_symbol(&mut self, pos: u8) -> u8 {
        let byte = self.symbol_at(pos);
        self.move_to_front(pos);
        byte
    }

    /// The list, front first.
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }

    /// Whether every byte value appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        for &symbol in &self.symbols {
            if seen[symbol as usize] {
                return false;
            }
            seen[symbol as usize] = true;
        }
        true
    }
}

impl Default for SymbolList {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform the Move-to-Front transform.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::new();
    let result: Vec<u8> = data.iter().map(|&byte| list.encode_symbol(byte)).collect();
    trace!(len = data.len(), "mtf encode");
    result
}

/// Perform the inverse Move-to-Front transform.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::new();
    let result: Vec<u8> = data.iter().map(|&pos| list.decode_symbol(pos)).collect();
    trace!(len = data.len(), "mtf decode");
    result
}

/// MTF as a [`Codec`]. Never fails: every byte is a valid position.
#[derive(Debug, Clone, Copy, Default)]
pub struct MtfCodec;

impl Codec for MtfCodec {
    fn name(&self) -> &'static str {
        "mtf"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(decode(input))
    }
}
