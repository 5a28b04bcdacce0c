//! Transform configuration.

use blocksort_core::error::{BlocksortError, Result};

/// Limits applied to a forward transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    /// Largest block, in bytes, that a forward BWT accepts.
    ///
    /// Never above [`TransformConfig::MAX_BLOCK_LEN`]: the frame header stores
    /// the original row as a 32-bit integer.
    pub max_block_len: usize,
}

impl TransformConfig {
    /// Largest block length representable in a BWT frame.
    pub const MAX_BLOCK_LEN: usize = u32::MAX as usize;

    /// Accept any block the frame format can represent.
    pub const DEFAULT: Self = Self {
        max_block_len: Self::MAX_BLOCK_LEN,
    };

    /// Create a configuration with a custom block limit (clamped to
    /// [`TransformConfig::MAX_BLOCK_LEN`]).
    pub fn new(max_block_len: usize) -> Self {
        Self {
            max_block_len: max_block_len.min(Self::MAX_BLOCK_LEN),
        }
    }

    /// Check a block length against the limit.
    pub fn check_block_len(&self, len: usize) -> Result<()> {
        if len > self.max_block_len {
            return Err(BlocksortError::invalid_argument(format!(
                "block of {len} bytes exceeds limit of {} bytes",
                self.max_block_len
            )));
        }
        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config, TransformConfig::DEFAULT);
        assert_eq!(config.max_block_len, u32::MAX as usize);
        assert!(config.check_block_len(1 << 20).is_ok());
    }

    #[test]
    fn test_custom_limit() {
        let config = TransformConfig::new(16);
        assert!(config.check_block_len(16).is_ok());
        let err = config.check_block_len(17).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("17 bytes"));
    }

    #[test]
    fn test_limit_clamp() {
        let config = TransformConfig::new(usize::MAX);
        assert_eq!(config.max_block_len, TransformConfig::MAX_BLOCK_LEN);
    }
}
