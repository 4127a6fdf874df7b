// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the bit codec.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Configuration for [`BitCodec`](super::BitCodec).
///
/// The only knob is the length limit applied to varints, which keeps a
/// malformed or hostile byte stream from growing an unbounded bit-string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitCodecConfig {
    /// Maximum number of bytes a single varint may occupy.
    ///
    /// Each byte carries 7 payload bits, so 64 bytes covers bit-strings of
    /// up to 447 bits (enough for 256-bit node identifiers).
    pub max_varint_bytes: usize,
}

impl BitCodecConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_varint_bytes: 64
    pub fn new() -> Self {
        Self {
            max_varint_bytes: 64,
        }
    }

    /// Set the maximum number of bytes per varint.
    pub fn with_max_varint_bytes(mut self, max_varint_bytes: usize) -> Self {
        if max_varint_bytes == 0 {
            panic!("Maximum varint length must be greater than 0");
        }
        self.max_varint_bytes = max_varint_bytes;
        self
    }

    /// Length up to which every bit-string's varint fits within the byte limit.
    ///
    /// Some strings one bit longer still fit, depending on their value.
    pub fn max_bits(&self) -> usize {
        // A varint of k bytes holds codes below 2^(7k), i.e. bit-strings
        // of at most 7k - 1 bits.
        (self.max_varint_bytes * 7).saturating_sub(1)
    }
}

impl Default for BitCodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for BitCodecConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_varint_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_varint_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
