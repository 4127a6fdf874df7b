//! Configuration for the PATRICIA trie.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Configuration options for [`PatriciaTrie`](super::PatriciaTrie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatriciaTrieConfig {
    /// Fixed key width in bits. When set, keys of any other length are
    /// rejected, which rules out prefix conflicts entirely (the usual setup
    /// for node identifiers in a routing table).
    pub key_bits: Option<usize>,

    /// Maximum key length in bits
    pub max_key_bits: usize,
}

impl PatriciaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - key_bits: None (variable-length keys)
    /// - max_key_bits: 4096
    pub fn new() -> Self {
        Self {
            key_bits: None,
            max_key_bits: 4096,
        }
    }

    /// Require every key to be exactly `key_bits` long.
    pub fn with_key_bits(mut self, key_bits: usize) -> Self {
        if key_bits == 0 {
            panic!("Key width must be greater than 0");
        }
        self.key_bits = Some(key_bits);
        self.max_key_bits = self.max_key_bits.max(key_bits);
        self
    }

    /// Set the maximum key length in bits.
    pub fn with_max_key_bits(mut self, max_key_bits: usize) -> Self {
        if max_key_bits == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_bits = max_key_bits;
        self
    }
}

impl Default for PatriciaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PatriciaTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_bits == 0 {
            return Err(ConfigError::ValidationError(
                "max_key_bits must be greater than 0".to_string(),
            ));
        }

        match self.key_bits {
            Some(0) => Err(ConfigError::ValidationError(
                "key_bits must be greater than 0".to_string(),
            )),
            Some(bits) if bits > self.max_key_bits => Err(ConfigError::ValueOutOfRange {
                key: "key_bits".to_string(),
                message: format!("{bits} exceeds max_key_bits {}", self.max_key_bits),
            }),
            _ => Ok(()),
        }
    }
}
