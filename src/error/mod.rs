//! Error module for the binary trie crate.
//!
//! Each data structure defines its own error enum next to its code. This
//! module gathers them into one crate-level type for callers that drive
//! several components at once (configuration, logging setup, codec, trie).

use thiserror::Error;

use crate::data_structures::bit_codec::BitCodecError;
use crate::data_structures::bit_string::BitStringError;
use crate::data_structures::patricia_trie::PatriciaTrieError;

pub mod config;

/// Result type alias used throughout the crate.
pub type BinaryTrieResult<T> = Result<T, BinaryTrieError>;

/// Core error enum for the binary trie crate.
#[derive(Error, Debug)]
pub enum BinaryTrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Text that is not a bit-string.
    #[error("Bit-string error: {0}")]
    BitString(#[from] BitStringError),

    /// Errors from encoding or decoding bit-strings.
    #[error("Codec error: {0}")]
    Codec(#[from] BitCodecError),

    /// Keys the trie refused to store.
    #[error("Trie error: {0}")]
    Trie(#[from] PatriciaTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
