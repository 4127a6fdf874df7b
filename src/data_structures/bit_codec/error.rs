// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the bit codec.

use crate::data_structures::bit_string::BitStringError;

/// Errors that can occur while encoding or decoding bit-strings.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BitCodecError {
    /// The input contained a character other than `0` or `1`
    #[error("Invalid bit-string input: {0}")]
    InvalidInput(#[from] BitStringError),

    /// The bit-string's code does not fit in a `u128`
    #[error("Bit-string of {len} bits exceeds the {max_bits}-bit limit of a 128-bit code")]
    TooLong {
        /// Length of the rejected bit-string.
        len: usize,
        /// Longest bit-string whose code fits.
        max_bits: usize,
    },

    /// The varint ended while the continuation bit was still set
    #[error("Varint is truncated")]
    Truncated,

    /// The varint carries a redundant zero group
    #[error("Varint is not minimally encoded")]
    NonCanonical,

    /// The varint is longer than the configured limit
    #[error("Varint exceeds the maximum of {max_bytes} bytes")]
    VarintTooLong {
        /// Configured byte limit.
        max_bytes: usize,
    },

    /// Bytes remain after the varint's final byte
    #[error("Varint ended after {consumed} of {total} bytes")]
    TrailingBytes {
        /// Bytes belonging to the varint.
        consumed: usize,
        /// Total bytes supplied.
        total: usize,
    },
}

/// Result type for bit codec operations
pub type Result<T> = std::result::Result<T, BitCodecError>;
