//! Error types for the PATRICIA trie.
//!
//! Every variant describes a key that cannot be stored without breaking the
//! trie's structure. Duplicate keys are not errors: `add` reports them by
//! returning `Ok(false)`.

/// Errors that can occur in PATRICIA trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PatriciaTrieError {
    /// The empty key belongs to the root and cannot be stored.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The key length differs from the configured fixed width.
    #[error("Key '{key}' has {actual} bits, expected exactly {expected}")]
    KeyWidthMismatch {
        /// The rejected key.
        key: String,
        /// The configured width.
        expected: usize,
        /// The key's length.
        actual: usize,
    },

    /// The key exceeds the configured maximum length.
    #[error("Key of {len} bits exceeds maximum key length of {max_bits}")]
    KeyTooLong {
        /// The key's length.
        len: usize,
        /// The configured maximum.
        max_bits: usize,
    },

    /// The key is a strict prefix of a key or split point already in the trie.
    #[error("Key '{key}' is a strict prefix of existing key '{stored}'")]
    PrefixOfStoredKey {
        /// The rejected key.
        key: String,
        /// The existing node key it is a prefix of.
        stored: String,
    },

    /// The key strictly extends a key already stored as a leaf.
    #[error("Key '{key}' extends stored key '{stored}'")]
    ExtendsStoredKey {
        /// The rejected key.
        key: String,
        /// The stored leaf key it extends.
        stored: String,
    },
}

/// Result type for PATRICIA trie operations
pub type PatriciaTrieResult<T> = Result<T, PatriciaTrieError>;
