//! Data structures for the binary trie crate.
//!
//! This module contains the bit-string key type, the order-preserving codec
//! that serialises it, and the PATRICIA trie that indexes it.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No panics on caller-supplied keys or bytes
//! - Bit-level storage, so wide identifiers stay compact

pub mod bit_codec;
pub mod bit_string;
pub mod patricia_trie;

// Re-export common data structures
pub use bit_codec::{BitCodec, BitCodecConfig, BitCodecError};
pub use bit_string::{BitString, BitStringError};
pub use patricia_trie::{PatriciaTrie, PatriciaTrieConfig, PatriciaTrieError, PatriciaTrieResult};
