//! PATRICIA Trie Implementation
//!
//! This module provides a path-compressed binary trie keyed by bit-strings.
//! Every split point records the full prefix its subtree shares, so `k`
//! stored keys occupy `k` leaves and fewer than `k` split points.
//!
//! Besides exact lookups the trie answers two range queries:
//! * `n_closest` returns the keys sharing the longest prefix with a target,
//!   which is the XOR-metric ordering used by prefix-routing DHTs
//! * `match_prefix` returns every key under a given prefix
//!
//! Keys are stored only at leaves. A key that would have to live at an
//! internal node, because it is a prefix of another key or extends a stored
//! key, is rejected; configure a fixed `key_bits` width to rule that out.

mod config;
mod error;
mod node;
mod query;
mod trie;

#[cfg(test)]
mod tests;

pub use config::PatriciaTrieConfig;
pub use error::{PatriciaTrieError, PatriciaTrieResult};
pub use query::Predicate;
pub use trie::PatriciaTrie;
