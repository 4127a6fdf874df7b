//! Insertion and exact-match lookup for the PATRICIA trie.

use std::fmt;

use crate::data_structures::bit_string::BitString;
use crate::data_structures::patricia_trie::config::PatriciaTrieConfig;
use crate::data_structures::patricia_trie::error::{PatriciaTrieError, PatriciaTrieResult};
use crate::data_structures::patricia_trie::node::TrieNode;

/// Path-compressed binary trie over [`BitString`] keys.
///
/// Key features:
/// * Each node stores the full prefix shared by its subtree, so lookups cost
///   one step per branching point rather than one per bit
/// * Optional metadata of type `T` on every stored key
/// * Closest-key queries ordered by shared-prefix length, the ordering used
///   by Kademlia-style routing tables (see [`n_closest`](Self::n_closest))
/// * Prefix-range queries (see [`match_prefix`](Self::match_prefix))
///
/// The trie is insert-only: keys cannot be removed, and memory is released
/// only when the whole trie is dropped or [`clear`](Self::clear)ed. It does no
/// locking of its own; share it across threads behind a lock, holding the
/// write side for `add`.
///
/// # Examples
///
/// ```
/// use binary_trie::data_structures::{BitString, PatriciaTrie};
///
/// let mut trie = PatriciaTrie::new();
/// for id in [2u128, 3, 4, 6, 7, 9, 11, 13] {
///     assert!(trie.add(BitString::from_int(id, 4), Some(id)).unwrap());
/// }
///
/// let target: BitString = "0010".parse().unwrap();
/// assert_eq!(trie.len(), 8);
/// assert_eq!(trie.find(&target), Some(&2));
/// assert_eq!(trie.n_closest(&target, 3, None), vec![&2, &3, &6]);
/// ```
pub struct PatriciaTrie<T> {
    /// Root node, keyed by the empty bit-string
    pub(super) root: TrieNode<T>,

    /// Configuration options
    config: PatriciaTrieConfig,
}

impl<T> PatriciaTrie<T> {
    /// Creates a new empty `PatriciaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PatriciaTrieConfig::default())
    }

    /// Creates a new empty `PatriciaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: PatriciaTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// The trie's configuration.
    pub fn config(&self) -> &PatriciaTrieConfig {
        &self.config
    }

    /// Inserts a key with optional metadata.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `metadata` - Payload to store alongside the key.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was inserted.
    /// * `Ok(false)` - The key is already present (as a stored key or as a
    ///   split point); the trie is unchanged.
    /// * `Err(PatriciaTrieError)` - The key cannot be stored without a prefix
    ///   conflict, or breaks the configured length rules; the trie is unchanged.
    pub fn add(&mut self, key: BitString, metadata: Option<T>) -> PatriciaTrieResult<bool> {
        let outcome = self.check_key(&key).and_then(|first| {
            let path = key.clone();
            let inserted = self.attach(first, key, metadata)?;
            if inserted {
                self.count_insert(&path);
            }
            Ok(inserted)
        });

        if let Err(err) = &outcome {
            tracing::debug!(error = %err, "Rejected trie key");
        }
        outcome
    }

    /// Whether a node with exactly this key exists.
    ///
    /// Split points count as well as stored keys, so this is `true` for every
    /// key that [`add`](Self::add) would report as already present.
    pub fn contains(&self, key: &BitString) -> bool {
        self.find_node(key).is_some()
    }

    /// Metadata stored with `key`.
    ///
    /// Returns `None` if the key is absent, is a split point, or was stored
    /// without metadata.
    pub fn find(&self, key: &BitString) -> Option<&T> {
        self.find_node(key).and_then(|node| node.metadata.as_ref())
    }

    /// Number of edges between the root and the node for `key`.
    ///
    /// Depth counts branching points, not bits. The root is at depth 0.
    pub fn depth(&self, key: &BitString) -> Option<usize> {
        self.find_node(key).map(|node| node.depth)
    }

    /// Number of stored keys below the node for `key`.
    pub fn subtrie_size(&self, key: &BitString) -> Option<usize> {
        self.find_node(key).map(|node| node.size)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.root.size
    }

    /// Whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.size == 0
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.root.release_children();
        self.root = TrieNode::root();
    }

    /// Exact-match descent used by every lookup.
    pub(super) fn find_node(&self, key: &BitString) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        loop {
            if node.key.len() >= key.len() {
                return (node.key == *key).then_some(node);
            }
            node = node.child(key.branch_at(node.key.len())?)?;
        }
    }

    /// Validates `key` and returns the root slot its first bit selects.
    fn check_key(&self, key: &BitString) -> PatriciaTrieResult<usize> {
        let Some(first) = key.branch_at(0) else {
            return Err(PatriciaTrieError::EmptyKey);
        };

        if let Some(expected) = self.config.key_bits {
            if key.len() != expected {
                return Err(PatriciaTrieError::KeyWidthMismatch {
                    key: key.to_string(),
                    expected,
                    actual: key.len(),
                });
            }
        }

        if key.len() > self.config.max_key_bits {
            return Err(PatriciaTrieError::KeyTooLong {
                len: key.len(),
                max_bits: self.config.max_key_bits,
            });
        }

        Ok(first)
    }

    /// Places `key` as a new leaf, starting from root slot `first`.
    ///
    /// The descent itself changes nothing, so a duplicate or a prefix
    /// conflict found on the way leaves the trie untouched. Subtree sizes
    /// are left to [`count_insert`](Self::count_insert).
    fn attach(&mut self, first: usize, key: BitString, metadata: Option<T>) -> PatriciaTrieResult<bool> {
        let mut depth = 1;
        let mut link = &mut self.root.children[first];

        while let Some(branch) = link {
            let shared = key.common_prefix_len(&branch.key);
            match (shared == branch.key.len(), key.branch_at(shared)) {
                (true, None) => return Ok(false),
                (false, None) => {
                    return Err(PatriciaTrieError::PrefixOfStoredKey {
                        key: key.to_string(),
                        stored: branch.key.to_string(),
                    })
                }
                (true, Some(_)) if branch.is_leaf() => {
                    return Err(PatriciaTrieError::ExtendsStoredKey {
                        key: key.to_string(),
                        stored: branch.key.to_string(),
                    })
                }
                (true, Some(next)) => {
                    depth = branch.depth + 1;
                    link = &mut branch.children[next];
                }
                (false, Some(new_slot)) => {
                    Self::split_edge(branch, shared, new_slot, key, metadata);
                    return Ok(true);
                }
            }
        }

        tracing::trace!(key = %key, depth, "Attaching leaf");
        *link = Some(Box::new(TrieNode::leaf(key, metadata, depth)));
        Ok(true)
    }

    /// Adds one to the size of every proper ancestor of the leaf for `key`.
    fn count_insert(&mut self, key: &BitString) {
        let mut node = &mut self.root;
        // The walk ends at the leaf, whose key leaves no bit to branch on.
        while let Some(slot) = key.branch_at(node.key.len()) {
            node.size += 1;
            let Some(child) = node.children[slot].as_deref_mut() else {
                break;
            };
            node = child;
        }
    }

    /// Replaces `branch` with a split node at `shared` bits holding a new leaf
    /// for `key` in `new_slot` and the old subtree in the other slot.
    fn split_edge(
        branch: &mut TrieNode<T>,
        shared: usize,
        new_slot: usize,
        key: BitString,
        metadata: Option<T>,
    ) {
        let depth = branch.depth;
        let split = TrieNode::split(branch.key.prefix(shared), depth);
        let mut existing = std::mem::replace(branch, split);
        existing.increment_depth();

        tracing::debug!(
            split = %branch.key,
            existing = %existing.key,
            key = %key,
            depth,
            "Splitting edge"
        );

        branch.size = existing.size;
        branch.children[new_slot] = Some(Box::new(TrieNode::leaf(key, metadata, depth + 1)));
        branch.children[1 - new_slot] = Some(Box::new(existing));
    }
}

impl<T> Default for PatriciaTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PatriciaTrie<T> {
    fn drop(&mut self) {
        self.root.release_children();
    }
}

impl<T> fmt::Debug for PatriciaTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatriciaTrie")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
