//! Closest-key and prefix queries.
//!
//! Both queries walk the trie with an explicit stack and apply the optional
//! predicate only to leaves; a subtree is never pruned because of it.

use crate::data_structures::bit_string::BitString;
use crate::data_structures::patricia_trie::node::TrieNode;
use crate::data_structures::patricia_trie::trie::PatriciaTrie;

/// Filter over leaf metadata accepted by the query methods.
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

impl<T> PatriciaTrie<T> {
    /// Metadata of up to `n` leaves, ordered by decreasing shared-prefix
    /// length with `key`.
    ///
    /// At each split point the subtree on `key`'s side is drained before the
    /// other one. Once `key` runs out of bits the 0 side is taken first. When
    /// `n` cuts a group of equally close leaves short, the survivors are the
    /// ones reached first in that order, which is stable but not otherwise
    /// canonical.
    ///
    /// Leaves without metadata, and leaves rejected by `predicate`, are
    /// skipped and do not count towards `n`.
    pub fn n_closest(
        &self,
        key: &BitString,
        n: usize,
        predicate: Option<Predicate<'_, T>>,
    ) -> Vec<&T> {
        self.closest_leaves(key, n, |leaf| accepts_value(leaf, predicate))
            .into_iter()
            .filter_map(|leaf| leaf.metadata.as_ref())
            .collect()
    }

    /// Keys of up to `n` leaves in the order of [`n_closest`](Self::n_closest).
    ///
    /// Leaves without metadata are included; `predicate` only sees leaves
    /// that carry metadata.
    pub fn n_closest_keys(
        &self,
        key: &BitString,
        n: usize,
        predicate: Option<Predicate<'_, T>>,
    ) -> Vec<&BitString> {
        self.closest_leaves(key, n, |leaf| accepts_key(leaf, predicate))
            .into_iter()
            .map(|leaf| &leaf.key)
            .collect()
    }

    /// Metadata of every leaf whose key starts with `prefix`, left to right.
    pub fn match_prefix(&self, prefix: &BitString, predicate: Option<Predicate<'_, T>>) -> Vec<&T> {
        self.prefix_leaves(prefix, |leaf| accepts_value(leaf, predicate))
            .into_iter()
            .filter_map(|leaf| leaf.metadata.as_ref())
            .collect()
    }

    /// Keys of every leaf whose key starts with `prefix`, left to right.
    pub fn match_prefix_keys(
        &self,
        prefix: &BitString,
        predicate: Option<Predicate<'_, T>>,
    ) -> Vec<&BitString> {
        self.prefix_leaves(prefix, |leaf| accepts_key(leaf, predicate))
            .into_iter()
            .map(|leaf| &leaf.key)
            .collect()
    }

    /// Every stored key, in ascending bit order.
    pub fn keys(&self) -> Vec<&BitString> {
        self.match_prefix_keys(&BitString::new(), None)
    }

    fn closest_leaves<F>(&self, key: &BitString, n: usize, accept: F) -> Vec<&TrieNode<T>>
    where
        F: Fn(&TrieNode<T>) -> bool,
    {
        let mut found = Vec::with_capacity(n.min(self.len()));
        if n == 0 || self.is_empty() {
            return found;
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                if accept(node) {
                    found.push(node);
                    if found.len() == n {
                        break;
                    }
                }
                continue;
            }

            // Pushed far side first so the near side is popped first.
            let near = key.branch_at(node.key.len()).unwrap_or(0);
            stack.extend(node.child(1 - near));
            stack.extend(node.child(near));
        }

        tracing::trace!(key = %key, n, found = found.len(), "Closest-key query");
        found
    }

    fn prefix_leaves<F>(&self, prefix: &BitString, accept: F) -> Vec<&TrieNode<T>>
    where
        F: Fn(&TrieNode<T>) -> bool,
    {
        let Some(subtree) = self.prefix_subtree(prefix) else {
            return Vec::new();
        };

        let mut found = Vec::with_capacity(subtree.size);
        let mut stack = vec![subtree];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                if accept(node) {
                    found.push(node);
                }
                continue;
            }
            stack.extend(node.child(1));
            stack.extend(node.child(0));
        }

        tracing::trace!(prefix = %prefix, found = found.len(), "Prefix query");
        found
    }

    /// Topmost node whose key starts with `prefix`.
    fn prefix_subtree(&self, prefix: &BitString) -> Option<&TrieNode<T>> {
        if self.is_empty() {
            return None;
        }

        let mut node = &self.root;
        loop {
            if node.key.len() >= prefix.len() {
                return node.key.starts_with(prefix).then_some(node);
            }
            node = node.child(prefix.branch_at(node.key.len())?)?;
        }
    }
}

fn accepts_value<T>(leaf: &TrieNode<T>, predicate: Option<Predicate<'_, T>>) -> bool {
    match (&leaf.metadata, predicate) {
        (Some(metadata), Some(predicate)) => predicate(metadata),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn accepts_key<T>(leaf: &TrieNode<T>, predicate: Option<Predicate<'_, T>>) -> bool {
    match (&leaf.metadata, predicate) {
        (Some(metadata), Some(predicate)) => predicate(metadata),
        _ => true,
    }
}
