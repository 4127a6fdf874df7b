//! Node implementation for the PATRICIA trie.
//!
//! This module provides the TrieNode structure used in the PATRICIA trie.
//! A node either is a leaf holding one stored key, or a split point with
//! exactly two children, created where two stored keys first diverge.

use std::fmt;

use crate::data_structures::bit_string::BitString;

/// A node in the PATRICIA trie.
///
/// The node's key is the full bit prefix shared by every key below it, not a
/// single edge label. Each node owns its children outright; there are no
/// parent links, so every traversal starts at the root.
#[derive(Debug)]
pub(crate) struct TrieNode<T> {
    /// Prefix represented by this node (the full key for a leaf)
    pub key: BitString,

    /// Subtrees whose next bit after `key` is 0 and 1 respectively
    pub children: [Option<Box<TrieNode<T>>>; 2],

    /// Payload, only ever present on leaves
    pub metadata: Option<T>,

    /// Number of leaves in this subtree
    pub size: usize,

    /// Edges between the root and this node
    pub depth: usize,
}

impl<T> TrieNode<T> {
    /// Creates the empty root node.
    pub fn root() -> Self {
        Self {
            key: BitString::new(),
            children: [None, None],
            metadata: None,
            size: 0,
            depth: 0,
        }
    }

    /// Creates a leaf holding a stored key.
    pub fn leaf(key: BitString, metadata: Option<T>, depth: usize) -> Self {
        Self {
            key,
            children: [None, None],
            metadata,
            size: 1,
            depth,
        }
    }

    /// Creates a split node with no children yet; the caller attaches both.
    pub fn split(key: BitString, depth: usize) -> Self {
        Self {
            key,
            children: [None, None],
            metadata: None,
            size: 0,
            depth,
        }
    }

    /// Whether the node has no children.
    ///
    /// The empty root also has no children but is never treated as a leaf
    /// by callers.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// The child in slot `branch`, if any.
    pub fn child(&self, branch: usize) -> Option<&TrieNode<T>> {
        self.children[branch].as_deref()
    }

    /// Adds one to the depth of every node in this subtree.
    ///
    /// Called when an edge above the subtree is split. Uses an explicit stack,
    /// so long chains of splits cannot exhaust the call stack.
    pub fn increment_depth(&mut self) {
        let mut stack: Vec<&mut TrieNode<T>> = vec![self];
        while let Some(node) = stack.pop() {
            node.depth += 1;
            stack.extend(node.children.iter_mut().flatten().map(|child| &mut **child));
        }
    }

    /// Detaches and frees every descendant, one node at a time.
    ///
    /// Dropping a deep chain of boxed children directly would recurse once
    /// per level.
    pub fn release_children(&mut self) {
        let mut stack: Vec<Box<TrieNode<T>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

/// Renders `(left / key \ right)` using the children's keys.
impl<T> fmt::Display for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Some(left) = self.child(0) {
            write!(f, "{} / ", left.key)?;
        }
        write!(f, "{}", self.key)?;
        if let Some(right) = self.child(1) {
            write!(f, " \\ {}", right.key)?;
        }
        f.write_str(")")
    }
}
