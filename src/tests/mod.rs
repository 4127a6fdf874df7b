//! Test modules for the binary trie crate.
//!
//! Crate-level tests for configuration and error plumbing, plus shared
//! fixtures. Per-structure tests live next to each data structure.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{bit_string_strategy, fixed_width_keys_strategy, TestFixture};
