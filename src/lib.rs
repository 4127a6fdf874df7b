//! Binary Trie Library
//!
//! A PATRICIA (path-compressed binary) trie keyed by bit-strings, together
//! with a bijective codec that maps bit-strings to integers and varints.
//! The pair is aimed at routing tables in prefix-routing DHTs: the trie
//! answers "which stored ids share the longest prefix with this one", and
//! the codec gives those ids a compact wire form.
//!
//! # Architecture
//!
//! - [`data_structures::BitString`] is the key type shared by both parts
//! - [`data_structures::bit_codec`] encodes keys as integers and varints
//! - [`data_structures::PatriciaTrie`] stores keys with optional metadata
//! - [`config`] and [`logging`] provide file/env configuration and `tracing` setup
//!
//! # Example
//!
//! ```
//! use binary_trie::data_structures::{BitCodec, BitString, PatriciaTrie};
//!
//! let mut table = PatriciaTrie::new();
//! for peer in ["0010", "0110", "1011"] {
//!     table.add(peer.parse().unwrap(), Some(peer.to_string())).unwrap();
//! }
//!
//! let target: BitString = "0111".parse().unwrap();
//! let nearest = table.n_closest(&target, 1, None);
//! assert_eq!(nearest, vec!["0110"]);
//!
//! let codec = BitCodec::new();
//! let wire = codec.to_varint(&target).unwrap();
//! assert_eq!(codec.from_varint(&wire).unwrap(), target);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the binary trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the default configuration into the global slot and installs the
/// tracing subscriber it describes.
pub fn init() -> error::BinaryTrieResult<()> {
    config::init_default_config()?;

    let log = config::get_global_config()
        .map(|global| global.get().log.clone())
        .unwrap_or_default();
    logging::init_logging(&log)?;

    Ok(())
}
