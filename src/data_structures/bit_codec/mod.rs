// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Order-preserving bit-string codec.
//!
//! Maps every finite bit-string, including the empty one, to a unique
//! non-negative integer and back. Codes enumerate bit-strings by increasing
//! length and then by increasing value, so the mapping is dense:
//!
//! | length | bit-strings          | codes       |
//! |--------|----------------------|-------------|
//! | 0      | `""`                 | `0`         |
//! | 1      | `0`, `1`             | `1..=2`     |
//! | 2      | `00` .. `11`         | `3..=6`     |
//! | L      | all `2^L` strings    | `2^L - 1 ..` |
//!
//! On top of the integer code sits a varint (unsigned LEB128) serialisation,
//! giving every bit-string a minimal, self-delimiting byte form suitable for
//! sending node identifiers over the wire. Unlike a plain byte dump, the varint
//! keeps the exact bit length, so `"0010"` and `"010"` stay distinct.
//!
//! # Example
//!
//! ```
//! use binary_trie::data_structures::bit_codec::{
//!     bits_to_varint, decode_bitstring, encode_bitstring, varint_to_bits,
//! };
//!
//! assert_eq!(encode_bitstring("0010").unwrap(), 17);
//! assert_eq!(decode_bitstring(17).to_string(), "0010");
//!
//! let id = "0010".parse().unwrap();
//! let wire = bits_to_varint(&id);
//! assert_eq!(wire, vec![17]);
//! assert_eq!(varint_to_bits(&wire).unwrap(), id);
//! ```

mod codec;
mod config;
mod error;
mod varint;

pub use codec::{
    bits_to_varint, decode_bitstring, encode_bitstring, encode_bits, varint_to_bits, BitCodec,
    MAX_ENCODABLE_BITS,
};
pub use config::BitCodecConfig;
pub use error::{BitCodecError, Result};
