// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bit-string key type shared by the codec and the trie.
//!
//! A [`BitString`] is an owned, MSB-first sequence of binary digits. It is the
//! key type of [`PatriciaTrie`](crate::data_structures::PatriciaTrie) and the
//! input of the [bit codec](crate::data_structures::bit_codec). Bits are packed
//! eight to a byte, so fixed-width node identifiers (160 or 256 bits) stay small.
//!
//! # Example
//!
//! ```
//! use binary_trie::data_structures::BitString;
//!
//! let key: BitString = "0110".parse().unwrap();
//! assert_eq!(key.len(), 4);
//! assert_eq!(key.to_int(), Some(6));
//! assert_eq!(BitString::from_int(6, 4), key);
//! assert_eq!(key.to_string(), "0110");
//! ```

use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

/// Errors produced when building a [`BitString`] from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BitStringError {
    /// A character other than `0` or `1` was found.
    #[error("Invalid character {character:?} at position {position}, expected '0' or '1'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index in the input.
        position: usize,
    },
}

/// An ordered sequence of binary digits, most significant bit first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: BitVec<u8, Msb0>,
}

impl BitString {
    /// Creates an empty bit-string.
    pub fn new() -> Self {
        Self { bits: BitVec::new() }
    }

    /// Creates an empty bit-string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Builds a bit-string from whole bytes, eight bits per byte, MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(bytes),
        }
    }

    /// Builds a bit-string from the last `bits` bits of `bytes`.
    ///
    /// If `bits` exceeds the number of available bits, every bit is kept.
    pub fn from_bytes_truncated(bytes: &[u8], bits: usize) -> Self {
        let all = bytes.view_bits::<Msb0>();
        let start = all.len().saturating_sub(bits);
        Self {
            bits: all[start..].to_bitvec(),
        }
    }

    /// Renders the low `width` bits of `value`, left-padded with zeros.
    ///
    /// Higher bits of `value` that do not fit in `width` are discarded.
    pub fn from_int(value: u128, width: usize) -> Self {
        let raw = value.to_be_bytes();
        let all = raw.view_bits::<Msb0>();
        if width <= all.len() {
            return Self {
                bits: all[all.len() - width..].to_bitvec(),
            };
        }

        let mut bits = BitVec::<u8, Msb0>::repeat(false, width - all.len());
        bits.extend_from_bitslice(all);
        Self { bits }
    }

    /// Returns the unsigned value of the bits, or `None` above 128 bits.
    ///
    /// The empty bit-string has value `0`.
    pub fn to_int(&self) -> Option<u128> {
        if self.len() > u128::BITS as usize {
            return None;
        }
        Some(
            self.iter()
                .fold(0u128, |acc, bit| (acc << 1) | u128::from(bit)),
        )
    }

    /// Serialises the bits big-endian, left-padded with zeros to whole bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let pad = (8 - self.len() % 8) % 8;
        let mut padded = BitVec::<u8, Msb0>::repeat(false, pad);
        padded.extend_from_bitslice(&self.bits);
        padded.into_vec()
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the bit-string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Child slot selected by the bit at `index` (`0` or `1`).
    pub(crate) fn branch_at(&self, index: usize) -> Option<usize> {
        self.get(index).map(usize::from)
    }

    /// Appends one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Iterates over the bits, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// The first `len` bits (the whole string if it is shorter).
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            bits: self.bits[..len.min(self.len())].to_bitvec(),
        }
    }

    /// Length of the longest common prefix of `self` and `other`.
    pub fn common_prefix_len(&self, other: &BitString) -> usize {
        self.iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Whether `prefix` is a prefix of `self` (every string starts with the empty string).
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        prefix.len() <= self.len() && self.common_prefix_len(prefix) == prefix.len()
    }

    pub(crate) fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub(crate) fn from_bitvec(bits: BitVec<u8, Msb0>) -> Self {
        Self { bits }
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => {
                    return Err(BitStringError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        Ok(Self { bits })
    }
}

impl TryFrom<&str> for BitString {
    type Error = BitStringError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{self}\")")
    }
}
