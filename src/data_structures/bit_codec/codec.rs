// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the bit codec.
//!
//! The code of an `L`-bit string `s` is `2^L - 1 + value(s)`, which is the
//! same number as `value("1" ++ s) - 1`. Working on the digit vector
//! `"1" ++ s` lets the varint path handle bit-strings of any length without
//! a big-integer type.

use bitvec::prelude::*;

use crate::data_structures::bit_codec::config::BitCodecConfig;
use crate::data_structures::bit_codec::error::{BitCodecError, Result};
use crate::data_structures::bit_codec::varint::{decode_digits, encode_digits};
use crate::data_structures::bit_string::BitString;

/// Longest bit-string whose code fits in a `u128`.
pub const MAX_ENCODABLE_BITS: usize = u128::BITS as usize - 1;

/// Encodes a textual bit-string into its integer code.
///
/// # Errors
///
/// * `InvalidInput` - if `bitstring` contains characters other than `0`/`1`.
/// * `TooLong` - if the string is longer than [`MAX_ENCODABLE_BITS`].
pub fn encode_bitstring(bitstring: &str) -> Result<u128> {
    let bits: BitString = bitstring.parse()?;
    encode_bits(&bits)
}

/// Encodes a bit-string into its integer code.
///
/// Codes enumerate bit-strings by length, then by value: the empty string is
/// `0`, `"0"` and `"1"` are `1` and `2`, the four 2-bit strings are `3..=6`.
pub fn encode_bits(bits: &BitString) -> Result<u128> {
    let len = bits.len();
    if len > MAX_ENCODABLE_BITS {
        return Err(BitCodecError::TooLong {
            len,
            max_bits: MAX_ENCODABLE_BITS,
        });
    }

    // The leading 1 puts the value at 2^L + value(s); it cannot overflow
    // because L is at most 127.
    let shifted = bits
        .iter()
        .fold(1u128, |acc, bit| (acc << 1) | u128::from(bit));
    Ok(shifted - 1)
}

/// Decodes an integer code back into its bit-string. Total over `u128`.
pub fn decode_bitstring(code: u128) -> BitString {
    let mut digits = BitVec::<u8, Msb0>::from_slice(&code.to_be_bytes());
    increment(&mut digits);
    strip_marker(digits)
}

/// Serialises a bit-string as the varint of its code.
///
/// No length limit applies; see [`BitCodec::to_varint`] for a bounded variant.
pub fn bits_to_varint(bits: &BitString) -> Vec<u8> {
    encode_digits(&code_digits(bits))
}

/// Parses a bit-string from a varint occupying all of `bytes`.
///
/// No length limit applies; see [`BitCodec::from_varint`] for a bounded variant.
pub fn varint_to_bits(bytes: &[u8]) -> Result<BitString> {
    let (bits, consumed) = read_bounded(bytes, usize::MAX)?;
    ensure_consumed(consumed, bytes.len())?;
    Ok(bits)
}

/// Bit codec with a configurable varint length limit.
///
/// # Examples
///
/// ```
/// use binary_trie::data_structures::bit_codec::{BitCodec, BitCodecConfig};
/// use binary_trie::data_structures::BitString;
///
/// let codec = BitCodec::with_config(BitCodecConfig::new().with_max_varint_bytes(2));
/// let id: BitString = "10110".parse().unwrap();
///
/// let wire = codec.to_varint(&id).unwrap();
/// assert_eq!(codec.from_varint(&wire).unwrap(), id);
///
/// // 14 payload bits cannot carry a 16-bit string
/// assert!(codec.to_varint(&BitString::from_int(0, 16)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitCodec {
    config: BitCodecConfig,
}

impl BitCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::with_config(BitCodecConfig::default())
    }

    /// Create a codec with the given configuration.
    pub fn with_config(config: BitCodecConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    pub fn config(&self) -> &BitCodecConfig {
        &self.config
    }

    /// Integer code of `bits`. See [`encode_bits`].
    pub fn encode(&self, bits: &BitString) -> Result<u128> {
        encode_bits(bits)
    }

    /// Bit-string for an integer code. See [`decode_bitstring`].
    pub fn decode(&self, code: u128) -> BitString {
        decode_bitstring(code)
    }

    /// Varint of `bits`, refused if it would exceed the configured byte limit.
    pub fn to_varint(&self, bits: &BitString) -> Result<Vec<u8>> {
        let encoded = bits_to_varint(bits);
        if encoded.len() > self.config.max_varint_bytes {
            tracing::debug!(
                bits = bits.len(),
                bytes = encoded.len(),
                max_bytes = self.config.max_varint_bytes,
                "Refusing to emit oversized varint"
            );
            return Err(BitCodecError::VarintTooLong {
                max_bytes: self.config.max_varint_bytes,
            });
        }
        Ok(encoded)
    }

    /// Parses a varint that must occupy all of `bytes`.
    pub fn from_varint(&self, bytes: &[u8]) -> Result<BitString> {
        let (bits, consumed) = self.read_varint(bytes)?;
        ensure_consumed(consumed, bytes.len())?;
        Ok(bits)
    }

    /// Parses the varint at the front of `bytes`.
    ///
    /// Returns the bit-string and the number of bytes it occupied, so that
    /// several varints can be read back to back from one buffer.
    pub fn read_varint(&self, bytes: &[u8]) -> Result<(BitString, usize)> {
        read_bounded(bytes, self.config.max_varint_bytes).map_err(|err| {
            tracing::debug!(error = %err, len = bytes.len(), "Rejected varint");
            err
        })
    }
}

fn read_bounded(bytes: &[u8], max_bytes: usize) -> Result<(BitString, usize)> {
    let (mut digits, consumed) = decode_digits(bytes, max_bytes)?;
    increment(&mut digits);
    Ok((strip_marker(digits), consumed))
}

fn ensure_consumed(consumed: usize, total: usize) -> Result<()> {
    if consumed != total {
        return Err(BitCodecError::TrailingBytes { consumed, total });
    }
    Ok(())
}

/// Digits of `value("1" ++ bits) - 1`, i.e. the code of `bits`.
fn code_digits(bits: &BitString) -> BitVec<u8, Msb0> {
    let mut digits = BitVec::with_capacity(bits.len() + 1);
    digits.push(true);
    digits.extend_from_bitslice(bits.as_bitslice());
    decrement(&mut digits);
    digits
}

/// Drops leading zeros and the marker 1 that follows them.
///
/// `digits` holds `code + 1`, which is never zero.
fn strip_marker(digits: BitVec<u8, Msb0>) -> BitString {
    let marker = digits.leading_zeros();
    BitString::from_bitvec(digits[(marker + 1).min(digits.len())..].to_bitvec())
}

/// Adds one to a big-endian natural, growing it by a digit on carry-out.
fn increment(digits: &mut BitVec<u8, Msb0>) {
    match digits.last_zero() {
        Some(index) => {
            digits.set(index, true);
            digits[index + 1..].fill(false);
        }
        None => {
            digits.fill(false);
            digits.insert(0, true);
        }
    }
}

/// Subtracts one from a non-zero big-endian natural.
fn decrement(digits: &mut BitVec<u8, Msb0>) {
    if let Some(index) = digits.last_one() {
        digits.set(index, false);
        digits[index + 1..].fill(true);
    }
}
