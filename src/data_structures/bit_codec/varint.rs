// Copyright (c) 2025 Binary Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unsigned LEB128 over arbitrary-precision naturals.
//!
//! Naturals are carried as big-endian digit vectors rather than machine
//! integers so that codes of long bit-strings never overflow. Each output
//! byte holds 7 payload bits, least significant group first, with `0x80`
//! set on every byte except the last.

use bitvec::prelude::*;

use super::error::{BitCodecError, Result};

/// Payload bits per varint byte.
pub(crate) const PAYLOAD_BITS: usize = 7;

const CONTINUATION: u8 = 0x80;

/// Encodes a big-endian natural. Leading zero digits are allowed and ignored.
pub(crate) fn encode_digits(digits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let digits = &digits[digits.leading_zeros()..];
    if digits.is_empty() {
        return vec![0];
    }

    let mut out = Vec::with_capacity((digits.len() + PAYLOAD_BITS - 1) / PAYLOAD_BITS);
    for group in digits.rchunks(PAYLOAD_BITS) {
        let payload = group
            .iter()
            .by_vals()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit));
        out.push(payload | CONTINUATION);
    }
    if let Some(last) = out.last_mut() {
        *last &= !CONTINUATION;
    }
    out
}

/// Decodes one varint from the front of `bytes`.
///
/// Returns the natural as big-endian digits together with the number of
/// bytes consumed.
pub(crate) fn decode_digits(bytes: &[u8], max_bytes: usize) -> Result<(BitVec<u8, Msb0>, usize)> {
    for (index, &byte) in bytes.iter().enumerate() {
        if index >= max_bytes {
            return Err(BitCodecError::VarintTooLong { max_bytes });
        }
        if byte & CONTINUATION != 0 {
            continue;
        }
        if byte == 0 && index > 0 {
            return Err(BitCodecError::NonCanonical);
        }

        let consumed = index + 1;
        let mut digits = BitVec::with_capacity(consumed * PAYLOAD_BITS);
        for group in bytes[..consumed].iter().rev() {
            digits.extend_from_bitslice(&group.view_bits::<Msb0>()[8 - PAYLOAD_BITS..]);
        }
        return Ok((digits, consumed));
    }
    Err(BitCodecError::Truncated)
}
