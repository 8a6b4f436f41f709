//! Bit unpacking from 8 symbols to 5-byte groups.
//!
//! Decoding rejects inputs whose unused tail bits are non-zero. Some base32
//! decoders drop those bits as noise; here they fail the decode with the same
//! error as an unknown symbol, because no output of the encoder can carry
//! them. Callers packing extra data into those bits must clear them first.

use crate::len::decoded_len;
use crate::tables::{DECODE_TABLE, INVALID};
use crate::Error;

/// Bytes produced by a trailing group of `n % 8` symbols. Only 2, 4, 5 and 7
/// occur; the length check rejects the others before decoding starts.
const TAIL_BYTES: [usize; 8] = [0, 0, 1, 0, 2, 3, 0, 4];

/// Low bits of the last symbol in a trailing group of `n % 8` symbols that
/// do not land in any output byte.
const TAIL_MASK: [u8; 8] = [0, 0, 0x03, 0, 0x0F, 0x01, 0, 0x07];

/// Joins 8 symbol values into 5 bytes.
#[inline(always)]
fn decode_group([c0, c1, c2, c3, c4, c5, c6, c7]: [u8; 8]) -> [u8; 5] {
    [
        (c0 << 3) | (c1 >> 2),
        ((c1 & 0x03) << 6) | (c2 << 1) | (c3 >> 4),
        ((c3 & 0x0F) << 4) | (c4 >> 1),
        ((c4 & 0x01) << 7) | (c5 << 2) | (c6 >> 3),
        ((c6 & 0x07) << 5) | c7,
    ]
}

#[inline(always)]
fn lookup(symbol: u8) -> u8 {
    DECODE_TABLE[usize::from(symbol)]
}

/// Decodes `src` into the front of `dst` without checking sizes.
///
/// `src.len()` must be a valid encoded length and `dst` must hold at least
/// `decoded_len(src.len())` bytes.
pub(crate) fn decode_block(dst: &mut [u8], src: &[u8]) -> Result<(), Error> {
    let groups = src.chunks_exact(8);
    let tail = groups.remainder();
    let full = src.len() / 8;

    for (out, group) in dst.chunks_exact_mut(5).zip(groups) {
        let c = [
            lookup(group[0]),
            lookup(group[1]),
            lookup(group[2]),
            lookup(group[3]),
            lookup(group[4]),
            lookup(group[5]),
            lookup(group[6]),
            lookup(group[7]),
        ];

        if c.iter().fold(0, |acc, &v| acc | v) == INVALID {
            return Err(Error::InvalidCharacter);
        }

        out.copy_from_slice(&decode_group(c));
    }

    // Tail.
    if !tail.is_empty() {
        let mut c = [0u8; 8];
        for (v, &symbol) in c.iter_mut().zip(tail) {
            *v = lookup(symbol);
        }

        let rem = tail.len();
        if c.iter().fold(0, |acc, &v| acc | v) == INVALID || c[rem - 1] & TAIL_MASK[rem] != 0 {
            return Err(Error::InvalidCharacter);
        }

        let bytes = TAIL_BYTES[rem];
        let at = full * 5;
        dst[at..at + bytes].copy_from_slice(&decode_group(c)[..bytes]);
    }

    Ok(())
}

/// Decodes `src` into `dst` and returns the number of bytes written.
///
/// The written length is always [`decoded_len`]`(src.len())`.
///
/// If an error is returned the contents of `dst` are unspecified: it may hold
/// part of the decoded data. Callers handling sensitive data should clear it.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] if a symbol is outside the alphabet or
/// if the unused tail bits of the last symbol are not zero.
///
/// # Panics
///
/// Panics if `src` is empty, if `src.len()` is not a length any encoding can
/// have, or if `dst` is too short. These are caller bugs; use
/// [`decode`](crate::decode) when the input length is untrusted.
///
/// # Example
///
/// ```
/// let mut out = [0u8; 5];
/// let n = crockford32::decode_into(&mut out, b"64S36D1N").unwrap();
/// assert_eq!(&out[..n], b"12345");
/// ```
pub fn decode_into(dst: &mut [u8], src: &[u8]) -> Result<usize, Error> {
    assert!(!src.is_empty(), "crockford32: decode source is empty");

    let Some(n) = decoded_len(src.len()) else {
        panic!("crockford32: invalid decode source length");
    };
    assert!(dst.len() >= n, "crockford32: decode destination too short");

    decode_block(&mut dst[..n], src)?;
    Ok(n)
}
