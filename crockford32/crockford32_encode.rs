//! Bit packing from 5-byte groups to 8 symbols.

use crate::len::encoded_len_or_panic;
use crate::tables::ENCODE_TABLE;

/// Symbols emitted for a trailing group of `n % 5` bytes.
const TAIL_SYMBOLS: [usize; 5] = [0, 2, 4, 5, 7];

/// Splits 5 bytes into 8 symbols.
#[inline(always)]
fn encode_group([b0, b1, b2, b3, b4]: [u8; 5]) -> [u8; 8] {
    [
        ENCODE_TABLE[usize::from(b0 >> 3)],
        ENCODE_TABLE[usize::from(((b0 << 2) | (b1 >> 6)) & 31)],
        ENCODE_TABLE[usize::from((b1 >> 1) & 31)],
        ENCODE_TABLE[usize::from(((b1 << 4) | (b2 >> 4)) & 31)],
        ENCODE_TABLE[usize::from(((b2 << 1) | (b3 >> 7)) & 31)],
        ENCODE_TABLE[usize::from((b3 >> 2) & 31)],
        ENCODE_TABLE[usize::from(((b3 << 3) | (b4 >> 5)) & 31)],
        ENCODE_TABLE[usize::from(b4 & 31)],
    ]
}

/// Encodes `src` into the front of `dst` without checking sizes.
///
/// `dst` must hold at least `encoded_len(src.len())` bytes; the slice
/// indexing below panics otherwise.
pub(crate) fn encode_block(dst: &mut [u8], src: &[u8]) {
    let groups = src.chunks_exact(5);
    let tail = groups.remainder();
    let full = src.len() / 5;

    for (out, group) in dst.chunks_exact_mut(8).zip(groups) {
        out.copy_from_slice(&encode_group([group[0], group[1], group[2], group[3], group[4]]));
    }

    // Tail (no padding). Missing bytes read as zero, which leaves the unused
    // low bits of the last symbol clear.
    if !tail.is_empty() {
        let mut last = [0u8; 5];
        last[..tail.len()].copy_from_slice(tail);

        let symbols = TAIL_SYMBOLS[tail.len()];
        let at = full * 8;
        dst[at..at + symbols].copy_from_slice(&encode_group(last)[..symbols]);
    }
}

/// Encodes `src` into `dst` and returns the number of symbols written.
///
/// This is the low-level entry point for callers that size their own
/// buffers, e.g. fixed-width identifiers. The written length is always
/// [`encoded_len`](crate::encoded_len)`(src.len())`.
///
/// # Panics
///
/// Panics if `src` is empty or if `dst` is too short for the encoded form.
/// Both are caller bugs, not data errors.
///
/// # Example
///
/// ```
/// let mut out = [0u8; 8];
/// let n = crockford32::encode_into(&mut out, b"12345");
/// assert_eq!(&out[..n], b"64S36D1N");
/// ```
pub fn encode_into(dst: &mut [u8], src: &[u8]) -> usize {
    assert!(!src.is_empty(), "crockford32: encode source is empty");

    let n = encoded_len_or_panic(src.len());
    assert!(dst.len() >= n, "crockford32: encode destination too short");

    encode_block(&mut dst[..n], src);
    n
}
