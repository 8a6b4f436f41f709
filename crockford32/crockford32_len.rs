//! Encoded/decoded length arithmetic.

/// Bit set of the `n % 8` remainders an unpadded encoding can end on.
///
/// A trailing group of 1, 2, 3 or 4 bytes produces 2, 4, 5 or 7 symbols, so
/// remainders 1, 3 and 6 can never be produced by the encoder.
const VALID_DECODE_REMAINDERS: u8 = (1 << 0) | (1 << 2) | (1 << 4) | (1 << 5) | (1 << 7);

/// Returns the number of symbols needed to encode `n` bytes, or `None` if
/// that number does not fit in a `usize`.
///
/// # Example
///
/// ```
/// use crockford32::encoded_len;
///
/// assert_eq!(encoded_len(0), Some(0));
/// assert_eq!(encoded_len(1), Some(2));
/// assert_eq!(encoded_len(5), Some(8));
/// assert_eq!(encoded_len(usize::MAX), None);
/// ```
pub const fn encoded_len(n: usize) -> Option<usize> {
    let full = match (n / 5).checked_mul(8) {
        Some(full) => full,
        None => return None,
    };
    // ceil(r * 8 / 5) for r in 0..5, which is at most 7
    let tail = ((n % 5) * 8 + 4) / 5;
    full.checked_add(tail)
}

/// Returns the number of bytes `n` symbols decode to, or `None` if no
/// encoding has `n` symbols.
///
/// Zero maps to zero; callers decide how to treat an empty input.
///
/// # Example
///
/// ```
/// use crockford32::decoded_len;
///
/// assert_eq!(decoded_len(0), Some(0));
/// assert_eq!(decoded_len(8), Some(5));
/// assert_eq!(decoded_len(7), Some(4));
/// assert_eq!(decoded_len(6), None);
/// ```
pub const fn decoded_len(n: usize) -> Option<usize> {
    let rem = n % 8;
    if VALID_DECODE_REMAINDERS & (1 << rem) == 0 {
        return None;
    }

    let extra = match rem {
        2 => 1,
        4 => 2,
        5 => 3,
        7 => 4,
        _ => 0,
    };
    Some((n / 8) * 5 + extra)
}

/// [`encoded_len`] for callers that already hold `n` bytes in memory.
///
/// # Panics
///
/// Panics if the encoded length overflows `usize`.
#[inline]
pub(crate) fn encoded_len_or_panic(n: usize) -> usize {
    match encoded_len(n) {
        Some(len) => len,
        None => panic!("crockford32: invalid encode source length"),
    }
}
