//! Forward and reverse symbol tables.
//!
//! Both tables are built by `const fn` so they exist as immutable statics
//! before any code runs.

/// Canonical Crockford alphabet. `I`, `L`, `O` and `U` are left out.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Reverse table marker for bytes outside the alphabet.
///
/// Every valid value fits in 5 bits, so OR-ing any number of valid values
/// never produces this marker while OR-ing in a single invalid one always does.
pub(crate) const INVALID: u8 = 0xFF;

const UPPER_TO_LOWER: u8 = b'a' - b'A';

/// Value (0-31) to canonical symbol.
pub(crate) static ENCODE_TABLE: [u8; 32] = *ALPHABET;

/// Any byte to its 5-bit value, or [`INVALID`].
pub(crate) static DECODE_TABLE: [u8; 256] = build_decode_table(ALPHABET);

/// Builds the case-insensitive reverse table for `alphabet`.
///
/// Aliases are written after the canonical entries so that `O` reads as `0`
/// and `I`/`L` read as `1`.
const fn build_decode_table(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut table = [INVALID; 256];

    let mut i = 0;
    while i < 32 {
        let c = alphabet[i];
        table[c as usize] = i as u8;
        if c > b'9' {
            table[(c + UPPER_TO_LOWER) as usize] = i as u8;
        }
        i += 1;
    }

    // char aliases
    let aliases = [(b'O', b'0'), (b'I', b'1'), (b'L', b'1')];
    let mut j = 0;
    while j < aliases.len() {
        let (alias, target) = aliases[j];
        let value = table[target as usize];
        table[alias as usize] = value;
        table[(alias + UPPER_TO_LOWER) as usize] = value;
        j += 1;
    }

    table
}

/// Returns the canonical (uppercase) symbol for a 5-bit value.
///
/// ```
/// assert_eq!(crockford32::symbol_of(0), Some(b'0'));
/// assert_eq!(crockford32::symbol_of(31), Some(b'Z'));
/// assert_eq!(crockford32::symbol_of(32), None);
/// ```
#[inline]
pub fn symbol_of(value: u8) -> Option<u8> {
    ENCODE_TABLE.get(usize::from(value)).copied()
}

/// Returns the 5-bit value of a symbol, accepting either case and the
/// `O`/`I`/`L` aliases.
///
/// ```
/// assert_eq!(crockford32::value_of(b'z'), Some(31));
/// assert_eq!(crockford32::value_of(b'o'), Some(0));
/// assert_eq!(crockford32::value_of(b'L'), Some(1));
/// assert_eq!(crockford32::value_of(b'U'), None);
/// ```
#[inline]
pub fn value_of(symbol: u8) -> Option<u8> {
    match DECODE_TABLE[usize::from(symbol)] {
        INVALID => None,
        v => Some(v),
    }
}

/// Returns true if `symbol` decodes to a value.
#[inline]
pub fn is_valid_symbol(symbol: u8) -> bool {
    DECODE_TABLE[usize::from(symbol)] != INVALID
}
