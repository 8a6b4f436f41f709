//! A case-insensitive, unpadded, Crockford style base32 codec.
//!
//! Bytes are packed 5 at a time into 8 symbols of the alphabet
//! `0123456789ABCDEFGHJKMNPQRSTVWXYZ`. No padding is written or accepted.
//! Decoding accepts lowercase and reads `O` as `0` and `I`/`L` as `1`.
//!
//! Decoding is strict about the bits a trailing partial group leaves unused:
//! they must be zero, exactly as the encoder writes them. An input such as
//! `"64S36D1N6RVKGE9G64S36D1N6RVKGE4"` is rejected even though every symbol
//! is in the alphabet.
//!
//! Two kinds of failure are kept apart. Passing an empty source or an
//! undersized destination to [`encode_into`]/[`decode_into`] is a caller bug
//! and panics. Malformed encoded data is reported through [`Error`].
//!
//! # Example
//!
//! ```
//! let encoded = crockford32::encode_to_string(b"12345");
//! assert_eq!(encoded, "64S36D1N");
//!
//! let decoded = crockford32::decode_str("64s36dln").unwrap();
//! assert_eq!(decoded, b"12345");
//! ```

#[path = "crockford32_decode.rs"]
mod decode;
#[path = "crockford32_encode.rs"]
mod encode;
#[path = "crockford32_len.rs"]
mod len;
#[path = "crockford32_tables.rs"]
mod tables;

#[cfg(test)]
#[path = "crockford32_tests.rs"]
mod tests;

pub use decode::decode_into;
pub use encode::encode_into;
pub use len::{decoded_len, encoded_len};
pub use tables::{is_valid_symbol, symbol_of, value_of, ALPHABET};

/// Error type for decoding malformed base32 data.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The number of symbols is not one any encoding can have
    /// (`len % 8` is 1, 3 or 6).
    #[error("invalid base32 length")]
    InvalidLength,

    /// A symbol is outside the alphabet, or the unused bits of the final
    /// symbol are not zero.
    #[error("invalid base32 character")]
    InvalidCharacter,
}

/// Encodes `src`, returning an empty vector for empty input.
///
/// # Example
///
/// ```
/// assert_eq!(crockford32::encode(b"12345"), b"64S36D1N");
/// assert!(crockford32::encode(b"").is_empty());
/// ```
pub fn encode(src: &[u8]) -> Vec<u8> {
    if src.is_empty() {
        return Vec::new();
    }

    let mut dst = vec![0u8; len::encoded_len_or_panic(src.len())];
    encode::encode_block(&mut dst, src);
    dst
}

/// Encodes `src` into a `String`, returning `""` for empty input.
pub fn encode_to_string(src: &[u8]) -> String {
    String::from_utf8(encode(src)).expect("base32 output is always valid UTF-8")
}

/// Appends the encoded form of `src` to `dst`. Empty input leaves `dst`
/// unchanged.
///
/// # Example
///
/// ```
/// let mut out = b"id:".to_vec();
/// crockford32::append_encode(&mut out, b"12345");
/// assert_eq!(out, b"id:64S36D1N");
/// ```
pub fn append_encode(dst: &mut Vec<u8>, src: &[u8]) {
    if src.is_empty() {
        return;
    }

    let n = len::encoded_len_or_panic(src.len());
    let orig = dst.len();
    dst.resize(orig + n, 0);

    encode::encode_block(&mut dst[orig..], src);
}

/// Decodes `src`, returning an empty vector for empty input.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if no encoding has `src.len()` symbols,
/// and [`Error::InvalidCharacter`] if a symbol is unknown or the tail bits
/// are not canonical.
///
/// # Example
///
/// ```
/// use crockford32::{decode, Error};
///
/// assert_eq!(decode(b"64S36D1N").unwrap(), b"12345");
/// assert_eq!(decode(b"64S36D1U"), Err(Error::InvalidCharacter));
/// assert_eq!(decode(b"64S"), Err(Error::InvalidLength));
/// ```
pub fn decode(src: &[u8]) -> Result<Vec<u8>, Error> {
    if src.is_empty() {
        return Ok(Vec::new());
    }

    let n = decoded_len(src.len()).ok_or(Error::InvalidLength)?;
    let mut dst = vec![0u8; n];

    decode::decode_block(&mut dst, src)?;
    Ok(dst)
}

/// Decodes a string. See [`decode`].
#[inline]
pub fn decode_str(src: &str) -> Result<Vec<u8>, Error> {
    decode(src.as_bytes())
}

/// Appends the decoded form of `src` to `dst`. Empty input leaves `dst`
/// unchanged.
///
/// # Errors
///
/// Same as [`decode`]. On error `dst` is restored to its original length,
/// so nothing partially decoded stays visible through the vector. The spare
/// capacity may still hold decoded bytes; clear it yourself if that matters.
pub fn append_decode(dst: &mut Vec<u8>, src: &[u8]) -> Result<(), Error> {
    if src.is_empty() {
        return Ok(());
    }

    let n = decoded_len(src.len()).ok_or(Error::InvalidLength)?;
    let orig = dst.len();
    dst.resize(orig + n, 0);

    if let Err(e) = decode::decode_block(&mut dst[orig..], src) {
        dst.truncate(orig);
        return Err(e);
    }
    Ok(())
}
