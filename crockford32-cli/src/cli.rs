//! Text framing around the codec: line wrapping on the way out, whitespace
//! and garbage filtering on the way in.

use crockford32::Error;

/// Default encoded line width, matching coreutils base32.
pub const DEFAULT_WRAP: usize = 76;

/// Encodes `data` and splits the output into lines of `wrap` symbols.
///
/// `wrap == 0` disables wrapping. Non-empty output always ends in a newline.
pub fn encode_wrapped(data: &[u8], wrap: usize, lowercase: bool) -> Vec<u8> {
    let mut encoded = crockford32::encode(data);
    if encoded.is_empty() {
        return encoded;
    }

    if lowercase {
        encoded.make_ascii_lowercase();
    }

    if wrap == 0 {
        encoded.push(b'\n');
        return encoded;
    }

    let mut out = Vec::with_capacity(encoded.len() + encoded.len() / wrap + 1);
    for line in encoded.chunks(wrap) {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

/// Strips whitespace (and, with `ignore_garbage`, every byte outside the
/// alphabet) from `input` and decodes what is left.
pub fn decode_filtered(input: &[u8], ignore_garbage: bool) -> Result<Vec<u8>, Error> {
    let symbols: Vec<u8> = input
        .iter()
        .copied()
        .filter(|&b| {
            if ignore_garbage {
                crockford32::is_valid_symbol(b)
            } else {
                !b.is_ascii_whitespace()
            }
        })
        .collect();

    crockford32::decode(&symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wrapped_default() {
        assert_eq!(encode_wrapped(b"12345", DEFAULT_WRAP, false), b"64S36D1N\n");
    }

    #[test]
    fn test_encode_wrapped_empty() {
        assert!(encode_wrapped(b"", DEFAULT_WRAP, false).is_empty());
        assert!(encode_wrapped(b"", 0, true).is_empty());
    }

    #[test]
    fn test_encode_wrapped_splits_lines() {
        let out = encode_wrapped(b"1234567890123456789", 8, false);
        assert_eq!(out, b"64S36D1N\n6RVKGE9G\n64S36D1N\n6RVKGE8\n");
    }

    #[test]
    fn test_encode_wrapped_exact_multiple() {
        assert_eq!(encode_wrapped(b"12345", 4, false), b"64S3\n6D1N\n");
    }

    #[test]
    fn test_encode_wrapped_disabled() {
        let out = encode_wrapped(b"1234567890123456789", 0, false);
        assert_eq!(out, b"64S36D1N6RVKGE9G64S36D1N6RVKGE8\n");
    }

    #[test]
    fn test_encode_wrapped_lowercase() {
        assert_eq!(encode_wrapped(b"foobar", 0, true), b"csqpyrk1e8\n");
    }

    #[test]
    fn test_decode_filtered_strips_newlines() {
        let input = b"64S36D1N\n6RVKGE9G\n64S36D1N\n6RVKGE8\n";
        assert_eq!(
            decode_filtered(input, false).unwrap(),
            b"1234567890123456789"
        );
    }

    #[test]
    fn test_decode_filtered_rejects_garbage() {
        assert_eq!(
            decode_filtered(b"64S3-6D1N\n", false),
            Err(Error::InvalidLength)
        );
        assert_eq!(
            decode_filtered(b"64S36D1*\n", false),
            Err(Error::InvalidCharacter)
        );
    }

    #[test]
    fn test_decode_filtered_ignore_garbage() {
        assert_eq!(decode_filtered(b"64S3-6D1N\n", true).unwrap(), b"12345");
        assert_eq!(decode_filtered(b"{64s36dln}", true).unwrap(), b"12345");
    }

    #[test]
    fn test_decode_filtered_keeps_tail_check() {
        assert_eq!(
            decode_filtered(b"64S36D1N6RVKGE9G64S36D1N6RVKGE4\n", true),
            Err(Error::InvalidCharacter)
        );
    }
}
