#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Test encode roundtrip
    let encoded = crockford32::encode(data);
    assert_eq!(Some(encoded.len()), crockford32::encoded_len(data.len()));
    let decoded = crockford32::decode(&encoded).expect("own output must decode");
    assert_eq!(data, &decoded[..], "Roundtrip failed");

    // Lowercase output decodes the same
    let lower = encoded.to_ascii_lowercase();
    assert_eq!(crockford32::decode(&lower).as_deref(), Ok(data), "Lowercase roundtrip failed");

    // Buffer entry points match the allocating ones
    if !data.is_empty() {
        let mut buf = vec![0u8; encoded.len()];
        assert_eq!(crockford32::encode_into(&mut buf, data), encoded.len());
        assert_eq!(buf, encoded, "encode_into mismatch");

        let mut out = vec![0u8; data.len()];
        assert_eq!(crockford32::decode_into(&mut out, &encoded), Ok(data.len()));
        assert_eq!(out, data, "decode_into mismatch");
    }

    // Conformance with external crate
    let external_encoded =
        base32_external::encode(base32_external::Alphabet::Crockford, data);
    assert_eq!(
        crockford32::encode_to_string(data),
        external_encoded,
        "External crate encode mismatch"
    );
});
