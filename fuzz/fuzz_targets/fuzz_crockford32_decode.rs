#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    prefix: Vec<u8>,
    symbols: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let result = crockford32::decode(&input.symbols);

    // Anything accepted must be a canonical encoding up to case and aliases
    if let Ok(decoded) = &result {
        let normalised: Vec<u8> = input
            .symbols
            .iter()
            .map(|&c| {
                let value = crockford32::value_of(c).expect("accepted symbol");
                crockford32::symbol_of(value).expect("5-bit value")
            })
            .collect();
        assert_eq!(crockford32::encode(decoded), normalised, "Non-canonical input accepted");
    }

    // Appending agrees with decode and never disturbs the prefix
    let mut appended = input.prefix.clone();
    match crockford32::append_decode(&mut appended, &input.symbols) {
        Ok(()) => {
            assert_eq!(&appended[..input.prefix.len()], &input.prefix[..]);
            assert_eq!(Ok(&appended[input.prefix.len()..]), result.as_deref());
        }
        Err(e) => {
            assert_eq!(appended, input.prefix);
            assert_eq!(Err(e), result.map(|_| ()));
        }
    }
});
